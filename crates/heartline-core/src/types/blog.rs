//! Blog post types.
//!
//! Posts are content documents the couple writes; drafts can be minted
//! locally before the backend ever sees them, so local ids use ULIDs.

use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Authorship information attached to posts and timeline rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Author {
    /// Backend user id
    pub id: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Avatar URL (empty when unset)
    pub avatar: String,
}

impl Default for Author {
    fn default() -> Self {
        Self {
            id: String::new(),
            display_name: String::new(),
            avatar: String::new(),
        }
    }
}

/// Who can read a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostPrivacy {
    /// Only the author
    Private,
    /// Both members of the couple
    Couple,
    /// Anyone with the link
    Public,
}

impl Default for PostPrivacy {
    fn default() -> Self {
        Self::Public
    }
}

impl std::fmt::Display for PostPrivacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Private => write!(f, "Private"),
            Self::Couple => write!(f, "Couple"),
            Self::Public => write!(f, "Public"),
        }
    }
}

/// Publication status of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not yet published
    Draft,
    /// Visible according to its privacy setting
    Published,
}

impl Default for PostStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "Draft"),
            Self::Published => write!(f, "Published"),
        }
    }
}

/// A blog post content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BlogPost {
    /// Backend id, or a locally minted ULID for unsaved drafts
    pub id: String,
    /// Post title
    pub title: String,
    /// Markdown body
    pub content: String,
    /// Who can read the post
    pub privacy: PostPrivacy,
    /// Draft/published state
    pub status: PostStatus,
    /// Free-form labels
    pub tags: Vec<String>,
    /// Like counter from the backend
    pub likes_count: u32,
    /// View counter from the backend
    pub views: u32,
    /// Who wrote the post
    pub author: Author,
    /// RFC 3339 creation timestamp
    pub created_at: String,
    /// RFC 3339 last-update timestamp
    pub updated_at: String,
}

impl Default for BlogPost {
    fn default() -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: String::new(),
            title: String::new(),
            content: String::new(),
            privacy: PostPrivacy::default(),
            status: PostStatus::default(),
            tags: Vec::new(),
            likes_count: 0,
            views: 0,
            author: Author::default(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl BlogPost {
    /// Mint a local draft with a fresh ULID id
    pub fn draft(title: impl Into<String>, author: Author) -> Self {
        Self {
            id: Ulid::new().to_string(),
            title: title.into(),
            author,
            ..Default::default()
        }
    }

    /// Mark the post as published and bump its update timestamp
    pub fn publish(&mut self) {
        self.status = PostStatus::Published;
        self.updated_at = chrono::Utc::now().to_rfc3339();
    }

    /// Record one view
    pub fn record_view(&mut self) {
        self.views += 1;
    }

    /// A short plain-text excerpt of the body, truncated to `max_chars`
    pub fn excerpt(&self, max_chars: usize) -> String {
        if self.content.chars().count() <= max_chars {
            self.content.clone()
        } else {
            let mut excerpt: String = self
                .content
                .chars()
                .take(max_chars.saturating_sub(3))
                .collect();
            excerpt.push_str("...");
            excerpt
        }
    }
}
