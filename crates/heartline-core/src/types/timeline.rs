//! Timeline read model.
//!
//! The timeline is a unified, type-tagged feed over several underlying
//! content kinds. Rows share one shape; consumers switch on [`TimelineKind`]
//! to interpret the optional fields, and anything kind-specific travels in
//! the free-form `metadata` map. Nothing here enforces per-kind fields.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use super::blog::Author;

/// Content kind backing a timeline row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    /// A saved memory (photo, note, place)
    Memory,
    /// A dated reminder, possibly completed
    Reminder,
    /// A published blog post
    Blog,
    /// An anniversary milestone
    Anniversary,
}

impl Default for TimelineKind {
    fn default() -> Self {
        Self::Memory
    }
}

impl std::fmt::Display for TimelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "Memory"),
            Self::Reminder => write!(f, "Reminder"),
            Self::Blog => write!(f, "Blog"),
            Self::Anniversary => write!(f, "Anniversary"),
        }
    }
}

/// One row of the chronological feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineItem {
    /// Backend id, or a locally minted ULID
    pub id: String,
    /// Which content kind this row represents
    pub kind: TimelineKind,
    /// Row title
    pub title: Option<String>,
    /// Longer description or excerpt
    pub description: Option<String>,
    /// When the underlying event happened
    pub date: Option<DateTime<Utc>>,
    /// Free-form labels
    pub tags: Vec<String>,
    /// Who created the underlying content
    pub author: Option<Author>,
    /// Completion flag (meaningful for reminders)
    pub is_completed: Option<bool>,
    /// Like counter from the backend
    pub likes_count: u32,
    /// Comment counter from the backend
    pub comments_count: u32,
    /// Kind-specific extras the backend attaches
    pub metadata: HashMap<String, serde_json::Value>,
}

impl Default for TimelineItem {
    fn default() -> Self {
        Self {
            id: String::new(),
            kind: TimelineKind::default(),
            title: None,
            description: None,
            date: None,
            tags: Vec::new(),
            author: None,
            is_completed: None,
            likes_count: 0,
            comments_count: 0,
            metadata: HashMap::new(),
        }
    }
}

impl TimelineItem {
    /// Mint a local row of the given kind with a fresh ULID id
    pub fn new(kind: TimelineKind) -> Self {
        Self {
            id: Ulid::new().to_string(),
            kind,
            ..Default::default()
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event date
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set the tags
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set the author
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the completion flag
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.is_completed = Some(completed);
        self
    }
}

/// Pagination and filter parameters for a timeline listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineQuery {
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Restrict to these kinds (empty means all)
    pub kinds: Vec<TimelineKind>,
    /// Only rows dated on or after this instant
    pub from: Option<DateTime<Utc>>,
    /// Only rows dated on or before this instant
    pub to: Option<DateTime<Utc>>,
    /// Only rows carrying this tag
    pub tag: Option<String>,
    /// Only rows by this author id
    pub author_id: Option<String>,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            kinds: Vec::new(),
            from: None,
            to: None,
            tag: None,
            author_id: None,
        }
    }
}

impl TimelineQuery {
    /// Whether a row passes this query's filters (pagination ignored)
    pub fn matches(&self, item: &TimelineItem) -> bool {
        if !self.kinds.is_empty() && !self.kinds.contains(&item.kind) {
            return false;
        }
        if let Some(from) = self.from {
            match item.date {
                Some(date) if date >= from => {}
                _ => return false,
            }
        }
        if let Some(to) = self.to {
            match item.date {
                Some(date) if date <= to => {}
                _ => return false,
            }
        }
        if let Some(ref tag) = self.tag {
            if !item.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(ref author_id) = self.author_id {
            match item.author {
                Some(ref author) if &author.id == author_id => {}
                _ => return false,
            }
        }
        true
    }

    /// Filter and paginate a cached item set client-side.
    ///
    /// Rows are ordered newest-first; undated rows sort last.
    pub fn paginate(&self, items: &[TimelineItem]) -> TimelinePage {
        let mut filtered: Vec<TimelineItem> =
            items.iter().filter(|i| self.matches(i)).cloned().collect();
        filtered.sort_by(|a, b| b.date.cmp(&a.date));

        let total = filtered.len();
        let page = self.page.max(1);
        let per_page = self.per_page.max(1) as usize;
        let start = (page as usize - 1).saturating_mul(per_page);
        let rows: Vec<TimelineItem> = filtered.into_iter().skip(start).take(per_page).collect();
        let has_more = start + rows.len() < total;

        TimelinePage {
            items: rows,
            total,
            page,
            per_page: per_page as u32,
            has_more,
        }
    }
}

/// One page of timeline rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelinePage {
    /// The rows on this page, newest first
    pub items: Vec<TimelineItem>,
    /// Total rows matching the query across all pages
    pub total: usize,
    /// 1-based page number
    pub page: u32,
    /// Rows per page
    pub per_page: u32,
    /// Whether further pages exist
    pub has_more: bool,
}

impl Default for TimelinePage {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            per_page: 20,
            has_more: false,
        }
    }
}

/// Per-kind row counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineTotals {
    /// All rows
    pub all: u32,
    /// Memory rows
    pub memories: u32,
    /// Reminder rows
    pub reminders: u32,
    /// Blog rows
    pub blogs: u32,
    /// Anniversary rows
    pub anniversaries: u32,
}

/// Rows dated within recent windows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentActivity {
    /// Rows dated within the last 7 days
    pub last_week: u32,
    /// Rows dated within the last 30 days
    pub last_month: u32,
}

/// Dashboard aggregates over the timeline.
///
/// Normally backend-computed; [`TimelineStats::compute`] derives the same
/// shape from cached rows when the backend aggregate is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineStats {
    /// Per-kind counts
    pub totals: TimelineTotals,
    /// Recent-window counts
    pub recent: RecentActivity,
    /// Completed reminders over all reminders, in [0, 1]
    pub completion_rate: f32,
}

impl TimelineStats {
    /// Derive stats from a row set, with recency windows anchored at `now`
    pub fn compute(items: &[TimelineItem], now: DateTime<Utc>) -> Self {
        let mut totals = TimelineTotals::default();
        let mut recent = RecentActivity::default();
        let mut reminders_done = 0u32;

        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);

        for item in items {
            totals.all += 1;
            match item.kind {
                TimelineKind::Memory => totals.memories += 1,
                TimelineKind::Reminder => {
                    totals.reminders += 1;
                    if item.is_completed == Some(true) {
                        reminders_done += 1;
                    }
                }
                TimelineKind::Blog => totals.blogs += 1,
                TimelineKind::Anniversary => totals.anniversaries += 1,
            }
            if let Some(date) = item.date {
                if date <= now {
                    if date >= week_ago {
                        recent.last_week += 1;
                    }
                    if date >= month_ago {
                        recent.last_month += 1;
                    }
                }
            }
        }

        let completion_rate = if totals.reminders == 0 {
            0.0
        } else {
            reminders_done as f32 / totals.reminders as f32
        };

        Self {
            totals,
            recent,
            completion_rate,
        }
    }
}
