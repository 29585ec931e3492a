//! User types mirrored from backend account records.

use serde::{Deserialize, Serialize};

/// Public user identity as referenced from other records (couple
/// connections, timeline authorship).
///
/// Timestamps are RFC 3339 strings exactly as the backend sends them;
/// a record that has never been persisted server-side carries empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned identifier
    pub id: String,
    /// Contact email
    pub email: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Avatar URL (empty when unset)
    pub profile_picture: String,
    /// Free-form biography
    pub bio: String,
    /// RFC 3339 creation timestamp from the backend
    pub created_at: String,
    /// RFC 3339 last-update timestamp from the backend
    pub updated_at: String,
}

impl Default for User {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            display_name: String::new(),
            profile_picture: String::new(),
            bio: String::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl User {
    /// Create a user reference with identity fields set
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            display_name: display_name.into(),
            ..Default::default()
        }
    }

    /// Name to show in UI: display name, or the email local part as fallback
    pub fn display_label(&self) -> &str {
        if !self.display_name.is_empty() {
            return &self.display_name;
        }
        match self.email.split_once('@') {
            Some((local, _)) => local,
            None => &self.email,
        }
    }
}

/// Full account record for the signed-in user.
///
/// Extends [`User`] with account-level fields the backend only returns for
/// the owner (verification flag, locale preference, partner link).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserAccount {
    /// Backend-assigned identifier
    pub id: String,
    /// Contact email
    pub email: String,
    /// Display name shown in UI
    pub display_name: String,
    /// Avatar URL (empty when unset)
    pub profile_picture: String,
    /// Free-form biography
    pub bio: String,
    /// Whether the email address has been verified
    pub is_email_verified: bool,
    /// Locale tag the user picked ("en", "vi")
    pub preferred_locale: String,
    /// Backend id of the connected partner, if any
    pub partner_id: Option<String>,
    /// RFC 3339 creation timestamp from the backend
    pub created_at: String,
    /// RFC 3339 last-update timestamp from the backend
    pub updated_at: String,
}

impl Default for UserAccount {
    fn default() -> Self {
        Self {
            id: String::new(),
            email: String::new(),
            display_name: String::new(),
            profile_picture: String::new(),
            bio: String::new(),
            is_email_verified: false,
            preferred_locale: "en".to_string(),
            partner_id: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl UserAccount {
    /// Create an account record with identity fields set
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Project the account down to its public [`User`] shape
    pub fn as_user(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            profile_picture: self.profile_picture.clone(),
            bio: self.bio.clone(),
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
        }
    }
}
