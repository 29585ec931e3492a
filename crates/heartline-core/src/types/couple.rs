//! Couple connection types.
//!
//! A couple connection is the link record between two user accounts. Its
//! lifecycle status is driven entirely by the backend; this layer mirrors
//! whatever the last payload said.

use chrono::{Datelike, NaiveDate};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::user::User;

/// Lifecycle status of a couple connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Invitation sent, partner has not responded
    Pending,
    /// Partner accepted, backend is finalizing the link
    Accepted,
    /// Fully linked couple
    Connected,
    /// Link was dissolved by either side
    Disconnected,
    /// Partner declined the invitation
    Declined,
}

impl Default for ConnectionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Accepted => write!(f, "Accepted"),
            Self::Connected => write!(f, "Connected"),
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Declined => write!(f, "Declined"),
        }
    }
}

/// Link record between two user accounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoupleConnection {
    /// Backend-assigned identifier
    pub id: String,
    /// The inviting user
    pub user1: User,
    /// The invited user
    pub user2: User,
    /// Current lifecycle status (backend-driven)
    pub status: ConnectionStatus,
    /// Short shareable code used to deliver the invitation
    pub invitation_code: Option<String>,
    /// The couple's anniversary date, if they set one
    pub anniversary_date: Option<NaiveDate>,
    /// RFC 3339 creation timestamp from the backend
    pub created_at: String,
    /// RFC 3339 last-update timestamp from the backend
    pub updated_at: String,
}

impl Default for CoupleConnection {
    fn default() -> Self {
        Self {
            id: String::new(),
            user1: User::default(),
            user2: User::default(),
            status: ConnectionStatus::default(),
            invitation_code: None,
            anniversary_date: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }
}

impl CoupleConnection {
    /// Create a fresh pending connection between two users, with a newly
    /// generated invitation code
    pub fn new(user1: User, user2: User) -> Self {
        Self {
            user1,
            user2,
            status: ConnectionStatus::Pending,
            invitation_code: Some(Self::generate_invitation_code()),
            ..Default::default()
        }
    }

    /// Generate a short shareable invitation code (8 random bytes, base58)
    pub fn generate_invitation_code() -> String {
        let mut bytes = [0u8; 8];
        rand::rng().fill_bytes(&mut bytes);
        bs58::encode(&bytes).into_string()
    }

    /// Whether the couple is linked (accepted or fully connected)
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            ConnectionStatus::Accepted | ConnectionStatus::Connected
        )
    }

    /// The other member of the couple, given one member's id.
    ///
    /// Returns `None` if the id belongs to neither member.
    pub fn partner_of(&self, user_id: &str) -> Option<&User> {
        if self.user1.id == user_id {
            Some(&self.user2)
        } else if self.user2.id == user_id {
            Some(&self.user1)
        } else {
            None
        }
    }

    /// Days until the next occurrence of the anniversary, counted from
    /// `today`. Zero means the anniversary is today.
    ///
    /// Returns `None` when no anniversary date is set.
    pub fn anniversary_countdown_days(&self, today: NaiveDate) -> Option<i64> {
        let anniversary = self.anniversary_date?;
        let next = Self::next_occurrence(anniversary, today);
        Some((next - today).num_days())
    }

    // Feb 29 anniversaries only land on leap years; the countdown targets
    // the next calendar year where the date exists.
    fn next_occurrence(anniversary: NaiveDate, today: NaiveDate) -> NaiveDate {
        let mut year = today.year();
        loop {
            if let Some(candidate) =
                NaiveDate::from_ymd_opt(year, anniversary.month(), anniversary.day())
            {
                if candidate >= today {
                    return candidate;
                }
            }
            year += 1;
        }
    }
}
