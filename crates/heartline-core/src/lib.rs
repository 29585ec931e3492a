//! Heartline Core Library
//!
//! State and model core of a couple relationship-journaling application.
//!
//! ## Overview
//!
//! Heartline keeps a couple's shared life in one place: the connection
//! between two accounts, a chronological timeline of memories, reminders,
//! posts, and anniversaries, plus the themes and localized strings the UI
//! renders with. This crate is everything below the UI:
//!
//! - **Entity models**: typed mirrors of backend records, safe to build
//!   from partial payloads
//! - **Reactive stores**: user authentication, couple data with explicit
//!   initialization phases, theme selection
//! - **Session lifecycle**: an authentication watcher that loads couple
//!   data on login and resets it on logout
//! - **Localization**: English and Vietnamese message catalogs
//! - **Storage**: persisted preferences and an offline couple snapshot
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use heartline_core::{AppSession, StaticCoupleProvider, UserAccount};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = Arc::new(StaticCoupleProvider::new(
//!         heartline_core::provider::sample_snapshot(),
//!     ));
//!     let session = AppSession::new("~/.heartline/data", provider)?;
//!     session.start();
//!
//!     // Logging in triggers the couple data load
//!     session.login(UserAccount::new("u1", "minh@example.com"));
//!
//!     // Later: render the timeline
//!     for item in session.couple().timeline() {
//!         println!("{}: {}", item.kind, item.title.unwrap_or_default());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod i18n;
pub mod provider;
pub mod session;
pub mod storage;
pub mod store;
pub mod theme;
pub mod types;

// Re-exports
pub use error::{HeartlineError, HeartlineResult};
pub use i18n::Locale;
pub use provider::{CoupleDataProvider, CoupleSnapshot, StaticCoupleProvider};
pub use session::AppSession;
pub use storage::{Preferences, Storage};
pub use store::{CoupleStore, InitPhase, UserStore};
pub use theme::{ThemeInfo, ThemePalette, ThemeRenderer, ThemeSelection, ThemeStore};
pub use types::*;
