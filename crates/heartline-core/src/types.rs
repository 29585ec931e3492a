//! Entity models and view models mirrored from the backend.
//!
//! All types here are plain value objects: they are created fresh from API
//! payloads (every struct deserializes with per-field defaults, so partial
//! payloads are safe) or minted locally through their constructors. Couple
//! status transitions are backend-driven; this layer mirrors state and
//! never enforces transition legality.

mod blog;
mod couple;
mod timeline;
mod user;

pub use blog::{Author, BlogPost, PostPrivacy, PostStatus};
pub use couple::{ConnectionStatus, CoupleConnection};
pub use timeline::{
    RecentActivity, TimelineItem, TimelineKind, TimelinePage, TimelineQuery, TimelineStats,
    TimelineTotals,
};
pub use user::{User, UserAccount};
