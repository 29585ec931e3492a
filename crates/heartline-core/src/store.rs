//! Reactive application stores.
//!
//! Stores are explicit state-holder objects passed to consumers by
//! reference (no ambient singletons). Each publishes its observable state
//! on a watch channel so the session lifecycle and UI surfaces can react
//! to changes.

mod couple;
mod users;

pub use couple::{CoupleStore, InitPhase};
pub use users::UserStore;
