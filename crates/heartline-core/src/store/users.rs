//! Signed-in user state.

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::info;

use crate::types::UserAccount;

/// Reactive holder for the signed-in account.
///
/// The authentication flag is published on a watch channel; the session
/// lifecycle edge-detects login/logout transitions from it.
pub struct UserStore {
    account: RwLock<Option<UserAccount>>,
    auth_tx: watch::Sender<bool>,
}

impl UserStore {
    /// Create a store with no signed-in user
    pub fn new() -> Self {
        let (auth_tx, _) = watch::channel(false);
        Self {
            account: RwLock::new(None),
            auth_tx,
        }
    }

    /// Record a successful sign-in
    pub fn login(&self, account: UserAccount) {
        info!(user_id = %account.id, "user logged in");
        *self.account.write() = Some(account);
        self.auth_tx.send_replace(true);
    }

    /// Clear the signed-in account
    pub fn logout(&self) {
        info!("user logged out");
        *self.account.write() = None;
        self.auth_tx.send_replace(false);
    }

    /// Whether a user is currently signed in
    pub fn is_authenticated(&self) -> bool {
        *self.auth_tx.borrow()
    }

    /// The signed-in account, if any
    pub fn current_user(&self) -> Option<UserAccount> {
        self.account.read().clone()
    }

    /// Subscribe to authentication changes
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.auth_tx.subscribe()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_logged_out() {
        let store = UserStore::new();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_login_logout() {
        let store = UserStore::new();

        store.login(UserAccount::new("u1", "minh@example.com"));
        assert!(store.is_authenticated());
        assert_eq!(store.current_user().unwrap().id, "u1");

        store.logout();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[tokio::test]
    async fn test_subscribe_observes_login() {
        let store = UserStore::new();
        let mut rx = store.subscribe();
        assert!(!*rx.borrow_and_update());

        store.login(UserAccount::new("u1", "minh@example.com"));
        rx.changed().await.unwrap();
        assert!(*rx.borrow_and_update());
    }
}
