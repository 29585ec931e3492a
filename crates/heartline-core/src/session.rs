//! Session lifecycle: authentication-driven couple data initialization.
//!
//! [`AppSession`] owns the stores and watches the user store's
//! authentication signal:
//! - a false→true edge triggers an asynchronous couple-data load,
//! - a true→false edge synchronously resets couple state,
//! - re-evaluations without an edge are no-ops.
//!
//! Loads are fire-and-forget from the watcher's point of view: failures
//! are caught and logged and surface only as `InitPhase::Failed` on the
//! couple store. A generation counter inside the store keeps rapid
//! login→logout→login flips from letting a stale load overwrite fresher
//! state.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::error::HeartlineResult;
use crate::i18n::Locale;
use crate::provider::CoupleDataProvider;
use crate::storage::Storage;
use crate::store::{CoupleStore, InitPhase, UserStore};
use crate::theme::ThemeStore;
use crate::types::UserAccount;

/// Top-level handle owning stores, provider, and storage for one
/// application session
pub struct AppSession {
    inner: Arc<SessionInner>,
    watcher: Mutex<Option<JoinHandle<()>>>,
}

struct SessionInner {
    users: UserStore,
    couple: CoupleStore,
    theme: ThemeStore,
    provider: Arc<dyn CoupleDataProvider>,
    storage: Storage,
}

impl AppSession {
    /// Create a session with its storage under the given data directory.
    ///
    /// Opens (or creates) the database, then restores the persisted theme
    /// preference.
    pub fn new(
        data_dir: impl AsRef<Path>,
        provider: Arc<dyn CoupleDataProvider>,
    ) -> HeartlineResult<Self> {
        let data_dir = data_dir.as_ref();
        info!(?data_dir, "initializing session");

        let storage = Storage::new(data_dir.join("heartline.redb"))?;
        let theme = ThemeStore::with_storage(storage.clone());
        theme.initialize();

        Ok(Self {
            inner: Arc::new(SessionInner {
                users: UserStore::new(),
                couple: CoupleStore::new(),
                theme,
                provider,
                storage,
            }),
            watcher: Mutex::new(None),
        })
    }

    /// The user store
    pub fn users(&self) -> &UserStore {
        &self.inner.users
    }

    /// The couple store
    pub fn couple(&self) -> &CoupleStore {
        &self.inner.couple
    }

    /// The theme store
    pub fn theme(&self) -> &ThemeStore {
        &self.inner.theme
    }

    /// The storage layer
    pub fn storage(&self) -> &Storage {
        &self.inner.storage
    }

    /// Start the authentication watcher. Idempotent; at most one watcher
    /// runs per session.
    pub fn start(&self) {
        let mut guard = self.watcher.lock();
        if guard.as_ref().is_some_and(|h| !h.is_finished()) {
            return;
        }
        let rx = self.inner.users.subscribe();
        let inner = self.inner.clone();
        *guard = Some(tokio::spawn(run_auth_watcher(inner, rx)));
    }

    /// Stop the authentication watcher, if running
    pub fn stop(&self) {
        if let Some(handle) = self.watcher.lock().take() {
            handle.abort();
        }
    }

    /// Record a sign-in; the watcher reacts to the edge
    pub fn login(&self, account: UserAccount) {
        self.inner.users.login(account);
    }

    /// Record a sign-out; the watcher reacts to the edge
    pub fn logout(&self) {
        self.inner.users.logout();
    }

    /// Idempotent guard usable from arbitrary call sites: load couple data
    /// if the user is authenticated and the data is neither loaded nor
    /// loading; otherwise do nothing. Failures are caught and logged.
    pub async fn ensure_couple_data_initialized(&self) {
        if !self.inner.users.is_authenticated() {
            return;
        }
        match self.inner.couple.phase() {
            InitPhase::Ready | InitPhase::Loading => {}
            InitPhase::Idle | InitPhase::Failed(_) => {
                initialize_couple_data(&self.inner).await;
            }
        }
    }

    /// Restore the last cached couple snapshot for offline display.
    ///
    /// Returns whether a snapshot was found.
    pub fn restore_cached_snapshot(&self) -> HeartlineResult<bool> {
        match self.inner.storage.load_couple_snapshot()? {
            Some(snapshot) => {
                self.inner.couple.restore(&snapshot);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The persisted UI locale
    pub fn locale(&self) -> Locale {
        self.inner
            .storage
            .load_preferences()
            .ok()
            .flatten()
            .unwrap_or_default()
            .locale
    }

    /// Persist the UI locale
    pub fn set_locale(&self, locale: Locale) -> HeartlineResult<()> {
        let mut prefs = self
            .inner
            .storage
            .load_preferences()?
            .unwrap_or_default();
        prefs.locale = locale;
        self.inner.storage.save_preferences(&prefs)
    }
}

impl Drop for AppSession {
    fn drop(&mut self) {
        if let Some(handle) = self.watcher.lock().take() {
            handle.abort();
        }
    }
}

/// Watch the authentication signal and drive the couple store.
///
/// The watcher's notion of "previous value" starts at false: a session
/// that is already authenticated when the watcher starts fires
/// initialization exactly once, and an unauthenticated start is a no-op.
async fn run_auth_watcher(inner: Arc<SessionInner>, mut rx: watch::Receiver<bool>) {
    let mut was_authenticated = false;

    let now_authenticated = *rx.borrow_and_update();
    if now_authenticated != was_authenticated {
        handle_auth_edge(&inner, now_authenticated);
        was_authenticated = now_authenticated;
    }

    while rx.changed().await.is_ok() {
        let now_authenticated = *rx.borrow_and_update();
        if now_authenticated == was_authenticated {
            continue;
        }
        handle_auth_edge(&inner, now_authenticated);
        was_authenticated = now_authenticated;
    }
    debug!("auth watcher stopped");
}

fn handle_auth_edge(inner: &Arc<SessionInner>, authenticated: bool) {
    if authenticated {
        // Fire-and-forget: the watcher never blocks on the load, so a
        // logout edge arriving mid-flight is handled immediately and the
        // store's generation counter discards the stale result.
        let inner = inner.clone();
        tokio::spawn(async move {
            initialize_couple_data(&inner).await;
        });
    } else {
        inner.couple.reset();
        if let Err(e) = inner.storage.clear_couple_snapshot() {
            warn!("failed to clear cached couple snapshot: {e}");
        }
    }
}

async fn initialize_couple_data(inner: &SessionInner) {
    match inner.couple.initialize(inner.provider.as_ref()).await {
        Ok(Some(snapshot)) => {
            if let Err(e) = inner.storage.save_couple_snapshot(&snapshot) {
                warn!("failed to cache couple snapshot: {e}");
            }
        }
        Ok(None) => {} // superseded by a newer load or a reset
        Err(e) => warn!("couple data initialization failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{sample_snapshot, StaticCoupleProvider};
    use std::time::Duration;
    use tempfile::TempDir;

    async fn wait_for_phase(session: &AppSession, wanted: InitPhase) {
        let mut rx = session.couple().subscribe_phase();
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if *rx.borrow_and_update() == wanted {
                    return;
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .expect("phase never reached");
    }

    fn demo_session() -> (AppSession, Arc<StaticCoupleProvider>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let provider = Arc::new(StaticCoupleProvider::new(sample_snapshot()));
        let session = AppSession::new(temp_dir.path(), provider.clone()).unwrap();
        (session, provider, temp_dir)
    }

    #[tokio::test]
    async fn test_login_triggers_initialization_once() {
        let (session, provider, _temp) = demo_session();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;

        assert_eq!(provider.calls(), 1);
        assert!(session.couple().is_initialized());
    }

    #[tokio::test]
    async fn test_logout_resets_couple_state() {
        let (session, _provider, _temp) = demo_session();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;

        session.logout();
        wait_for_phase(&session, InitPhase::Idle).await;
        assert!(session.couple().connection().is_none());
    }

    #[tokio::test]
    async fn test_already_authenticated_at_start_fires_once() {
        let (session, provider, _temp) = demo_session();

        // Login happens before the watcher starts
        session.login(UserAccount::new("u1", "minh@example.com"));
        session.start();

        wait_for_phase(&session, InitPhase::Ready).await;
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_unauthenticated_start_is_noop() {
        let (session, provider, _temp) = demo_session();
        session.start();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(provider.calls(), 0);
        assert_eq!(session.couple().phase(), InitPhase::Idle);
    }

    #[tokio::test]
    async fn test_provider_failure_is_contained() {
        let (session, provider, _temp) = demo_session();
        provider.fail_with(Some("backend down"));
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        tokio::time::timeout(Duration::from_secs(5), async {
            let mut rx = session.couple().subscribe_phase();
            loop {
                if matches!(*rx.borrow_and_update(), InitPhase::Failed(_)) {
                    return;
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .unwrap();

        assert!(!session.couple().is_initialized());
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_ensure_noop_when_initialized() {
        let (session, provider, _temp) = demo_session();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;
        assert_eq!(provider.calls(), 1);

        session.ensure_couple_data_initialized().await;
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_ensure_noop_when_unauthenticated() {
        let (session, provider, _temp) = demo_session();

        session.ensure_couple_data_initialized().await;
        assert_eq!(provider.calls(), 0);
    }

    #[tokio::test]
    async fn test_ensure_retries_after_failure() {
        let (session, provider, _temp) = demo_session();
        session.start();

        provider.fail_with(Some("backend down"));
        session.login(UserAccount::new("u1", "minh@example.com"));
        tokio::time::timeout(Duration::from_secs(5), async {
            let mut rx = session.couple().subscribe_phase();
            loop {
                if matches!(*rx.borrow_and_update(), InitPhase::Failed(_)) {
                    return;
                }
                rx.changed().await.unwrap();
            }
        })
        .await
        .unwrap();

        provider.fail_with(None);
        session.ensure_couple_data_initialized().await;
        assert!(session.couple().is_initialized());
        assert_eq!(provider.calls(), 2);
    }

    #[tokio::test]
    async fn test_start_is_idempotent() {
        let (session, provider, _temp) = demo_session();
        session.start();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;

        // A second watcher would have doubled the provider calls
        assert_eq!(provider.calls(), 1);
    }

    #[tokio::test]
    async fn test_successful_login_caches_snapshot() {
        let (session, _provider, _temp) = demo_session();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;

        // The watcher caches asynchronously right after applying
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if session.storage().load_couple_snapshot().unwrap().is_some() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_logout_clears_cached_snapshot() {
        let (session, _provider, _temp) = demo_session();
        session.start();

        session.login(UserAccount::new("u1", "minh@example.com"));
        wait_for_phase(&session, InitPhase::Ready).await;

        session.logout();
        wait_for_phase(&session, InitPhase::Idle).await;
        assert!(session.storage().load_couple_snapshot().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_restore_cached_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let provider = Arc::new(StaticCoupleProvider::new(sample_snapshot()));

        {
            let session = AppSession::new(temp_dir.path(), provider.clone()).unwrap();
            session.storage().save_couple_snapshot(&sample_snapshot()).unwrap();
        }

        let session = AppSession::new(temp_dir.path(), provider).unwrap();
        assert!(session.restore_cached_snapshot().unwrap());
        assert!(session.couple().is_initialized());
        assert_eq!(session.couple().timeline().len(), 4);
    }

    #[tokio::test]
    async fn test_locale_round_trip() {
        let (session, _provider, _temp) = demo_session();
        assert_eq!(session.locale(), Locale::En);

        session.set_locale(Locale::Vi).unwrap();
        assert_eq!(session.locale(), Locale::Vi);
    }
}
