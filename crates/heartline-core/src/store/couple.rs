//! Couple data store with explicit initialization phases.
//!
//! Initialization is observable as a phase value on a watch channel
//! rather than a bare boolean: a failed load is distinguishable from one
//! that has not started. Overlapping loads are guarded by a generation
//! counter, so a stale resolution can never overwrite fresher state.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::error::HeartlineResult;
use crate::provider::{CoupleDataProvider, CoupleSnapshot};
use crate::types::{CoupleConnection, TimelineItem, TimelineStats};

/// Initialization phase of couple data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitPhase {
    /// Nothing loaded, nothing in flight
    Idle,
    /// A load is in flight
    Loading,
    /// The last load succeeded and its data is live
    Ready,
    /// The last load failed
    Failed(String),
}

impl Default for InitPhase {
    fn default() -> Self {
        Self::Idle
    }
}

impl std::fmt::Display for InitPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Loading => write!(f, "Loading"),
            Self::Ready => write!(f, "Ready"),
            Self::Failed(reason) => write!(f, "Failed: {}", reason),
        }
    }
}

#[derive(Default)]
struct CoupleData {
    connection: Option<CoupleConnection>,
    timeline: Vec<TimelineItem>,
    stats: Option<TimelineStats>,
}

/// Reactive holder for the couple's connection, timeline, and stats
pub struct CoupleStore {
    data: RwLock<CoupleData>,
    phase_tx: watch::Sender<InitPhase>,
    generation: AtomicU64,
}

impl CoupleStore {
    /// Create an empty store in the Idle phase
    pub fn new() -> Self {
        let (phase_tx, _) = watch::channel(InitPhase::Idle);
        Self {
            data: RwLock::new(CoupleData::default()),
            phase_tx,
            generation: AtomicU64::new(0),
        }
    }

    /// Current initialization phase
    pub fn phase(&self) -> InitPhase {
        self.phase_tx.borrow().clone()
    }

    /// Subscribe to phase changes
    pub fn subscribe_phase(&self) -> watch::Receiver<InitPhase> {
        self.phase_tx.subscribe()
    }

    /// Whether couple data is loaded and live
    pub fn is_initialized(&self) -> bool {
        matches!(*self.phase_tx.borrow(), InitPhase::Ready)
    }

    /// Whether a load is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(*self.phase_tx.borrow(), InitPhase::Loading)
    }

    /// The couple connection, if loaded
    pub fn connection(&self) -> Option<CoupleConnection> {
        self.data.read().connection.clone()
    }

    /// The loaded timeline rows
    pub fn timeline(&self) -> Vec<TimelineItem> {
        self.data.read().timeline.clone()
    }

    /// The loaded stats, if the backend sent them
    pub fn stats(&self) -> Option<TimelineStats> {
        self.data.read().stats.clone()
    }

    /// Load couple data from the provider.
    ///
    /// Returns `Ok(Some(snapshot))` when the fetched data was applied,
    /// `Ok(None)` when this attempt was superseded by a newer initialize
    /// or reset before it resolved (nothing applied), and the provider's
    /// error otherwise. A superseding attempt owns the phase; a stale
    /// resolution touches neither data nor phase.
    pub async fn initialize(
        &self,
        provider: &dyn CoupleDataProvider,
    ) -> HeartlineResult<Option<CoupleSnapshot>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.phase_tx.send_replace(InitPhase::Loading);
        debug!(generation, "loading couple data");

        match provider.fetch_couple_data().await {
            Ok(snapshot) => {
                if self.generation.load(Ordering::SeqCst) != generation {
                    debug!(generation, "discarding superseded couple data load");
                    return Ok(None);
                }
                {
                    let mut data = self.data.write();
                    data.connection = Some(snapshot.connection.clone());
                    data.timeline = snapshot.timeline.clone();
                    data.stats = snapshot.stats.clone();
                }
                self.phase_tx.send_replace(InitPhase::Ready);
                info!(items = snapshot.timeline.len(), "couple data initialized");
                Ok(Some(snapshot))
            }
            Err(e) => {
                if self.generation.load(Ordering::SeqCst) == generation {
                    self.phase_tx.send_replace(InitPhase::Failed(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Apply a previously cached snapshot (offline display).
    ///
    /// The data goes live exactly as a fetched snapshot would; a later
    /// login still refreshes it from the provider.
    pub fn restore(&self, snapshot: &CoupleSnapshot) {
        {
            let mut data = self.data.write();
            data.connection = Some(snapshot.connection.clone());
            data.timeline = snapshot.timeline.clone();
            data.stats = snapshot.stats.clone();
        }
        self.phase_tx.send_replace(InitPhase::Ready);
        info!(items = snapshot.timeline.len(), "couple data restored from cache");
    }

    /// Synchronous full reset to the Idle phase (logout path).
    ///
    /// Also invalidates any load still in flight.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.data.write() = CoupleData::default();
        self.phase_tx.send_replace(InitPhase::Idle);
        info!("couple state reset");
    }
}

impl Default for CoupleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{sample_snapshot, StaticCoupleProvider};
    use std::time::Duration;

    #[tokio::test]
    async fn test_initialize_success() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());

        assert_eq!(store.phase(), InitPhase::Idle);
        assert!(!store.is_initialized());

        let applied = store.initialize(&provider).await.unwrap();
        assert!(applied.is_some());
        assert_eq!(store.phase(), InitPhase::Ready);
        assert!(store.is_initialized());
        assert_eq!(store.connection().unwrap().id, "c-demo");
        assert_eq!(store.timeline().len(), 4);
        assert!(store.stats().is_some());
    }

    #[tokio::test]
    async fn test_initialize_failure_sets_failed_phase() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());
        provider.fail_with(Some("backend down"));

        let result = store.initialize(&provider).await;
        assert!(result.is_err());
        assert!(matches!(store.phase(), InitPhase::Failed(_)));
        assert!(!store.is_initialized());
        assert!(store.connection().is_none());
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());

        store.initialize(&provider).await.unwrap();
        assert!(store.is_initialized());

        store.reset();
        assert_eq!(store.phase(), InitPhase::Idle);
        assert!(store.connection().is_none());
        assert!(store.timeline().is_empty());
        assert!(store.stats().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_invalidates_inflight_load() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());
        provider.set_delay(Some(Duration::from_millis(100)));

        let pending = store.initialize(&provider);
        tokio::pin!(pending);

        // Let the load start, then reset underneath it
        let early = tokio::time::timeout(Duration::from_millis(10), &mut pending).await;
        assert!(early.is_err());
        assert!(store.is_loading());
        store.reset();

        let applied = pending.await.unwrap();
        assert!(applied.is_none());
        assert_eq!(store.phase(), InitPhase::Idle);
        assert!(store.connection().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_failure_does_not_overwrite_phase() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());
        provider.set_delay(Some(Duration::from_millis(100)));
        provider.fail_with(Some("slow failure"));

        let pending = store.initialize(&provider);
        tokio::pin!(pending);

        let _ = tokio::time::timeout(Duration::from_millis(10), &mut pending).await;
        store.reset();

        assert!(pending.await.is_err());
        // The stale failure must not flip the phase away from Idle
        assert_eq!(store.phase(), InitPhase::Idle);
    }

    #[tokio::test]
    async fn test_restore_from_cache() {
        let store = CoupleStore::new();
        store.restore(&sample_snapshot());

        assert!(store.is_initialized());
        assert_eq!(store.timeline().len(), 4);
    }

    #[tokio::test]
    async fn test_phase_subscription_sees_transitions() {
        let store = CoupleStore::new();
        let provider = StaticCoupleProvider::new(sample_snapshot());
        let mut rx = store.subscribe_phase();

        store.initialize(&provider).await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), InitPhase::Ready);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(InitPhase::Idle.to_string(), "Idle");
        assert_eq!(InitPhase::Loading.to_string(), "Loading");
        assert_eq!(InitPhase::Ready.to_string(), "Ready");
        assert_eq!(
            InitPhase::Failed("timeout".to_string()).to_string(),
            "Failed: timeout"
        );
    }
}
