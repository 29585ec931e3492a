//! Backend data provider seam.
//!
//! The real application talks to an HTTP backend; this layer only sees a
//! [`CoupleDataProvider`]. Tests and the demo CLI use
//! [`StaticCoupleProvider`], which serves a configurable snapshot and can
//! be told to fail or stall.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{HeartlineError, HeartlineResult};
use crate::types::{
    Author, ConnectionStatus, CoupleConnection, TimelineItem, TimelineKind, TimelineStats, User,
};

/// Everything the backend returns for a couple in one load
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoupleSnapshot {
    /// The couple's connection record
    pub connection: CoupleConnection,
    /// All timeline rows for the couple
    pub timeline: Vec<TimelineItem>,
    /// Backend-computed aggregates, when the endpoint returns them
    pub stats: Option<TimelineStats>,
}

/// Source of couple data (backend API in production)
#[async_trait]
pub trait CoupleDataProvider: Send + Sync {
    /// Fetch the signed-in couple's connection, timeline, and stats
    async fn fetch_couple_data(&self) -> HeartlineResult<CoupleSnapshot>;
}

/// In-memory provider for tests and demos.
///
/// Serves a configurable snapshot, counts invocations, and can be set to
/// fail or to stall for a fixed delay before answering.
pub struct StaticCoupleProvider {
    snapshot: RwLock<CoupleSnapshot>,
    failure: RwLock<Option<String>>,
    delay: RwLock<Option<Duration>>,
    calls: AtomicUsize,
}

impl StaticCoupleProvider {
    /// Create a provider serving the given snapshot
    pub fn new(snapshot: CoupleSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
            failure: RwLock::new(None),
            delay: RwLock::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    /// Replace the snapshot served to subsequent fetches
    pub fn set_snapshot(&self, snapshot: CoupleSnapshot) {
        *self.snapshot.write() = snapshot;
    }

    /// Make subsequent fetches fail with the given message (None clears)
    pub fn fail_with(&self, message: Option<&str>) {
        *self.failure.write() = message.map(str::to_string);
    }

    /// Stall each fetch for the given duration before answering
    pub fn set_delay(&self, delay: Option<Duration>) {
        *self.delay.write() = delay;
    }

    /// Number of fetches served so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CoupleDataProvider for StaticCoupleProvider {
    async fn fetch_couple_data(&self) -> HeartlineResult<CoupleSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(message) = self.failure.read().clone() {
            return Err(HeartlineError::Provider(message));
        }
        Ok(self.snapshot.read().clone())
    }
}

/// Demo snapshot used by the CLI and integration tests
pub fn sample_snapshot() -> CoupleSnapshot {
    let minh = User::new("u-minh", "minh@example.com", "Minh");
    let hoa = User::new("u-hoa", "hoa@example.com", "Hoa");
    let author = Author {
        id: minh.id.clone(),
        display_name: minh.display_name.clone(),
        avatar: String::new(),
    };

    let mut connection = CoupleConnection::new(minh, hoa);
    connection.id = "c-demo".to_string();
    connection.status = ConnectionStatus::Connected;
    connection.anniversary_date = chrono::NaiveDate::from_ymd_opt(2023, 2, 14);

    let now = chrono::Utc::now();
    let timeline = vec![
        TimelineItem::new(TimelineKind::Memory)
            .with_title("First trip to Đà Lạt")
            .with_date(now - chrono::Duration::days(3))
            .with_tags(vec!["travel".to_string()])
            .with_author(author.clone()),
        TimelineItem::new(TimelineKind::Reminder)
            .with_title("Book anniversary dinner")
            .with_date(now + chrono::Duration::days(10))
            .with_completed(false),
        TimelineItem::new(TimelineKind::Blog)
            .with_title("Our year in photos")
            .with_date(now - chrono::Duration::days(20))
            .with_author(author),
        TimelineItem::new(TimelineKind::Anniversary)
            .with_title("Three years together")
            .with_date(now - chrono::Duration::days(173)),
    ];

    let stats = TimelineStats::compute(&timeline, now);

    CoupleSnapshot {
        connection,
        timeline,
        stats: Some(stats),
    }
}
