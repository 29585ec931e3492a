//! Persistent storage using redb.
//!
//! Heartline mirrors most state from the backend; the only state it owns
//! outright is small and local:
//! - User preferences (theme key, dark-mode flag, locale)
//! - The last couple snapshot fetched from the backend, kept for offline
//!   display until the next login refreshes it

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use serde::{Deserialize, Serialize};

use crate::error::HeartlineError;
use crate::i18n::Locale;
use crate::provider::CoupleSnapshot;
use crate::theme::DEFAULT_THEME;

// Table definitions
const PREFERENCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");
const COUPLE_CACHE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("couple_cache");

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Preferences {
    /// Active theme key
    pub theme: String,
    /// Dark-mode flag
    pub dark_mode: bool,
    /// UI locale
    pub locale: Locale,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            dark_mode: false,
            locale: Locale::default(),
        }
    }
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Preferences storage key (one record per installation)
    const PREFERENCES_KEY: &'static str = "preferences";

    /// Couple snapshot cache key (one record per installation)
    const COUPLE_SNAPSHOT_KEY: &'static str = "couple_snapshot";

    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory, the database file, and all tables
    /// as needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, HeartlineError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
            let _ = write_txn.open_table(COUPLE_CACHE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Preference Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Save the preferences record, overwriting any previous one.
    pub fn save_preferences(&self, prefs: &Preferences) -> Result<(), HeartlineError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            let data = serde_json::to_vec(prefs)
                .map_err(|e| HeartlineError::Serialization(e.to_string()))?;
            table.insert(Self::PREFERENCES_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the preferences record.
    ///
    /// Returns `None` when nothing has been persisted yet.
    pub fn load_preferences(&self) -> Result<Option<Preferences>, HeartlineError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        match table.get(Self::PREFERENCES_KEY)? {
            Some(v) => {
                let prefs: Preferences = serde_json::from_slice(v.value())
                    .map_err(|e| HeartlineError::Serialization(e.to_string()))?;
                Ok(Some(prefs))
            }
            None => Ok(None),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Couple Snapshot Cache Operations
    // ═══════════════════════════════════════════════════════════════════════

    /// Cache the last-fetched couple snapshot for offline display.
    pub fn save_couple_snapshot(&self, snapshot: &CoupleSnapshot) -> Result<(), HeartlineError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(COUPLE_CACHE_TABLE)?;
            let data = serde_json::to_vec(snapshot)
                .map_err(|e| HeartlineError::Serialization(e.to_string()))?;
            table.insert(Self::COUPLE_SNAPSHOT_KEY, data.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Load the cached couple snapshot.
    ///
    /// Returns `None` when no snapshot has been cached.
    pub fn load_couple_snapshot(&self) -> Result<Option<CoupleSnapshot>, HeartlineError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(COUPLE_CACHE_TABLE)?;

        match table.get(Self::COUPLE_SNAPSHOT_KEY)? {
            Some(v) => {
                let snapshot: CoupleSnapshot = serde_json::from_slice(v.value())
                    .map_err(|e| HeartlineError::Serialization(e.to_string()))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    /// Remove the cached couple snapshot (logout path).
    pub fn clear_couple_snapshot(&self) -> Result<(), HeartlineError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(COUPLE_CACHE_TABLE)?;
            table.remove(Self::COUPLE_SNAPSHOT_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::sample_snapshot;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_storage_can_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(temp_dir.path().join("test.redb"));
        assert!(storage.is_ok());
    }

    #[test]
    fn test_storage_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested/path/to/test.redb");
        let storage = Storage::new(&db_path);
        assert!(storage.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_load_preferences_empty() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.load_preferences().unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_preferences() {
        let (storage, _temp) = create_test_storage();

        let prefs = Preferences {
            theme: "winter".to_string(),
            dark_mode: true,
            locale: Locale::Vi,
        };
        storage.save_preferences(&prefs).unwrap();

        let loaded = storage.load_preferences().unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_preferences_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            let prefs = Preferences {
                theme: "autumn".to_string(),
                ..Default::default()
            };
            storage.save_preferences(&prefs).unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            let loaded = storage.load_preferences().unwrap().unwrap();
            assert_eq!(loaded.theme, "autumn");
        }
    }

    #[test]
    fn test_save_and_load_couple_snapshot() {
        let (storage, _temp) = create_test_storage();

        assert!(storage.load_couple_snapshot().unwrap().is_none());

        let snapshot = sample_snapshot();
        storage.save_couple_snapshot(&snapshot).unwrap();

        let loaded = storage.load_couple_snapshot().unwrap().unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn test_clear_couple_snapshot() {
        let (storage, _temp) = create_test_storage();

        storage.save_couple_snapshot(&sample_snapshot()).unwrap();
        assert!(storage.load_couple_snapshot().unwrap().is_some());

        storage.clear_couple_snapshot().unwrap();
        assert!(storage.load_couple_snapshot().unwrap().is_none());
    }

    #[test]
    fn test_clear_when_empty_is_ok() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.clear_couple_snapshot().is_ok());
    }

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, DEFAULT_THEME);
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.locale, Locale::En);
    }
}
