//! Persistence port and its adapters.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::error::StoreError;

/// A logical collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Planned trips.
    Trips,
    /// Confirmed bookings.
    Bookings,
    /// Shared expenses.
    Expenses,
    /// Alerts, newest first.
    Alerts,
    /// Items saved for offline use.
    Offline,
    /// Favorite destinations.
    Favorites,
    /// Travel groups.
    Groups,
}

impl Collection {
    /// All collections.
    pub const ALL: [Self; 7] = [
        Self::Trips,
        Self::Bookings,
        Self::Expenses,
        Self::Alerts,
        Self::Offline,
        Self::Favorites,
        Self::Groups,
    ];

    /// Stable storage key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Trips => "travelmate_trips",
            Self::Bookings => "travelmate_bookings",
            Self::Expenses => "travelmate_expenses",
            Self::Alerts => "travelmate_alerts",
            Self::Offline => "travelmate_offline",
            Self::Favorites => "travelmate_favorites",
            Self::Groups => "travelmate_groups",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Key-value persistence for whole collections.
pub trait Repository {
    /// Loads a collection. `Ok(None)` means nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or holds
    /// invalid JSON.
    fn load(&self, collection: Collection) -> Result<Option<Value>, StoreError>;

    /// Replaces a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save(&mut self, collection: Collection, value: Value) -> Result<(), StoreError>;
}

/// Process-local repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    entries: HashMap<Collection, Value>,
}

impl InMemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a collection with raw JSON.
    #[must_use]
    pub fn with(mut self, collection: Collection, value: Value) -> Self {
        self.entries.insert(collection, value);
        self
    }

    /// Raw stored value.
    #[must_use]
    pub fn get(&self, collection: Collection) -> Option<&Value> {
        self.entries.get(&collection)
    }
}

impl Repository for InMemoryRepository {
    fn load(&self, collection: Collection) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(&collection).cloned())
    }

    fn save(&mut self, collection: Collection, value: Value) -> Result<(), StoreError> {
        self.entries.insert(collection, value);
        Ok(())
    }
}

/// Repository storing one `<key>.json` file per collection.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    /// Opens a repository rooted at `root`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| StoreError::io(&root, e))?;
        Ok(Self { root })
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `collection`.
    #[must_use]
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.key()))
    }
}

impl Repository for JsonFileRepository {
    fn load(&self, collection: Collection) -> Result<Option<Value>, StoreError> {
        let path = self.path_for(collection);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                key: collection.key(),
                reason: e.to_string(),
            })
    }

    fn save(&mut self, collection: Collection, value: Value) -> Result<(), StoreError> {
        let path = self.path_for(collection);
        let tmp = path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(&value)?;

        fs::write(&tmp, raw).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))
    }
}
