//! # msme-store: Persistence Collaborator
//!
//! Saves, loads and clears JSON values by logical entity. Adapters hold an
//! `Arc<dyn KeyValueStore>` and never know whether records live in memory
//! or on disk.
//!
//! ## Backends
//!
//! - [`MemoryStore`]: `parking_lot::RwLock<HashMap>`, cloneable handle.
//!   Used by tests and by the API when no store directory is configured.
//! - [`FileStore`]: one JSON file per entity under a root directory, with
//!   atomic replace on save.
//!
//! ## Typed access
//!
//! The object-safe [`KeyValueStore`] deals in `serde_json::Value`. The
//! blanket [`StoreExt`] adds typed `save` / `load` on top, for any store
//! including `dyn KeyValueStore`.
//!
//! ```
//! use msme_store::{EntityKey, MemoryStore, StoreExt};
//!
//! let store = MemoryStore::new();
//! store.save(EntityKey::LatestCheck, &vec![1, 2, 3]).unwrap();
//! let back: Option<Vec<u32>> = store.load(EntityKey::LatestCheck).unwrap();
//! assert_eq!(back, Some(vec![1, 2, 3]));
//! ```

pub mod error;
pub mod file;
pub mod key;
pub mod memory;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use key::EntityKey;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keyed by logical entity.
pub trait KeyValueStore: Send + Sync {
    /// Replace the value stored under `key`.
    fn save_value(&self, key: EntityKey, value: serde_json::Value) -> StoreResult<()>;

    /// The value under `key`, or `None` if nothing was saved.
    fn load_value(&self, key: EntityKey) -> StoreResult<Option<serde_json::Value>>;

    /// Remove the value under `key`. Returns whether anything was removed.
    fn clear(&self, key: EntityKey) -> StoreResult<bool>;
}

/// Typed access over any [`KeyValueStore`].
pub trait StoreExt: KeyValueStore {
    /// Serialize `value` and save it under `key`.
    fn save<T: Serialize>(&self, key: EntityKey, value: &T) -> StoreResult<()> {
        self.save_value(key, serde_json::to_value(value)?)
    }

    /// Load and deserialize the value under `key`.
    ///
    /// A stored value that does not match `T` is reported as
    /// [`StoreError::Corrupt`].
    fn load<T: DeserializeOwned>(&self, key: EntityKey) -> StoreResult<Option<T>> {
        match self.load_value(key)? {
            None => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|source| StoreError::Corrupt { key, source }),
        }
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
