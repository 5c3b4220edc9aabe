//! # In-Memory Store
//!
//! Thread-safe, cloneable. The lock is `parking_lot` and never held across
//! an `.await`, so it is safe to use from async handlers.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::key::EntityKey;
use crate::KeyValueStore;

/// Key-value store backed by a shared `HashMap`. Clones share data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<HashMap<EntityKey, serde_json::Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of populated entities.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn save_value(&self, key: EntityKey, value: serde_json::Value) -> StoreResult<()> {
        self.data.write().insert(key, value);
        Ok(())
    }

    fn load_value(&self, key: EntityKey) -> StoreResult<Option<serde_json::Value>> {
        Ok(self.data.read().get(&key).cloned())
    }

    fn clear(&self, key: EntityKey) -> StoreResult<bool> {
        Ok(self.data.write().remove(&key).is_some())
    }
}
