//! # File Store
//!
//! One pretty-printed JSON file per [`EntityKey`] under a root directory,
//! named `<key>.json`. Saves write a hidden temporary sibling and `rename`
//! it over the target, so readers see either the old or the new document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::key::EntityKey;
use crate::KeyValueStore;

/// Key-value store persisted as JSON files.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    // Serializes writers in this process; the temp file name is per key.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|source| StoreError::Io {
            path: root.clone(),
            source,
        })?;
        tracing::debug!(root = %root.display(), "opened file store");
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: EntityKey) -> PathBuf {
        self.root.join(format!("{}.json", key.as_str()))
    }

    fn temp_path_for(&self, key: EntityKey) -> PathBuf {
        self.root.join(format!(".{}.json.tmp", key.as_str()))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}

impl KeyValueStore for FileStore {
    fn save_value(&self, key: EntityKey, value: serde_json::Value) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(&value)?;
        let target = self.path_for(key);
        let temp = self.temp_path_for(key);

        let _guard = self.write_lock.lock();
        std::fs::write(&temp, bytes).map_err(|e| io_error(&temp, e))?;
        std::fs::rename(&temp, &target).map_err(|e| io_error(&target, e))?;
        Ok(())
    }

    fn load_value(&self, key: EntityKey) -> StoreResult<Option<serde_json::Value>> {
        let path = self.path_for(key);
        let raw = match std::fs::read(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(io_error(&path, e)),
        };
        serde_json::from_slice(&raw)
            .map(Some)
            .map_err(|source| {
                tracing::warn!(%key, path = %path.display(), "stored value is not valid JSON");
                StoreError::Corrupt { key, source }
            })
    }

    fn clear(&self, key: EntityKey) -> StoreResult<bool> {
        let path = self.path_for(key);
        let _guard = self.write_lock.lock();
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(io_error(&path, e)),
        }
    }
}
