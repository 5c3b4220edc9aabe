//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! - **Engine**: the rule engine, immutable and shared behind an `Arc`.
//! - **Store**: the persistence collaborator holding the latest check and
//!   the bounded check history.
//! - **Config**: startup configuration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use msme_core::BusinessProfile;
use msme_rules::{CheckReport, RuleEngine};
use msme_store::{
    EntityKey, FileStore, KeyValueStore, MemoryStore, StoreError, StoreExt, StoreResult,
};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{AppConfig, ConfigError};
use crate::error::AppError;

/// A completed compliance check, as persisted and returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckRecord {
    pub id: Uuid,
    /// The evaluated profile: `{ "turnover": <rupees>, "employee_count": <n> }`.
    #[schema(value_type = Object)]
    pub profile: BusinessProfile,
    /// Findings in rule order, per-risk summary and message.
    #[schema(value_type = Object)]
    pub report: CheckReport,
    pub checked_at: DateTime<Utc>,
}

impl CheckRecord {
    pub fn new(report: CheckReport) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile: report.profile,
            report,
            checked_at: Utc::now(),
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RuleEngine>,
    pub store: Arc<dyn KeyValueStore>,
    pub config: AppConfig,
    // Serializes history read-modify-write cycles.
    history_lock: Arc<Mutex<()>>,
}

impl AppState {
    /// Statutory engine, in-memory store, default configuration.
    pub fn new() -> Self {
        Self::with_parts(
            AppConfig::default(),
            RuleEngine::default(),
            Arc::new(MemoryStore::new()),
        )
    }

    pub fn with_parts(
        config: AppConfig,
        engine: RuleEngine,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        Self {
            engine: Arc::new(engine),
            store,
            config,
            history_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load thresholds and open the store named by `config`.
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let engine = match &config.thresholds_path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading threshold overrides");
                RuleEngine::from_path(path)?
            }
            None => RuleEngine::default(),
        };
        let store: Arc<dyn KeyValueStore> = match &config.store_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using file store");
                Arc::new(FileStore::open(dir)?)
            }
            None => {
                tracing::info!("using in-memory store; checks are lost on restart");
                Arc::new(MemoryStore::new())
            }
        };
        Ok(Self::with_parts(config, engine, store))
    }

    /// Prepend `record` to history, keeping at most `history_limit`
    /// entries, then make it the latest check.
    ///
    /// `LatestCheck` is written only after the history write succeeds. A
    /// corrupt history is replaced by a fresh one holding just `record`.
    pub fn record_check(&self, record: &CheckRecord) -> StoreResult<()> {
        let _guard = self.history_lock.lock();
        let mut history = match self.check_history() {
            Ok(history) => history,
            Err(StoreError::Corrupt { key, source }) => {
                tracing::warn!(%key, error = %source, "discarding unreadable check history");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        history.insert(0, record.clone());
        history.truncate(self.config.history_limit);
        self.store.save(EntityKey::CheckHistory, &history)?;
        self.store.save(EntityKey::LatestCheck, record)
    }

    /// Run a store operation on the blocking thread pool.
    ///
    /// `FileStore` does synchronous filesystem I/O, so handlers never call
    /// the store directly.
    pub async fn with_store<T, F>(&self, op: F) -> Result<T, AppError>
    where
        F: FnOnce(&AppState) -> StoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let state = self.clone();
        tokio::task::spawn_blocking(move || op(&state))
            .await
            .map_err(|e| AppError::Internal(format!("store task failed: {e}")))?
            .map_err(AppError::from)
    }

    pub fn latest_check(&self) -> StoreResult<Option<CheckRecord>> {
        self.store.load(EntityKey::LatestCheck)
    }

    /// Past checks, newest first.
    pub fn check_history(&self) -> StoreResult<Vec<CheckRecord>> {
        Ok(self
            .store
            .load::<Vec<CheckRecord>>(EntityKey::CheckHistory)?
            .unwrap_or_default())
    }

    /// Remove the latest check and the history. Returns whether anything
    /// was stored.
    pub fn clear_checks(&self) -> StoreResult<bool> {
        let _guard = self.history_lock.lock();
        let mut cleared = false;
        for key in EntityKey::all() {
            cleared |= self.store.clear(*key)?;
        }
        Ok(cleared)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
