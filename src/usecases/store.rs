//! Store Facade - Typed, Best-effort Access to Persisted Collections
//!
//! Wraps an injected `KeyValueStore` and exposes the dashboard's
//! record collections. Two layers:
//! - `try_get_item` / `try_set_item` report every failure as a `StoreError`
//! - `get_item` / `set_item` and everything built on them log the failure
//!   and degrade (absent value, skipped write) so callers can always render
//!
//! Every `add_*` is a read-modify-write of the whole collection. There is
//! no locking: two handles over the same backend race last-writer-wins.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument, warn};

use crate::domain::stats::{self, StoreStats};
use crate::domain::{AuditReport, Dataset, Model};
use crate::ports::key_value::{KeyValueStore, StoreError};

/// Storage keys used by the dashboard. The strings must not change:
/// existing persisted data is looked up by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
  Models,
  Datasets,
  Reports,
  Posts,
  Profile,
}

impl StorageKey {
  pub const ALL: [Self; 5] = [
    Self::Models,
    Self::Datasets,
    Self::Reports,
    Self::Posts,
    Self::Profile,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Models => "ethoslens_models",
      Self::Datasets => "ethoslens_datasets",
      Self::Reports => "ethoslens_reports",
      Self::Posts => "ethoslens_posts",
      Self::Profile => "ethoslens_profile",
    }
  }
}

impl std::fmt::Display for StorageKey {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Persistence and aggregation store over an injected backend.
pub struct EthosStore<S: KeyValueStore + ?Sized> {
  backend: Arc<S>,
}

impl<S: KeyValueStore + ?Sized> Clone for EthosStore<S> {
  fn clone(&self) -> Self {
    Self {
      backend: Arc::clone(&self.backend),
    }
  }
}

impl<S: KeyValueStore + ?Sized> EthosStore<S> {
  pub const fn new(backend: Arc<S>) -> Self {
    Self { backend }
  }

  /// Whether the underlying backend reports itself usable.
  pub fn is_healthy(&self) -> bool {
    self.backend.is_healthy()
  }

  // ── Raw item layer ────────────────────────────────────────

  /// Read and decode `key`. `Ok(None)` when nothing is stored.
  pub fn try_get_item<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
    let Some(raw) = self.backend.get(key)? else {
      return Ok(None);
    };
    serde_json::from_str(&raw)
      .map(Some)
      .map_err(|source| StoreError::Deserialize {
        key: key.to_string(),
        source,
      })
  }

  /// Encode `value` as JSON and store it under `key`.
  pub fn try_set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
    let json = serde_json::to_string(value).map_err(StoreError::Serialize)?;
    self.backend.set(key, &json)
  }

  /// Best-effort read: failures are logged and read as absent.
  pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
    match self.try_get_item(key) {
      Ok(value) => value,
      Err(e) => {
        warn!(key, error = %e, "Failed to read stored value, treating as absent");
        None
      }
    }
  }

  /// Best-effort write: failures are logged and the write is dropped.
  pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
    if let Err(e) = self.try_set_item(key, value) {
      warn!(key, error = %e, "Failed to store value, write dropped");
    }
  }

  /// Best-effort delete.
  pub fn remove_item(&self, key: &str) {
    if let Err(e) = self.backend.remove(key) {
      warn!(key, error = %e, "Failed to remove stored value");
    }
  }

  // ── Collection helpers ────────────────────────────────────

  pub(crate) fn list<T: DeserializeOwned>(&self, key: StorageKey) -> Vec<T> {
    self.get_item(key.as_str()).unwrap_or_default()
  }

  pub(crate) fn replace<T: Serialize>(&self, key: StorageKey, items: &[T]) {
    self.set_item(key.as_str(), items);
  }

  fn append<T: Serialize + DeserializeOwned>(&self, key: StorageKey, record: T) {
    let mut items: Vec<T> = self.list(key);
    items.push(record);
    self.replace(key, &items);
    debug!(%key, count = items.len(), "Record appended");
  }

  // ── Models ────────────────────────────────────────────────

  pub fn get_models(&self) -> Vec<Model> {
    self.list(StorageKey::Models)
  }

  #[instrument(skip(self, model), fields(model_id = %model.id))]
  pub fn add_model(&self, model: Model) {
    self.append(StorageKey::Models, model);
  }

  pub fn get_model_by_id(&self, id: &str) -> Option<Model> {
    self.get_models().into_iter().find(|m| m.id == id)
  }

  // ── Datasets ──────────────────────────────────────────────

  pub fn get_datasets(&self) -> Vec<Dataset> {
    self.list(StorageKey::Datasets)
  }

  #[instrument(skip(self, dataset), fields(dataset_id = %dataset.id))]
  pub fn add_dataset(&self, dataset: Dataset) {
    self.append(StorageKey::Datasets, dataset);
  }

  pub fn get_dataset_by_id(&self, id: &str) -> Option<Dataset> {
    self.get_datasets().into_iter().find(|d| d.id == id)
  }

  // ── Audit reports ─────────────────────────────────────────

  pub fn get_reports(&self) -> Vec<AuditReport> {
    self.list(StorageKey::Reports)
  }

  #[instrument(skip(self, report), fields(report_id = %report.id, model_id = %report.model_id))]
  pub fn add_report(&self, report: AuditReport) {
    self.append(StorageKey::Reports, report);
  }

  pub fn get_report_by_id(&self, id: &str) -> Option<AuditReport> {
    self.get_reports().into_iter().find(|r| r.id == id)
  }

  /// All reports referencing `model_id`, oldest first.
  pub fn get_reports_for_model(&self, model_id: &str) -> Vec<AuditReport> {
    self
      .get_reports()
      .into_iter()
      .filter(|r| r.model_id == model_id)
      .collect()
  }

  // ── Aggregates and bulk operations ────────────────────────

  /// Dashboard totals, recomputed from storage on every call.
  pub fn get_stats(&self) -> StoreStats {
    stats::aggregate(
      &self.get_models(),
      &self.get_datasets(),
      &self.get_reports(),
      &self.get_posts(),
      &self.get_profile(),
    )
  }

  /// Remove every collection and the profile.
  #[instrument(skip(self))]
  pub fn clear_all_data(&self) {
    for key in StorageKey::ALL {
      self.remove_item(key.as_str());
    }
    info!("All stored data cleared");
  }
}
