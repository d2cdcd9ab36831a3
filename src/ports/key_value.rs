//! Key/Value Port - Durable String Storage Interface
//!
//! The store facade never touches files or maps directly; it talks to
//! whatever implements `KeyValueStore`. Values are JSON text, one blob
//! per key, mirroring how the dashboard used browser local storage.

use thiserror::Error;

/// Failures a storage backend can report.
///
/// The facade decides whether to surface or swallow these; backends
/// always report them.
#[derive(Debug, Error)]
pub enum StoreError {
  /// Backend cannot be reached (lock poisoned, privacy-mode style denial).
  #[error("storage unavailable: {0}")]
  Unavailable(String),

  /// Writing the value would exceed the configured quota.
  #[error("quota exceeded writing {key}: {needed} bytes needed, limit is {limit}")]
  QuotaExceeded {
    key: String,
    needed: u64,
    limit: u64,
  },

  /// Key cannot be mapped onto the backend (e.g. path traversal).
  #[error("invalid storage key: {0:?}")]
  InvalidKey(String),

  #[error("storage I/O error: {0}")]
  Io(#[from] std::io::Error),

  /// Value could not be encoded as JSON.
  #[error("failed to serialize value: {0}")]
  Serialize(#[source] serde_json::Error),

  /// Stored JSON does not match the expected shape.
  #[error("malformed value under {key}: {source}")]
  Deserialize {
    key: String,
    #[source]
    source: serde_json::Error,
  },
}

/// Trait for durable key/value providers.
///
/// All calls are synchronous and run to completion; there is no
/// cross-handle locking or versioning, so two handles over the same
/// backing data race last-writer-wins.
pub trait KeyValueStore: Send + Sync {
  /// Read the raw value for `key`, `None` when absent.
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

  /// Replace the value for `key`.
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

  /// Delete `key`. Removing an absent key succeeds.
  fn remove(&self, key: &str) -> Result<(), StoreError>;

  /// Check whether the backend is usable (directory writable, lock sane).
  fn is_healthy(&self) -> bool;
}
