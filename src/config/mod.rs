//! Configuration Module - TOML-based Store Configuration
//!
//! Loads and validates configuration from `config.toml`. Only the
//! binary reads configuration; the library store takes an injected
//! backend and never looks at files or environment on its own.

pub mod loader;

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Application identity and logging.
  pub app: AppSection,
  /// Storage backend selection.
  #[serde(default)]
  pub storage: StorageConfig,
}

/// Application identity and logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppSection {
  /// Human-readable name, logged at startup.
  pub name: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
  /// Emit logs as JSON lines instead of human-readable text.
  #[serde(default)]
  pub json_logs: bool,
}

/// Which `KeyValueStore` implementation backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
  /// One JSON file per key under `data_dir`.
  File,
  /// Process memory only; nothing survives exit.
  Memory,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
  #[serde(default = "default_backend")]
  pub backend: StorageBackend,
  /// Directory for the file backend.
  #[serde(default = "default_data_dir")]
  pub data_dir: String,
  /// Total bytes the store may hold. Absent means unlimited.
  #[serde(default)]
  pub quota_bytes: Option<u64>,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      backend: default_backend(),
      data_dir: default_data_dir(),
      quota_bytes: None,
    }
  }
}

// Default value functions for serde

fn default_log_level() -> String {
  "info".to_string()
}

const fn default_backend() -> StorageBackend {
  StorageBackend::File
}

fn default_data_dir() -> String {
  "data".to_string()
}
