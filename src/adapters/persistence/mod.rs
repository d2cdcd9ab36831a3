//! Persistence Adapters - Key/Value Storage Backends
//!
//! Implements the `KeyValueStore` port with a directory of atomic JSON
//! files (durable) or an in-process map (tests, throwaway sessions).

pub mod file;
pub mod memory;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::key_value::KeyValueStore;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Build the backend selected in `[storage]`.
pub fn open_backend(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.backend {
        StorageBackend::File => {
            let store = FileStore::new(&config.data_dir)?;
            Arc::new(match config.quota_bytes {
                Some(limit) => store.with_quota(limit),
                None => store,
            })
        }
        StorageBackend::Memory => Arc::new(
            config
                .quota_bytes
                .map_or_else(MemoryStore::new, MemoryStore::with_quota),
        ),
    };

    info!(
        backend = ?config.backend,
        quota_bytes = ?config.quota_bytes,
        "Storage backend ready"
    );

    Ok(store)
}
