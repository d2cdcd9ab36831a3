//! File Store - Atomic JSON-per-Key Persistence
//!
//! Each key lives in `<data_dir>/<key>.json`. Writes go to a temporary
//! file first and are then renamed over the target, so a value on disk
//! is always either the old or the new version, never a partial write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::ports::key_value::{KeyValueStore, StoreError};

const VALUE_EXT: &str = "json";

/// Directory-backed key/value store that survives restarts.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding one file per key.
    data_dir: PathBuf,
    /// Limit on the total size of stored values, in bytes.
    quota_bytes: Option<u64>,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `data_dir`.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self> {
        let dir = data_dir.as_ref();
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        info!(path = %dir.display(), "File store opened");

        Ok(Self {
            data_dir: dir.to_path_buf(),
            quota_bytes: None,
        })
    }

    /// Reject writes that would push total stored bytes past `quota_bytes`.
    #[must_use]
    pub fn with_quota(mut self, quota_bytes: u64) -> Self {
        self.quota_bytes = Some(quota_bytes);
        self
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key != "."
            && !key.contains("..")
            && !key.contains(['/', '\\', '\0']);
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{key}.{VALUE_EXT}")))
    }

    /// Total bytes held by every value file except `skip`.
    fn usage_excluding(&self, skip: &Path) -> Result<u64, StoreError> {
        let mut total = 0;
        for entry in fs::read_dir(&self.data_dir)? {
            let path = entry?.path();
            if path == skip || path.extension().is_none_or(|ext| ext != VALUE_EXT) {
                continue;
            }
            total += fs::metadata(&path)?.len();
        }
        Ok(total)
    }
}

impl KeyValueStore for FileStore {
    #[instrument(skip(self))]
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;

        if let Some(limit) = self.quota_bytes {
            let needed = self.usage_excluding(&path)? + value.len() as u64;
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }

        let tmp_path = path.with_extension(format!("{VALUE_EXT}.tmp"));
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!(path = %path.display(), "Value written");
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn is_healthy(&self) -> bool {
        let probe = self.data_dir.join(".health_check");
        let result = fs::write(&probe, b"ok");
        let _ = fs::remove_file(&probe);
        result.is_ok()
    }
}
