//! JSON file backend for the score store.
//!
//! The whole file is a flat `{"key": integer}` object. Writes go to a sibling
//! temp file that is then renamed over the original.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;
use unblur_core::storage::{HighScoreStore, StoreError, StoreResult};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, u32>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|e| StoreError::Serialization(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::Backend(e.to_string())),
        };
        debug!(path = %path.display(), keys = values.len(), "opened score store");
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        let body = serde_json::to_vec_pretty(&self.values)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(|e| StoreError::Backend(e.to_string()))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(())
    }
}

impl HighScoreStore for JsonFileStore {
    fn get(&self, key: &str) -> StoreResult<Option<u32>> {
        Ok(self.values.get(key).copied())
    }

    fn put(&mut self, key: &str, value: u32) -> StoreResult<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }
}
