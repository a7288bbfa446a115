//! File-backed durable token storage

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ClientError;
use hris_core::ports::TokenStorage;

/// Key/value pairs persisted as a small JSON object.
///
/// Reads are served from memory. Write failures are logged and the in-memory
/// value still changes, so a read-only disk degrades to a per-process session.
#[derive(Debug)]
pub struct FileTokenStorage {
    path: PathBuf,
    values: RwLock<HashMap<String, String>>,
}

impl FileTokenStorage {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            if raw.trim().is_empty() {
                HashMap::new()
            } else {
                serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!("Ignoring unreadable session file {}: {}", path.display(), e);
                    HashMap::new()
                })
            }
        } else {
            HashMap::new()
        };

        debug!("Session file {} opened ({} keys)", path.display(), values.len());
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &HashMap<String, String>) {
        if let Err(e) = self.write_file(values) {
            warn!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }

    fn write_file(&self, values: &HashMap<String, String>) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(values)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl TokenStorage for FileTokenStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.persist(&values);
    }

    fn remove(&self, key: &str) {
        let mut values = self.values.write();
        if values.remove(key).is_some() {
            self.persist(&values);
        }
    }
}
