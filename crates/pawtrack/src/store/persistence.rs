//! Store persistence hook

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::DomainError;
use crate::store::PersistedState;

/// Serialize/deserialize hook for store snapshots
pub trait StorePersistence: Send + Sync {
    /// `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<PersistedState>, DomainError>;

    fn save(&self, state: &PersistedState) -> Result<(), DomainError>;
}

/// Snapshot kept as a pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorePersistence for JsonFilePersistence {
    fn load(&self) -> Result<Option<PersistedState>, DomainError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Repository(format!("Failed to read {:?}: {}", self.path, e))
        })?;
        let state = serde_json::from_str(&content).map_err(|e| {
            DomainError::Repository(format!("Failed to parse {:?}: {}", self.path, e))
        })?;

        Ok(Some(state))
    }

    fn save(&self, state: &PersistedState) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::Repository(format!("Failed to create {:?}: {}", dir, e))
            })?;
        }

        let content = serde_json::to_string_pretty(state)
            .map_err(|e| DomainError::Repository(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| {
            DomainError::Repository(format!("Failed to write {:?}: {}", self.path, e))
        })
    }
}
