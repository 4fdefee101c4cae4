use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// A stored artifact and its executable flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredArtifact {
    pub content: String,
    pub executable: bool,
}

/// In-memory artifact store for testing and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    // Shared so a clone handed to the emitter can be inspected afterwards.
    files: Arc<Mutex<BTreeMap<String, StoredArtifact>>>,
    fail_writes: bool,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail with a permission error.
    pub fn failing() -> Self {
        Self { fail_writes: true, ..Self::default() }
    }

    pub fn get(&self, name: &str) -> Option<StoredArtifact> {
        self.files.lock().ok()?.get(name).cloned()
    }

    pub fn names(&self) -> Vec<String> {
        self.files.lock().map(|files| files.keys().cloned().collect()).unwrap_or_default()
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn write_artifact(
        &mut self,
        name: &str,
        content: &str,
        executable: bool,
    ) -> Result<PathBuf, AppError> {
        if self.fail_writes {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                format!("cannot write {}", name),
            )));
        }
        let mut files = self
            .files
            .lock()
            .map_err(|_| AppError::config_error("artifact store lock poisoned"))?;
        files.insert(
            name.to_string(),
            StoredArtifact { content: content.to_string(), executable },
        );
        Ok(PathBuf::from(name))
    }
}
