use std::path::PathBuf;

use crate::domain::AppError;

/// Port for persisting generated artifacts.
pub trait ArtifactStore {
    /// Create or overwrite `name`, returning where it was written.
    ///
    /// `executable` marks the artifact runnable by its owner, group, and others.
    fn write_artifact(
        &mut self,
        name: &str,
        content: &str,
        executable: bool,
    ) -> Result<PathBuf, AppError>;
}
