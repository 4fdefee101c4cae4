use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// Writes artifacts into a directory on disk.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given output directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, AppError> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => Ok(self.root.join(name)),
            _ => Err(AppError::config_error(format!(
                "Artifact name '{}' must be a plain file name",
                name
            ))),
        }
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_artifact(
        &mut self,
        name: &str,
        content: &str,
        executable: bool,
    ) -> Result<PathBuf, AppError> {
        let full_path = self.resolve(name)?;
        fs::create_dir_all(&self.root)?;
        fs::write(&full_path, content)?;

        if executable {
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let mut perms = fs::metadata(&full_path)?.permissions();
                perms.set_mode(0o755);
                fs::set_permissions(&full_path, perms)?;
            }
        }

        debug!(path = %full_path.display(), bytes = content.len(), executable, "wrote artifact");
        Ok(full_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writes_and_overwrites_without_confirmation() {
        let temp = tempdir().unwrap();
        let mut store = FilesystemArtifactStore::new(temp.path().to_path_buf());

        store.write_artifact(".env", "A=1\n", false).unwrap();
        let path = store.write_artifact(".env", "A=2\n", false).unwrap();

        assert_eq!(path, temp.path().join(".env"));
        assert_eq!(fs::read_to_string(path).unwrap(), "A=2\n");
    }

    #[test]
    fn creates_missing_output_directory() {
        let temp = tempdir().unwrap();
        let root = temp.path().join("nested/out");
        let mut store = FilesystemArtifactStore::new(root.clone());

        store.write_artifact("deploy.sh", "#!/bin/bash\n", true).unwrap();

        assert!(root.join("deploy.sh").exists());
    }

    #[test]
    fn rejects_names_with_directories() {
        let temp = tempdir().unwrap();
        let mut store = FilesystemArtifactStore::new(temp.path().to_path_buf());

        assert!(store.write_artifact("../escape.sh", "", false).is_err());
        assert!(store.write_artifact("sub/file", "", false).is_err());
        assert!(store.write_artifact("", "", false).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn executable_artifacts_get_755() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let mut store = FilesystemArtifactStore::new(temp.path().to_path_buf());

        let script = store.write_artifact("deploy.sh", "#!/bin/bash\n", true).unwrap();
        let env = store.write_artifact(".env", "A=1\n", false).unwrap();

        assert_eq!(fs::metadata(&script).unwrap().permissions().mode() & 0o777, 0o755);
        assert_eq!(fs::metadata(&env).unwrap().permissions().mode() & 0o111, 0);
    }

    #[cfg(unix)]
    #[test]
    fn surfaces_filesystem_failures() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not dir").unwrap();
        let mut store = FilesystemArtifactStore::new(blocker);

        let err = store.write_artifact(".env", "A=1\n", false).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
