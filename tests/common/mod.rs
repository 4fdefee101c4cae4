//! Shared testing utilities for n8n-provision CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Answers for a run that generates the database password.
#[allow(dead_code)]
pub const HAPPY_PATH: &str = "1\nops\nAbcdef12\nAbcdef12\nmyapp\n";

/// Testing harness providing an isolated output directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the CLI runs in and writes artifacts to.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Scratch directory outside the work directory.
    pub fn scratch(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled binary within the work directory.
    ///
    /// `DB_PASSWORD` and `RUST_LOG` are cleared so the host environment cannot leak in.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("n8n-provision").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir()).env_remove("DB_PASSWORD").env_remove("RUST_LOG");
        cmd
    }

    pub fn env_path(&self) -> PathBuf {
        self.work_dir.join(".env")
    }

    pub fn script_path(&self) -> PathBuf {
        self.work_dir.join("deploy.sh")
    }

    pub fn read_env(&self) -> String {
        fs::read_to_string(self.env_path()).expect("Failed to read .env")
    }

    pub fn read_script(&self) -> String {
        fs::read_to_string(self.script_path()).expect("Failed to read deploy.sh")
    }

    /// Value of `key` in the generated `.env`.
    pub fn env_value(&self, key: &str) -> Option<String> {
        let prefix = format!("{}=", key);
        self.read_env().lines().find_map(|line| line.strip_prefix(&prefix).map(str::to_string))
    }

    /// Assert that neither artifact was written.
    pub fn assert_no_artifacts(&self) {
        assert!(!self.env_path().exists(), ".env should not exist");
        assert!(!self.script_path().exists(), "deploy.sh should not exist");
    }
}
