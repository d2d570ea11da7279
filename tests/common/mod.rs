//! Shared testing utilities for scaffolint CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use scaffolint::domain::{EXPECTED_DIRECTORIES, EXPECTED_FILES};

/// Testing harness providing an isolated environment for CLI exercises.
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

    /// Path to the repository directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `scaffolint` binary within the
    /// default repository directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `scaffolint` binary within a
    /// custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("scaffolint").expect("Failed to locate scaffolint binary");
        cmd.current_dir(dir.as_ref());
        cmd
    }

    /// Populate the work directory with every expected directory and file.
    pub fn create_full_scaffold(&self) {
        self.create_full_scaffold_in(self.work_dir());
    }

    /// Populate an arbitrary directory with every expected directory and file.
    pub fn create_full_scaffold_in(&self, dir: &Path) {
        for relative in EXPECTED_DIRECTORIES {
            fs::create_dir_all(dir.join(relative)).expect("Failed to create scaffold directory");
        }
        for relative in EXPECTED_FILES {
            fs::write(dir.join(relative), "").expect("Failed to create scaffold file");
        }
    }

    /// Remove a single file from the work directory.
    pub fn remove_file(&self, relative: &str) {
        fs::remove_file(self.work_dir.join(relative)).expect("Failed to remove scaffold file");
    }

    /// Remove a directory tree from the work directory.
    pub fn remove_dir(&self, relative: &str) {
        fs::remove_dir_all(self.work_dir.join(relative))
            .expect("Failed to remove scaffold directory");
    }
}
