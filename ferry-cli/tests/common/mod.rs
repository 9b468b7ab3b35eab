//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated cloud container and config directory.
///
/// Commands created through [`TestEnv::command`] point both global
/// directory flags into the temporary directory, so tests never touch
/// the host configuration or cloud storage.
pub struct TestEnv {
    /// Temporary directory (kept alive for the test duration).
    pub temp_dir: TempDir,
}

impl TestEnv {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join("container"))
            .expect("Failed to create container dir");
        fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config dir");
        Self { temp_dir }
    }

    /// Create a bare command without any global flags.
    pub fn command_bare(&self) -> Command {
        Command::cargo_bin("ferry").expect("Failed to find ferry binary")
    }

    /// Create a command isolated from the host configuration.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--cloud-container").arg(self.container_dir());
        cmd.arg("--config-dir").arg(self.config_dir());
        cmd
    }

    /// The isolated cloud storage container directory.
    pub fn container_dir(&self) -> PathBuf {
        self.temp_dir.path().join("container")
    }

    /// The isolated configuration directory.
    pub fn config_dir(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Root of the temporary directory.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a synced file under the container.
    ///
    /// `relative` is joined onto the container, so
    /// `add_synced_file("OneDrive-Contoso/Documents/Q1.docx")` creates the
    /// provider root, its intermediate directories, and the file itself.
    #[allow(dead_code)]
    pub fn add_synced_file(&self, relative: &str) -> PathBuf {
        let path = self.container_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, b"synced").expect("Failed to write synced file");
        path
    }

    /// Create a plain directory under the temporary root.
    #[allow(dead_code)]
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
