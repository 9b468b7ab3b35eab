//! Common test utilities for integration tests.
//!
//! This module provides fixture helpers for building fake cloud-storage
//! containers with sync roots and synced files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary cloud-storage container populated with sync roots.
///
/// The container directory is cleaned up when the fixture is dropped.
pub struct ContainerFixture {
    dir: TempDir,
}

#[allow(dead_code)]
impl ContainerFixture {
    /// Creates an empty container.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp container"),
        }
    }

    /// The container directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a sync root directory with the given name.
    pub fn add_root(&self, name: &str) -> PathBuf {
        let root = self.dir.path().join(name);
        fs::create_dir_all(&root).expect("create sync root");
        root
    }

    /// Creates a file (and its parent directories) below the container.
    pub fn add_file(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, b"fixture contents").expect("write fixture file");
        path
    }
}

impl Default for ContainerFixture {
    fn default() -> Self {
        Self::new()
    }
}
