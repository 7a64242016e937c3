//! Test support utilities for secretbridge integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The preferences file lives inside `dir`, passed to the binary through
/// the config env var, so tests can run in parallel.
pub struct Test {
    /// Temporary directory for payloads and the preferences file
    pub dir: TempDir,
}

impl Test {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Path of the preferences file used by commands.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("secret-editor").join("config.json")
    }

    /// Write a payload file and return its path as a string.
    pub fn payload(&self, name: &str, contents: &str) -> String {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write payload");
        path.to_string_lossy().to_string()
    }
}
