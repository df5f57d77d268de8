//! Common test utilities for confcheck integration tests

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new, empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project populated from a fixture directory
    pub fn from_fixture(fixture_name: &str) -> Self {
        let workspace = Self::new();
        copy_dir_recursive(&fixture_path(fixture_name), &workspace.path)
            .expect("Failed to copy fixture");
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Replace `from` with `to` in a project file
    pub fn edit_file(&self, path: &str, from: &str, to: &str) {
        let content = self.read_file(path);
        assert!(content.contains(from), "{path} does not contain {from:?}");
        self.write_file(path, &content.replacen(from, to, 1));
    }

    /// Remove a file from the project
    pub fn remove_file(&self, path: &str) {
        std::fs::remove_file(self.path.join(path)).expect("Failed to remove file");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Path to a fixture directory under tests/common/fixtures
pub fn fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("common")
        .join("fixtures")
        .join(fixture_name)
}

/// confcheck binary with a clean environment
#[allow(deprecated)]
pub fn confcheck_cmd() -> Command {
    let mut cmd = Command::cargo_bin("confcheck").expect("confcheck binary should be built");
    cmd.env_remove("RULES_FILE")
        .env_remove("CONFCHECK_ROOT")
        .env_remove("CONFCHECK_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// confcheck binary running with `root` as its working directory
pub fn confcheck_cmd_for_workspace(root: &Path) -> Command {
    let mut cmd = confcheck_cmd();
    cmd.current_dir(root);
    cmd
}

/// Recursively copy a directory
fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    if !dst.exists() {
        std::fs::create_dir_all(dst)?;
    }

    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
