//! Common test utilities for repogen integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;
use walkdir::WalkDir;

/// A test workspace laid out like an application source tree
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a model source file under `app/Models`
    #[allow(dead_code)]
    pub fn create_model(&self, class: &str) -> PathBuf {
        let rel = format!("app/Models/{class}.php");
        self.write_file(
            &rel,
            &format!("<?php\n\nnamespace App\\Models;\n\nclass {class} {{}}\n"),
        );
        self.path.join(rel)
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// All files under the workspace, relative and sorted
    #[allow(dead_code)]
    pub fn files(&self) -> Vec<PathBuf> {
        list_files(&self.path)
    }

    /// repogen command running against this workspace
    #[allow(dead_code)]
    pub fn repogen_cmd(&self) -> Command {
        let mut cmd = repogen_cmd();
        cmd.current_dir(&self.path)
            .env_remove("REPOGEN_WORKSPACE")
            .env_remove("REPOGEN_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Get the repogen binary as a command
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated, dead_code)]
pub fn repogen_cmd() -> Command {
    Command::cargo_bin("repogen").expect("Failed to find repogen binary")
}

/// List files below `root`, relative and sorted
#[allow(dead_code)]
pub fn list_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect();
    files.sort();
    files
}
