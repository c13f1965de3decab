//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{self, Result};

/// Resolve workspace path from optional argument
///
/// If a workspace path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_workspace_path(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(path) => Ok(path),
        None => std::env::current_dir()
            .map_err(|e| error::io_error(format!("Failed to get current directory: {e}"))),
    }
}

/// Resolve `path` against the workspace unless it is already absolute
pub fn resolve_in_workspace(workspace: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        workspace.join(path)
    }
}
