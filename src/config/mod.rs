//! Configuration loading for repogen
//!
//! The generator reads a single `repositories.yaml` file. It is looked up in
//! the workspace root first and then in `<workspace>/config/`; when neither
//! exists the built-in defaults apply.

pub mod repositories;

pub use repositories::GeneratorConfig;

use std::path::{Path, PathBuf};

use crate::error::{self, RepogenError, Result};

/// Configuration file name
pub const CONFIG_FILE: &str = "repositories.yaml";

/// Directory searched after the workspace root
pub const CONFIG_DIR: &str = "config";

/// Find the configuration file for a workspace, if any
pub fn discover(workspace: &Path) -> Option<PathBuf> {
    [
        workspace.join(CONFIG_FILE),
        workspace.join(CONFIG_DIR).join(CONFIG_FILE),
    ]
    .into_iter()
    .find(|candidate| candidate.is_file())
}

/// Load and validate configuration from an explicit file
pub fn load_from(path: &Path) -> Result<GeneratorConfig> {
    if !path.exists() {
        return Err(error::config_not_found(path));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| error::config_read_failed(path, e.to_string()))?;

    let config = GeneratorConfig::from_yaml(&content).map_err(|e| {
        let reason = match e {
            RepogenError::ConfigParseFailed { reason, .. } => reason,
            other => other.to_string(),
        };
        error::config_parse_failed(path, reason)
    })?;
    config.validate()?;

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Load configuration for a workspace
///
/// An explicit path must exist. Without one, the discovered file is used,
/// falling back to defaults.
pub fn load(workspace: &Path, explicit: Option<&Path>) -> Result<GeneratorConfig> {
    if let Some(path) = explicit {
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            workspace.join(path)
        };
        return load_from(&path);
    }

    match discover(workspace) {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!(workspace = %workspace.display(), "no configuration file, using defaults");
            Ok(GeneratorConfig::default())
        }
    }
}
