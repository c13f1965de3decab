//! Configuration errors
//!
//! Constructors take the offending file as a path so every message names
//! the `repositories.yaml` that was actually read.

use std::path::Path;

use super::RepogenError;

fn shown(path: &Path) -> String {
    path.display().to_string()
}

/// An explicitly named configuration file that is not there
pub fn not_found(path: impl AsRef<Path>) -> RepogenError {
    RepogenError::ConfigNotFound {
        path: shown(path.as_ref()),
    }
}

/// A configuration file that exists but could not be read
pub fn read_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> RepogenError {
    RepogenError::ConfigReadFailed {
        path: shown(path.as_ref()),
        reason: reason.into(),
    }
}

/// A configuration file that is not valid YAML for [`GeneratorConfig`](crate::config::GeneratorConfig)
pub fn parse_failed(path: impl AsRef<Path>, reason: impl Into<String>) -> RepogenError {
    RepogenError::ConfigParseFailed {
        path: shown(path.as_ref()),
        reason: reason.into(),
    }
}

/// A setting whose value the generator cannot work with
pub fn invalid_key(key: &str, problem: impl std::fmt::Display) -> RepogenError {
    RepogenError::ConfigInvalid {
        message: format!("{key} {problem}"),
    }
}
