//! Error types and handling for repogen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`generator`]: Model lookup and name collision errors
//! - [`template`]: Template loading errors
//! - [`config`]: Configuration errors
//! - [`cli`]: Command-line usage errors
//! - [`fs`]: File system errors

pub mod cli;
pub mod config;
pub mod fs;
pub mod generator;
pub mod template;

pub use cli::unsupported_shell;
pub use config::{
    invalid_key as config_invalid_key, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
pub use fs::{directory_create_failed, io_error, write_failed as file_write_failed};
pub use generator::{already_exists, invalid_model_name, model_not_found};
pub use template::read_failed as template_read_failed;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for repogen operations
#[derive(Error, Diagnostic, Debug)]
pub enum RepogenError {
    // Generator errors
    #[error("{name} does not exist.")]
    #[diagnostic(
        code(repogen::model::not_found),
        help("Create the model first, or check `base_application_namespace` and `model_base_path`")
    )]
    ModelNotFound { name: String },

    #[error("{name} already exists.")]
    #[diagnostic(
        code(repogen::generator::already_exists),
        help("Remove the existing file or pick a different model name")
    )]
    AlreadyExists { name: String },

    #[error("Invalid model name '{name}': {reason}")]
    #[diagnostic(
        code(repogen::model::invalid_name),
        help("Model names may contain letters, digits, '_', '-' and spaces, e.g. `user` or `TestModel`")
    )]
    InvalidModelName { name: String, reason: String },

    // Template errors
    #[error("Failed to read template: {path}: {reason}")]
    #[diagnostic(code(repogen::template::read_failed))]
    TemplateReadFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(repogen::config::not_found),
        help("Run 'repogen init' to publish the default configuration")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(
        code(repogen::config::parse_failed),
        help("Keys are snake_case (camelCase is accepted); `repogen init --force` writes a fresh file")
    )]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(
        code(repogen::config::invalid),
        help("Paths are relative to `--path` and use '/'; namespaces use '\\'")
    )]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(repogen::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // CLI errors
    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(repogen::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(repogen::fs::create_dir_failed))]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(repogen::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(repogen::fs::io_error))]
    IoError { message: String },
}

impl RepogenError {
    /// Whether this error came from the file system rather than a precondition
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            RepogenError::DirectoryCreateFailed { .. }
                | RepogenError::FileWriteFailed { .. }
                | RepogenError::IoError { .. }
        )
    }
}

impl From<std::io::Error> for RepogenError {
    fn from(err: std::io::Error) -> Self {
        RepogenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for RepogenError {
    fn from(err: serde_yaml::Error) -> Self {
        RepogenError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepogenError {
    fn from(err: serde_json::Error) -> Self {
        RepogenError::IoError {
            message: format!("Failed to serialize output: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RepogenError>;
