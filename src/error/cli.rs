//! Command-line usage errors

use super::RepogenError;

/// Creates an unsupported shell error
pub fn unsupported_shell(shell: impl Into<String>) -> RepogenError {
    RepogenError::UnsupportedShell {
        shell: shell.into(),
    }
}
