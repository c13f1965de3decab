//! Template loading errors

use super::RepogenError;

/// Creates a template read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> RepogenError {
    RepogenError::TemplateReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
