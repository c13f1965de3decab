//! Model lookup and name collision errors

use super::RepogenError;

/// Creates a model not found error
pub fn model_not_found(name: impl Into<String>) -> RepogenError {
    RepogenError::ModelNotFound { name: name.into() }
}

/// Creates an already exists error
pub fn already_exists(name: impl Into<String>) -> RepogenError {
    RepogenError::AlreadyExists { name: name.into() }
}

/// Creates an invalid model name error
pub fn invalid_model_name(name: impl Into<String>, reason: impl Into<String>) -> RepogenError {
    RepogenError::InvalidModelName {
        name: name.into(),
        reason: reason.into(),
    }
}
