//! File system errors

use super::RepogenError;

/// Creates a directory creation failed error
pub fn directory_create_failed(path: impl Into<String>, reason: impl Into<String>) -> RepogenError {
    RepogenError::DirectoryCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> RepogenError {
    RepogenError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RepogenError {
    RepogenError::IoError {
        message: message.into(),
    }
}
