//! File system errors

use super::BundlerError;

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file copy failed error
pub fn copy_failed(
    from: impl Into<String>,
    to: impl Into<String>,
    reason: impl Into<String>,
) -> BundlerError {
    BundlerError::FileCopyFailed {
        from: from.into(),
        to: to.into(),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn dir_create_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::DirCreateFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a directory removal failed error
pub fn dir_remove_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::DirRemoveFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> BundlerError {
    BundlerError::IoError {
        message: message.into(),
    }
}
