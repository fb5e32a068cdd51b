//! Configuration errors

use super::BundlerError;

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> BundlerError {
    BundlerError::ConfigInvalid {
        message: message.into(),
    }
}
