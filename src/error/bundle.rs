//! Bundle document errors

use super::BundlerError;

/// Creates a discovery empty notice
pub fn discovery_empty(root: impl Into<String>) -> BundlerError {
    BundlerError::DiscoveryEmpty { root: root.into() }
}

/// Creates a bundle not found error
pub fn not_found(path: impl Into<String>) -> BundlerError {
    BundlerError::BundleNotFound { path: path.into() }
}

/// Creates an empty bundle notice
pub fn empty(path: impl Into<String>) -> BundlerError {
    BundlerError::BundleEmpty { path: path.into() }
}

/// Creates a malformed bundle error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::MalformedBundle {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid entry error
pub fn invalid_entry(key: impl Into<String>, reason: impl Into<String>) -> BundlerError {
    BundlerError::InvalidEntry {
        key: key.into(),
        reason: reason.into(),
    }
}
