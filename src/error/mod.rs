//! Error types and handling for confbundle
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructor helpers are organized into sub-modules by error domain:
//! - [`bundle`]: Bundle document errors
//! - [`config`]: Configuration errors
//! - [`fs`]: File system errors

pub mod bundle;
pub mod config;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for confbundle operations
#[derive(Error, Diagnostic, Debug)]
pub enum BundlerError {
    // Discovery errors
    #[error("No tracked documents found under '{root}'")]
    #[diagnostic(
        code(confbundle::discovery::empty),
        help("Check the source directory and the tracked extensions in confbundle.yaml")
    )]
    DiscoveryEmpty { root: String },

    // Bundle errors
    #[error("Bundle not found: {path}")]
    #[diagnostic(
        code(confbundle::bundle::not_found),
        help("Run 'confbundle generate' or 'confbundle update' to create it")
    )]
    BundleNotFound { path: String },

    #[error("Bundle '{path}' has no entries")]
    #[diagnostic(code(confbundle::bundle::empty))]
    BundleEmpty { path: String },

    #[error("Malformed bundle '{path}': {reason}")]
    #[diagnostic(
        code(confbundle::bundle::malformed),
        help("The bundle must be a mapping of keys to {{path, content}} records")
    )]
    MalformedBundle { path: String, reason: String },

    #[error("Invalid entry '{key}': {reason}")]
    #[diagnostic(code(confbundle::bundle::invalid_entry))]
    InvalidEntry { key: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(confbundle::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(confbundle::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to copy '{from}' to '{to}': {reason}")]
    #[diagnostic(code(confbundle::fs::copy_failed))]
    FileCopyFailed {
        from: String,
        to: String,
        reason: String,
    },

    #[error("Failed to create directory: {path}: {reason}")]
    #[diagnostic(code(confbundle::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to remove directory: {path}: {reason}")]
    #[diagnostic(code(confbundle::fs::dir_remove_failed))]
    DirRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(confbundle::fs::io_error))]
    IoError { message: String },

    // Backup errors
    #[error("Failed to back up '{path}': {reason}")]
    #[diagnostic(
        code(confbundle::backup::failed),
        help("Check that the backup directory is writable")
    )]
    BackupFailed { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(confbundle::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(confbundle::config::invalid))]
    ConfigInvalid { message: String },

    // Interactive errors
    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(confbundle::prompt::failed))]
    PromptFailed { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(confbundle::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },
}

impl BundlerError {
    /// Whether this error only means "nothing to do" rather than a failure
    pub fn is_notice(&self) -> bool {
        matches!(
            self,
            BundlerError::DiscoveryEmpty { .. } | BundlerError::BundleEmpty { .. }
        )
    }
}

impl From<std::io::Error> for BundlerError {
    fn from(err: std::io::Error) -> Self {
        BundlerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for BundlerError {
    fn from(err: inquire::InquireError) -> Self {
        BundlerError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, BundlerError>;
