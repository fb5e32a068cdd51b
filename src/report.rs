//! Outcomes of engine operations
//!
//! Per-file failures never abort a batch; they are collected here so the caller can
//! print them after the operation finishes.

use std::path::PathBuf;

use crate::error::BundlerError;

/// A file that could not be processed, with the reason
#[derive(Debug)]
pub struct FileFailure {
    pub path: String,
    pub error: BundlerError,
}

impl FileFailure {
    pub fn new(path: impl Into<String>, error: BundlerError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

/// How a bundle was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Fresh bundle replacing any previous one
    Overwrite,
    /// Discovered documents merged into the existing bundle
    Incremental,
}

/// Result of `generate` or `update`
#[derive(Debug)]
pub struct GenerateReport {
    pub mode: GenerateMode,
    pub bundle_path: PathBuf,
    /// Documents found by discovery
    pub discovered: usize,
    /// Entries in the written bundle
    pub total_entries: usize,
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
    /// Backup taken of the previous bundle
    pub backup: Option<PathBuf>,
    /// Documents that could not be read
    pub failed: Vec<FileFailure>,
    /// Existing records lacking `path` or `content`, carried over unchanged
    pub incomplete: Vec<BundlerError>,
    /// Why an incremental update fell back to a full generate
    pub fallback_reason: Option<String>,
}

impl GenerateReport {
    pub fn new(mode: GenerateMode, bundle_path: PathBuf, discovered: usize) -> Self {
        Self {
            mode,
            bundle_path,
            discovered,
            total_entries: 0,
            added: 0,
            updated: 0,
            unchanged: 0,
            backup: None,
            failed: Vec::new(),
            incomplete: Vec::new(),
            fallback_reason: None,
        }
    }
}

/// A source file rewritten from the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    /// The file did not exist before
    pub created: bool,
    pub backup: Option<PathBuf>,
}

/// Result of a completed write-back
#[derive(Debug, Default)]
pub struct UnbundleReport {
    pub written: Vec<WrittenFile>,
    /// Entries skipped as `InvalidEntry`
    pub skipped: Vec<BundlerError>,
    pub failed: Vec<FileFailure>,
}

impl UnbundleReport {
    pub fn written_count(&self) -> usize {
        self.written.len()
    }

    pub fn created_count(&self) -> usize {
        self.written.iter().filter(|w| w.created).count()
    }
}

/// Write-back either runs or is declined at the confirmation step
#[derive(Debug)]
pub enum UnbundleOutcome {
    Completed(UnbundleReport),
    Cancelled,
}

/// Result of copying a list of files into a destination root
#[derive(Debug, Default)]
pub struct TreeCopyReport {
    pub copied: usize,
    pub failed: Vec<FileFailure>,
}

/// Result of a full-tree backup
#[derive(Debug)]
pub struct TreeBackupReport {
    pub directory: PathBuf,
    pub copied: usize,
    pub failed: Vec<FileFailure>,
}

/// Result of purging the backup store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeOutcome {
    Purged { path: PathBuf },
    NothingToPurge,
    Cancelled,
}
