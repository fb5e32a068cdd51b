//! Backup store management
//!
//! Two kinds of records live in the store:
//! - `<relative path with separators replaced>.<YYYYmmdd_HHMMSS>.bak` for single files
//! - `<prefix>_<YYYYmmdd_HHMMSS>/` holding a full copy of the source tree
//!
//! Names have second resolution. Two backups of the same file within one second share
//! a name and the later one overwrites the earlier.


use std::path::{Path, PathBuf};

use crate::common::clock::Clock;
use crate::common::path_key::{backup_name, relative_to, to_slash};
use crate::config::Layout;
use crate::error::{BundlerError, Result, bundle as bundle_error};
use crate::filesystem::FileSystem;
use crate::report::{FileFailure, PurgeOutcome, TreeBackupReport, TreeCopyReport};

/// A file to copy and where it goes relative to the destination root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeFile {
    pub source: PathBuf,
    pub relative: PathBuf,
}

/// Proof that the user agreed to delete the whole backup store
#[derive(Debug)]
pub struct PurgeToken(());

impl PurgeToken {
    /// Only an affirmative answer yields a token
    pub fn from_confirmation(confirmed: bool) -> Option<Self> {
        confirmed.then_some(Self(()))
    }
}

/// Creates and removes backup records for one project layout
pub struct BackupManager<'a, F: FileSystem, C: Clock> {
    fs: &'a F,
    clock: &'a C,
    layout: &'a Layout,
}

impl<'a, F: FileSystem, C: Clock> BackupManager<'a, F, C> {
    pub fn new(fs: &'a F, clock: &'a C, layout: &'a Layout) -> Self {
        Self { fs, clock, layout }
    }

    /// Directory holding every backup record
    pub fn store(&self) -> &Path {
        &self.layout.backup_dir
    }

    /// Copy `path` into the store under a timestamped name
    ///
    /// Returns the location of the copy. On error no backup exists and the caller
    /// decides whether the guarded write may go ahead.
    pub fn backup_file(&self, path: &Path) -> Result<PathBuf> {
        let relative = relative_to(&self.layout.root, path);
        let name = format!(
            "{}.{}.bak",
            backup_name(&relative),
            self.clock.backup_stamp()
        );
        let destination = self.store().join(name);

        self.fs
            .make_dirs(self.store())
            .and_then(|()| self.fs.copy_file(path, &destination))
            .map_err(|e| backup_failed(&relative, &e))?;

        tracing::info!("Backed up '{}' to '{}'", relative, destination.display());
        Ok(destination)
    }

    /// Snapshot `files` into a new `<prefix>_<timestamp>` directory
    ///
    /// Failing to create the snapshot directory aborts; individual copy failures are
    /// reported and skipped.
    pub fn backup_tree(&self, files: &[TreeFile]) -> Result<TreeBackupReport> {
        if files.is_empty() {
            return Err(bundle_error::discovery_empty(
                self.layout.source_dir.display().to_string(),
            ));
        }

        let directory = self.store().join(format!(
            "{}_{}",
            self.layout.tree_backup_prefix,
            self.clock.backup_stamp()
        ));
        self.fs.make_dirs(&directory)?;

        let copy = copy_tree(self.fs, files, &directory);
        tracing::info!(
            "Copied {} of {} files into '{}'",
            copy.copied,
            files.len(),
            directory.display()
        );

        Ok(TreeBackupReport {
            directory,
            copied: copy.copied,
            failed: copy.failed,
        })
    }

    /// Remove the whole backup store
    pub fn purge_all(&self, _token: PurgeToken) -> Result<PurgeOutcome> {
        let store = self.store();
        if !self.fs.is_dir(store) {
            return Ok(PurgeOutcome::NothingToPurge);
        }

        self.fs.remove_dir_all(store)?;
        tracing::info!("Removed backup store '{}'", store.display());
        Ok(PurgeOutcome::Purged {
            path: store.to_path_buf(),
        })
    }
}

/// Copy every file to `dest_root/relative`, creating parent directories as needed
pub fn copy_tree<F: FileSystem>(fs: &F, files: &[TreeFile], dest_root: &Path) -> TreeCopyReport {
    let mut report = TreeCopyReport::default();

    for file in files {
        let destination = dest_root.join(&file.relative);
        let result = match destination.parent() {
            Some(parent) => fs.make_dirs(parent),
            None => Ok(()),
        }
        .and_then(|()| fs.copy_file(&file.source, &destination));

        match result {
            Ok(()) => report.copied += 1,
            Err(e) => {
                tracing::warn!("Failed to back up '{}': {}", file.source.display(), e);
                report
                    .failed
                    .push(FileFailure::new(to_slash(&file.relative), e));
            }
        }
    }

    report
}

fn backup_failed(relative: &str, cause: &BundlerError) -> BundlerError {
    BundlerError::BackupFailed {
        path: relative.to_string(),
        reason: cause.to_string(),
    }
}
