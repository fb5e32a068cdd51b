//! Bundle engine
//!
//! Coordinates discovery, the bundle codec and the backup store:
//! - [`BundleEngine::generate`]: fresh bundle, previous one backed up first
//! - [`BundleEngine::update`]: merge discovered documents into the existing bundle
//! - [`BundleEngine::unbundle`]: write entries back to their source paths
//! - [`BundleEngine::backup_all`]: snapshot the whole source tree
//! - [`BundleEngine::purge_backups`]: delete the backup store
//!
//! Per-file failures are logged and collected in the returned report; only missing
//! preconditions (nothing discovered, no bundle, unparsable bundle) abort an operation.

mod generate;
mod maintenance;
mod unbundle;


use std::path::{Path, PathBuf};

use crate::backup::BackupManager;
use crate::bundle::{ParsedBundle, SourceDocument, codec};
use crate::common::clock::{Clock, SystemClock};
use crate::common::path_key::relative_to;
use crate::config::Layout;
use crate::error::{Result, bundle as bundle_error};
use crate::filesystem::{FileSystem, OsFileSystem};
use crate::report::FileFailure;

/// Bundle engine over a file system and a clock
#[derive(Debug)]
pub struct BundleEngine<F: FileSystem = OsFileSystem, C: Clock = SystemClock> {
    layout: Layout,
    fs: F,
    clock: C,
}

impl BundleEngine {
    /// Engine on the real file system and wall clock
    pub fn open(layout: Layout) -> Self {
        Self::new(layout, OsFileSystem, SystemClock)
    }
}

impl<F: FileSystem, C: Clock> BundleEngine<F, C> {
    pub fn new(layout: Layout, fs: F, clock: C) -> Self {
        Self { layout, fs, clock }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    fn backups(&self) -> BackupManager<'_, F, C> {
        BackupManager::new(&self.fs, &self.clock, &self.layout)
    }

    /// Tracked documents under the source directory, in stable order
    ///
    /// The bundle itself and anything inside the backup store are never tracked, even
    /// when they sit under the source directory.
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let source_dir = &self.layout.source_dir;
        if !self.fs.is_dir(source_dir) {
            tracing::warn!("Source directory '{}' not found", source_dir.display());
            return Ok(Vec::new());
        }

        let files: Vec<PathBuf> = self
            .fs
            .list_files(source_dir, &self.layout.extensions)?
            .into_iter()
            .filter(|path| {
                *path != self.layout.bundle_path && !path.starts_with(&self.layout.backup_dir)
            })
            .collect();

        tracing::debug!(
            "Discovered {} tracked documents under '{}'",
            files.len(),
            source_dir.display()
        );
        Ok(files)
    }

    /// Discovery that treats "nothing found" as an error
    fn discover_required(&self) -> Result<Vec<PathBuf>> {
        let files = self.discover()?;
        if files.is_empty() {
            return Err(bundle_error::discovery_empty(self.display_path(
                &self.layout.source_dir,
            )));
        }
        Ok(files)
    }

    /// Read discovered files; unreadable ones are reported and skipped
    fn read_documents(&self, files: &[PathBuf]) -> (Vec<SourceDocument>, Vec<FileFailure>) {
        let mut documents = Vec::with_capacity(files.len());
        let mut failures = Vec::new();

        for file in files {
            let path = relative_to(&self.layout.root, file);
            match self.fs.read_text(file) {
                Ok(content) => {
                    tracing::debug!("Processed {}", path);
                    documents.push(SourceDocument { path, content });
                }
                Err(e) => {
                    tracing::warn!("Skipping '{}': {}", path, e);
                    failures.push(FileFailure::new(path, e));
                }
            }
        }

        (documents, failures)
    }

    /// Read and parse the bundle document
    fn load_bundle(&self) -> Result<ParsedBundle> {
        let path = &self.layout.bundle_path;
        if !self.fs.exists(path) {
            return Err(bundle_error::not_found(self.display_path(path)));
        }
        let text = self.fs.read_text(path)?;
        codec::parse(&text, &self.display_path(path))
    }

    /// Path relative to the project root for messages
    fn display_path(&self, path: &Path) -> String {
        let relative = relative_to(&self.layout.root, path);
        if relative.is_empty() {
            ".".to_string()
        } else {
            relative
        }
    }
}
