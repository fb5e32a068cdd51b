//! Bulk backup and purge of the backup store

use super::BundleEngine;
use crate::backup::{PurgeToken, TreeFile};
use crate::common::clock::Clock;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::prompt::{Confirmation, Prompt};
use crate::report::{PurgeOutcome, TreeBackupReport};

impl<F: FileSystem, C: Clock> BundleEngine<F, C> {
    /// Copy every tracked document into a new snapshot directory
    ///
    /// Paths inside the snapshot are relative to the source directory.
    pub fn backup_all(&self) -> Result<TreeBackupReport> {
        let files = self.discover_required()?;
        let tree: Vec<TreeFile> = files
            .into_iter()
            .map(|source| {
                let relative = source
                    .strip_prefix(&self.layout.source_dir)
                    .map(std::path::Path::to_path_buf)
                    .unwrap_or_else(|_| source.file_name().map(Into::into).unwrap_or_default());
                TreeFile { source, relative }
            })
            .collect();

        self.backups().backup_tree(&tree)
    }

    /// Delete the backup store after a typed confirmation
    pub fn purge_backups(&self, prompt: &mut dyn Prompt) -> Result<PurgeOutcome> {
        let store = &self.layout.backup_dir;
        if !self.fs.is_dir(store) {
            return Ok(PurgeOutcome::NothingToPurge);
        }

        let question = Confirmation::typed(format!(
            "Permanently delete '{}' and everything in it?",
            self.display_path(store)
        ));
        let Some(token) = PurgeToken::from_confirmation(prompt.confirm(&question)?) else {
            return Ok(PurgeOutcome::Cancelled);
        };

        self.backups().purge_all(token)
    }
}
