//! Write-back of bundle entries to their source files

use super::BundleEngine;
use crate::bundle::BundleEntry;
use crate::common::clock::Clock;
use crate::common::path_key::is_contained;
use crate::error::{Result, bundle as bundle_error};
use crate::filesystem::FileSystem;
use crate::prompt::{Confirmation, Prompt};
use crate::report::{FileFailure, UnbundleOutcome, UnbundleReport, WrittenFile};

impl<F: FileSystem, C: Clock> BundleEngine<F, C> {
    /// Write every bundle entry back to its path after `prompt` agrees
    ///
    /// Entries without `path` or `content`, or whose path leaves the project root, are
    /// skipped. Existing targets are backed up first; a target whose backup fails is not
    /// written. Content is stored with trailing whitespace trimmed and one final newline.
    pub fn unbundle(&self, prompt: &mut dyn Prompt) -> Result<UnbundleOutcome> {
        let parsed = self.load_bundle()?;
        let bundle_name = self.display_path(&self.layout.bundle_path);
        if parsed.is_empty() {
            return Err(bundle_error::empty(bundle_name));
        }

        let question = Confirmation::yes_no(format!(
            "Overwrite or create {} source file(s) from '{}'?",
            parsed.len(),
            bundle_name
        ));
        if !prompt.confirm(&question)? {
            return Ok(UnbundleOutcome::Cancelled);
        }

        let mut report = UnbundleReport::default();
        for (key, record) in parsed.records {
            let entry = match record.validate(&key) {
                Ok(entry) if is_contained(&entry.path) => entry,
                Ok(entry) => {
                    let error = bundle_error::invalid_entry(
                        &key,
                        format!("path '{}' leaves the project root", entry.path),
                    );
                    tracing::warn!("Skipping {}", error);
                    report.skipped.push(error);
                    continue;
                }
                Err(error) => {
                    tracing::warn!("Skipping {}", error);
                    report.skipped.push(error);
                    continue;
                }
            };

            match self.write_entry(&entry) {
                Ok(written) => report.written.push(written),
                Err(error) => {
                    tracing::warn!("Failed to write '{}': {}", entry.path, error);
                    report.failed.push(FileFailure::new(entry.path, error));
                }
            }
        }

        tracing::info!(
            "Wrote {} file(s), skipped {}, failed {}",
            report.written_count(),
            report.skipped.len(),
            report.failed.len()
        );
        Ok(UnbundleOutcome::Completed(report))
    }

    fn write_entry(&self, entry: &BundleEntry) -> Result<WrittenFile> {
        let target = self.layout.root.join(&entry.path);
        if let Some(parent) = target.parent() {
            self.fs.make_dirs(parent)?;
        }

        let created = !self.fs.exists(&target);
        let backup = if created {
            None
        } else {
            Some(self.backups().backup_file(&target)?)
        };

        self.fs.write_text(&target, &entry.normalized_content())?;
        tracing::debug!("Updated {}", entry.path);

        Ok(WrittenFile {
            path: target,
            created,
            backup,
        })
    }
}
