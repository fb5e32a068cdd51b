//! Full and incremental bundle generation

use std::path::PathBuf;

use super::BundleEngine;
use crate::bundle::{Bundle, ParsedBundle, Upsert, codec};
use crate::common::clock::Clock;
use crate::error::Result;
use crate::filesystem::FileSystem;
use crate::report::{GenerateMode, GenerateReport};

impl<F: FileSystem, C: Clock> BundleEngine<F, C> {
    /// Build a fresh bundle from every tracked document
    ///
    /// An existing bundle is backed up before it is replaced; if that backup fails the
    /// bundle is left untouched.
    pub fn generate(&self) -> Result<GenerateReport> {
        let files = self.discover_required()?;
        self.generate_from(&files)
    }

    /// Merge tracked documents into the existing bundle
    ///
    /// New keys are added, existing keys get fresh content and keys no longer
    /// discovered stay as they are. Records missing `path` or `content` are written
    /// back as found and listed in the report. Without a bundle, or with one that
    /// cannot be parsed, this falls back to [`generate`](Self::generate). The bundle
    /// is not backed up before an incremental write.
    pub fn update(&self) -> Result<GenerateReport> {
        if !self.fs.exists(&self.layout.bundle_path) {
            tracing::info!(
                "No bundle at '{}' yet, generating a new one",
                self.display_path(&self.layout.bundle_path)
            );
            return self.generate();
        }

        let files = self.discover_required()?;

        let existing = match self.load_bundle() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Cannot merge into existing bundle ({}), regenerating", e);
                let mut report = self.generate_from(&files)?;
                report.fallback_reason = Some(e.to_string());
                return Ok(report);
            }
        };

        let mut report = GenerateReport::new(
            GenerateMode::Incremental,
            self.layout.bundle_path.clone(),
            files.len(),
        );

        let mut bundle = Bundle::new();
        let mut incomplete = Vec::new();
        for (key, record) in existing.records {
            match record.clone().validate(&key) {
                Ok(entry) => {
                    bundle.insert(key, entry);
                }
                Err(e) => {
                    tracing::warn!("Keeping incomplete record as is: {}", e);
                    report.incomplete.push(e);
                    incomplete.push((key, record));
                }
            }
        }

        self.merge_documents(&mut bundle, &files, &mut report);

        let mut records = ParsedBundle::from(&bundle);
        for (key, record) in incomplete {
            records.records.entry(key).or_insert(record);
        }
        self.write_records(&records)?;
        report.total_entries = records.len();
        Ok(report)
    }

    fn generate_from(&self, files: &[PathBuf]) -> Result<GenerateReport> {
        let mut report = GenerateReport::new(
            GenerateMode::Overwrite,
            self.layout.bundle_path.clone(),
            files.len(),
        );

        if self.fs.exists(&self.layout.bundle_path) {
            report.backup = Some(self.backups().backup_file(&self.layout.bundle_path)?);
        }

        let mut bundle = Bundle::new();
        self.merge_documents(&mut bundle, files, &mut report);
        self.write_records(&ParsedBundle::from(&bundle))?;
        report.total_entries = bundle.len();
        Ok(report)
    }

    fn merge_documents(&self, bundle: &mut Bundle, files: &[PathBuf], report: &mut GenerateReport) {
        let (documents, failures) = self.read_documents(files);
        report.failed.extend(failures);

        for document in documents {
            match bundle.upsert_document(document) {
                Upsert::Added => report.added += 1,
                Upsert::Updated => report.updated += 1,
                Upsert::Unchanged => report.unchanged += 1,
            }
        }
    }

    fn write_records(&self, records: &ParsedBundle) -> Result<()> {
        let text =
            codec::serialize_records(records, &self.layout.banner, &self.clock.header_stamp());
        if let Some(parent) = self.layout.bundle_path.parent() {
            self.fs.make_dirs(parent)?;
        }
        self.fs.write_text(&self.layout.bundle_path, &text)?;
        tracing::info!(
            "Wrote {} entries to '{}'",
            records.len(),
            self.display_path(&self.layout.bundle_path)
        );
        Ok(())
    }
}
