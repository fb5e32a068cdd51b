//! Bundle data model
//!
//! A bundle maps derived keys to `{path, content}` entries. Keys are kept sorted so
//! every regeneration of the same tree produces the same document.

pub mod codec;


use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::common::path_key::derive_key;
use crate::error::{BundlerError, Result, bundle as bundle_error};

/// A configuration file found during discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Path relative to the project root, `/`-separated
    pub path: String,
    /// Raw text as read from disk
    pub content: String,
}

/// One record of a bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub path: String,
    pub content: String,
}

impl BundleEntry {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Content as written back to disk: trailing whitespace trimmed, one trailing newline
    pub fn normalized_content(&self) -> String {
        let mut text = self.content.trim_end().to_string();
        text.push('\n');
        text
    }
}

impl From<SourceDocument> for BundleEntry {
    fn from(doc: SourceDocument) -> Self {
        Self {
            path: doc.path,
            content: doc.content,
        }
    }
}

/// A record as found in a bundle document; hand edits may leave fields out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub path: Option<String>,
    pub content: Option<String>,
}

impl RawEntry {
    /// Turn the record into an entry, or an `InvalidEntry` error naming what is missing
    pub fn validate(self, key: &str) -> Result<BundleEntry> {
        match (self.path, self.content) {
            (Some(path), Some(content)) => Ok(BundleEntry { path, content }),
            (None, Some(_)) => Err(bundle_error::invalid_entry(key, "missing path")),
            (Some(_), None) => Err(bundle_error::invalid_entry(key, "missing content")),
            (None, None) => Err(bundle_error::invalid_entry(key, "missing path and content")),
        }
    }
}

impl From<BundleEntry> for RawEntry {
    fn from(entry: BundleEntry) -> Self {
        Self {
            path: Some(entry.path),
            content: Some(entry.content),
        }
    }
}

/// Result of inserting a document into a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
    Unchanged,
}

/// Sorted mapping of keys to entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: BTreeMap<String, BundleEntry>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry under `key`, replacing whatever was there
    pub fn insert(&mut self, key: impl Into<String>, entry: BundleEntry) -> Option<BundleEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// Insert a discovered document under its derived key (last write wins)
    pub fn upsert_document(&mut self, doc: SourceDocument) -> Upsert {
        let key = derive_key(&doc.path);
        let entry = BundleEntry::from(doc);
        let outcome = match self.entries.get(&key) {
            None => Upsert::Added,
            Some(existing) if *existing == entry => Upsert::Unchanged,
            Some(existing) => {
                if existing.path != entry.path {
                    tracing::warn!(
                        "Key '{}' is shared by '{}' and '{}'; keeping '{}'",
                        key,
                        existing.path,
                        entry.path,
                        entry.path
                    );
                }
                Upsert::Updated
            }
        };
        self.entries.insert(key, entry);
        outcome
    }

    pub fn get(&self, key: &str) -> Option<&BundleEntry> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, BundleEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Bundle {
    type Item = (&'a String, &'a BundleEntry);
    type IntoIter = btree_map::Iter<'a, String, BundleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, BundleEntry)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, BundleEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Bundle document as parsed, before entries are validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBundle {
    pub records: BTreeMap<String, RawEntry>,
}

impl ParsedBundle {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Split into the valid entries and one `InvalidEntry` error per unusable record
    pub fn into_bundle(self) -> (Bundle, Vec<BundlerError>) {
        let mut bundle = Bundle::new();
        let mut invalid = Vec::new();
        for (key, record) in self.records {
            match record.validate(&key) {
                Ok(entry) => {
                    bundle.insert(key, entry);
                }
                Err(e) => invalid.push(e),
            }
        }
        (bundle, invalid)
    }
}

impl From<&Bundle> for ParsedBundle {
    fn from(bundle: &Bundle) -> Self {
        Self {
            records: bundle
                .iter()
                .map(|(key, entry)| (key.clone(), RawEntry::from(entry.clone())))
                .collect(),
        }
    }
}
