//! Bundler configuration (confbundle.yaml)
//!
//! The configuration is an explicit value: it is loaded once, validated against
//! the project root, and handed to the engine as a [`Layout`] of absolute paths.

use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

use crate::error::{Result, config as config_error};

/// Configuration file looked up in the project root
pub const CONFIG_FILE: &str = "confbundle.yaml";

/// User-editable configuration, all paths relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BundlerConfig {
    /// Directory scanned for tracked documents
    pub source_dir: PathBuf,

    /// Backup store
    pub backup_dir: PathBuf,

    /// The bundle document
    pub bundle_file: PathBuf,

    /// Tracked extensions, without the leading dot
    pub extensions: Vec<String>,

    /// Name prefix of full-tree backup directories
    pub tree_backup_prefix: String,

    /// First header comment line of the bundle
    pub banner: String,
}

impl Default for BundlerConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("run"),
            backup_dir: PathBuf::from("backups"),
            bundle_file: PathBuf::from("configs_bundle.yaml"),
            extensions: vec!["yaml".to_string(), "yml".to_string()],
            tree_backup_prefix: "yaml_full_backup".to_string(),
            banner: "Configuration bundle (edit freely, then write back)".to_string(),
        }
    }
}

impl BundlerConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| config_error::parse_failed("<inline>", e.to_string()))
    }

    /// Load configuration for a project
    ///
    /// An explicit `config_path` must exist. Without one, `<root>/confbundle.yaml` is used
    /// when present and the defaults otherwise.
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let path = match config_path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = root.join(CONFIG_FILE);
                if !default_path.is_file() {
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| config_error::parse_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::BundlerError::ConfigParseFailed { reason, .. } => {
                config_error::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Validate the configuration and anchor it at `root`
    pub fn resolve(&self, root: &Path) -> Result<Layout> {
        ensure_relative("source_dir", &self.source_dir)?;
        ensure_relative("backup_dir", &self.backup_dir)?;
        ensure_relative("bundle_file", &self.bundle_file)?;

        if self.bundle_file.file_name().is_none() {
            return Err(config_error::invalid("bundle_file must name a file"));
        }
        if self.extensions.is_empty() {
            return Err(config_error::invalid("extensions must not be empty"));
        }
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']))
        {
            return Err(config_error::invalid(format!(
                "extension '{bad}' must be a bare suffix such as 'yaml'"
            )));
        }
        if self.tree_backup_prefix.is_empty() || self.tree_backup_prefix.contains(['/', '\\']) {
            return Err(config_error::invalid(
                "tree_backup_prefix must be a non-empty name without separators",
            ));
        }

        Ok(Layout {
            root: root.to_path_buf(),
            source_dir: root.join(&self.source_dir),
            backup_dir: root.join(&self.backup_dir),
            bundle_path: root.join(&self.bundle_file),
            extensions: self.extensions.clone(),
            tree_backup_prefix: self.tree_backup_prefix.clone(),
            banner: self.banner.clone(),
        })
    }
}

fn ensure_relative(field: &str, path: &Path) -> Result<()> {
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(config_error::invalid(format!(
            "{field} must be a relative path inside the project root, got '{}'",
            path.display()
        )));
    }
    Ok(())
}

/// Resolved, absolute locations the engine works with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub root: PathBuf,
    pub source_dir: PathBuf,
    pub backup_dir: PathBuf,
    pub bundle_path: PathBuf,
    pub extensions: Vec<String>,
    pub tree_backup_prefix: String,
    pub banner: String,
}

impl Layout {
    /// Default layout anchored at `root`
    pub fn with_defaults(root: &Path) -> Result<Self> {
        BundlerConfig::default().resolve(root)
    }
}
