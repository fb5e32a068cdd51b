//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::BundlerConfig;
use crate::engine::BundleEngine;
use crate::error::{Result, fs as fs_error};

/// Resolve the project root from the optional `--root` argument
///
/// Without one, the current directory is used. Existing roots are canonicalized so
/// messages show stable paths.
pub fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    let root = match root {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {}", e)))?,
    };
    Ok(dunce::canonicalize(&root).unwrap_or(root))
}

/// Load configuration for the project and build an engine on the real file system
pub fn open_engine(root: Option<PathBuf>, config: Option<&Path>) -> Result<BundleEngine> {
    let root = resolve_root(root)?;
    let layout = BundlerConfig::load(&root, config)?.resolve(&root)?;
    tracing::debug!(
        "Project root '{}', source '{}', bundle '{}'",
        layout.root.display(),
        layout.source_dir.display(),
        layout.bundle_path.display()
    );
    Ok(BundleEngine::open(layout))
}
