//! File system access used by the bundle engine
//!
//! The engine only talks to a [`FileSystem`]; [`OsFileSystem`] is the real
//! implementation and unit tests substitute an in-memory one.

#[cfg(test)]
pub mod memory;

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Result, fs as fs_error};

/// Operations the engine needs from a file system
pub trait FileSystem {
    /// Recursively list files under `root` whose name ends with `.<ext>` for one of `extensions`
    ///
    /// A missing root yields an empty list. Order is stable (sorted by file name per directory).
    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>>;

    fn read_text(&self, path: &Path) -> Result<String>;

    fn write_text(&self, path: &Path, text: &str) -> Result<()>;

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Create `path` and all of its parents; succeeds if it already exists
    fn make_dirs(&self, path: &Path) -> Result<()>;

    fn remove_dir_all(&self, path: &Path) -> Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        (**self).list_files(root, extensions)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        (**self).read_text(path)
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        (**self).write_text(path, text)
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        (**self).copy_file(src, dst)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn make_dirs(&self, path: &Path) -> Result<()> {
        (**self).make_dirs(path)
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        (**self).remove_dir_all(path)
    }
}

/// Whether a file name carries one of the tracked extensions
pub fn has_tracked_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|ext| name.strip_suffix(ext.as_str()).is_some_and(|stem| stem.ends_with('.')))
}

/// The real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && has_tracked_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)
            .map_err(|e| fs_error::write_failed(path.display().to_string(), e.to_string()))
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        fs::copy(src, dst).map(|_| ()).map_err(|e| {
            fs_error::copy_failed(
                src.display().to_string(),
                dst.display().to_string(),
                e.to_string(),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn make_dirs(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .map_err(|e| fs_error::dir_create_failed(path.display().to_string(), e.to_string()))
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        fs::remove_dir_all(path)
            .map_err(|e| fs_error::dir_remove_failed(path.display().to_string(), e.to_string()))
    }
}
