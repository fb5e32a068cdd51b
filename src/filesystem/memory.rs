//! In-memory file system for engine tests

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use super::{FileSystem, has_tracked_extension};
use crate::error::{Result, fs as fs_error};

/// File system kept entirely in memory, with injectable failures
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    unreadable: RefCell<BTreeSet<PathBuf>>,
    unwritable: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dirs(parent);
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), content.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    /// All file paths under `dir`
    pub fn files_under(&self, dir: impl AsRef<Path>) -> Vec<PathBuf> {
        let dir = dir.as_ref();
        self.files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(dir))
            .cloned()
            .collect()
    }

    pub fn file_count(&self) -> usize {
        self.files.borrow().len()
    }

    pub fn fail_reads(&self, path: impl AsRef<Path>) {
        self.unreadable
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn fail_writes(&self, path: impl AsRef<Path>) {
        self.unwritable
            .borrow_mut()
            .insert(path.as_ref().to_path_buf());
    }

    fn add_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_files(&self, root: &Path, extensions: &[String]) -> Result<Vec<PathBuf>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root) && has_tracked_extension(p, extensions))
            .cloned()
            .collect())
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        if self.unreadable.borrow().contains(path) {
            return Err(fs_error::read_failed(
                path.display().to_string(),
                "permission denied",
            ));
        }
        self.files
            .borrow()
            .get(path)
            .cloned()
            .ok_or_else(|| fs_error::read_failed(path.display().to_string(), "no such file"))
    }

    fn write_text(&self, path: &Path, text: &str) -> Result<()> {
        if self.unwritable.borrow().contains(path) {
            return Err(fs_error::write_failed(
                path.display().to_string(),
                "permission denied",
            ));
        }
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }

    fn copy_file(&self, src: &Path, dst: &Path) -> Result<()> {
        let content = self.read_text(src).map_err(|e| {
            fs_error::copy_failed(
                src.display().to_string(),
                dst.display().to_string(),
                e.to_string(),
            )
        })?;
        self.write_text(dst, &content).map_err(|e| {
            fs_error::copy_failed(
                src.display().to_string(),
                dst.display().to_string(),
                e.to_string(),
            )
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path) || self.dirs.borrow().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn make_dirs(&self, path: &Path) -> Result<()> {
        if self.unwritable.borrow().contains(path) {
            return Err(fs_error::dir_create_failed(
                path.display().to_string(),
                "permission denied",
            ));
        }
        self.add_dirs(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> Result<()> {
        if !self.is_dir(path) {
            return Err(fs_error::dir_remove_failed(
                path.display().to_string(),
                "no such directory",
            ));
        }
        self.files.borrow_mut().retain(|p, _| !p.starts_with(path));
        self.dirs.borrow_mut().retain(|p| !p.starts_with(path));
        Ok(())
    }
}
