//! Common test utilities for confbundle integration tests

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A project directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new, empty project
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Project with a small `run/` tree of tracked and untracked files
    pub fn with_sample_tree() -> Self {
        let workspace = Self::new();
        workspace.write_file("run/basic.yaml", "name: demo\nport: 8080\n");
        workspace.write_file("run/plugins/web.yml", "enabled: true\nroutes:\n  - /\n");
        workspace.write_file("run/notes.txt", "not tracked\n");
        workspace
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Sorted entry names of a project directory, empty if it does not exist
    pub fn list_dir(&self, path: &str) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.path.join(path)) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|e| {
                e.expect("Failed to read directory entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// confbundle command rooted at this project via `--root`
    pub fn cmd(&self) -> Command {
        let mut cmd = confbundle_cmd();
        cmd.arg("--root").arg(&self.path);
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// The real binary with a clean environment
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn confbundle_cmd() -> Command {
    let mut cmd = Command::cargo_bin("confbundle").expect("confbundle binary not built");
    cmd.env_remove("CONFBUNDLE_ROOT").env_remove("RUST_LOG");
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("test/file.yaml", "a: 1\n");
        assert!(workspace.file_exists("test/file.yaml"));
        assert_eq!(workspace.read_file("test/file.yaml"), "a: 1\n");
        assert_eq!(workspace.list_dir("test"), vec!["file.yaml"]);
    }

    #[test]
    fn test_workspace_list_missing_dir() {
        let workspace = TestWorkspace::new();
        assert!(workspace.list_dir("backups").is_empty());
    }
}
