//! Flat keys derived from root-relative paths
//!
//! Both transforms are lossy: `a/b.yaml` and `a_b.yaml` map to the same bundle key.
//! Collisions are not detected here; the bundle keeps whichever entry is inserted last.

use std::path::{Component, Path};

/// Derive the bundle key for a root-relative path
///
/// Every path separator and every `.` becomes `_`; all other characters are kept in order.
///
/// # Examples
/// ```
/// use confbundle::common::path_key::derive_key;
/// assert_eq!(derive_key("a/b/c.yaml"), "a_b_c_yaml");
/// assert_eq!(derive_key("x.yml"), "x_yml");
/// ```
pub fn derive_key(relative_path: &str) -> String {
    relative_path
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Name used for a single-file backup: separators replaced, dots kept
pub fn backup_name(relative_path: &str) -> String {
    relative_path.replace(['/', '\\'], "_")
}

/// Render a relative path with forward slashes regardless of platform
pub fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::CurDir | Component::RootDir | Component::Prefix(_) => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Path of `path` relative to `root`, falling back to the file name outside of it
pub fn relative_to(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => to_slash(relative),
        Err(_) => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| to_slash(path)),
    }
}

/// Whether a stored entry path stays inside the project root
pub fn is_contained(relative_path: &str) -> bool {
    let path = Path::new(relative_path);
    !relative_path.is_empty()
        && !relative_path.starts_with(['/', '\\'])
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
