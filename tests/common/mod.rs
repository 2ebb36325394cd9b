#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;
use ztree::tree::{DirectoryNode, TreeConfig};

/// Default TreeConfig (hidden entries skipped).
pub fn default_tree_config() -> TreeConfig {
    TreeConfig { show_hidden: false }
}

/// TreeConfig with hidden entries included.
pub fn all_tree_config() -> TreeConfig {
    TreeConfig { show_hidden: true }
}

/// Create a directory structure from a list of relative paths.
/// Paths ending with '/' create directories; others create empty files.
pub fn create_fixture(paths: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for p in paths {
        let full = tmp.path().join(p);
        if p.ends_with('/') {
            fs::create_dir_all(&full).unwrap();
        } else {
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, "").unwrap();
        }
    }
    tmp
}

/// Sorted names of the direct children (directories and files) of `dir`.
pub fn child_names(dir: &DirectoryNode) -> Vec<String> {
    let mut names: Vec<String> = dir
        .subdirectories
        .iter()
        .map(|d| d.name.clone())
        .chain(dir.files.iter().map(|f| f.name.clone()))
        .collect();
    names.sort();
    names
}

/// Sorted names from a plain directory listing, optionally skipping dotfiles.
pub fn listing_names(path: &Path, show_hidden: bool) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(path)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| show_hidden || !n.starts_with('.'))
        .collect();
    names.sort();
    names
}

/// Find a direct subdirectory by name.
pub fn subdir<'a>(dir: &'a DirectoryNode, name: &str) -> &'a DirectoryNode {
    dir.subdirectories
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("no subdirectory {name:?} in {:?}", dir.name))
}
