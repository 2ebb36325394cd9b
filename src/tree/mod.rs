//! In-memory directory tree and its construction.

pub(crate) mod walk;

use std::path::{Path, PathBuf};

pub use walk::build_tree;

/// One scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Display name. For the root this is the full starting path.
    pub name: String,
    /// Filesystem path used for I/O.
    pub path: PathBuf,
    /// Child directories in enumeration order.
    pub subdirectories: Vec<DirectoryNode>,
    /// Non-directory children in enumeration order.
    pub files: Vec<FileNode>,
}

impl DirectoryNode {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            subdirectories: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Root node whose name is its own path string.
    pub fn root(path: &Path) -> Self {
        Self::new(path.to_string_lossy(), path)
    }

    /// Number of direct children, directories and files together.
    pub fn entry_count(&self) -> usize {
        self.subdirectories.len() + self.files.len()
    }
}

/// One non-directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    /// Full path, needed for the executable-bit check at render time.
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Filesystem-reported type of a non-directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Regular,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl EntryKind {
    /// Classify a file type as reported without following symlinks.
    pub fn from_file_type(file_type: std::fs::FileType) -> Self {
        if file_type.is_symlink() {
            return EntryKind::Symlink;
        }
        if file_type.is_file() {
            return EntryKind::Regular;
        }
        special_kind(file_type)
    }
}

#[cfg(unix)]
fn special_kind(file_type: std::fs::FileType) -> EntryKind {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_fifo() {
        EntryKind::Fifo
    } else if file_type.is_socket() {
        EntryKind::Socket
    } else if file_type.is_block_device() {
        EntryKind::BlockDevice
    } else if file_type.is_char_device() {
        EntryKind::CharDevice
    } else {
        EntryKind::Unknown
    }
}

#[cfg(not(unix))]
fn special_kind(_file_type: std::fs::FileType) -> EntryKind {
    EntryKind::Unknown
}

/// Configuration for tree building.
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Whether to include hidden entries (names starting with `.`).
    pub show_hidden: bool,
}

/// Abstraction over tree construction so it can be swapped or mocked.
pub trait TreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> DirectoryNode;
}

/// Default `TreeBuilder` that delegates to the walkdir-based implementation.
pub struct WalkdirTreeBuilder;

impl TreeBuilder for WalkdirTreeBuilder {
    fn build_tree(&self, root: &Path, config: &TreeConfig) -> DirectoryNode {
        build_tree(root, config)
    }
}
