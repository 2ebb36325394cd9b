use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use super::{DirectoryNode, EntryKind, FileNode, TreeConfig};

/// One step of a pre-order scan, detached from walkdir.
#[derive(Debug)]
pub(super) enum ScanItem {
    Directory {
        depth: usize,
        name: String,
        path: PathBuf,
    },
    File {
        depth: usize,
        node: FileNode,
    },
    /// A directory that could not be opened or enumerated.
    Unreadable { path: PathBuf, message: String },
}

/// Build the tree rooted at `root`.
///
/// Directories that cannot be opened are kept with no children; the scan
/// continues with their siblings. Symlinks are never followed.
pub fn build_tree(root: &Path, config: &TreeConfig) -> DirectoryNode {
    let walker = WalkDir::new(root).follow_links(false);

    // Prune hidden entries before walkdir descends into them.
    let show_hidden = config.show_hidden;
    let iter = walker.into_iter().filter_entry(move |entry| {
        // Always allow root
        if entry.depth() == 0 || show_hidden {
            return true;
        }
        !entry.file_name().to_string_lossy().starts_with('.')
    });

    let items = iter.filter_map(|entry_result| match entry_result {
        Ok(entry) => {
            let depth = entry.depth();
            // Skip root itself
            if depth == 0 {
                return None;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            let path = entry.path().to_path_buf();
            let file_type = entry.file_type();
            if file_type.is_dir() {
                Some(ScanItem::Directory { depth, name, path })
            } else {
                let kind = EntryKind::from_file_type(file_type);
                Some(ScanItem::File {
                    depth,
                    node: FileNode { name, path, kind },
                })
            }
        }
        Err(e) => {
            let path = e.path().unwrap_or(root).to_path_buf();
            let message = match e.io_error() {
                Some(io_err) => io_err.to_string(),
                None => e.to_string(),
            };
            Some(ScanItem::Unreadable { path, message })
        }
    });

    assemble(root, items)
}

/// Fold a pre-order item stream into an owned tree.
///
/// Open directories from the root down to the parent of the current item are
/// kept on a stack; stack.len() == depth once the directories that are no
/// longer ancestors have been folded.
pub(super) fn assemble(root: &Path, items: impl IntoIterator<Item = ScanItem>) -> DirectoryNode {
    debug!("checking directory {:?}", root);
    let mut stack = vec![DirectoryNode::root(root)];

    for item in items {
        match item {
            ScanItem::Directory { depth, name, path } => {
                close_to_depth(&mut stack, depth);
                debug!("adding directory {:?}", name);
                debug!("checking directory {:?}", path);
                stack.push(DirectoryNode::new(name, path));
            }
            ScanItem::File { depth, node } => {
                close_to_depth(&mut stack, depth);
                if let Some(parent) = stack.last_mut() {
                    debug!("adding file {:?}", node.name);
                    parent.files.push(node);
                }
            }
            ScanItem::Unreadable { path, message } => {
                // The directory keeps whatever it has (nothing).
                debug!("skipping unreadable entry {:?}: {}", path, message);
            }
        }
    }

    close_to_depth(&mut stack, 1);
    stack.pop().unwrap_or_else(|| DirectoryNode::root(root))
}

fn close_to_depth(stack: &mut Vec<DirectoryNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        fold_top(stack);
    }
}

/// Close the innermost open directory and attach it to its parent.
fn fold_top(stack: &mut Vec<DirectoryNode>) {
    if stack.len() < 2 {
        return;
    }
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.subdirectories.push(done);
        }
    }
}
