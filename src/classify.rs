//! Per-entry color selection.

use crate::colors::{
    ColorTable, KEY_BLOCK_DEVICE, KEY_CHAR_DEVICE, KEY_EXECUTABLE, KEY_FIFO, KEY_FILE,
    KEY_NORMAL, KEY_SOCKET, KEY_SYMLINK,
};
use crate::tree::{EntryKind, FileNode};
use std::path::Path;
use tracing::debug;

/// Pick the style for a file entry.
///
/// Regular files try a suffix rule first, then the executable bit, then the
/// generic file color. Other kinds use their two-letter kind code.
pub fn color_for<'a>(file: &FileNode, colors: &'a ColorTable) -> &'a str {
    match file.kind {
        EntryKind::Regular => {
            let by_suffix = colors.by_suffix(&file.name);
            if !by_suffix.is_empty() {
                return by_suffix;
            }
            if is_executable(&file.path) {
                colors.by_exact_key(KEY_EXECUTABLE)
            } else {
                colors.by_exact_key(KEY_FILE)
            }
        }
        EntryKind::Symlink => colors.by_exact_key(KEY_SYMLINK),
        EntryKind::Fifo => colors.by_exact_key(KEY_FIFO),
        EntryKind::Socket => colors.by_exact_key(KEY_SOCKET),
        EntryKind::BlockDevice => colors.by_exact_key(KEY_BLOCK_DEVICE),
        EntryKind::CharDevice => colors.by_exact_key(KEY_CHAR_DEVICE),
        EntryKind::Unknown => colors.by_exact_key(KEY_NORMAL),
    }
}

/// Whether the owner-execute bit is set. Metadata failures count as "not executable".
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.permissions().mode() & 0o100 != 0,
        Err(e) => {
            debug!("metadata unavailable for {:?}: {}", path, e);
            false
        }
    }
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    debug!("no executable bit on this platform for {:?}", path);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SPEC: &str = "fi=00:ex=01;32:ln=01;36:pi=33:so=01;35:bd=01;33:cd=31:no=37:*.go=01;34:";

    fn node(name: &str, kind: EntryKind) -> FileNode {
        FileNode {
            name: name.to_string(),
            path: PathBuf::from("/this/path/does/not/exist").join(name),
            kind,
        }
    }

    #[test]
    fn suffix_rule_wins_for_regular_files() {
        let colors = ColorTable::parse(SPEC);
        assert_eq!(color_for(&node("main.go", EntryKind::Regular), &colors), "\x1b[01;34m");
    }

    #[test]
    #[cfg(unix)]
    fn suffix_rule_checked_before_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::TempDir::new().unwrap();
        let script = tmp.path().join("tool.go");
        let bare = tmp.path().join("tool");
        for path in [&script, &bare] {
            std::fs::write(path, "").unwrap();
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        let colors = ColorTable::parse(SPEC);

        let with_suffix = FileNode {
            name: "tool.go".to_string(),
            path: script,
            kind: EntryKind::Regular,
        };
        let without_suffix = FileNode {
            name: "tool".to_string(),
            path: bare,
            kind: EntryKind::Regular,
        };
        assert_eq!(color_for(&with_suffix, &colors), "\x1b[01;34m");
        assert_eq!(color_for(&without_suffix, &colors), "\x1b[01;32m");
    }

    #[test]
    fn missing_metadata_falls_back_to_file_color() {
        let colors = ColorTable::parse(SPEC);
        assert_eq!(color_for(&node("notes.txt", EntryKind::Regular), &colors), "\x1b[00m");
    }

    #[test]
    fn special_kinds_use_their_codes() {
        let colors = ColorTable::parse(SPEC);
        let cases = [
            (EntryKind::Symlink, "\x1b[01;36m"),
            (EntryKind::Fifo, "\x1b[33m"),
            (EntryKind::Socket, "\x1b[01;35m"),
            (EntryKind::BlockDevice, "\x1b[01;33m"),
            (EntryKind::CharDevice, "\x1b[31m"),
            (EntryKind::Unknown, "\x1b[37m"),
        ];
        for (kind, expected) in cases {
            assert_eq!(color_for(&node("x.go", kind), &colors), expected, "{kind:?}");
        }
    }

    #[test]
    fn empty_table_gives_no_style() {
        let colors = ColorTable::default();
        assert_eq!(color_for(&node("a.go", EntryKind::Regular), &colors), "");
        assert_eq!(color_for(&node("link", EntryKind::Symlink), &colors), "");
    }
}
