//! Tree rendering with chain folding and `LS_COLORS` styling.

use crate::classify::color_for;
use crate::colors::ColorTable;
use crate::tree::{DirectoryNode, FileNode};
use std::io::{self, Write};

const BRANCH: &str = "\u{251c}\u{2500}"; // ├─
const LAST: &str = "\u{2514}\u{2500}"; // └─
const PIPE_FILL: &str = "\u{2502}  "; // │
const BLANK_FILL: &str = "   ";

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Write the whole diagram for `root` to `writer`.
pub fn render_tree<W: Write>(
    writer: &mut W,
    root: &DirectoryNode,
    colors: &ColorTable,
) -> io::Result<()> {
    let mut prefix = String::new();
    Renderer { writer, colors }.directory(root, &mut prefix)
}

/// Render the diagram into a `String`.
pub fn render_to_string(root: &DirectoryNode, colors: &ColorTable) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_tree(&mut buf, root, colors);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Connector for sibling `index` of `count`, given whether more entries follow the group.
fn connector(index: usize, count: usize, more_follow: bool) -> &'static str {
    if index + 1 == count && !more_follow {
        LAST
    } else {
        BRANCH
    }
}

struct Renderer<'a, W: Write> {
    writer: &'a mut W,
    colors: &'a ColorTable,
}

impl<W: Write> Renderer<'_, W> {
    /// Write `dir`'s label (finishing the current line), then its children.
    fn directory(&mut self, dir: &DirectoryNode, prefix: &mut String) -> io::Result<()> {
        self.directory_name(dir)?;
        writeln!(self.writer)?;

        let dir_count = dir.subdirectories.len();
        let has_files = !dir.files.is_empty();

        for (i, child) in dir.subdirectories.iter().enumerate() {
            let conn = connector(i, dir_count, has_files);
            write!(self.writer, "{prefix}{conn} ")?;

            // Fold single-entry directories onto this line.
            let mut next = child;
            while next.entry_count() == 1 {
                self.directory_name(next)?;
                write!(self.writer, "/")?;
                if next.files.len() == 1 {
                    self.file(&next.files[0])?;
                    break;
                }
                next = &next.subdirectories[0];
            }

            if next.files.len() != 1 || !next.subdirectories.is_empty() {
                let end = prefix.len();
                prefix.push_str(if conn == LAST { BLANK_FILL } else { PIPE_FILL });
                self.directory(next, prefix)?;
                prefix.truncate(end);
            }
        }

        let file_count = dir.files.len();
        for (i, file) in dir.files.iter().enumerate() {
            let conn = connector(i, file_count, false);
            write!(self.writer, "{prefix}{conn} ")?;
            self.file(file)?;
        }

        Ok(())
    }

    fn directory_name(&mut self, dir: &DirectoryNode) -> io::Result<()> {
        write!(
            self.writer,
            "{}{}{}",
            self.colors.directory(),
            sanitize_terminal_text(&dir.name),
            self.colors.reset()
        )
    }

    /// Write a styled file name and end the line. Control characters in the
    /// name are escaped, so the printed text can differ from the raw name.
    fn file(&mut self, file: &FileNode) -> io::Result<()> {
        writeln!(
            self.writer,
            "{}{}{}",
            color_for(file, self.colors),
            sanitize_terminal_text(&file.name),
            self.colors.reset()
        )
    }
}
