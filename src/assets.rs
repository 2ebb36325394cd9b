//! Shell completions and man page for `ztree`.

use clap::CommandFactory;
use clap_complete::{generate, generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cli::Args;

const BIN_NAME: &str = "ztree";

/// Shells completions are generated for.
pub const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

/// Roff appended after the clap-generated sections. clap does not document
/// the variables read outside of argument parsing.
const ENVIRONMENT_SECTION: &str = r#".SH ENVIRONMENT
.TP
\fBLS_COLORS\fR
Color specification used when \fB\-\-colors\fR is not given. A list of
\fIkey\fR=\fIvalue\fR pairs separated by ':'. Keys are two\-letter kind codes
(di, fi, ln, ex, pi, so, bd, cd, no, rs) or \fB*\fR followed by a file name
suffix. The first matching pair wins.
.TP
\fBNO_COLOR\fR
When set, output is not colored.
.TP
\fBRUST_LOG\fR
Log filter for diagnostics written to stderr; overrides \fB\-l\fR.
"#;

/// Render the man page, including the ENVIRONMENT section.
pub fn man_page() -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    buffer.extend_from_slice(ENVIRONMENT_SECTION.as_bytes());
    Ok(buffer)
}

/// Completion script for one shell.
pub fn completion_script(shell: Shell) -> Vec<u8> {
    let mut cmd = Args::command();
    let mut buffer = Vec::new();
    generate(shell, &mut cmd, BIN_NAME, &mut buffer);
    buffer
}

/// Write completions to `out_dir/completions` and the man page to
/// `out_dir/man/ztree.1`. Returns the written paths.
pub fn write_assets(out_dir: &Path) -> io::Result<Vec<PathBuf>> {
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&completions_dir)?;
    fs::create_dir_all(&man_dir)?;

    let mut written = Vec::with_capacity(SHELLS.len() + 1);
    for shell in SHELLS {
        let mut cmd = Args::command();
        written.push(generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)?);
    }

    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    fs::write(&man_path, man_page()?)?;
    written.push(man_path);
    Ok(written)
}
