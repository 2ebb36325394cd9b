use clap::Parser;
use std::path::PathBuf;

use crate::colors::ColorTable;
use crate::tree::TreeConfig;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "ztree",
    version,
    about = "Print a directory tree, folding single-child chains onto one line",
    after_help = "Examples:\n  ztree            tree of the working directory\n  ztree -a src     include dotfiles under src\n  ztree --no-color plain output"
)]
pub struct Args {
    /// Directory to print (default: current working directory)
    pub path: Option<PathBuf>,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Log every directory checked and entry added (to stderr)
    #[arg(short = 'l', long = "log")]
    pub log: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Color specification, `key=value` pairs separated by ':'
    #[arg(long = "colors", env = "LS_COLORS", hide_env_values = true)]
    pub colors: Option<String>,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        self
    }

    pub fn tree_config(&self) -> TreeConfig {
        TreeConfig {
            show_hidden: self.show_hidden,
        }
    }

    /// The color table to render with; empty when color is disabled.
    pub fn color_table(&self) -> ColorTable {
        if self.no_color {
            ColorTable::default()
        } else {
            ColorTable::from_spec(self.colors.as_deref())
        }
    }
}
