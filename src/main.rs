#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::info;
use ztree::cli::Args;
use ztree::error::resolve_start_dir;
use ztree::render::render_tree;
use ztree::tree::{TreeBuilder, WalkdirTreeBuilder};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("ztree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    ztree::logging::init_logging(args.log);

    let path = resolve_start_dir(args.path.as_deref())?;
    info!("analyzing working dir {:?}", path);

    let root = WalkdirTreeBuilder.build_tree(&path, &args.tree_config());
    let colors = args.color_table();

    let mut stdout = std::io::BufWriter::with_capacity(64 * 1024, std::io::stdout());
    render_tree(&mut stdout, &root, &colors).context("failed to write tree")?;
    stdout.flush().context("failed to flush output")?;
    Ok(())
}
