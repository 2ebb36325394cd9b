#![forbid(unsafe_code)]

use std::path::PathBuf;
use ztree::assets::write_assets;

/// Usage: generate-assets [OUT_DIR] (default: dist)
fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    for path in write_assets(&out_dir)? {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
