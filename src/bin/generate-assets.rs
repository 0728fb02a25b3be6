#![forbid(unsafe_code)]

use std::path::PathBuf;

/// Usage: generate-assets [OUT_DIR]   (default: dist)
fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    let written = bettertree::assets::generate_all(&out_dir)?;
    for path in &written {
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}
