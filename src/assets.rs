//! Shell completions and man page generated from the clap definition.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use clap_mangen::Man;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::Args;

pub const BIN_NAME: &str = "bettertree";

/// Shells covered by [`generate_all`].
pub const SHELLS: [Shell; 4] = [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell];

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Args::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Write the roff man page to `out`.
pub fn write_man_page(out: &mut dyn Write) -> std::io::Result<()> {
    Man::new(Args::command()).render(out)
}

/// Write every completion script under `out_dir/completions` and the man
/// page under `out_dir/man`. Returns the files written.
pub fn generate_all(out_dir: &Path) -> Result<Vec<PathBuf>> {
    let completions_dir = out_dir.join("completions");
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&completions_dir)
        .with_context(|| format!("{}: cannot create directory", completions_dir.display()))?;
    fs::create_dir_all(&man_dir)
        .with_context(|| format!("{}: cannot create directory", man_dir.display()))?;

    let mut written = Vec::with_capacity(SHELLS.len() + 1);
    for shell in SHELLS {
        let mut cmd = Args::command();
        let path = clap_complete::generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
            .with_context(|| format!("failed to generate {shell} completions"))?;
        written.push(path);
    }

    let mut buffer = Vec::new();
    write_man_page(&mut buffer)?;
    let man_path = man_dir.join(format!("{BIN_NAME}.1"));
    fs::write(&man_path, buffer)
        .with_context(|| format!("{}: cannot write man page", man_path.display()))?;
    written.push(man_path);

    Ok(written)
}
