//! One run of the printer: resolve the root, build, render, write.

use anyhow::{Context, Result};
use crossterm::tty::IsTty;
use std::io::{self, Write};
use tracing::info;

use crate::assets::write_completions;
use crate::cli::Args;
use crate::render::{render, RenderConfig};
use crate::tree::{build_ignore_set, TreeBuilder, TreeConfig};

/// Run with already-validated `args`, writing the tree to `out`.
///
/// Nothing is written when the build fails, so a failed run leaves `out`
/// empty.
pub fn run(args: &Args, builder: &dyn TreeBuilder, out: &mut dyn Write) -> Result<()> {
    if let Some(shell) = args.completions {
        write_completions(shell, out);
        return Ok(());
    }

    let path = match args.path.clone() {
        Some(path) => path,
        None => std::env::current_dir().context("failed to resolve current directory")?,
    };
    let meta = std::fs::metadata(&path)
        .with_context(|| format!("{}: failed to resolve path", path.display()))?;
    anyhow::ensure!(meta.is_dir(), "{}: Not a directory", path.display());

    let tree_config = TreeConfig {
        max_depth: args.depth,
        show_hidden: args.show_hidden,
        follow_symlinks: !args.no_follow_symlinks,
        ignore_patterns: build_ignore_set(&args.ignore),
    };
    info!(
        path = %path.display(),
        depth = args.depth,
        hidden = args.show_hidden,
        "building tree"
    );
    let root = builder.build_tree(&path, &tree_config)?;
    info!(nodes = root.node_count(), "tree built");

    let render_config = RenderConfig {
        use_color: !args.no_color && io::stdout().is_tty(),
    };
    let lines = render(&root, args.mode(), &render_config);

    match write_lines(&lines, out) {
        // Downstream closed early (e.g. piped into `head`).
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("failed to write output"),
    }
}

fn write_lines(lines: &[String], out: &mut dyn Write) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
