#![forbid(unsafe_code)]

use anyhow::Result;
use bettertree::app;
use bettertree::cli::Args;
use bettertree::logging::init_logging;
use bettertree::tree::WalkdirTreeBuilder;
use clap::Parser;
use std::io::{self, BufWriter};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("bettertree: {e:#}");
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let args = Args::parse().validated();
    init_logging(args.verbose, args.quiet);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    app::run(&args, &WalkdirTreeBuilder, &mut out)
}
