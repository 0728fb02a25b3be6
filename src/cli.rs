use clap::Parser;
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::render::Mode;

const EXAMPLES: &str = "\
Examples:
  bettertree                      Tree of the current directory, one level deep
  bettertree -p src -d 3          Three levels below ./src
  bettertree -a -d 2              Include dotfiles
  bettertree -f -d 2              Fancy columnar layout
  bettertree -I '*.log' -I target Skip entries matching the globs";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "bettertree",
    version,
    about = "Print a directory tree with box-drawing connectors",
    after_help = EXAMPLES
)]
pub struct Args {
    /// Directory to print (default: current directory)
    #[arg(short = 'p', long = "path")]
    pub path: Option<PathBuf>,

    /// Max recursion depth (0 prints only the root)
    #[arg(short = 'd', long = "depth", default_value_t = 1)]
    pub depth: usize,

    /// Show hidden files (dotfiles)
    #[arg(short = 'a', long = "all")]
    pub show_hidden: bool,

    /// Fancy columnar layout instead of the connector tree
    #[arg(short = 'f', long = "fancy")]
    pub fancy: bool,

    /// Glob patterns to exclude, matched against entry names (repeatable)
    #[arg(short = 'I', long = "ignore", action = clap::ArgAction::Append)]
    pub ignore: Vec<String>,

    /// List symbolic links as files instead of descending into them
    #[arg(long = "no-follow-symlinks")]
    pub no_follow_symlinks: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long = "completions", value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if no_color_requested(std::env::var_os("NO_COLOR")) {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    pub fn mode(&self) -> Mode {
        if self.fancy {
            Mode::Fancy
        } else {
            Mode::Standard
        }
    }
}

/// `NO_COLOR` disables color only when set to a non-empty value.
fn no_color_requested(value: Option<OsString>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_no_color_is_ignored() {
        assert!(!no_color_requested(None));
        assert!(!no_color_requested(Some(OsString::new())));
        assert!(no_color_requested(Some(OsString::from("1"))));
    }
}
