//! Command-line arguments for `dirnav`.

use std::path::PathBuf;

use clap::Parser;

const COMMANDS_HELP: &str = "\
COMMANDS (read from stdin):
  ls                      Print the current listing
  j / k                   Move the cursor down / up
  enter                   Open the entry under the cursor
  cd NAME                 Descend into the directory NAME
  up                      Return to the previous directory
  root PATH               Start over at PATH, keeping the current filter
  filter [SPEC]           Re-list the current directory with a new filter
  pwd                     Print the current directory and depth
  q                       Quit

ENVIRONMENT:
  DIRNAV_CONFIG           Override the config file path
  DIRNAV_LOG              Log filter directive (falls back to RUST_LOG)";

/// Browse a directory tree one level at a time.
#[derive(Debug, Parser, PartialEq, Eq)]
#[command(name = "dirnav", version, about, after_help = COMMANDS_HELP)]
pub(crate) struct Cli {
    /// Directory to open (defaults to the configured start_dir, then the current directory)
    pub(crate) path: Option<PathBuf>,

    /// Only list files whose extension is in SPEC, e.g. "png|jpg"
    #[arg(short, long, value_name = "SPEC")]
    pub(crate) filter: Option<String>,

    /// Refuse to descend more than N levels below PATH
    #[arg(short = 'd', long, value_name = "N")]
    pub(crate) max_depth: Option<usize>,
}
