//! Command-line surface for the `parsercfc` driver.

use clap::Parser;
use std::path::PathBuf;

/// Recursively scan a directory of `.c` files for function definitions.
#[derive(Debug, Parser)]
#[command(name = "parsercfc", version, about)]
pub struct Cli {
    /// Directory to scan.
    pub dir: PathBuf,

    /// Number of worker threads (default: cpu count - 1, minimum 1).
    #[arg(short = 'w', long = "workers")]
    pub workers: Option<usize>,

    /// Where to write fc.json.
    #[arg(long = "o-fc", value_name = "PATH")]
    pub output_fc: Option<PathBuf>,

    /// Where to write null_fc.json.
    #[arg(long = "o-null_fc", value_name = "PATH")]
    pub output_null_fc: Option<PathBuf>,

    /// Override path to the collaborator parser binary.
    #[arg(long = "parser", value_name = "PATH")]
    pub parser: Option<PathBuf>,

    /// Skip the collaborator parser and rely on the textual scanner alone.
    #[arg(long = "no-collaborator")]
    pub no_collaborator: bool,

    /// Increase logging verbosity (repeatable).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// The spec's CLI surface carries the original argparse flags `-o-fc` and
/// `-o-null_fc` verbatim, both single-dash. `clap::Parser`'s derive `long`
/// attribute can only ever emit a double-dash flag, so these two tokens are
/// rewritten to their double-dash form before `Cli::parse_from` sees argv.
/// Every other argument (the positional dir, `-w`, `-v`, `--parser`, ...)
/// passes through untouched.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if let Some(rest) = arg.strip_prefix("-o-fc") {
                format!("--o-fc{rest}")
            } else if let Some(rest) = arg.strip_prefix("-o-null_fc") {
                format!("--o-null_fc{rest}")
            } else {
                arg
            }
        })
        .collect()
}
