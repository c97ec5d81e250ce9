//! `parsercfc`: recursively scans a directory of C source for function
//! definitions, reconciles them against an optional collaborator parser,
//! and writes `fc.json` / `null_fc.json` (§6).

use clap::Parser;
use parsercfc_api::{CliOverrides, EnvSnapshot, ScanConfig};
use parsercfc_cli::cli::{normalize_args, Cli};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = normalize_args(env::args());
    let cli = Cli::parse_from(args);

    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let env_snapshot = EnvSnapshot::from_process();
    let overrides = CliOverrides {
        workers: cli.workers,
        output_fc: cli.output_fc.clone(),
        output_null_fc: cli.output_null_fc.clone(),
        parser_path: cli.parser.clone(),
        use_collaborator: cli.no_collaborator.then_some(false),
        verbosity: cli.verbose,
    };
    let config = ScanConfig::merge(&env_snapshot, &overrides);

    let exe_dir = env::current_exe()
        .ok()
        .and_then(|path| path.parent().map(|dir| dir.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."));

    match parsercfc_cli::run(&cli.dir, &config, &exe_dir) {
        Ok(summary) => {
            eprintln!(
                "{} files processed, {} errors",
                summary.total_files, summary.error_count
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::from(2)
        }
    }
}
