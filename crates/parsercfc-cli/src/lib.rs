//! Driver/Orchestrator (§2, external): ties together config merging, file
//! discovery, collaborator resolution, the worker pool, and output
//! emission. `main.rs` is a thin shell that parses arguments, installs the
//! logger, and hands off to [`run`].
//!
//! None of this crate is part of the core recognizer — it exists to drive
//! [`parsercfc_core`] over a directory tree and is swappable, per the
//! external-collaborator protocol in §6, for any other driver speaking the
//! same JSON contract.

pub mod cli;
pub mod collaborator;
pub mod discover;
pub mod output;
pub mod parser_binary;
pub mod progress;
pub mod worker;

use parsercfc_api::{DriverError, DriverResult, ScanConfig};
use progress::Progress;
use std::collections::BTreeMap;
use std::path::Path;

/// What a full run accomplished, for the CLI to report on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total_files: usize,
    pub error_count: usize,
}

/// Run one full scan of `dir` per `config`.
///
/// `exe_dir` is the directory the running binary lives in, used to resolve
/// the collaborator binary relative to the tool per §6's discovery order.
/// Returns before any work begins if `dir` is not a directory, or if a
/// collaborator was explicitly configured but does not exist on disk —
/// both map to the CLI's exit code 2.
pub fn run(dir: &Path, config: &ScanConfig, exe_dir: &Path) -> DriverResult<RunSummary> {
    if !dir.is_dir() {
        return Err(DriverError::DirNotFound(dir.to_path_buf()));
    }

    let parser_bin = if config.use_collaborator {
        parser_binary::resolve_parser_binary(config.parser_path.as_deref(), exe_dir)?
    } else {
        None
    };

    let files = discover::find_c_files(dir)?;

    if files.is_empty() {
        output::write_artifacts(&BTreeMap::new(), &config.output_fc, &config.output_null_fc)?;
        return Ok(RunSummary {
            total_files: 0,
            error_count: 0,
        });
    }

    let batch_size = config.batch_size_for(files.len());
    let progress = Progress::new(files.len());
    let summary = worker::run_scan(&files, config.workers, batch_size, parser_bin.as_deref(), &progress)?;

    output::write_artifacts(&summary.results, &config.output_fc, &config.output_null_fc)?;

    Ok(RunSummary {
        total_files: files.len(),
        error_count: summary.error_count,
    })
}
