use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved configuration for one scan of a directory tree.
///
/// Built by merging, in increasing priority: documented defaults →
/// environment variables → CLI flags (see [`ScanConfig::merge`]). The merge
/// is a pure function so it can be tested without touching the real process
/// environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Number of worker threads used to process files concurrently.
    pub workers: usize,

    /// Where to write the `fc.json` artifact.
    pub output_fc: PathBuf,

    /// Where to write the `null_fc.json` artifact.
    pub output_null_fc: PathBuf,

    /// Override for the collaborator batch size. `None` means "compute the
    /// default from file count and worker count".
    pub batch_size: Option<usize>,

    /// Override path to the collaborator parser binary. `None` means
    /// "search `build/cfc_parser`, then a sibling binary, then `PATH`".
    pub parser_path: Option<PathBuf>,

    /// Whether to invoke a collaborator parser at all. The textual scanner
    /// is complete on its own; the collaborator only augments it.
    pub use_collaborator: bool,

    /// Verbosity level requested via repeated `-v` flags (0 = default).
    pub verbosity: u8,
}

/// The subset of environment variables this tool reads, already captured as
/// plain `Option<String>`s so the merge logic never touches
/// [`std::env`] directly and can be exercised with injected values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    pub batch_size: Option<String>,
    pub parser_path: Option<String>,
}

impl EnvSnapshot {
    /// Read the real process environment.
    pub fn from_process() -> Self {
        Self {
            batch_size: std::env::var("PARSERCFC_BATCH_SIZE").ok(),
            parser_path: std::env::var("PARSERCFC_PARSER").ok(),
        }
    }
}

/// CLI-level overrides, already parsed into their target types. Kept
/// separate from the `clap` argument struct so the merge function has no
/// dependency on any particular argument parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub workers: Option<usize>,
    pub output_fc: Option<PathBuf>,
    pub output_null_fc: Option<PathBuf>,
    pub parser_path: Option<PathBuf>,
    pub use_collaborator: Option<bool>,
    pub verbosity: u8,
}

/// Default worker count: `max(cpu_count - 1, 1)`.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .saturating_sub(1)
        .max(1)
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            output_fc: PathBuf::from("fc.json"),
            output_null_fc: PathBuf::from("null_fc.json"),
            batch_size: None,
            parser_path: None,
            use_collaborator: true,
            verbosity: 0,
        }
    }
}

impl ScanConfig {
    /// Merge defaults, an environment snapshot, and CLI overrides into a
    /// final configuration. Later sources win.
    pub fn merge(env: &EnvSnapshot, cli: &CliOverrides) -> Self {
        let mut config = Self::default();

        if let Some(raw) = &env.batch_size {
            if let Ok(parsed) = raw.parse::<usize>() {
                if parsed > 0 {
                    config.batch_size = Some(parsed);
                }
            }
        }
        if let Some(raw) = &env.parser_path {
            if !raw.is_empty() {
                config.parser_path = Some(PathBuf::from(raw));
            }
        }

        if let Some(workers) = cli.workers {
            config.workers = workers.max(1);
        }
        if let Some(path) = &cli.output_fc {
            config.output_fc = path.clone();
        }
        if let Some(path) = &cli.output_null_fc {
            config.output_null_fc = path.clone();
        }
        if let Some(path) = &cli.parser_path {
            config.parser_path = Some(path.clone());
        }
        if let Some(use_collaborator) = cli.use_collaborator {
            config.use_collaborator = use_collaborator;
        }
        config.verbosity = cli.verbosity;

        config
    }

    /// Batch size to use for a scan of `total_files` files, honoring an
    /// explicit override when present.
    pub fn batch_size_for(&self, total_files: usize) -> usize {
        if let Some(explicit) = self.batch_size {
            return explicit.max(1);
        }
        let auto = (total_files / (self.workers.max(1) * 4)).max(1);
        auto.clamp(1, 100)
    }
}
