use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while driving a scan of a directory tree.
///
/// These are the *CLI-level* failures that abort the whole run; per-file
/// failures are represented by [`FileErrorKind`] instead and never reach
/// this type.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The scan root does not exist or is not a directory.
    #[error("directory not found: {0}")]
    DirNotFound(PathBuf),

    /// A collaborator parser binary was explicitly requested but could not
    /// be located or executed.
    #[error("collaborator parser not found: {0}")]
    ParserNotFound(PathBuf),

    /// Building the worker pool failed (e.g. zero threads requested).
    #[error("failed to build worker pool: {0}")]
    PoolBuild(String),

    /// Writing one of the output JSON artifacts failed.
    #[error("failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a result to JSON failed.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for driver-level operations.
pub type DriverResult<T> = std::result::Result<T, DriverError>;

/// Categorizes a single file's processing failure.
///
/// Unlike [`DriverError`], these never abort the run — they are recorded
/// alongside the (possibly partial) file result and summarized at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileErrorKind {
    /// The source file could not be read from disk.
    Read,
    /// The collaborator parser process failed to launch.
    Spawn,
    /// The collaborator parser exited with a nonzero status.
    Parser,
    /// The collaborator parser's stdout was not the documented JSON shape.
    Output,
    /// A file submitted in a batch was absent from the batch's output.
    MissingBatchOutput,
}

impl FileErrorKind {
    /// A short, stable label used only for logging.
    pub fn label(&self) -> &'static str {
        match self {
            FileErrorKind::Read => "read error",
            FileErrorKind::Spawn => "spawn error",
            FileErrorKind::Parser => "parser error",
            FileErrorKind::Output => "output error",
            FileErrorKind::MissingBatchOutput => "missing batch output",
        }
    }
}

/// A single file's processing error, paired with its path and a
/// human-readable message. Never persisted to the JSON artifacts — logged
/// and aggregated into a terminal count only.
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub kind: FileErrorKind,
    pub message: String,
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.path.display(),
            self.message,
            self.kind.label()
        )
    }
}
