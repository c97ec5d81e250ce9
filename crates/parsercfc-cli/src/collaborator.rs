//! Collaborator parser protocol (§6): spawning `cfc_parser` (or whatever
//! implements the same stdout contract) per file or in batches.

use parsercfc_api::{FileError, FileErrorKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Invoke the collaborator for a single file. On success returns its name
/// list; on any failure returns a [`FileError`] describing why.
pub fn parse_one_file(parser_bin: &Path, path: &Path) -> Result<Vec<String>, FileError> {
    let output = Command::new(parser_bin).arg(path).output().map_err(|err| FileError {
        path: path.to_path_buf(),
        kind: FileErrorKind::Spawn,
        message: format!("spawn failed: {err}"),
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let message = if stderr.is_empty() {
            format!("exit code {}", output.status.code().unwrap_or(-1))
        } else {
            stderr
        };
        return Err(FileError {
            path: path.to_path_buf(),
            kind: FileErrorKind::Parser,
            message,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let trimmed = stdout.trim();
    let body = if trimmed.is_empty() { "[]" } else { trimmed };

    serde_json::from_str::<Vec<String>>(body).map_err(|err| FileError {
        path: path.to_path_buf(),
        kind: FileErrorKind::Output,
        message: format!("invalid output: {err}"),
    })
}

#[derive(Deserialize)]
struct BatchRecord {
    path: String,
    fc: Vec<String>,
}

/// Invoke the collaborator in batch mode over `paths`. Returns a map from
/// path to name list for every path the collaborator reported, plus the
/// trimmed stderr text (empty if none) to attach as advisory context to
/// whatever per-path errors the caller derives from missing entries.
pub fn parse_batch_files(
    parser_bin: &Path,
    paths: &[PathBuf],
) -> Result<(HashMap<PathBuf, Vec<String>>, String), FileError> {
    let mut cmd = Command::new(parser_bin);
    cmd.arg("--batch");
    for path in paths {
        cmd.arg(path);
    }

    let output = cmd.output().map_err(|err| FileError {
        path: paths.first().cloned().unwrap_or_default(),
        kind: FileErrorKind::Spawn,
        message: format!("spawn failed: {err}"),
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

    let mut by_path = HashMap::new();
    for line in stdout.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record: BatchRecord = serde_json::from_str(line).map_err(|err| FileError {
            path: paths.first().cloned().unwrap_or_default(),
            kind: FileErrorKind::Output,
            message: format!("invalid batch output: {err}"),
        })?;
        by_path.insert(PathBuf::from(record.path), record.fc);
    }

    Ok((by_path, stderr))
}
