//! Concurrency & resource model (§5): a bounded rayon worker pool scans
//! every file, optionally consulting the collaborator parser per-file or
//! in batches, and aggregates into a single coordinator-owned result map.

use crate::collaborator;
use crate::progress::Progress;
use parsercfc_api::{DriverError, FileError, FileErrorKind};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub struct ScanSummary {
    pub results: BTreeMap<String, Vec<String>>,
    pub error_count: usize,
}

/// Run the scan over `files` with a pool of `workers` threads, batching
/// collaborator calls `batch_size` files at a time (`<= 1` means per-file).
pub fn run_scan(
    files: &[PathBuf],
    workers: usize,
    batch_size: usize,
    parser_bin: Option<&Path>,
    progress: &Progress,
) -> Result<ScanSummary, DriverError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|err| DriverError::PoolBuild(err.to_string()))?;

    let processed = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);
    let results: Mutex<BTreeMap<String, Vec<String>>> = Mutex::new(BTreeMap::new());

    pool.install(|| {
        if batch_size <= 1 {
            files.par_iter().for_each(|path| {
                let (key, names, file_err) = scan_one(path, parser_bin);
                record_error(&error_count, &file_err);
                results.lock().unwrap().insert(key, names);
                let done = processed.fetch_add(1, Ordering::Relaxed) + 1;
                progress.report(done);
            });
        } else {
            let chunks: Vec<&[PathBuf]> = files.chunks(batch_size).collect();
            chunks.par_iter().for_each(|chunk| {
                let chunk_results = scan_chunk(chunk, parser_bin);
                let chunk_len = chunk_results.len();
                for (key, names, file_err) in chunk_results {
                    record_error(&error_count, &file_err);
                    results.lock().unwrap().insert(key, names);
                }
                let done = processed.fetch_add(chunk_len, Ordering::Relaxed) + chunk_len;
                progress.report(done);
            });
        }
    });

    Ok(ScanSummary {
        results: results.into_inner().unwrap(),
        error_count: error_count.into_inner(),
    })
}

fn record_error(counter: &AtomicUsize, err: &Option<FileError>) {
    if let Some(err) = err {
        log::warn!("{}: {}", err.path.display(), err.message);
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

fn scan_text(path: &Path) -> Result<(String, parsercfc_core::ScanOutput), FileError> {
    let text = fs::read_to_string(path).map_err(|err| FileError {
        path: path.to_path_buf(),
        kind: FileErrorKind::Read,
        message: err.to_string(),
    })?;
    let macros = parsercfc_core::parse_macros(&text);
    let output = parsercfc_core::scan(&text, &macros);
    Ok((text, output))
}

fn merged_names(output: &parsercfc_core::ScanOutput, parser_names: &[String]) -> Vec<String> {
    parsercfc_core::merge(
        &output.ordered_defs,
        &output.template_defs,
        &output.expansion_defs,
        &output.used_macros,
        parser_names,
    )
}

/// On a read error the core scanner has nothing to offer, but the
/// collaborator reads the file itself (raw bytes, not `fs::read_to_string`)
/// and may still produce a result; per the Read-error row of §7 its names
/// are used when available, `[]` otherwise. The read error is still
/// returned for logging either way.
fn scan_one(path: &Path, parser_bin: Option<&Path>) -> (String, Vec<String>, Option<FileError>) {
    let key = path.to_string_lossy().to_string();

    let (_text, output) = match scan_text(path) {
        Ok(pair) => pair,
        Err(read_err) => {
            let fc = match parser_bin {
                Some(bin) => collaborator::parse_one_file(bin, path).unwrap_or_default(),
                None => Vec::new(),
            };
            return (key, fc, Some(read_err));
        }
    };

    match parser_bin {
        None => (key, output.ordered_defs, None),
        Some(bin) => match collaborator::parse_one_file(bin, path) {
            Ok(parser_names) => (key, merged_names(&output, &parser_names), None),
            Err(err) => (key, Vec::new(), Some(err)),
        },
    }
}

fn scan_chunk(chunk: &[PathBuf], parser_bin: Option<&Path>) -> Vec<(String, Vec<String>, Option<FileError>)> {
    let scanned: Vec<(PathBuf, Result<parsercfc_core::ScanOutput, FileError>)> = chunk
        .iter()
        .map(|path| (path.clone(), scan_text(path).map(|(_, output)| output)))
        .collect();

    let batch_result = parser_bin.map(|bin| collaborator::parse_batch_files(bin, chunk));

    scanned
        .into_iter()
        .map(|(path, scan_result)| {
            let key = path.to_string_lossy().to_string();

            let output = match scan_result {
                Ok(output) => output,
                Err(read_err) => {
                    let fc = match &batch_result {
                        Some(Ok((by_path, _))) => by_path.get(&path).cloned().unwrap_or_default(),
                        _ => Vec::new(),
                    };
                    return (key, fc, Some(read_err));
                }
            };

            match &batch_result {
                None => (key, output.ordered_defs, None),
                Some(Ok((by_path, stderr))) => match by_path.get(&path) {
                    Some(parser_names) => (key, merged_names(&output, parser_names), None),
                    None => {
                        let message = if stderr.is_empty() {
                            "missing batch output".to_string()
                        } else {
                            format!("missing batch output; {stderr}")
                        };
                        (
                            key,
                            Vec::new(),
                            Some(FileError {
                                path: path.clone(),
                                kind: FileErrorKind::MissingBatchOutput,
                                message,
                            }),
                        )
                    }
                },
                Some(Err(err)) => (key, Vec::new(), Some(err.clone())),
            }
        })
        .collect()
}
