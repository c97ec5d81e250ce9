//! File discovery (§6): recursive `*.c` glob, resolved and sorted.

use parsercfc_api::DriverError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find every regular `.c` file under `dir`, as absolute resolved paths,
/// sorted lexicographically.
pub fn find_c_files(dir: &Path) -> Result<Vec<PathBuf>, DriverError> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().map(|ext| ext == "c").unwrap_or(false))
        .map(|entry| entry.into_path())
        .collect();

    for path in &mut files {
        if let Ok(resolved) = path.canonicalize() {
            *path = resolved;
        }
    }

    files.sort();
    Ok(files)
}
