//! Collaborator parser discovery (§6): `PARSERCFC_PARSER` / `--parser` ⇒
//! `build/cfc_parser` next to the running executable ⇒ a sibling binary ⇒
//! bare `cfc_parser` on `PATH`.

use parsercfc_api::DriverError;
use std::path::{Path, PathBuf};

/// Resolve the collaborator binary. `explicit` is the already-merged
/// override from `ScanConfig::parser_path` (env or CLI, CLI wins).
///
/// Returns `Ok(Some(path))` when a binary was found, `Ok(None)` when none
/// was found and none was explicitly requested (collaboration should just
/// be skipped), or `Err` when an explicit override does not exist on disk.
pub fn resolve_parser_binary(explicit: Option<&Path>, exe_dir: &Path) -> Result<Option<PathBuf>, DriverError> {
    if let Some(path) = explicit {
        return if path.exists() {
            Ok(Some(path.to_path_buf()))
        } else {
            Err(DriverError::ParserNotFound(path.to_path_buf()))
        };
    }

    let build_candidate = exe_dir.join("build").join("cfc_parser");
    if build_candidate.exists() {
        return Ok(Some(build_candidate));
    }

    let sibling = exe_dir.join("cfc_parser");
    if sibling.exists() {
        return Ok(Some(sibling));
    }

    if which_on_path("cfc_parser").is_some() {
        return Ok(Some(PathBuf::from("cfc_parser")));
    }

    Ok(None)
}

fn which_on_path(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_override_must_exist() {
        let missing = PathBuf::from("/no/such/cfc_parser");
        let result = resolve_parser_binary(Some(&missing), Path::new("/tmp"));
        assert!(result.is_err());
    }

    #[test]
    fn explicit_override_found_is_returned() {
        let dir = tempdir().unwrap();
        let bin = dir.path().join("my_parser");
        fs::write(&bin, "").unwrap();
        let result = resolve_parser_binary(Some(&bin), Path::new("/tmp")).unwrap();
        assert_eq!(result, Some(bin));
    }

    #[test]
    fn finds_build_relative_candidate() {
        let exe_dir = tempdir().unwrap();
        let build_dir = exe_dir.path().join("build");
        fs::create_dir(&build_dir).unwrap();
        fs::write(build_dir.join("cfc_parser"), "").unwrap();

        let result = resolve_parser_binary(None, exe_dir.path()).unwrap();
        assert_eq!(result, Some(build_dir.join("cfc_parser")));
    }

    #[test]
    fn finds_sibling_candidate() {
        let exe_dir = tempdir().unwrap();
        fs::write(exe_dir.path().join("cfc_parser"), "").unwrap();

        let result = resolve_parser_binary(None, exe_dir.path()).unwrap();
        assert_eq!(result, Some(exe_dir.path().join("cfc_parser")));
    }

    #[test]
    fn returns_none_when_nothing_found() {
        let exe_dir = tempdir().unwrap();
        let empty_path_dir = tempdir().unwrap();
        let previous_path = std::env::var_os("PATH");
        std::env::set_var("PATH", empty_path_dir.path());

        let result = resolve_parser_binary(None, exe_dir.path()).unwrap();

        if let Some(path) = previous_path {
            std::env::set_var("PATH", path);
        } else {
            std::env::remove_var("PATH");
        }

        assert!(result.is_none());
    }
}
