//! Output artifacts (§6): `fc.json` / `null_fc.json`, UTF-8 with
//! ASCII-escaped non-ASCII bytes and two-space indentation.

use parsercfc_api::DriverError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Serialize)]
struct FcEntry<'a> {
    fc: &'a [String],
}

/// Escape every non-ASCII character as `\uXXXX` (surrogate pairs for
/// astral code points), mirroring `json.dump(..., ensure_ascii=True)`.
/// JSON syntax outside of string content is always ASCII, so a blanket
/// sweep over the already-serialized text is equivalent to, and much
/// simpler than, a custom `serde_json::ser::Formatter`.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut buf = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut buf) {
                out.push_str(&format!("\\u{unit:04x}"));
            }
        }
    }
    out
}

fn to_ascii_pretty_json<T: Serialize>(value: &T) -> Result<String, DriverError> {
    let pretty = serde_json::to_string_pretty(value)?;
    Ok(escape_non_ascii(&pretty))
}

fn write_file(path: &Path, contents: &str) -> Result<(), DriverError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| DriverError::OutputWrite {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, contents).map_err(|source| DriverError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `fc.json` and `null_fc.json` from the accumulated per-file
/// results, keyed by absolute source path.
pub fn write_artifacts(
    results: &BTreeMap<String, Vec<String>>,
    output_fc: &Path,
    output_null_fc: &Path,
) -> Result<(), DriverError> {
    let fc_doc: BTreeMap<&String, FcEntry> = results
        .iter()
        .map(|(path, fc)| (path, FcEntry { fc }))
        .collect();
    let fc_json = to_ascii_pretty_json(&fc_doc)?;
    write_file(output_fc, &fc_json)?;

    let mut null_paths: Vec<&String> = results
        .iter()
        .filter(|(_, fc)| fc.is_empty())
        .map(|(path, _)| path)
        .collect();
    null_paths.sort();
    let null_json = to_ascii_pretty_json(&null_paths)?;
    write_file(output_null_fc, &null_json)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn escapes_non_ascii_characters() {
        let escaped = escape_non_ascii("\"caf\u{e9}\"");
        assert_eq!(escaped, "\"caf\\u00e9\"");
    }

    #[test]
    fn leaves_ascii_untouched() {
        let escaped = escape_non_ascii("{\"fc\": [\"main\"]}");
        assert_eq!(escaped, "{\"fc\": [\"main\"]}");
    }

    #[test]
    fn writes_sorted_artifacts() {
        let dir = tempdir().unwrap();
        let mut results = BTreeMap::new();
        results.insert("/z.c".to_string(), vec!["main".to_string()]);
        results.insert("/a.c".to_string(), Vec::new());

        let fc_path = dir.path().join("fc.json");
        let null_path = dir.path().join("null_fc.json");
        write_artifacts(&results, &fc_path, &null_path).unwrap();

        let fc_contents = fs::read_to_string(&fc_path).unwrap();
        let null_contents = fs::read_to_string(&null_path).unwrap();

        assert!(fc_contents.find("/a.c").unwrap() < fc_contents.find("/z.c").unwrap());
        assert_eq!(null_contents.trim(), "[\n  \"/a.c\"\n]");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let nested_fc = dir.path().join("nested/fc.json");
        let nested_null = dir.path().join("nested/null_fc.json");
        let results = BTreeMap::new();

        write_artifacts(&results, &nested_fc, &nested_null).unwrap();
        assert!(nested_fc.exists());
        assert!(nested_null.exists());
    }
}
