//! End-to-end exercise of the driver: builds a small tree of `.c` files,
//! runs a full scan with no collaborator, and checks the two JSON
//! artifacts against the scenarios the scanner itself is designed around.

use parsercfc_api::ScanConfig;
use std::fs;
use tempfile::tempdir;

fn config_for(dir: &std::path::Path) -> ScanConfig {
    let mut config = ScanConfig::default();
    config.output_fc = dir.join("fc.json");
    config.output_null_fc = dir.join("null_fc.json");
    config.use_collaborator = false;
    config.workers = 2;
    config
}

#[test]
fn writes_sorted_artifacts_for_a_small_tree() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();

    fs::write(
        dir.path().join("plain.c"),
        "int foo(void) { return 0; } static void bar(int x) { }\n",
    )
    .unwrap();
    fs::write(dir.path().join("empty.c"), "int forward_decl(void);\n").unwrap();
    fs::write(
        dir.path().join("sub/macro.c"),
        "#define PFX(n) my_##n\nvoid PFX(init)(void) { }\n",
    )
    .unwrap();

    let config = config_for(dir.path());
    let summary = parsercfc_cli::run(dir.path(), &config, dir.path()).unwrap();

    assert_eq!(summary.total_files, 3);
    assert_eq!(summary.error_count, 0);

    let fc_text = fs::read_to_string(&config.output_fc).unwrap();
    let fc_json: serde_json::Value = serde_json::from_str(&fc_text).unwrap();
    let keys: Vec<&String> = fc_json.as_object().unwrap().keys().collect();
    let mut sorted_keys = keys.clone();
    sorted_keys.sort();
    assert_eq!(keys, sorted_keys);

    let plain_path = dir.path().join("plain.c").canonicalize().unwrap();
    let plain_key = plain_path.to_string_lossy().to_string();
    assert_eq!(
        fc_json[&plain_key]["fc"],
        serde_json::json!(["foo", "bar"])
    );

    let macro_path = dir.path().join("sub/macro.c").canonicalize().unwrap();
    let macro_key = macro_path.to_string_lossy().to_string();
    assert_eq!(fc_json[&macro_key]["fc"], serde_json::json!(["my_init"]));

    let null_text = fs::read_to_string(&config.output_null_fc).unwrap();
    let null_json: serde_json::Value = serde_json::from_str(&null_text).unwrap();
    let empty_path = dir.path().join("empty.c").canonicalize().unwrap();
    let empty_key = empty_path.to_string_lossy().to_string();
    assert_eq!(null_json, serde_json::json!([empty_key]));
}

#[test]
fn determinism_across_worker_counts() {
    let dir = tempdir().unwrap();
    for i in 0..8 {
        fs::write(
            dir.path().join(format!("f{i}.c")),
            format!("int fn{i}(void) {{ return {i}; }}\n"),
        )
        .unwrap();
    }

    let mut config_one = config_for(dir.path());
    config_one.output_fc = dir.path().join("fc_one.json");
    config_one.output_null_fc = dir.path().join("null_one.json");
    config_one.workers = 1;

    let mut config_many = config_for(dir.path());
    config_many.output_fc = dir.path().join("fc_many.json");
    config_many.output_null_fc = dir.path().join("null_many.json");
    config_many.workers = 8;

    parsercfc_cli::run(dir.path(), &config_one, dir.path()).unwrap();
    parsercfc_cli::run(dir.path(), &config_many, dir.path()).unwrap();

    let one = fs::read_to_string(&config_one.output_fc).unwrap();
    let many = fs::read_to_string(&config_many.output_fc).unwrap();
    assert_eq!(one, many);
}

#[test]
fn directory_with_no_c_files_still_succeeds() {
    let dir = tempdir().unwrap();
    let config = config_for(dir.path());
    let summary = parsercfc_cli::run(dir.path(), &config, dir.path()).unwrap();
    assert_eq!(summary.total_files, 0);
    assert_eq!(fs::read_to_string(&config.output_null_fc).unwrap().trim(), "[]");
}
