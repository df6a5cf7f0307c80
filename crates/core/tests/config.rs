use std::path::PathBuf;

use analyzer_core::config::{load_run_config, RunConfig, DEFAULT_DATA_FILE};
use tempfile::tempdir;

#[test]
fn defaults_match_reference_run() {
    let config = RunConfig::default();
    assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_FILE));
    assert_eq!(config.length, 1000);
    assert_eq!(config.probes, 100);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn loads_partial_json_with_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.json");
    std::fs::write(&path, r#"{"length": 42, "seed": 7}"#).unwrap();

    let config = load_run_config(&path).unwrap();

    assert_eq!(config.length, 42);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.probes, 100);
    assert_eq!(config.data_path, PathBuf::from("binary.dat"));
}

#[test]
fn loads_yaml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.yml");
    std::fs::write(&path, "data_path: out/data.bin\nprobes: 5\n").unwrap();

    let config = load_run_config(&path).unwrap();

    assert_eq!(config.data_path, PathBuf::from("out/data.bin"));
    assert_eq!(config.probes, 5);
    assert_eq!(config.length, 1000);
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.toml");
    std::fs::write(&path, "length = 3").unwrap();
    let err = load_run_config(&path).unwrap_err();
    assert!(err.to_string().contains("Unsupported run config extension"));
}

#[test]
fn reports_missing_and_corrupt_files() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("absent.json");
    let err = load_run_config(&missing).unwrap_err();
    assert!(err.to_string().contains("Failed to read run config"));

    let corrupt = dir.path().join("bad.json");
    std::fs::write(&corrupt, "not-json").unwrap();
    let err = load_run_config(&corrupt).unwrap_err();
    assert!(err.to_string().contains("Failed to parse run config JSON"));
}

#[test]
fn rejects_length_beyond_length_prefix() {
    let config = RunConfig { length: i32::MAX as usize + 1, ..RunConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("'length'"));
}
