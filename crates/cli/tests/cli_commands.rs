use predicates::prelude::*;
use tempfile::tempdir;

/// Running the CLI with no arguments should default to a full run in the
/// current directory and print all four reports in order.
#[test]
fn default_command_runs_full_pipeline() {
    let dir = tempdir().expect("tempdir");

    let output = assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .current_dir(dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf8 stdout");

    let positions: Vec<usize> = [
        "The minimum value is",
        "The mode value is",
        "duplicated values",
        "missing values",
        "random values found",
    ]
    .iter()
    .map(|needle| stdout.find(needle).unwrap_or_else(|| panic!("missing '{needle}' in {stdout}")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "reports out of order: {stdout}");

    let data = dir.path().join("binary.dat");
    assert_eq!(std::fs::metadata(&data).expect("binary.dat").len(), 4 + 4 * 1000);
}

#[test]
fn run_with_explicit_options_and_json() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("data.bin");

    let output = assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("run")
        .arg("--path")
        .arg(&path)
        .arg("--length")
        .arg("50")
        .arg("--seed")
        .arg("9")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(body["seed"], 9);
    assert_eq!(body["generated"], 50);
    assert_eq!(body["loaded"], 50);
    assert!(body["write_error"].is_null());
    assert_eq!(body["analyses"].as_array().expect("analyses").len(), 4);
    assert_eq!(body["analyses"][0]["analyzer"], "statistics");
    assert_eq!(body["analyses"][3]["report"]["probes"], 100);
}

/// An unwritable path is reported, the run continues, and the exit code stays 0.
#[test]
fn run_reports_open_failures_and_exits_zero() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing_dir").join("binary.dat");

    assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("run")
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to open binary file to write"))
        .stdout(predicate::str::contains("Unable to open binary file to read"))
        .stdout(predicate::str::contains("No such file or directory"))
        .stdout(predicate::str::contains("statistics: Dataset is empty"))
        .stdout(predicate::str::contains("There are 1000 missing values"));
}

#[test]
fn generate_then_analyze_subset() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("binary.dat");

    assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("generate")
        .arg("--path")
        .arg(&path)
        .arg("--length")
        .arg("20")
        .assert()
        .success()
        .stdout(predicate::str::contains("Values: 20"));

    assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("analyze")
        .arg("--path")
        .arg(&path)
        .arg("--only")
        .arg("missing,duplicates")
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicated values"))
        .stdout(predicate::str::contains("missing values"))
        .stdout(predicate::str::contains("The minimum value").not());
}

/// analyze has nothing to work with when the file is absent, so it fails.
#[test]
fn analyze_fails_when_file_missing() {
    let dir = tempdir().expect("tempdir");

    assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("analyze")
        .arg("--path")
        .arg(dir.path().join("absent.dat"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to analyze"));
}

#[test]
fn analyze_rejects_unknown_analyzer_name() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("binary.dat");
    std::fs::write(&path, 0i32.to_ne_bytes()).unwrap();

    assert_cmd::cargo::cargo_bin_cmd!("binary-analyzer")
        .arg("analyze")
        .arg("--path")
        .arg(&path)
        .arg("--only")
        .arg("median")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown analyzer 'median'"));
}
