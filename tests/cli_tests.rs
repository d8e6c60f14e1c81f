// End-to-end tests of the resviz binary

use assert_cmd::Command;
use fixtures::{write_result_file, MIXED_RESULTS, SINGLE_RECORD};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command with config lookup isolated to the temp directory.
fn cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("resviz").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env("XDG_CONFIG_HOME", temp_dir.path().join("config"));
    cmd
}

/// Temp dir with one mixed result file under data/.
fn setup_data() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data");
    fs::create_dir(&data).unwrap();
    write_result_file(&data, "run.json", MIXED_RESULTS);
    temp_dir
}

fn data_arg(temp_dir: &TempDir) -> String {
    temp_dir.path().join("data").display().to_string()
}

#[test]
fn test_summary_text_output() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args(["summary", &data_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total number of datapoints: 3"))
        .stdout(predicate::str::contains(
            "Total number of missing datapoints: 1",
        ))
        .stdout(predicate::str::contains("run-p1: 1"))
        .stdout(predicate::str::contains("run-p2: 0"));
}

#[test]
fn test_summary_json_output() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args(["summary", &data_arg(&temp_dir), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total\": 3"))
        .stdout(predicate::str::contains("\"missing\": 1"))
        .stdout(predicate::str::contains("\"per_pipeline\""));
}

#[test]
fn test_summary_empty_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let empty = temp_dir.path().join("empty");
    fs::create_dir(&empty).unwrap();
    cmd(&temp_dir)
        .args(["summary", &empty.display().to_string()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no result files found"));
}

#[test]
fn test_summary_grouped_output() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    let g1 = root.join("site-a");
    let g2 = root.join("site-b");
    fs::create_dir_all(&g1).unwrap();
    fs::create_dir_all(&g2).unwrap();
    write_result_file(&g1, "run.json", SINGLE_RECORD);
    write_result_file(&g2, "run.json", MIXED_RESULTS);

    cmd(&temp_dir)
        .args(["summary", &root.display().to_string(), "--grouped"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[site-a]"))
        .stdout(predicate::str::contains("[site-b]"))
        .stdout(predicate::str::contains("Total number of datapoints: 1"))
        .stdout(predicate::str::contains("Total number of datapoints: 3"));
}

#[test]
fn test_list_table_output() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args(["list", &data_arg(&temp_dir)])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject"))
        .stdout(predicate::str::contains("Dataset-Pipeline"))
        .stdout(predicate::str::contains("run-p1"))
        .stdout(predicate::str::contains("N/A"));
}

#[test]
fn test_list_json_output() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args(["list", &data_arg(&temp_dir), "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"subject\": \"A\""))
        .stdout(predicate::str::contains("\"dataset_pipeline\": \"run-p1\""))
        .stdout(predicate::str::contains("\"color\""));
}

#[test]
fn test_list_limit() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args(["list", &data_arg(&temp_dir), "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("... 2 more rows"));
}

#[test]
fn test_inspect_resolves_both_axes() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args([
            "inspect",
            &data_arg(&temp_dir),
            "--x-result",
            "5",
            "--y-result",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: A"))
        .stdout(predicate::str::contains("Subject: B"))
        .stdout(predicate::str::contains("Pipeline steps:"))
        .stdout(predicate::str::contains(
            "Task ID: 103 <https://portal.cbrain.mcgill.ca/tasks/103>",
        ));
}

#[test]
fn test_inspect_with_missing_result_coordinate() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args([
            "inspect",
            &data_arg(&temp_dir),
            "--x-result",
            "-1",
            "--x-pipeline",
            "run-p1",
            "--y-result",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Subject: C"))
        .stdout(predicate::str::contains("Result: N/A"));
}

#[test]
fn test_inspect_stale_click_prints_no_selection() {
    let temp_dir = setup_data();
    cmd(&temp_dir)
        .args([
            "inspect",
            &data_arg(&temp_dir),
            "--x-result",
            "123",
            "--y-result",
            "7",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching datapoint."));
}

#[test]
fn test_palettes_listing() {
    let temp_dir = TempDir::new().unwrap();
    cmd(&temp_dir)
        .args(["palettes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("qualitative"))
        .stdout(predicate::str::contains("#3366CC"));
}

#[test]
fn test_custom_palette_file() {
    let temp_dir = setup_data();
    let palette_file = temp_dir.path().join("palettes.json");
    fs::write(
        &palette_file,
        r##"{"palettes": [{"name": "mono", "colors": ["#ABCDEF"]}]}"##,
    )
    .unwrap();
    cmd(&temp_dir)
        .args([
            "list",
            &data_arg(&temp_dir),
            "--json",
            "--palettes",
            &palette_file.display().to_string(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("#ABCDEF"));
}

#[test]
fn test_malformed_palette_file_is_a_user_error() {
    let temp_dir = setup_data();
    let palette_file = temp_dir.path().join("palettes.json");
    fs::write(&palette_file, r#"{"palettes": []}"#).unwrap();
    cmd(&temp_dir)
        .args([
            "summary",
            &data_arg(&temp_dir),
            "--palettes",
            &palette_file.display().to_string(),
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_version_flag() {
    let temp_dir = TempDir::new().unwrap();
    cmd(&temp_dir)
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("resviz"));
}
