//! Integration tests for survey-pattern CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde_json::Value;

/// Path to the survey-pattern binary built for this test run.
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_survey-pattern"))
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    child.wait_with_output().expect("Failed to wait for command")
}

fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("Invalid JSON ({}): {}", e, stdout))
}

/// Points re-read from JSON may differ in the last bit.
fn assert_same_point(actual: &Value, expected: &Value) {
    for key in ["lat", "lng"] {
        let a = actual[key].as_f64().unwrap_or_else(|| panic!("missing {} in {}", key, actual));
        let e = expected[key].as_f64().unwrap_or_else(|| panic!("missing {} in {}", key, expected));
        assert!((a - e).abs() < 1e-9, "{} {} != {}", key, a, e);
    }
}

fn temp_file(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("survey-pattern-{}-{}", std::process::id(), name));
    std::fs::write(&path, content).expect("Failed to write temp file");
    path
}

#[test]
fn patterns_command_lists_all_patterns() {
    let output = run(&["patterns"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("perimeter"), "Should list 'perimeter' pattern");
    assert!(stdout.contains("crosshatch"), "Should list 'crosshatch' pattern");
    assert!(stdout.contains("grid"), "Should list 'grid' pattern");
}

#[test]
fn generate_perimeter_from_center() {
    let output = run(&["generate", "37.7749", "-122.4194", "-p", "perimeter"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    let boundary = json["boundary"].as_array().unwrap();
    assert_eq!(boundary.len(), 5);
    assert_eq!(boundary[0], boundary[4]);
    assert_eq!(json["flightPath"], json["boundary"]);
    assert_eq!(json["internalLines"].as_array().unwrap().len(), 0);
    assert_eq!(json["metadata"]["patternType"], "perimeter");

    let sw_lat = boundary[0]["lat"].as_f64().unwrap();
    assert!((sw_lat - 37.7699).abs() < 1e-9);
}

#[test]
fn generate_crosshatch_counts() {
    let output = run(&["generate", "37.7749", "-122.4194", "-p", "crosshatch"]);
    let json = stdout_json(&output);

    assert_eq!(json["flightPath"].as_array().unwrap().len(), 11);
    assert_eq!(json["internalLines"].as_array().unwrap().len(), 12);
    assert_eq!(json["metadata"]["lineSpacingHint"], 25.0);
}

#[test]
fn generate_grid_from_bounds() {
    let output = run(&["generate", "--bounds", "37.7749,-122.4194,37.7759,-122.4184", "-p", "grid"]);
    let json = stdout_json(&output);

    assert_eq!(json["flightPath"].as_array().unwrap().len(), 13);
    assert_eq!(json["internalLines"].as_array().unwrap().len(), 12);
    assert_eq!(json["boundary"][2]["lat"], 37.7759);
}

#[test]
fn unknown_pattern_falls_back_to_crosshatch() {
    let spiral = run(&["generate", "10", "20", "-p", "spiral"]);
    let crosshatch = run(&["generate", "10", "20", "-p", "crosshatch"]);

    assert!(spiral.status.success());
    assert_eq!(stdout_json(&spiral), stdout_json(&crosshatch));

    let stderr = String::from_utf8_lossy(&spiral.stderr);
    assert!(stderr.contains("spiral"), "Fallback should be logged, got: {}", stderr);
}

#[test]
fn strict_rejects_fallbacks() {
    let output = run(&["generate", "10", "20", "-p", "spiral", "--strict"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
}

#[test]
fn generate_without_location_uses_default_region() {
    let output = run(&["generate", "-p", "perimeter"]);
    let json = stdout_json(&output);
    assert_eq!(json["boundary"][0]["lat"], 37.7749);
    assert_eq!(json["boundary"][0]["lng"], -122.4194);
}

#[test]
fn generate_from_location_on_stdin() {
    let location = r#"{"startLatitude":"37.7833","startLongitude":"-122.4167",
                       "endLatitude":"37.7833","endLongitude":"-122.4167"}"#;
    let output = run_with_stdin(&["generate", "--location", "-", "-p", "grid"], location);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let json = stdout_json(&output);
    let boundary = json["boundary"].as_array().unwrap();
    let south = boundary[0]["lat"].as_f64().unwrap();
    let north = boundary[2]["lat"].as_f64().unwrap();
    assert!((north - south - 0.01).abs() < 1e-9, "Collapsed corners should expand");
}

#[test]
fn config_file_changes_layout() {
    let config = temp_file("config.yaml", "crosshatch_rows: 3\ncrosshatch_lines: 4\n");
    let output = run(&[
        "generate", "0", "0", "-p", "crosshatch", "--config", config.to_str().unwrap(),
    ]);
    let json = stdout_json(&output);

    assert_eq!(json["flightPath"].as_array().unwrap().len(), 7);
    assert_eq!(json["internalLines"].as_array().unwrap().len(), 10);
    let _ = std::fs::remove_file(config);
}

#[test]
fn invalid_config_is_an_error() {
    let config = temp_file("bad.yaml", "grid_columns: 0\n");
    let output = run(&["generate", "0", "0", "--config", config.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("grid_columns"));
    let _ = std::fs::remove_file(config);
}

#[test]
fn position_follows_completion() {
    let generated = run(&["generate", "37.7749", "-122.4194", "-p", "crosshatch"]);
    let pattern = String::from_utf8_lossy(&generated.stdout).to_string();
    let json = stdout_json(&generated);

    let start = run_with_stdin(&["position", "-", "-c", "0"], &pattern);
    assert_same_point(&stdout_json(&start), &json["flightPath"][0]);

    let end = run_with_stdin(&["position", "-", "-c", "100"], &pattern);
    assert_same_point(&stdout_json(&end), &json["flightPath"][10]);

    let clamped = run_with_stdin(&["position", "-", "-c", "150"], &pattern);
    assert_same_point(&stdout_json(&clamped), &json["flightPath"][10]);
}

#[test]
fn position_requires_in_progress_mission() {
    let generated = run(&["generate", "37.7749", "-122.4194", "-p", "perimeter"]);
    let pattern = temp_file("pattern.json", &String::from_utf8_lossy(&generated.stdout));

    let flying = temp_file(
        "flying.json",
        r#"{"missionType":"perimeter","status":"in-progress","completionPercentage":50}"#,
    );
    let output = run(&["position", pattern.to_str().unwrap(), "--mission", flying.to_str().unwrap()]);
    assert!(stdout_json(&output).is_object());

    let done = temp_file(
        "done.json",
        r#"{"missionType":"perimeter","status":"completed","completionPercentage":100}"#,
    );
    let output = run(&["position", pattern.to_str().unwrap(), "--mission", done.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(stdout_json(&output).is_null());

    for path in [pattern, flying, done] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn position_on_empty_path_is_null() {
    let pattern = r#"{"boundary":[],"internalLines":[],"flightPath":[],
        "metadata":{"patternType":"grid","suggestedAltitude":35.0,"suggestedSpeed":3.0}}"#;
    let output = run_with_stdin(&["position", "-", "-c", "50"], pattern);

    assert!(output.status.success());
    assert!(stdout_json(&output).is_null());
}

#[test]
fn position_rejects_extra_arguments() {
    let output = run(&["position", "pattern.json", "other.json", "-c", "50"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unexpected argument: other.json"));
}

#[test]
fn position_accepts_sparse_mission_record() {
    let generated = run(&["generate", "37.7749", "-122.4194", "-p", "grid"]);
    let pattern = temp_file("sparse-pattern.json", &String::from_utf8_lossy(&generated.stdout));
    let mission = temp_file(
        "sparse-mission.json",
        r#"{"missionType":"grid","status":"in-progress","completionPercentage":null,
            "surveyParameters":{"altitude":50}}"#,
    );

    let output = run(&["position", pattern.to_str().unwrap(), "--mission", mission.to_str().unwrap()]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_same_point(&stdout_json(&output), &stdout_json(&generated)["flightPath"][0]);

    for path in [pattern, mission] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn help_command_shows_usage() {
    let output = run(&["help"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("generate"), "Should mention generate command");
    assert!(stderr.contains("position"), "Should mention position command");
    assert!(stderr.contains("patterns"), "Should mention patterns command");
}

#[test]
fn unknown_command_fails() {
    let output = run(&["launch"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command"));
}
