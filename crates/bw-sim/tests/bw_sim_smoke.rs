use std::fs;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn bw_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bw-sim"))
        .args(args)
        .output()
        .expect("run bw-sim")
}

#[test]
fn count_prints_state_space_size() {
    let output = bw_sim(&["count", "3"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "13\n");
}

#[test]
fn generate_reports_statistics() {
    let output = bw_sim(&["generate", "3", "9", "500", "--stats", "--delimiter", " "]);
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).unwrap();
    assert_eq!(body.lines().count(), 500);
    assert!(body.lines().all(|line| line.split(' ').count() == 3));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("states=00013"), "{stderr}");
}

#[test]
fn place_prints_towers() {
    let output = bw_sim(&["place", "0,5,1,0,4,0"]);
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).unwrap();
    assert_eq!(body, "stack 1: b1 b3\nstack 4: b4 b5 b2\nstack 6: b6\n");
}

#[test]
fn place_rejects_loops() {
    let output = bw_sim(&["place", "2,1"]);
    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("cycle"));
}

#[test]
fn run_writes_manifest_and_states() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("run.yaml");
    fs::write(
        &config_path,
        "blocks: 4\nseed: 3\niterations: 200\nstatistics: true\nshards: 2\n",
    )
    .unwrap();
    let out = dir.path().join("out");

    let output = bw_sim(&[
        "run",
        "--config",
        config_path.to_str().unwrap(),
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let states = fs::read_to_string(out.join("states.txt")).unwrap();
    assert_eq!(states.lines().count(), 200);
    let manifest: Value =
        serde_json::from_str(&fs::read_to_string(out.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest["total_states"], "73");
    assert_eq!(manifest["provenance"]["blocks"], 4);
    assert_eq!(manifest["statistics"]["samples"], 200);
    assert!(out.join("config.yaml").exists());
}

#[test]
fn place_without_arguments_uses_default_world() {
    let output = bw_sim(&["place"]);
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).unwrap();
    let expected: String = (1..=8).map(|n| format!("stack {n}: b{n}\n")).collect();
    assert_eq!(body, expected);
}

#[test]
fn generate_without_samples_keeps_statistics_enabled() {
    let output = bw_sim(&["generate", "3", "1", "0", "--stats"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(!stderr.contains("Must be enabled at startup"), "{stderr}");
    assert!(stderr.contains("no states sampled"), "{stderr}");
}
