//! CLI tests for the `collatz` binary.
//!
//! Spawns the binary and verifies stdout and exit codes for the `run`,
//! `lengths`, and `tree` commands.

use std::process::{Command, Output};

use collatz::exit_codes;

fn collatz(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_collatz"))
        .args(args)
        .output()
        .expect("spawn collatz")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn run_traces_values_and_prints_summary() {
    let output = collatz(&["run", "6"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(
        lines,
        vec!["6", "3", "10", "5", "16", "8", "4", "2", "1", "[6 -> 1]: 8 iterations"]
    );
}

#[test]
fn run_quiet_prints_only_summary() {
    let output = collatz(&["run", "--quiet", "27"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "[27 -> 1]: 111 iterations\n");
}

#[test]
fn run_rejects_zero() {
    let output = collatz(&["run", "0"]);
    assert_ne!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn run_rejects_non_numeric_argument() {
    let output = collatz(&["run", "banana"]);
    assert_ne!(output.status.code(), Some(exit_codes::OK));
    assert!(output.stdout.is_empty());
}

#[test]
fn run_requires_an_argument() {
    let output = collatz(&["run"]);
    assert_ne!(output.status.code(), Some(exit_codes::OK));
}

#[test]
fn lengths_emits_rows_and_summary() {
    let output = collatz(&["lengths", "1", "3"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[..3], ["1: 0", "2: 1", "3: 7"]);
    assert!(lines[3].starts_with("[1..3]: mean "));
}

#[test]
fn lengths_json_parses_with_expected_shape() {
    let output = collatz(&["lengths", "1", "3", "--json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("parse json");
    assert_eq!(value["stats"]["low"], 1);
    assert_eq!(value["stats"]["high"], 3);
    assert_eq!(value["stats"]["count"], 3);
    assert_eq!(value["rows"][2]["len"], 7);
}

#[test]
fn lengths_rejects_inverted_interval() {
    let output = collatz(&["lengths", "5", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("low must be <= high"));
}

#[test]
fn tree_lists_layers() {
    let output = collatz(&["tree", "1", "--max-depth", "2"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "0: 1\n1: 2 <- 1\n2: 4 <- 2\n");
}

#[test]
fn tree_dot_emits_digraph() {
    let output = collatz(&["tree", "1", "--max-depth", "3", "--dot"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert!(text.starts_with("digraph collatz {"));
    assert!(text.contains("\"1\" -> \"2\";"));
    assert!(text.trim_end().ends_with('}'));
}
