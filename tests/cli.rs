//! CLI behavior tests: exit codes, output formats, language selection.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn mentor_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_mentor"));
    // Keep the remote path out of CLI tests regardless of the host env
    cmd.env_remove("ANTHROPIC_API_KEY");
    cmd
}

fn fixture(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(suffix).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn no_args_returns_error_not_panic() {
    let mut cmd = mentor_cmd();
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("PATH").or(predicate::str::contains("path")));
}

#[test]
fn blank_file_rejected_with_client_error() {
    let file = fixture(".js", "   \n\t\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path());
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("No code provided"));
}

#[test]
fn json_output_matches_canonical_schema() {
    let file = fixture(".js", "var x = 1;\nif (x == 1) { console.log(x) }\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path()).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(value["feedback"].as_array().unwrap().len(), 3);
    assert_eq!(value["feedback"][0]["line"], 1);
    assert_eq!(value["feedback"][0]["severity"], "warning");
    assert!(value["overall"].is_string());
}

#[test]
fn language_inferred_from_py_extension() {
    let file = fixture(".py", "def f(): print('hi')\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path()).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    let messages: Vec<&str> = value["feedback"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["message"].as_str().unwrap())
        .collect();
    assert!(messages.iter().any(|m| m.contains("Print statement")));
}

#[test]
fn language_flag_overrides_extension() {
    // JavaScript rules applied to a .py file when asked explicitly
    let file = fixture(".py", "var x = 1;\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path()).arg("--language").arg("javascript").arg("--json");
    let output = cmd.output().unwrap();

    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    assert_eq!(value["feedback"].as_array().unwrap().len(), 1);
}

#[test]
fn unknown_language_yields_empty_feedback() {
    let file = fixture(".js", "var x = 1;\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path()).arg("--language").arg("cobol").arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    assert!(value["feedback"].as_array().unwrap().is_empty());
    assert!(value["overall"].as_str().unwrap().len() > 0);
}

#[test]
fn stdin_input_is_analyzed() {
    let mut cmd = mentor_cmd();
    cmd.arg("-").arg("--json").write_stdin("var x = 1;\n");
    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let s = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(s.trim()).unwrap();
    assert_eq!(value["feedback"].as_array().unwrap().len(), 1);
}

#[test]
fn console_report_prints_overall() {
    let file = fixture(".js", "const x = 1;\n");
    let mut cmd = mentor_cmd();
    cmd.arg(file.path()).arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Great job!"));
}

#[test]
fn file_not_found_exit_2() {
    let mut cmd = mentor_cmd();
    cmd.arg("/nonexistent/snippet.js");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn explain_without_key_prints_placeholder() {
    let mut cmd = mentor_cmd();
    cmd.arg("explain").arg("closures");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("closures"));
}
