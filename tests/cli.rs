// CLI integration tests: dump, re-serialize and failure exit codes.
use std::io::Write;
use std::process::{Command, Stdio};

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_loose-json");
    Command::new(exe)
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8")
}

#[test]
fn dumps_value_tree() {
    let output = cmd().arg(r#"{ "key": [] }"#).output().expect("run");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.contains("Object("));
    assert!(stdout.contains("\"key\""));
    assert!(stdout.contains("Array("));
}

#[test]
fn reserializes_with_flag() {
    let output = cmd()
        .args(["--serialize", r#"{"a":1 "b":[1.5e2, 1e2]}"#])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim_end(), r#"{"a":1,"b":[150.0,1]}"#);
}

#[test]
fn reads_stdin_when_text_is_omitted() {
    let mut child = cmd()
        .arg("--serialize")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all("[\"∏\", null]".as_bytes())
        .expect("write");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim_end(), r#"["∏",null]"#);
}

#[test]
fn parse_errors_exit_nonzero() {
    let output = cmd().arg(r#"{"a" 1}"#).output().expect("run");
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected colon"));
    assert!(stderr.contains(r#"near '{ "a" 1 }'"#));
}

#[test]
fn max_depth_flag_limits_nesting() {
    let output = cmd()
        .args(["--max-depth", "2", "[[[]]]"])
        .output()
        .expect("run");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Maximum nesting depth of 2"));
}
