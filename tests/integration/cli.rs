use std::path::PathBuf;
use std::process::{Command, Output};

fn idlc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_idlc"))
}

fn write_idl(dir: &tempfile::TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn check_valid_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_idl(&dir, "ok.idl", "foo = record { a: i32 }\n");

    let output = idlc().arg("check").arg(&path).output().unwrap();
    assert!(output.status.success(), "check failed: {}", stderr(&output));
    assert!(stderr(&output).contains("1 file(s) ok"));
}

#[test]
fn check_reports_syntax_errors() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_idl(&dir, "good.idl", "foo = enum { a }\n");
    let bad = write_idl(&dir, "bad.idl", "foo record { }\n");

    let output = idlc().arg("check").arg(&good).arg(&bad).output().unwrap();
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("expected '=', found 'record'"), "stderr: {err}");
    assert!(err.contains("1 of 2 file(s) had syntax errors"), "stderr: {err}");
}

#[test]
fn check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = idlc().arg("check").arg(dir.path().join("absent.idl")).output().unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("absent.idl"));
}

#[test]
fn tokens_lists_every_lexeme() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_idl(&dir, "t.idl", "foo = enum { }");

    let output = idlc().arg("tokens").arg(&path).output().unwrap();
    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "0..3\tIDENT\t\"foo\"");
    assert_eq!(lines[2], "6..10\tenum\t\"enum\"");
    assert_eq!(lines[5], "14..14\tEOF\t\"\"");
}

#[test]
fn ast_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_idl(&dir, "a.idl", "@import \"x.idl\"\nfoo = record { a: i32 }\n");

    let output = idlc().arg("ast").arg(&path).output().unwrap();
    assert!(output.status.success(), "ast failed: {}", stderr(&output));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["imports"][0]["node"], "x.idl");
    assert_eq!(json["type_decls"][0]["ident"]["name"], "foo");
}

#[test]
fn ast_with_errors_still_prints_partial_tree() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_idl(&dir, "p.idl", "foo record { }\n");

    let output = idlc().arg("ast").arg(&path).output().unwrap();
    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["type_decls"][0]["ident"]["name"], "foo");
}
