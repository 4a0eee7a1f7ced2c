//! Integration tests for `termkit wrap` and `termkit format`.

mod common;

use predicates::prelude::*;
use tempfile::TempDir;

use common::isolated_cmd;

#[test]
fn test_wrap_short_argument() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .args(["wrap", "hello world"])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn test_wrap_custom_width() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .args(["wrap", "--width", "10", "aaa bbb ccc"])
        .assert()
        .success()
        .stdout("aaa bbb\nccc\n");
}

#[test]
fn test_wrap_stdin_with_indent() {
    let home = TempDir::new().expect("create temp dir");
    let text = "the quick brown fox jumps over the lazy dog ".repeat(5);

    let output = isolated_cmd(home.path())
        .args(["wrap", "--indent", "4"])
        .write_stdin(text)
        .output()
        .expect("run termkit");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() > 2);
    for line in lines {
        assert!(line.starts_with("    "), "missing indent: {:?}", line);
        assert!(line.chars().count() <= 78, "line too long: {:?}", line);
    }
}

#[test]
fn test_wrap_rejects_oversized_indent() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .args(["wrap", "--indent", "99999", "text"])
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("--indent"));
}

#[test]
fn test_wrap_keeps_explicit_newlines() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .arg("wrap")
        .write_stdin("ab\ncd\n")
        .assert()
        .success()
        .stdout("ab\ncd\n");
}

#[test]
fn test_wrap_width_from_config() {
    let home = TempDir::new().expect("create temp dir");
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "wrap_width: 10\n").expect("write config");

    isolated_cmd(home.path())
        .args(["wrap", "aaa bbb ccc"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("aaa bbb\nccc\n");
}

#[test]
fn test_format_without_color_strips_markup() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .args(["--color", "never", "format", "**Done** in <fg:green>3s</fg>"])
        .assert()
        .success()
        .stdout("Done in 3s\n");
}

#[test]
fn test_format_with_color_emits_ansi() {
    let home = TempDir::new().expect("create temp dir");

    isolated_cmd(home.path())
        .args(["--color", "always", "format", "**Done**"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["))
        .stdout(predicate::str::contains("Done"))
        .stdout(predicate::str::contains("**").not());
}

#[test]
fn test_format_color_from_config() {
    let home = TempDir::new().expect("create temp dir");
    let config = home.path().join("config.yaml");
    std::fs::write(&config, "color: always\n").expect("write config");

    isolated_cmd(home.path())
        .arg("--config")
        .arg(&config)
        .args(["format", "##inverted##"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b["));
}
