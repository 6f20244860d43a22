//! The `lexwatch` binary.

use std::fs;
use std::process::Command;

use super::common::HELLO_SCRIPT;
use tempfile::TempDir;

fn lexwatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexwatch"));
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_replay_passes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, HELLO_SCRIPT).unwrap();

    for engine in ["indexed", "reference"] {
        let out = lexwatch()
            .args(["replay", "--engine", engine])
            .arg(&path)
            .output()
            .unwrap();
        assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.starts_with("PASS"), "{}", stdout);
        assert!(stdout.contains("2 results checked"), "{}", stdout);
    }
}

#[test]
fn test_cli_replay_failure_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "s 1 0 0 1 a\nm 1 1 a\nr 1 0\n").unwrap();

    let out = lexwatch().arg("replay").arg(&path).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("line 3"));
}

#[test]
fn test_cli_replay_with_config() {
    let dir = TempDir::new().unwrap();
    let script = dir.path().join("hello.txt");
    let config = dir.path().join("config.json");
    fs::write(&script, HELLO_SCRIPT).unwrap();
    fs::write(&config, r#"{ "edit_check": "levenshtein", "parallel": { "min_tokens": 1 } }"#).unwrap();

    let out = lexwatch()
        .args(["replay", "--workers", "2", "--config"])
        .arg(&config)
        .arg(&script)
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let out = lexwatch()
        .args(["replay", "--workers", "0"])
        .arg(&script)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_cli_match_prints_ids() {
    let out = lexwatch()
        .args([
            "match",
            "--query",
            "2:edit:1:wrld",
            "--query",
            "1:hamming:1:hello world",
            "--query",
            "3:exact:0:absent",
            "--document",
            "hxllo world",
        ])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "[1,2]");
}

#[test]
fn test_cli_stats_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "s 1 0 0 1 ab\ns 2 2 1 1 ab\ns 3 0 0 1 cd\ne 3\nm 1 1 ab\n").unwrap();

    let out = lexwatch().arg("stats").arg(&path).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));

    let stats: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(stats["queries"], 2);
    // "ab" exact, plus "ab", "b", "a" for the edit query
    assert_eq!(stats["postings"], 4);
    assert_eq!(stats["keyword_paths"], 3);
}
