//! Replay driver over command files on disk.

use std::fs;
use std::io::BufReader;

use super::common::HELLO_SCRIPT;
use lexwatch::{replay, Engine, MatchError, MatcherConfig, ReferenceEngine, ReplayError, ReplaySummary};
use tempfile::TempDir;

fn write_script(dir: &TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, body).unwrap();
    path
}

/// A longer session: overlapping queries, an end, id reuse, and blank lines.
const SESSION: &str = "\
s 1 0 0 2 stream processing
s 2 2 1 1 procesing
s 3 1 2 2 data strexm

m 100 4 real time stream processing
m 101 3 data stream systems
r 100 2 1 2
r 101 1 3
e 2
s 2 0 0 1 systems
m 102 3 data stream systems
r 102 2 3 2
";

#[test]
fn test_replay_file_both_engines() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "session.txt", SESSION);
    let expected = ReplaySummary {
        queries_started: 4,
        queries_ended: 1,
        documents: 3,
        results_checked: 3,
    };

    let file = fs::File::open(&path).unwrap();
    let summary = replay(&mut Engine::with_config(MatcherConfig::sequential()), BufReader::new(file)).unwrap();
    assert_eq!(summary, expected);

    let file = fs::File::open(&path).unwrap();
    let summary = replay(&mut ReferenceEngine::new(), BufReader::new(file)).unwrap();
    assert_eq!(summary, expected);
}

#[test]
fn test_replay_hello_script() {
    let dir = TempDir::new().unwrap();
    let path = write_script(&dir, "hello.txt", HELLO_SCRIPT);
    let file = fs::File::open(path).unwrap();
    let summary = replay(&mut Engine::new(), BufReader::new(file)).unwrap();
    assert_eq!(summary.results_checked, 2);
}

#[test]
fn test_replay_retrieve_past_end() {
    let script = "s 1 0 0 1 a\nm 1 1 a\nr 1 1 1\nr 2 0\n";
    let err = replay(&mut Engine::new(), script.as_bytes()).unwrap_err();
    assert!(
        matches!(
            err,
            ReplayError::Call {
                line: 4,
                source: MatchError::NoAvailableResult,
                ..
            }
        ),
        "{}",
        err
    );
}

#[test]
fn test_replay_wrong_count() {
    let script = "s 1 0 0 1 a\nm 1 1 a\nr 1 2 1\n";
    let err = replay(&mut Engine::new(), script.as_bytes()).unwrap_err();
    assert!(matches!(err, ReplayError::Mismatch { line: 3, .. }));
}

#[test]
fn test_replay_corrupted_file() {
    let err = replay(&mut Engine::new(), "s 1 0 0 1 a\nq 1\n".as_bytes()).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
    assert!(err.to_string().contains("unknown command"));
}

#[test]
fn test_replay_resets_between_runs() {
    let mut engine = Engine::new();
    replay(&mut engine, HELLO_SCRIPT.as_bytes()).unwrap();
    // the same ids start again without a duplicate-id failure
    replay(&mut engine, HELLO_SCRIPT.as_bytes()).unwrap();
}
