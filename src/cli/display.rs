// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the lexwatch CLI.
//!
//! Colors only when stdout is a terminal and `NO_COLOR` is unset, so piped
//! output stays plain.

use std::time::Duration;

use lexwatch::{IndexStats, ReplaySummary};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED: &str = "\x1b[31m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Should a progress bar be drawn? Only onto a terminal.
pub fn progress_visible() -> bool {
    atty::is(atty::Stream::Stderr)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

pub fn timing(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    if ms < 1000.0 {
        format!("{:.1}ms", ms)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

pub fn print_replay_passed(engine: &str, summary: &ReplaySummary, elapsed: Duration) {
    println!(
        "{} {} engine, {} documents, {} results checked, {} queries started, {} ended {}",
        color(GREEN, "PASS"),
        engine,
        summary.documents,
        summary.results_checked,
        summary.queries_started,
        summary.queries_ended,
        color(DIM, &format!("({})", timing(elapsed))),
    );
}

/// Failures go to stderr, so color follows stderr too.
pub fn print_error(err: &anyhow::Error) {
    if std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stderr) {
        eprintln!("{}FAIL{} {:#}", RED, RESET, err);
    } else {
        eprintln!("FAIL {:#}", err);
    }
}

pub fn print_stats(stats: &IndexStats) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}
