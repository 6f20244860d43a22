// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexwatch command-line interface.
//!
//! Three subcommands: `replay` to run a recorded command file against an
//! engine and check every result, `match` for one-shot matching of a single
//! document, and `stats` to report how large the index for a file's queries
//! gets.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use lexwatch::{MatchMode, QueryId};

#[derive(Parser)]
#[command(
    name = "lexwatch",
    about = "Standing keyword queries matched against streaming documents",
    version
)]
pub struct Cli {
    /// Log more (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a command file and check every retrieved result
    Replay {
        /// Command file (s/e/m/r lines)
        file: PathBuf,

        /// Matching core to drive
        #[arg(long, value_enum, default_value = "indexed")]
        engine: EngineKind,

        /// JSON engine configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Token shards per document (overrides the config file)
        #[arg(long)]
        workers: Option<usize>,

        /// Match every document on the calling thread
        #[arg(long)]
        no_parallel: bool,

        /// Confirm edit-distance hits with Levenshtein DP instead of mask alignment
        #[arg(long)]
        verify_edits: bool,

        /// Show a progress bar (only when stderr is a terminal)
        #[arg(long)]
        progress: bool,
    },

    /// Match one document against ad-hoc queries and print the satisfied ids
    Match {
        /// Query as `<id>:<mode>:<tolerance>:<keywords>`, mode one of exact|hamming|edit
        #[arg(short, long = "query", value_parser = parse_query_spec, required = true)]
        queries: Vec<QuerySpec>,

        /// Document text
        #[arg(short, long)]
        document: String,
    },

    /// Load the queries of a command file and print index statistics
    Stats {
        /// Command file; only s/e lines are applied
        file: PathBuf,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Deletion-neighborhood trie
    Indexed,
    /// Brute-force comparison of every keyword with every token
    Reference,
}

/// A query given on the command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuerySpec {
    pub id: QueryId,
    pub mode: MatchMode,
    pub keywords: String,
}

/// Parse `<id>:<mode>:<tolerance>:<keywords>`.
pub fn parse_query_spec(raw: &str) -> Result<QuerySpec, String> {
    let mut parts = raw.splitn(4, ':');
    let (Some(id), Some(mode), Some(tolerance), Some(keywords)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!("expected <id>:<mode>:<tolerance>:<keywords>, got {:?}", raw));
    };

    let id: u32 = id.trim().parse().map_err(|_| format!("invalid query id {:?}", id))?;
    let tolerance: u32 = tolerance
        .trim()
        .parse()
        .map_err(|_| format!("invalid tolerance {:?}", tolerance))?;
    let match_type = match mode.trim().to_ascii_lowercase().as_str() {
        "exact" => 0,
        "hamming" => 1,
        "edit" => 2,
        other => return Err(format!("unknown mode {:?} (exact|hamming|edit)", other)),
    };
    let mode = MatchMode::from_parts(match_type, tolerance).map_err(|e| e.to_string())?;

    Ok(QuerySpec {
        id: QueryId(id),
        mode,
        keywords: keywords.to_string(),
    })
}
