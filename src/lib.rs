// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate keyword matching for standing queries.
//!
//! Queries are registered ahead of time; documents stream through and each
//! one is reported with the ids of every query all of whose keywords it
//! contains, exactly or within a Hamming or edit distance of up to
//! [`MAX_TOLERANCE`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  fuzzy/     │────▶│  index/      │────▶│  engine/     │
//! │ (distances, │     │ (KeywordTrie,│     │ (MatchIndex, │
//! │  deletions, │     │  Posting)    │     │  Engine,     │
//! │  masks)     │     │              │     │  ResultQueue)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   ▲                    │
//!        ▼                   │                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ reference   │     │  query.rs    │     │  replay/     │
//! │ (oracle)    │     │ (QueryTable) │     │ (driver)     │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Keywords are indexed under their deletion neighborhood: every string left
//! after removing up to `k` chars, tagged with a mask of which chars went.
//! A document token is expanded the same way and looked up; a shared string
//! plus a mode-specific comparison of the two masks decides the match.
//!
//! # Usage
//!
//! ```
//! use lexwatch::{DocId, Engine, MatchMode, MatchingCore, QueryId};
//!
//! let mut engine = Engine::new();
//! engine.start_query(QueryId(1), "hello world", MatchMode::Hamming(1)).unwrap();
//! engine.match_document(DocId(1), "hxllo world").unwrap();
//!
//! let result = engine.get_next_avail_res().unwrap();
//! assert_eq!(result.query_ids, vec![QueryId(1)]);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod engine;
mod error;
pub mod fuzzy;
mod index;
mod protocol;
mod query;
mod reference;
pub mod replay;
pub mod testing;
mod types;

// Re-exports for public API
pub use config::{ConfigError, EditCheck, MatcherConfig, ParallelConfig};
pub use engine::{accepts, distinct_tokens, Engine, IndexStats, KeywordHits, MatchIndex, ResultQueue};
#[cfg(feature = "parallel")]
pub use engine::SharedEngine;
pub use error::{ErrorCode, MatchError, Result};
pub use fuzzy::{
    deletions, edit_distance, for_each_deletion, hamming, levenshtein_within, neighborhood_size,
    DeletionEntry, DeletionMask, HAMMING_LENGTH_MISMATCH,
};
pub use index::{KeywordRef, KeywordTrie, Posting, TrieStats};
pub use protocol::MatchingCore;
pub use query::{Query, QueryTable};
pub use reference::ReferenceEngine;
pub use replay::{replay, replay_with_progress, ReplayError, ReplaySummary};
pub use types::{
    tokenize, DocId, MatchMode, MatchResult, QueryId, MAX_DOCUMENT_TOKEN_LEN,
    MAX_KEYWORDS_PER_QUERY, MAX_KEYWORD_LEN, MAX_MASK_LEN, MAX_TOLERANCE,
};
