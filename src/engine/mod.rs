// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The indexed matching engine.
//!
//! Per document:
//!
//! ```text
//! text ──split──▶ distinct tokens ──deletions(≤3)──▶ (reduced, mask) ──lookup──▶ postings
//!                                                                                  │
//!      result queue ◀── satisfied ids ◀── full keyword sets? ◀── KeywordHits ◀── accept
//! ```
//!
//! [`MatchIndex`] holds everything a match reads (queries, trie, config) and is
//! only borrowed immutably while matching. [`Engine`] adds the result queue and
//! implements [`MatchingCore`]. With the `parallel` feature, [`SharedEngine`]
//! puts the same two halves behind a lock each.

mod accept;
mod hits;
#[cfg(feature = "parallel")]
mod parallel;
mod results;
#[cfg(feature = "parallel")]
mod shared;

pub use accept::accepts;
pub use hits::KeywordHits;
pub use results::ResultQueue;
#[cfg(feature = "parallel")]
pub use shared::SharedEngine;

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::fuzzy::for_each_deletion;
use crate::index::KeywordTrie;
use crate::protocol::MatchingCore;
use crate::query::{Query, QueryTable};
use crate::types::{
    tokenize, DocId, MatchMode, MatchResult, QueryId, MAX_DOCUMENT_TOKEN_LEN, MAX_TOLERANCE,
};

/// Size summary of an engine, for logs and the `stats` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub queries: usize,
    pub trie_nodes: usize,
    pub keyword_paths: usize,
    pub postings: usize,
    pub pending_results: usize,
}

/// Queries plus their deletion-neighborhood index.
#[derive(Debug, Default)]
pub struct MatchIndex {
    config: MatcherConfig,
    queries: QueryTable,
    trie: KeywordTrie,
}

impl MatchIndex {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn queries(&self) -> &QueryTable {
        &self.queries
    }

    pub fn trie(&self) -> &KeywordTrie {
        &self.trie
    }

    pub fn start_query(&mut self, id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<()> {
        if self.queries.contains(id) {
            warn!(query = %id, "rejected start: id already active");
            return Err(MatchError::DuplicateQueryId(id));
        }

        let query = Query::parse(id, keyword_text, mode).inspect_err(|err| {
            warn!(query = %id, %err, "rejected start");
        })?;
        let postings = self.trie.insert_query(&query)?;
        let keywords = query.keyword_count();
        self.queries.start(query)?;

        debug!(query = %id, %mode, keywords, postings, "query started");
        Ok(())
    }

    pub fn end_query(&mut self, id: QueryId) -> Result<()> {
        let Some(query) = self.queries.get(id) else {
            warn!(query = %id, "rejected end: id not active");
            return Err(MatchError::UnknownQueryId(id));
        };

        // Unindex from the stored query before the table forgets it.
        let postings = self.trie.remove_query(query)?;
        self.queries.end(id)?;

        debug!(query = %id, postings, "query ended");
        Ok(())
    }

    /// Ids of every active query `content` satisfies, ascending.
    pub fn matches(&self, content: &str) -> Vec<QueryId> {
        let tokens = distinct_tokens(content);

        #[cfg(feature = "parallel")]
        if self.config.parallel.applies_to(tokens.len()) {
            let hits = parallel::collect_hits_sharded(self, &tokens, self.config.parallel.workers);
            return hits.satisfied(&self.queries);
        }

        self.collect_hits(tokens.iter().copied())
            .satisfied(&self.queries)
    }

    /// Matched-keyword sets for `tokens`. Reads the index only.
    pub fn collect_hits<'t>(&self, tokens: impl IntoIterator<Item = &'t str>) -> KeywordHits {
        let mut hits = KeywordHits::new();
        if self.trie.is_empty() {
            return hits;
        }

        for token in tokens {
            if token.chars().count() > MAX_DOCUMENT_TOKEN_LEN {
                trace!(token, "token longer than any keyword reach, skipped");
                continue;
            }

            let probed = for_each_deletion(token, MAX_TOLERANCE, |reduced, mask| {
                crate::contracts::check_mask_consistent(token, &reduced, mask);
                for posting in self.trie.lookup(&reduced) {
                    let bit = posting.keyword.bit();
                    if hits.contains(posting.query_id, bit) {
                        continue;
                    }
                    if accepts(posting, mask, token, self.config.edit_check) {
                        trace!(
                            query = %posting.query_id,
                            keyword = &*posting.keyword.text,
                            token,
                            "keyword matched"
                        );
                        hits.record(posting.query_id, bit);
                    }
                }
            });
            if let Err(err) = probed {
                warn!(token, %err, "token skipped");
            }
        }

        hits
    }

    pub fn stats(&self) -> IndexStats {
        let trie = self.trie.stats();
        IndexStats {
            queries: self.queries.len(),
            trie_nodes: trie.nodes,
            keyword_paths: trie.keyword_paths,
            postings: trie.postings,
            pending_results: 0,
        }
    }

    pub fn clear(&mut self) {
        self.queries.clear();
        self.trie.clear();
    }
}

/// Whitespace tokens of `content`, first occurrence only, in document order.
pub fn distinct_tokens(content: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    tokenize(content).filter(|t| seen.insert(*t)).collect()
}

/// Single-owner matching engine: index plus result queue.
#[derive(Debug, Default)]
pub struct Engine {
    index: MatchIndex,
    results: ResultQueue,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            index: MatchIndex::new(config),
            results: ResultQueue::new(),
        }
    }

    pub fn index(&self) -> &MatchIndex {
        &self.index
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            pending_results: self.results.len(),
            ..self.index.stats()
        }
    }
}

impl MatchingCore for Engine {
    fn initialize_index(&mut self) {
        self.index.clear();
        self.results.clear();
    }

    fn start_query(&mut self, id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<()> {
        self.index.start_query(id, keyword_text, mode)
    }

    fn end_query(&mut self, id: QueryId) -> Result<()> {
        self.index.end_query(id)
    }

    fn match_document(&mut self, doc_id: DocId, content: &str) -> Result<()> {
        let satisfied = self.index.matches(content);
        debug!(doc = %doc_id, matched = satisfied.len(), "document matched");
        self.results.push(MatchResult::new(doc_id, satisfied));
        Ok(())
    }

    fn get_next_avail_res(&mut self) -> Result<MatchResult> {
        self.results.pop_next().ok_or(MatchError::NoAvailableResult)
    }
}
