// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Brute-force matching core.
//!
//! Compares every keyword of every active query against every document token
//! with the plain distance functions. Slow, obviously correct, and the oracle
//! the indexed engine is differentially tested against.

use std::collections::BTreeMap;

use crate::engine::{distinct_tokens, ResultQueue};
use crate::error::{MatchError, Result};
use crate::fuzzy::{edit_distance, hamming};
use crate::protocol::MatchingCore;
use crate::query::Query;
use crate::types::{DocId, MatchMode, MatchResult, QueryId};

#[derive(Debug, Default)]
pub struct ReferenceEngine {
    queries: BTreeMap<QueryId, Query>,
    results: ResultQueue,
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Does `token` match `keyword` under `mode`?
    pub fn word_matches(mode: MatchMode, token: &str, keyword: &str) -> bool {
        match mode {
            MatchMode::Exact => token == keyword,
            MatchMode::Hamming(k) => hamming(token, keyword) <= k as usize,
            MatchMode::Edit(k) => edit_distance(token, keyword) <= k as usize,
        }
    }

    /// Ids of every active query `content` satisfies, ascending.
    pub fn matches(&self, content: &str) -> Vec<QueryId> {
        let tokens = distinct_tokens(content);
        self.queries
            .values()
            .filter(|query| {
                query.keywords().all(|keyword| {
                    tokens
                        .iter()
                        .any(|token| Self::word_matches(query.mode, token, keyword))
                })
            })
            .map(|query| query.id)
            .collect()
    }

    pub fn query_count(&self) -> usize {
        self.queries.len()
    }
}

impl MatchingCore for ReferenceEngine {
    fn initialize_index(&mut self) {
        self.queries.clear();
        self.results.clear();
    }

    fn start_query(&mut self, id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<()> {
        if self.queries.contains_key(&id) {
            return Err(MatchError::DuplicateQueryId(id));
        }
        let query = Query::parse(id, keyword_text, mode)?;
        self.queries.insert(id, query);
        Ok(())
    }

    fn end_query(&mut self, id: QueryId) -> Result<()> {
        self.queries
            .remove(&id)
            .map(|_| ())
            .ok_or(MatchError::UnknownQueryId(id))
    }

    fn match_document(&mut self, doc_id: DocId, content: &str) -> Result<()> {
        let satisfied = self.matches(content);
        self.results.push(MatchResult::new(doc_id, satisfied));
        Ok(())
    }

    fn get_next_avail_res(&mut self) -> Result<MatchResult> {
        self.results.pop_next().ok_or(MatchError::NoAvailableResult)
    }
}
