// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Standing queries and the table that owns them.
//!
//! The table is the source of truth for "how many keywords does this query
//! have", and the only place the original keywords survive after they have
//! been expanded into the index. Removing a query from the index replays its
//! stored keywords, never anything observed since.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::error::{MatchError, Result};
use crate::index::KeywordRef;
use crate::types::{
    tokenize, MatchMode, QueryId, MAX_KEYWORDS_PER_QUERY, MAX_KEYWORD_LEN, MAX_TOLERANCE,
};

/// A registered query. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub id: QueryId,
    pub mode: MatchMode,
    /// Distinct keywords in order of first appearance; index = slot.
    keywords: Vec<Arc<str>>,
}

impl Query {
    /// Parse whitespace-delimited keyword text.
    pub fn parse(id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<Self> {
        Self::from_keywords(id, tokenize(keyword_text), mode)
    }

    /// Build a query from individual keywords, validating capacity limits.
    ///
    /// Repeated keywords collapse into one slot: "a a" is satisfied by any
    /// document containing "a".
    pub fn from_keywords<'a, I>(id: QueryId, keywords: I, mode: MatchMode) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if mode.tolerance() > MAX_TOLERANCE {
            return Err(MatchError::capacity("tolerance", MAX_TOLERANCE, mode.tolerance()));
        }

        let mut distinct: Vec<Arc<str>> = Vec::new();
        for keyword in keywords {
            let len = keyword.chars().count();
            if len > MAX_KEYWORD_LEN {
                return Err(MatchError::capacity("keyword length", MAX_KEYWORD_LEN, len));
            }
            if distinct.iter().any(|k| &**k == keyword) {
                continue;
            }
            if distinct.len() == MAX_KEYWORDS_PER_QUERY {
                return Err(MatchError::capacity(
                    "keywords per query",
                    MAX_KEYWORDS_PER_QUERY,
                    distinct.len() + 1,
                ));
            }
            distinct.push(Arc::from(keyword));
        }

        Ok(Self {
            id,
            mode,
            keywords: distinct,
        })
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(|k| &**k)
    }

    /// Keywords paired with their slot in the matched-keyword set.
    pub fn keyword_refs(&self) -> impl Iterator<Item = KeywordRef> + '_ {
        self.keywords.iter().enumerate().map(|(slot, text)| KeywordRef {
            slot: slot as u8,
            text: Arc::clone(text),
        })
    }

    #[inline]
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Matched-keyword set in which every keyword has been seen.
    #[inline]
    pub fn full_mask(&self) -> u64 {
        match self.keywords.len() {
            MAX_KEYWORDS_PER_QUERY => u64::MAX,
            n => (1u64 << n) - 1,
        }
    }

    /// Does `matched` cover every keyword?
    #[inline]
    pub fn is_satisfied_by(&self, matched: u64) -> bool {
        matched & self.full_mask() == self.full_mask()
    }
}

/// Active queries keyed by id.
///
/// Queries with no keywords are tracked separately: they never appear in the
/// index, yet every document satisfies them.
#[derive(Debug, Default)]
pub struct QueryTable {
    queries: HashMap<QueryId, Query>,
    keywordless: BTreeSet<QueryId>,
}

impl QueryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `query`. A duplicate id is rejected and the table is unchanged.
    pub fn start(&mut self, query: Query) -> Result<&Query> {
        use std::collections::hash_map::Entry;

        match self.queries.entry(query.id) {
            Entry::Occupied(_) => Err(MatchError::DuplicateQueryId(query.id)),
            Entry::Vacant(slot) => {
                if query.keyword_count() == 0 {
                    self.keywordless.insert(query.id);
                }
                Ok(slot.insert(query))
            }
        }
    }

    /// Remove and return the query, so the caller can unindex it.
    pub fn end(&mut self, id: QueryId) -> Result<Query> {
        let query = self
            .queries
            .remove(&id)
            .ok_or(MatchError::UnknownQueryId(id))?;
        self.keywordless.remove(&id);
        Ok(query)
    }

    #[inline]
    pub fn get(&self, id: QueryId) -> Option<&Query> {
        self.queries.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: QueryId) -> bool {
        self.queries.contains_key(&id)
    }

    /// Queries satisfied by every document, in ascending id order.
    pub fn keywordless(&self) -> impl Iterator<Item = QueryId> + '_ {
        self.keywordless.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }

    pub fn clear(&mut self) {
        self.queries.clear();
        self.keywordless.clear();
    }
}
