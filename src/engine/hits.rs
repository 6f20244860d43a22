// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use crate::query::QueryTable;
use crate::types::QueryId;

/// Per-query sets of keywords matched so far in one document.
///
/// Each set is a bitmask over the query's keyword slots. Merging two partial
/// results is a bitwise OR per query: associative, commutative, and idempotent,
/// so shards can be combined in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordHits {
    matched: HashMap<QueryId, u64>,
}

impl KeywordHits {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, query_id: QueryId, keyword_bit: u64) {
        *self.matched.entry(query_id).or_insert(0) |= keyword_bit;
    }

    #[inline]
    pub fn contains(&self, query_id: QueryId, keyword_bit: u64) -> bool {
        self.matched
            .get(&query_id)
            .is_some_and(|bits| bits & keyword_bit != 0)
    }

    /// Matched-keyword set of one query, empty if none matched.
    #[inline]
    pub fn matched(&self, query_id: QueryId) -> u64 {
        self.matched.get(&query_id).copied().unwrap_or(0)
    }

    /// Union of two partial results.
    pub fn merge(mut self, other: KeywordHits) -> KeywordHits {
        // Fold the smaller map into the larger one.
        let (mut into, from) = if self.matched.len() >= other.matched.len() {
            (std::mem::take(&mut self.matched), other.matched)
        } else {
            (other.matched, std::mem::take(&mut self.matched))
        };
        // INVARIANT: per-query OR, so shard order never changes the union.
        for (query_id, bits) in from {
            *into.entry(query_id).or_insert(0) |= bits;
        }
        KeywordHits { matched: into }
    }

    /// Queries whose every keyword was matched, plus the keywordless ones.
    /// Sorted ascending.
    pub fn satisfied(&self, queries: &QueryTable) -> Vec<QueryId> {
        let mut ids: Vec<QueryId> = self
            .matched
            .iter()
            .filter(|&(id, &bits)| queries.get(*id).is_some_and(|q| q.is_satisfied_by(bits)))
            .map(|(id, _)| *id)
            .chain(queries.keywordless())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Queries with at least one matched keyword.
    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }
}
