// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sharded matching of one document.
//!
//! Distinct tokens are dealt round-robin into `workers` shards (token `i` goes
//! to shard `i % workers`). Each shard collects its own [`KeywordHits`] against
//! a shared `&MatchIndex`; the partial sets are then OR-merged. Workers only
//! ever hold shared borrows of the index, so they cannot mutate it, and merge
//! order cannot change the union.

use rayon::prelude::*;

use super::{KeywordHits, MatchIndex};

/// Matched-keyword sets for `tokens`, computed across `workers` rayon tasks.
pub(super) fn collect_hits_sharded(index: &MatchIndex, tokens: &[&str], workers: usize) -> KeywordHits {
    let workers = workers.clamp(1, tokens.len().max(1));

    (0..workers)
        .into_par_iter()
        .map(|shard| {
            index.collect_hits(tokens.iter().skip(shard).step_by(workers).copied())
        })
        .reduce(KeywordHits::new, KeywordHits::merge)
}
