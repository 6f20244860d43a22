// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the index.
//!
//! Debug-mode assertions over the properties the engine relies on. They
//! compile to nothing in release builds; the whole-tree walks are additionally
//! gated on `debug_assertions` so release code never pays for them.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                             |
//! |----------------------------|------------------------------------------------------|
//! | `check_query_indexed`      | a query owns `Σ C(n, i)` postings per keyword        |
//! | `check_query_absent`       | an ended query owns no postings                      |
//! | `check_mask_consistent`    | a reduced string is the token minus its mask         |

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

const _: () = {
    use crate::types::{MAX_DOCUMENT_TOKEN_LEN, MAX_KEYWORDS_PER_QUERY, MAX_KEYWORD_LEN, MAX_MASK_LEN, MAX_TOLERANCE};

    // A matched-keyword set is one u64.
    assert!(MAX_KEYWORDS_PER_QUERY <= 64);
    // Every document token that could reach a keyword fits a mask.
    assert!(MAX_KEYWORD_LEN + MAX_TOLERANCE <= MAX_DOCUMENT_TOKEN_LEN);
    assert!(MAX_DOCUMENT_TOKEN_LEN <= MAX_MASK_LEN);
    // Slots are stored as u8.
    assert!(MAX_KEYWORDS_PER_QUERY <= u8::MAX as usize + 1);
};

use crate::fuzzy::DeletionMask;
use crate::index::KeywordTrie;
use crate::query::Query;

// ============================================================================
// INDEX CONTRACTS
// ============================================================================

/// Check that `query` is fully indexed: no partial insert.
///
/// Only the query's own neighborhood paths are visited, so the check costs
/// what the insert did.
///
/// # Panics (debug builds only)
/// Panics if the trie holds a different number of postings for `query.id`
/// than the neighborhoods of its keywords add up to.
#[inline]
pub fn check_query_indexed(trie: &KeywordTrie, query: &Query) {
    #[cfg(debug_assertions)]
    {
        let expected: usize = query
            .keywords()
            .map(|k| crate::fuzzy::neighborhood_size(k.chars().count(), query.mode.tolerance()))
            .sum();
        let actual = owned_postings(trie, query);
        debug_assert_eq!(
            actual, expected,
            "Contract violation: query {} has {} postings, its neighborhoods have {}",
            query.id, actual, expected
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = (trie, query);
}

/// Check that no posting of `query` survives its removal.
///
/// # Panics (debug builds only)
/// Panics if any path in the query's neighborhood still holds one of its postings.
#[inline]
pub fn check_query_absent(trie: &KeywordTrie, query: &Query) {
    #[cfg(debug_assertions)]
    {
        let left = owned_postings(trie, query);
        debug_assert_eq!(
            left, 0,
            "Contract violation: query {} still owns {} postings after removal",
            query.id, left
        );
    }
    #[cfg(not(debug_assertions))]
    let _ = (trie, query);
}

#[cfg(debug_assertions)]
fn owned_postings(trie: &KeywordTrie, query: &Query) -> usize {
    match trie.postings_of_query(query) {
        Ok(count) => count,
        Err(err) => panic!("Contract violation: query {} cannot be re-expanded: {}", query.id, err),
    }
}

// ============================================================================
// MASK CONTRACTS
// ============================================================================

/// Check that `reduced` is `token` with the chars of `mask` removed.
#[inline]
pub fn check_mask_consistent(token: &str, reduced: &str, mask: DeletionMask) {
    debug_assert_eq!(
        mask.token_len(),
        token.chars().count(),
        "Contract violation: mask length differs from token {:?}",
        token
    );
    debug_assert_eq!(
        reduced.chars().count() + mask.deletions(),
        mask.token_len(),
        "Contract violation: {:?} is not {:?} minus {:?}",
        reduced,
        token,
        mask
    );
}
