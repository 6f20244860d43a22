// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mode-specific acceptance of a posting hit.
//!
//! A hit means a document token and a keyword reduced to the same string. Whether
//! that proves a match depends on the query's mode:
//!
//! | Mode    | Accept iff                                                      |
//! |---------|-----------------------------------------------------------------|
//! | Exact   | neither side deleted anything                                   |
//! | Hamming | both sides deleted the same positions, at most `k` of them      |
//! | Edit    | gap-aligned mask cost `<= k` (or bounded DP, see [`EditCheck`]) |
//!
//! Hamming needs identical masks because substitutions never shift positions:
//! deleting the differing positions from both tokens leaves equal strings.

use crate::config::EditCheck;
use crate::fuzzy::{levenshtein_within, DeletionMask};
use crate::index::Posting;
use crate::types::MatchMode;

/// Does `token`, reduced by `doc_mask` onto the posting's path, satisfy the posting?
#[inline]
pub fn accepts(posting: &Posting, doc_mask: DeletionMask, token: &str, edit_check: EditCheck) -> bool {
    match posting.mode {
        MatchMode::Exact => doc_mask.is_empty() && doc_mask == posting.mask,
        MatchMode::Hamming(k) => doc_mask == posting.mask && doc_mask.deletions() <= k as usize,
        MatchMode::Edit(k) => match edit_check {
            EditCheck::AlignedMask => doc_mask.aligned_cost(posting.mask) <= k as usize,
            EditCheck::Levenshtein => levenshtein_within(token, &posting.keyword.text, k as usize),
        },
    }
}
