// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::sync::Arc;

use crate::fuzzy::DeletionMask;
use crate::types::{MatchMode, QueryId};

/// A keyword as the index sees it: its text and its slot in the owning query.
///
/// The slot is the keyword's bit in the query's matched-keyword set. The text
/// is shared with the query table, so a keyword expanded into dozens of
/// postings is stored once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeywordRef {
    pub slot: u8,
    pub text: Arc<str>,
}

impl KeywordRef {
    /// The keyword's bit in a matched-keyword set.
    #[inline]
    pub fn bit(&self) -> u64 {
        1 << self.slot
    }
}

/// One `(query, keyword, mask)` entry stored at a trie leaf.
///
/// The leaf's path is the reduced string, so `(path, posting)` fully identifies
/// the entry. The posting never owns the query; `query_id` is a back-reference
/// into the query table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub query_id: QueryId,
    pub mode: MatchMode,
    pub mask: DeletionMask,
    pub keyword: KeywordRef,
}
