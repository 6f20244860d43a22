// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::error::Result;
use crate::protocol::MatchingCore;
use crate::types::{DocId, MatchMode, MatchResult, QueryId};

/// Start every `(id, keywords, mode)` on `core`, panicking on refusal.
pub fn start_all<C: MatchingCore + ?Sized>(core: &mut C, queries: &[(u32, &str, MatchMode)]) {
    for (id, keywords, mode) in queries {
        core.start_query(QueryId(*id), keywords, *mode)
            .unwrap_or_else(|err| panic!("start_query({}, {:?}) failed: {}", id, keywords, err));
    }
}

/// Match one document and pop its result straight back.
pub fn match_one<C: MatchingCore + ?Sized>(core: &mut C, doc_id: u32, content: &str) -> Result<MatchResult> {
    core.match_document(DocId(doc_id), content)?;
    core.get_next_avail_res()
}

/// Pop results until the queue reports empty.
pub fn drain<C: MatchingCore + ?Sized>(core: &mut C) -> Vec<MatchResult> {
    std::iter::from_fn(|| core.get_next_avail_res().ok()).collect()
}

/// Raw ids, for terse assertions.
pub fn ids(result: &MatchResult) -> Vec<u32> {
    result.query_ids.iter().map(|id| id.get()).collect()
}
