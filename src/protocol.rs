// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The call contract every matching core exposes.
//!
//! Harnesses drive a core through these six calls and inspect every return.
//! [`Engine`](crate::Engine) implements it with the deletion-neighborhood index;
//! [`ReferenceEngine`](crate::ReferenceEngine) implements it by brute force and
//! serves as the oracle in tests.

use crate::error::Result;
use crate::types::{DocId, MatchMode, MatchResult, QueryId};

pub trait MatchingCore {
    /// Drop every query, index entry, and pending result. Idempotent.
    fn initialize_index(&mut self);

    /// Same as [`initialize_index`](Self::initialize_index).
    fn destroy_index(&mut self) {
        self.initialize_index();
    }

    /// Register a standing query over whitespace-delimited `keyword_text`.
    ///
    /// Fails with `DuplicateQueryId` if `id` is active, or `CapacityExceeded`
    /// if the query is past the supported limits. Failure leaves state untouched.
    fn start_query(&mut self, id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<()>;

    /// Retire a query. Fails with `UnknownQueryId` if `id` is not active.
    fn end_query(&mut self, id: QueryId) -> Result<()>;

    /// Match `content` against every active query and queue the result.
    ///
    /// Never fails: a document that satisfies nothing still queues an empty result.
    fn match_document(&mut self, doc_id: DocId, content: &str) -> Result<()>;

    /// Pop the oldest unretrieved result, or `NoAvailableResult`.
    fn get_next_avail_res(&mut self) -> Result<MatchResult>;
}
