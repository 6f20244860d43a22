// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine shareable across threads.
//!
//! The index sits behind a read-write lock: any number of documents match
//! concurrently under read guards, while starting or ending a query takes the
//! write guard and therefore never interleaves with a match. The result queue
//! has its own mutex, taken only to push or pop.

use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::{IndexStats, MatchIndex, ResultQueue};
use crate::config::MatcherConfig;
use crate::error::{MatchError, Result};
use crate::types::{DocId, MatchMode, MatchResult, QueryId};

#[derive(Debug, Default)]
pub struct SharedEngine {
    index: RwLock<MatchIndex>,
    results: Mutex<ResultQueue>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MatcherConfig) -> Self {
        Self {
            index: RwLock::new(MatchIndex::new(config)),
            results: Mutex::new(ResultQueue::new()),
        }
    }

    pub fn initialize_index(&self) {
        self.index.write().clear();
        self.results.lock().clear();
    }

    pub fn start_query(&self, id: QueryId, keyword_text: &str, mode: MatchMode) -> Result<()> {
        self.index.write().start_query(id, keyword_text, mode)
    }

    pub fn end_query(&self, id: QueryId) -> Result<()> {
        self.index.write().end_query(id)
    }

    /// Match under a read guard, then queue the result.
    ///
    /// Results of concurrent calls are queued in completion order.
    pub fn match_document(&self, doc_id: DocId, content: &str) -> Result<()> {
        let satisfied = self.index.read().matches(content);
        debug!(doc = %doc_id, matched = satisfied.len(), "document matched");
        self.results.lock().push(MatchResult::new(doc_id, satisfied));
        Ok(())
    }

    pub fn get_next_avail_res(&self) -> Result<MatchResult> {
        self.results
            .lock()
            .pop_next()
            .ok_or(MatchError::NoAvailableResult)
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            pending_results: self.results.lock().len(),
            ..self.index.read().stats()
        }
    }
}
