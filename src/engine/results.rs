// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;

use crate::types::MatchResult;

/// FIFO of match results awaiting retrieval.
///
/// Append-only from the engine, pop-only from the caller. Every submitted
/// document lands here, matched or not, so the n-th pop is always the n-th
/// submitted document.
#[derive(Debug, Default)]
pub struct ResultQueue {
    pending: VecDeque<MatchResult>,
}

impl ResultQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, result: MatchResult) {
        self.pending.push_back(result);
    }

    /// Oldest unretrieved result. `None` is the normal "nothing yet" case.
    pub fn pop_next(&mut self) -> Option<MatchResult> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
