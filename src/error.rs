// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors returned by the matching core.
//!
//! Every failure is an explicit value. The caller (usually the replay driver)
//! inspects each return to check protocol conformance, so nothing here is ever
//! swallowed or retried internally.

use crate::types::QueryId;
use thiserror::Error;

/// Failure modes of the matching core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// `start_query` with an id that is already active.
    #[error("query {0} is already active")]
    DuplicateQueryId(QueryId),

    /// `end_query` with an id that is not active.
    #[error("query {0} is not active")]
    UnknownQueryId(QueryId),

    /// Retrieval with an empty result queue. Expected, not exceptional.
    #[error("no result available")]
    NoAvailableResult,

    /// A deletion neighborhood or query exceeds the supported limits.
    #[error("capacity exceeded: {what} is {got}, limit is {limit}")]
    CapacityExceeded {
        what: &'static str,
        limit: usize,
        got: usize,
    },

    /// Numeric match type outside `0 = Exact, 1 = Hamming, 2 = Edit`.
    #[error("invalid match type {0} (expected 0, 1 or 2)")]
    InvalidMatchType(u32),
}

impl MatchError {
    pub(crate) fn capacity(what: &'static str, limit: usize, got: usize) -> Self {
        MatchError::CapacityExceeded { what, limit, got }
    }
}

/// Result type alias for matching operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Status codes of the call contract exposed to test harnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Success,
    Fail,
    NoAvailableResult,
}

impl ErrorCode {
    /// Collapse a core result into the harness status code.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorCode::Success,
            Err(err) => ErrorCode::from(err),
        }
    }
}

impl From<&MatchError> for ErrorCode {
    fn from(err: &MatchError) -> Self {
        match err {
            MatchError::NoAvailableResult => ErrorCode::NoAvailableResult,
            MatchError::DuplicateQueryId(_)
            | MatchError::UnknownQueryId(_)
            | MatchError::CapacityExceeded { .. }
            | MatchError::InvalidMatchType(_) => ErrorCode::Fail,
        }
    }
}
