// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary of the matching core.
//!
//! Identifiers, match modes, capacity limits, and the result record handed back
//! to callers. Everything else in the crate is built out of these.
//!
//! # Capacity limits
//!
//! | Constant                 | Value | Why                                           |
//! |--------------------------|-------|-----------------------------------------------|
//! | `MAX_TOLERANCE`          | 3     | Deletion neighborhoods grow as `C(n, k)`      |
//! | `MAX_KEYWORD_LEN`        | 60    | Keyword plus tolerance fits a 64-bit mask     |
//! | `MAX_MASK_LEN`           | 64    | Width of [`DeletionMask`](crate::DeletionMask) |
//! | `MAX_KEYWORDS_PER_QUERY` | 64    | Matched keywords tracked as a 64-bit set      |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MatchError, Result};

/// Largest tolerance any query may carry. Documents are expanded to this depth.
pub const MAX_TOLERANCE: usize = 3;

/// Longest token a deletion mask can describe.
pub const MAX_MASK_LEN: usize = 64;

/// Longest keyword (in chars) a query may register.
pub const MAX_KEYWORD_LEN: usize = MAX_MASK_LEN - MAX_TOLERANCE - 1;

/// Distinct keywords per query.
pub const MAX_KEYWORDS_PER_QUERY: usize = 64;

/// Document tokens longer than this are further than `MAX_TOLERANCE` edits
/// from every admissible keyword.
pub const MAX_DOCUMENT_TOKEN_LEN: usize = MAX_KEYWORD_LEN + MAX_TOLERANCE;

// INVARIANT: the longest token the engine ever expands fits in a mask.
const _: () = assert!(MAX_DOCUMENT_TOKEN_LEN <= MAX_MASK_LEN);

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Externally assigned query identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct QueryId(pub u32);

impl QueryId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for QueryId {
    fn from(id: u32) -> Self {
        QueryId(id)
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Externally assigned document identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct DocId(pub u32);

impl DocId {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for DocId {
    fn from(id: u32) -> Self {
        DocId(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// MATCH MODE
// =============================================================================

/// How a keyword is compared against document tokens.
///
/// The tolerance travels with the variant, so an `Exact` query can never carry
/// a meaningless distance and every `match` over modes stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Token must equal the keyword verbatim.
    Exact,
    /// Same length, at most `n` differing positions.
    Hamming(u8),
    /// At most `n` insertions, deletions or substitutions.
    Edit(u8),
}

impl MatchMode {
    /// Build a mode from the numeric harness encoding (`0 = Exact, 1 = Hamming, 2 = Edit`).
    ///
    /// The distance of an `Exact` query is ignored. Distances above
    /// [`MAX_TOLERANCE`] are rejected rather than clamped.
    pub fn from_parts(match_type: u32, match_dist: u32) -> Result<Self> {
        let tolerance = || -> Result<u8> {
            if match_dist as usize > MAX_TOLERANCE {
                return Err(MatchError::capacity(
                    "tolerance",
                    MAX_TOLERANCE,
                    match_dist as usize,
                ));
            }
            Ok(match_dist as u8)
        };

        match match_type {
            0 => Ok(MatchMode::Exact),
            1 => Ok(MatchMode::Hamming(tolerance()?)),
            2 => Ok(MatchMode::Edit(tolerance()?)),
            other => Err(MatchError::InvalidMatchType(other)),
        }
    }

    /// Numeric harness encoding of the mode.
    pub fn type_code(self) -> u32 {
        match self {
            MatchMode::Exact => 0,
            MatchMode::Hamming(_) => 1,
            MatchMode::Edit(_) => 2,
        }
    }

    /// Maximum distance a keyword may be from a token.
    #[inline]
    pub fn tolerance(self) -> usize {
        match self {
            MatchMode::Exact => 0,
            MatchMode::Hamming(k) | MatchMode::Edit(k) => k as usize,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::Exact => write!(f, "exact"),
            MatchMode::Hamming(k) => write!(f, "hamming<={}", k),
            MatchMode::Edit(k) => write!(f, "edit<={}", k),
        }
    }
}

// =============================================================================
// RESULT RECORD
// =============================================================================

/// Outcome of matching one document: which queries it satisfied.
///
/// `query_ids` is sorted ascending and may be empty. An empty record is still
/// queued so retrieval order tracks submission order exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub doc_id: DocId,
    pub query_ids: Vec<QueryId>,
}

impl MatchResult {
    pub fn new(doc_id: DocId, mut query_ids: Vec<QueryId>) -> Self {
        query_ids.sort_unstable();
        query_ids.dedup();
        Self { doc_id, query_ids }
    }

    /// Number of satisfied queries.
    #[inline]
    pub fn match_count(&self) -> usize {
        self.query_ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.query_ids.is_empty()
    }
}

/// Split text into tokens the way both engines see it: on whitespace, case kept.
#[inline]
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
