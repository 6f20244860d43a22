// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The keyword index: deletion-neighborhood strings mapped to postings.
//!
//! Every keyword of every active query is expanded to its deletion
//! neighborhood at registration time, and each `(reduced, mask)` pair becomes
//! a posting under the trie path `reduced`. Matching a document token is then
//! a handful of exact lookups instead of a distance computation per query.

mod posting;
mod trie;

pub use posting::*;
pub use trie::*;
