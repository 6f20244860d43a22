// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching primitives: distance metrics and deletion neighborhoods.
//!
//! The metrics are the ground truth. The deletion neighborhood is the trick that
//! lets the index avoid computing them: two tokens within `k` edits always share
//! a string reachable by deleting at most `k` characters from each, so
//! approximate matching becomes exact lookup of the deleted forms.

mod deletions;
mod distance;
mod mask;

pub use deletions::*;
pub use distance::*;
pub use mask::*;
