// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deletion neighborhoods: every way to delete up to `k` chars from a token.
//!
//! A token of `n` chars has `Σ_{i=0}^{k} C(n, i)` entries, one per mask. Distinct
//! masks can reduce to the same string ("aab" minus either 'a' is "ab"); both
//! entries are kept because the mask, not the string, is what Hamming and edit
//! acceptance compare.
//!
//! The growth is combinatorial, which is why `k` is capped at
//! [`MAX_TOLERANCE`](crate::MAX_TOLERANCE) and tokens at
//! [`MAX_MASK_LEN`](crate::MAX_MASK_LEN). Requests past either limit fail with
//! `CapacityExceeded`; nothing is silently truncated. When `k >= n` every
//! subset is produced, which is exactly the formula above.

use super::DeletionMask;
use crate::error::{MatchError, Result};
use crate::{MAX_MASK_LEN, MAX_TOLERANCE};

/// One member of a token's deletion neighborhood.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionEntry<'a> {
    /// The token with the masked chars removed.
    pub reduced: String,
    /// Which chars were removed.
    pub mask: DeletionMask,
    /// The token the entry was cut from.
    pub original: &'a str,
}

/// Every `(reduced, mask)` pair obtained by deleting `0..=max_k` chars of `token`.
///
/// Entries come out grouped by deletion count, the unmodified token first.
pub fn deletions(token: &str, max_k: usize) -> Result<Vec<DeletionEntry<'_>>> {
    let mut out = Vec::new();
    for_each_deletion(token, max_k, |reduced, mask| {
        out.push(DeletionEntry {
            reduced,
            mask,
            original: token,
        });
    })?;
    Ok(out)
}

/// Streaming form of [`deletions`]: hands each `(reduced, mask)` to `visit`.
pub fn for_each_deletion<F>(token: &str, max_k: usize, mut visit: F) -> Result<()>
where
    F: FnMut(String, DeletionMask),
{
    if max_k > MAX_TOLERANCE {
        return Err(MatchError::capacity("deletion depth", MAX_TOLERANCE, max_k));
    }

    let chars: Vec<char> = token.chars().collect();
    if chars.len() > MAX_MASK_LEN {
        return Err(MatchError::capacity("token length", MAX_MASK_LEN, chars.len()));
    }

    let depth = max_k.min(chars.len());
    let mut positions = Vec::with_capacity(depth);
    for size in 0..=depth {
        choose(&chars, 0, size, &mut positions, &mut visit);
    }

    Ok(())
}

/// Extend `positions` with `remaining` more ascending positions from `start` on.
fn choose<F>(
    chars: &[char],
    start: usize,
    remaining: usize,
    positions: &mut Vec<usize>,
    visit: &mut F,
) where
    F: FnMut(String, DeletionMask),
{
    if remaining == 0 {
        let mask = DeletionMask::from_positions(chars.len(), positions);
        visit(mask.apply(chars), mask);
        return;
    }

    // Leave room for the positions still to pick.
    for pos in start..=chars.len() - remaining {
        positions.push(pos);
        choose(chars, pos + 1, remaining - 1, positions, visit);
        positions.pop();
    }
}

/// `Σ_{i=0}^{min(k,n)} C(n, i)`: entries in the neighborhood of an `n`-char token.
pub fn neighborhood_size(n: usize, k: usize) -> usize {
    let mut total = 0;
    let mut binom = 1usize; // C(n, 0)
    for i in 0..=k.min(n) {
        total += binom;
        binom = binom * (n - i) / (i + 1);
    }
    total
}
