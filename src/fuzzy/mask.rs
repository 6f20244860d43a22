// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Deletion masks: which positions of a token were removed.
//!
//! A mask remembers the length of the token it was cut from, so two masks are
//! equal only when they describe the same positions of equally long tokens.
//! That length is what keeps Hamming matching aligned.

use std::fmt;

/// Bit `i` set means char `i` of the original token was deleted.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeletionMask {
    bits: u64,
    len: u8,
}

impl DeletionMask {
    /// Mask over a token of `len` chars with nothing deleted.
    #[inline]
    pub fn empty(len: usize) -> Self {
        debug_assert!(len <= crate::MAX_MASK_LEN);
        Self {
            bits: 0,
            len: len as u8,
        }
    }

    /// Mask deleting exactly `positions`.
    pub fn from_positions(len: usize, positions: &[usize]) -> Self {
        let mut mask = Self::empty(len);
        for &pos in positions {
            debug_assert!(pos < len, "position {} outside token of {} chars", pos, len);
            mask.bits |= 1 << pos;
        }
        mask
    }

    /// Length of the original token.
    #[inline]
    pub fn token_len(self) -> usize {
        self.len as usize
    }

    /// Number of deleted positions.
    #[inline]
    pub fn deletions(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn is_deleted(self, pos: usize) -> bool {
        pos < self.token_len() && self.bits & (1 << pos) != 0
    }

    #[inline]
    pub fn bits(self) -> u64 {
        self.bits
    }

    /// Keep the chars this mask does not delete.
    pub fn apply(self, chars: &[char]) -> String {
        debug_assert_eq!(chars.len(), self.token_len());
        chars
            .iter()
            .enumerate()
            .filter(|&(i, _)| !self.is_deleted(i))
            .map(|(_, &c)| c)
            .collect()
    }

    /// Edit cost of the alignment two masks induce over a shared reduced string.
    ///
    /// Both masks must reduce their tokens to the same string, which pairs the
    /// i-th kept char of one with the i-th kept char of the other. Between two
    /// consecutive kept chars (and before the first, after the last) one token
    /// lost `g1` chars and the other `g2`. Padding the shorter gap with zeros,
    /// a position deleted on both sides is a substitution and a position
    /// deleted on one side is an insertion or deletion, so the gap costs
    /// `max(g1, g2)`.
    ///
    /// The sum never undercuts the true Levenshtein distance, and it equals it
    /// for the mask pair cut along an optimal alignment's matched chars.
    pub fn aligned_cost(self, other: DeletionMask) -> usize {
        let (a_len, b_len) = (self.token_len(), other.token_len());
        let (mut i, mut j) = (0, 0);
        let mut cost = 0;

        loop {
            let gap_a = self.gap_from(&mut i);
            let gap_b = other.gap_from(&mut j);
            cost += gap_a.max(gap_b);

            match (i < a_len, j < b_len) {
                // Both sit on a kept char: pair them and move on.
                (true, true) => {
                    i += 1;
                    j += 1;
                }
                (false, false) => break,
                // Unequal kept counts: the masks do not share a reduced string.
                _ => {
                    cost += (a_len - i) + (b_len - j);
                    break;
                }
            }
        }

        cost
    }

    /// Count deleted positions starting at `*pos`, leaving `*pos` on the next kept one.
    #[inline]
    fn gap_from(self, pos: &mut usize) -> usize {
        let start = *pos;
        while *pos < self.token_len() && self.is_deleted(*pos) {
            *pos += 1;
        }
        *pos - start
    }
}

impl fmt::Debug for DeletionMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Position 0 first, the way masks are usually drawn over the token.
        let rendered: String = (0..self.token_len())
            .map(|i| if self.is_deleted(i) { '1' } else { '0' })
            .collect();
        write!(f, "DeletionMask({})", rendered)
    }
}
