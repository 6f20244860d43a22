// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Distance metrics between two tokens.
//!
//! Lengths and positions are counted in chars, not bytes, so a multi-byte
//! character is one position for every metric and every deletion mask.
//!
//! [`edit_distance`] and [`levenshtein_within`] share one two-row DP. The
//! bounded form stops as soon as a whole row exceeds the limit.

/// Distance reported by [`hamming`] for tokens of different length.
///
/// Larger than any real distance plus one, so `d <= tolerance` never passes.
pub const HAMMING_LENGTH_MISMATCH: usize = 0x7FFF_FFFF;

/// Number of positions at which two equal-length tokens differ.
///
/// Fails closed: unequal lengths return [`HAMMING_LENGTH_MISMATCH`].
pub fn hamming(a: &str, b: &str) -> usize {
    if a.chars().count() != b.chars().count() {
        return HAMMING_LENGTH_MISMATCH;
    }
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Levenshtein distance with unit insert, delete and substitute costs.
///
/// O(|a|·|b|) time, O(|b|) space.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    // No two tokens are further apart than the longer one is long.
    let ceiling = a.len().max(b.len());
    bounded_distance(&a, &b, ceiling).unwrap_or(ceiling)
}

/// `edit_distance(a, b) <= max`, without filling rows that cannot matter.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    a.len().abs_diff(b.len()) <= max && bounded_distance(&a, &b, max).is_some()
}

/// Wagner-Fischer over two rows. `None` once the distance must exceed `max`.
fn bounded_distance(a: &[char], b: &[char], max: usize) -> Option<usize> {
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        // Row minima never decrease.
        if curr.iter().all(|&d| d > max) {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[b.len()];
    (distance <= max).then_some(distance)
}
