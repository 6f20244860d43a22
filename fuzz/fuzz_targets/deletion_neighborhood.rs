// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for deletion neighborhoods and mask acceptance.
//!
//! For any two tokens, a shared reduction with aligned cost `<= k` must exist
//! exactly when their edit distance is `<= k`. If that ever fails, the index
//! either misses matches or invents them.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexwatch::{deletions, edit_distance, neighborhood_size};

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: String,
    b: String,
    k: u8,
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to keep the pairwise scan fast
    let a: String = input.a.chars().take(12).collect();
    let b: String = input.b.chars().take(12).collect();
    let k = (input.k % 4) as usize;

    let da = deletions(&a, k).expect("within capacity");
    let db = deletions(&b, k).expect("within capacity");
    assert_eq!(da.len(), neighborhood_size(a.chars().count(), k));

    let found = da.iter().any(|x| {
        db.iter()
            .any(|y| x.reduced == y.reduced && x.mask.aligned_cost(y.mask) <= k)
    });
    assert_eq!(found, edit_distance(&a, &b) <= k, "a={:?} b={:?} k={}", a, b, k);
});
