//! Deletion neighborhoods and mask acceptance.
//!
//! The last two properties are the ones the index stands on: two words are
//! within distance `k` exactly when their neighborhoods share a string whose
//! masks pass the mode's mask test.

use std::collections::HashSet;

use super::common::{unicode_word_strategy, word_strategy};
use super::oracles::{oracle_hamming, oracle_levenshtein, oracle_neighborhood};
use lexwatch::{deletions, neighborhood_size, DeletionEntry, DeletionMask};
use proptest::prelude::*;

fn positions(mask: DeletionMask) -> Vec<usize> {
    (0..mask.token_len()).filter(|&i| mask.is_deleted(i)).collect()
}

/// Is there a shared reduced string whose mask pair passes `accept`?
fn shares_entry(
    a: &[DeletionEntry<'_>],
    b: &[DeletionEntry<'_>],
    accept: impl Fn(DeletionMask, DeletionMask) -> bool,
) -> bool {
    a.iter().any(|x| {
        b.iter()
            .any(|y| x.reduced == y.reduced && accept(x.mask, y.mask))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn diff_neighborhood(w in prop_oneof![word_strategy(), unicode_word_strategy()], k in 0usize..=3) {
        let mut got: Vec<(String, Vec<usize>)> = deletions(&w, k)
            .unwrap()
            .into_iter()
            .map(|e| (e.reduced, positions(e.mask)))
            .collect();
        got.sort();
        prop_assert_eq!(got, oracle_neighborhood(&w, k));
    }

    #[test]
    fn prop_neighborhood_size(w in word_strategy(), k in 0usize..=3) {
        let entries = deletions(&w, k).unwrap();
        prop_assert_eq!(entries.len(), neighborhood_size(w.chars().count(), k));

        let masks: HashSet<u64> = entries.iter().map(|e| e.mask.bits()).collect();
        prop_assert_eq!(masks.len(), entries.len(), "masks are unique");

        for entry in &entries {
            prop_assert_eq!(entry.original, w.as_str());
            prop_assert!(entry.mask.deletions() <= k);
            let chars: Vec<char> = w.chars().collect();
            prop_assert_eq!(&entry.mask.apply(&chars), &entry.reduced);
        }
    }

    /// Edit distance `<= k` iff some shared reduction has aligned cost `<= k`.
    #[test]
    fn prop_aligned_cost_decides_edit_distance(
        a in word_strategy(),
        b in word_strategy(),
        k in 0usize..=3,
    ) {
        let da = deletions(&a, k).unwrap();
        let db = deletions(&b, k).unwrap();
        let found = shares_entry(&da, &db, |x, y| x.aligned_cost(y) <= k);
        prop_assert_eq!(found, oracle_levenshtein(&a, &b) <= k, "a={:?} b={:?} k={}", a, b, k);
    }

    /// Hamming distance `<= k` iff some shared reduction has identical masks.
    #[test]
    fn prop_equal_masks_decide_hamming(
        a in word_strategy(),
        b in word_strategy(),
        k in 0usize..=3,
    ) {
        let da = deletions(&a, k).unwrap();
        let db = deletions(&b, k).unwrap();
        let found = shares_entry(&da, &db, |x, y| x == y);
        let expected = oracle_hamming(&a, &b).is_some_and(|d| d <= k);
        prop_assert_eq!(found, expected, "a={:?} b={:?} k={}", a, b, k);
    }

    /// The aligned cost never undercuts the true distance of the two words.
    #[test]
    fn prop_aligned_cost_is_an_upper_bound(a in word_strategy(), b in word_strategy()) {
        for x in deletions(&a, 3).unwrap() {
            for y in deletions(&b, 3).unwrap() {
                if x.reduced == y.reduced {
                    prop_assert!(x.mask.aligned_cost(y.mask) >= oracle_levenshtein(&a, &b));
                }
            }
        }
    }
}
