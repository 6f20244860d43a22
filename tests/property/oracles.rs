//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. If they disagree with the crate,
//! the oracle is right.

/// Full-matrix Wagner-Fischer edit distance.
pub fn oracle_levenshtein(s1: &str, s2: &str) -> usize {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    let mut d = vec![vec![0usize; b.len() + 1]; a.len() + 1];

    for (i, row) in d.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        d[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            d[i][j] = (d[i - 1][j] + 1)
                .min(d[i][j - 1] + 1)
                .min(d[i - 1][j - 1] + cost);
        }
    }
    d[a.len()][b.len()]
}

/// Positional mismatches, or `None` when the lengths differ.
pub fn oracle_hamming(s1: &str, s2: &str) -> Option<usize> {
    let a: Vec<char> = s1.chars().collect();
    let b: Vec<char> = s2.chars().collect();
    if a.len() != b.len() {
        return None;
    }
    Some(a.iter().zip(&b).filter(|(x, y)| x != y).count())
}

/// Every `(reduced, deleted positions)` with at most `k` deletions, by
/// enumerating all `2^n` subsets. Only usable for short words.
pub fn oracle_neighborhood(word: &str, k: usize) -> Vec<(String, Vec<usize>)> {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    assert!(n <= 16, "oracle neighborhood is exponential");

    let mut out = Vec::new();
    for subset in 0u32..(1 << n) {
        if subset.count_ones() as usize > k {
            continue;
        }
        let deleted: Vec<usize> = (0..n).filter(|i| subset & (1 << i) != 0).collect();
        let reduced: String = (0..n)
            .filter(|i| subset & (1 << i) == 0)
            .map(|i| chars[i])
            .collect();
        out.push((reduced, deleted));
    }
    out.sort();
    out
}

/// Does any token of `document` match `keyword` under `mode`?
pub fn oracle_contains(mode: lexwatch::MatchMode, document: &str, keyword: &str) -> bool {
    use lexwatch::MatchMode;

    document.split_whitespace().any(|token| match mode {
        MatchMode::Exact => token == keyword,
        MatchMode::Hamming(k) => oracle_hamming(token, keyword).is_some_and(|d| d <= k as usize),
        MatchMode::Edit(k) => oracle_levenshtein(token, keyword) <= k as usize,
    })
}
