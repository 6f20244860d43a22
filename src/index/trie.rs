// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix tree keyed by deletion-neighborhood strings.
//!
//! Children are kept in a char-sorted `Vec` and found by binary search: most
//! nodes have one or two children, where a vector beats a hash map on both
//! memory and lookup time.
//!
//! # Invariants
//!
//! 1. **ATOMIC_QUERY**: a query's postings are all present or all absent.
//!    `insert_query` expands every keyword before touching the tree, and
//!    `remove_query` replays the exact expansion `insert_query` used.
//! 2. **NO_DEAD_BRANCHES**: after a removal, no node without postings is left
//!    without children. Pruning is memory hygiene, not a correctness need.

use std::collections::HashSet;

use serde::Serialize;

use super::{KeywordRef, Posting};
use crate::error::Result;
use crate::fuzzy::{deletions, for_each_deletion};
use crate::query::Query;
use crate::types::QueryId;

#[derive(Debug, Default)]
struct TrieNode {
    children: Vec<(char, TrieNode)>,
    postings: Vec<Posting>,
}

impl TrieNode {
    #[inline]
    fn child(&self, c: char) -> Option<&TrieNode> {
        self.children
            .binary_search_by_key(&c, |(k, _)| *k)
            .ok()
            .map(|i| &self.children[i].1)
    }

    fn child_mut_or_insert(&mut self, c: char) -> &mut TrieNode {
        let i = match self.children.binary_search_by_key(&c, |(k, _)| *k) {
            Ok(i) => i,
            Err(i) => {
                self.children.insert(i, (c, TrieNode::default()));
                i
            }
        };
        &mut self.children[i].1
    }

    #[inline]
    fn is_vacant(&self) -> bool {
        self.children.is_empty() && self.postings.is_empty()
    }

    /// Drop every posting of `query_id` at the end of `path`, pruning emptied branches.
    fn remove(&mut self, path: &[char], query_id: QueryId) -> usize {
        match path.split_first() {
            None => {
                let before = self.postings.len();
                self.postings.retain(|p| p.query_id != query_id);
                before - self.postings.len()
            }
            Some((&c, rest)) => {
                let Ok(i) = self.children.binary_search_by_key(&c, |(k, _)| *k) else {
                    return 0;
                };
                let removed = self.children[i].1.remove(rest, query_id);
                if self.children[i].1.is_vacant() {
                    self.children.remove(i);
                }
                removed
            }
        }
    }

    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a TrieNode)) {
        f(self);
        for (_, child) in &self.children {
            child.visit(f);
        }
    }
}

/// Size summary of a [`KeywordTrie`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrieStats {
    /// Nodes including the root.
    pub nodes: usize,
    /// Nodes holding at least one posting.
    pub keyword_paths: usize,
    pub postings: usize,
}

/// Deletion-neighborhood trie. See the module docs for its invariants.
#[derive(Debug, Default)]
pub struct KeywordTrie {
    root: TrieNode,
    postings: usize,
}

impl KeywordTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Postings stored under exactly `path`, or an empty slice.
    ///
    /// O(chars in `path`).
    pub fn lookup(&self, path: &str) -> &[Posting] {
        let mut node = &self.root;
        for c in path.chars() {
            match node.child(c) {
                Some(child) => node = child,
                None => return &[],
            }
        }
        &node.postings
    }

    /// Append a posting at `path`.
    pub fn insert(&mut self, path: &str, posting: Posting) {
        let mut node = &mut self.root;
        for c in path.chars() {
            node = node.child_mut_or_insert(c);
        }
        node.postings.push(posting);
        self.postings += 1;
    }

    /// Remove every posting of `query_id` at `path`. Returns how many went.
    pub fn remove(&mut self, path: &str, query_id: QueryId) -> usize {
        let path: Vec<char> = path.chars().collect();
        let removed = self.root.remove(&path, query_id);
        self.postings -= removed;
        removed
    }

    /// Index every keyword of `query` under its deletion neighborhood.
    ///
    /// Exact queries are indexed at depth 0, the others at their tolerance.
    /// Returns the number of postings added.
    pub fn insert_query(&mut self, query: &Query) -> Result<usize> {
        // INVARIANT: ATOMIC_QUERY - expand everything before the first insert.
        let mut staged = Vec::new();
        for keyword in query.keyword_refs() {
            for entry in deletions(&keyword.text, query.mode.tolerance())? {
                staged.push((entry.reduced, entry.mask, keyword.clone()));
            }
        }

        let added = staged.len();
        for (path, mask, keyword) in staged {
            self.insert(
                &path,
                Posting {
                    query_id: query.id,
                    mode: query.mode,
                    mask,
                    keyword,
                },
            );
        }

        crate::contracts::check_query_indexed(self, query);
        Ok(added)
    }

    /// Remove every posting `insert_query(query)` added.
    ///
    /// `query` must be the stored original, not a re-parse of anything
    /// observed later, or some paths would be missed.
    pub fn remove_query(&mut self, query: &Query) -> Result<usize> {
        // INVARIANT: ATOMIC_QUERY - replay the expansion insert_query used.
        let removed = Self::query_paths(query)?
            .iter()
            .map(|path| self.remove(path, query.id))
            .sum();

        crate::contracts::check_query_absent(self, query);
        Ok(removed)
    }

    /// Distinct paths `insert_query(query)` writes to.
    fn query_paths(query: &Query) -> Result<HashSet<String>> {
        let mut paths = HashSet::new();
        for keyword in query.keyword_refs() {
            for_each_deletion(&keyword.text, query.mode.tolerance(), |reduced, _| {
                paths.insert(reduced);
            })?;
        }
        Ok(paths)
    }

    /// Postings of `query` found at its own paths.
    ///
    /// Costs one lookup per neighborhood path, independent of how many other
    /// queries the trie holds.
    pub fn postings_of_query(&self, query: &Query) -> Result<usize> {
        Ok(Self::query_paths(query)?
            .iter()
            .map(|path| self.lookup(path).iter().filter(|p| p.query_id == query.id).count())
            .sum())
    }

    /// Total postings across all paths.
    #[inline]
    pub fn posting_count(&self) -> usize {
        self.postings
    }

    /// Postings that belong to `query_id`, found by walking the whole tree.
    #[cfg(test)]
    pub(crate) fn postings_of(&self, query_id: QueryId) -> usize {
        let mut count = 0;
        self.root.visit(&mut |node| {
            count += node.postings.iter().filter(|p| p.query_id == query_id).count();
        });
        count
    }

    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            postings: self.postings,
            ..TrieStats::default()
        };
        self.root.visit(&mut |node| {
            stats.nodes += 1;
            if !node.postings.is_empty() {
                stats.keyword_paths += 1;
            }
        });
        stats
    }

    pub fn is_empty(&self) -> bool {
        self.postings == 0
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
