// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the indexed engine against the brute-force engine.
//!
//! Both cores run the same call sequence; every return value must agree.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexwatch::{DocId, Engine, MatchMode, MatchingCore, QueryId, ReferenceEngine};

#[derive(Debug, Arbitrary)]
enum Call {
    Start { id: u8, mode: u8, dist: u8, keywords: String },
    End { id: u8 },
    Match { doc: u16, content: String },
    Next,
}

fuzz_target!(|calls: Vec<Call>| {
    let mut engine = Engine::new();
    let mut reference = ReferenceEngine::new();

    for call in calls.into_iter().take(64) {
        match call {
            Call::Start { id, mode, dist, keywords } => {
                let Ok(mode) = MatchMode::from_parts(u32::from(mode % 3), u32::from(dist % 4)) else {
                    continue;
                };
                let keywords: String = keywords.chars().take(40).collect();
                let a = engine.start_query(QueryId(u32::from(id % 8)), &keywords, mode);
                let b = reference.start_query(QueryId(u32::from(id % 8)), &keywords, mode);
                assert_eq!(a, b);
            }
            Call::End { id } => {
                assert_eq!(
                    engine.end_query(QueryId(u32::from(id % 8))),
                    reference.end_query(QueryId(u32::from(id % 8)))
                );
            }
            Call::Match { doc, content } => {
                let content: String = content.chars().take(200).collect();
                engine.match_document(DocId(u32::from(doc)), &content).unwrap();
                reference.match_document(DocId(u32::from(doc)), &content).unwrap();
            }
            Call::Next => {
                assert_eq!(engine.get_next_avail_res(), reference.get_next_avail_res());
            }
        }
    }
});
