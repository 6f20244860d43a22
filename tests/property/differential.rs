//! Indexed engine vs the brute-force reference engine.
//!
//! Both cores receive the same random session. Every call must return the
//! same thing, and every retrieved result must be identical.

use super::common::{document_strategy, drain, queries_strategy, unicode_word_strategy};
use super::oracles::oracle_contains;
use lexwatch::{
    DocId, EditCheck, Engine, MatchMode, MatcherConfig, MatchingCore, ParallelConfig, QueryId,
    ReferenceEngine,
};
use proptest::prelude::*;

fn configs() -> [MatcherConfig; 3] {
    [
        MatcherConfig::sequential(),
        MatcherConfig {
            edit_check: EditCheck::Levenshtein,
            ..MatcherConfig::sequential()
        },
        // shard every document, however short
        MatcherConfig {
            parallel: ParallelConfig {
                enabled: true,
                workers: 3,
                min_tokens: 1,
            },
            ..MatcherConfig::default()
        },
    ]
}

fn run_session<C: MatchingCore>(
    core: &mut C,
    queries: &[(QueryId, String, MatchMode)],
    documents: &[String],
    ended: &[usize],
) -> Vec<lexwatch::MatchResult> {
    for (id, text, mode) in queries {
        core.start_query(*id, text, *mode).unwrap();
    }
    for (i, doc) in documents.iter().enumerate() {
        if let Some(&end) = ended.get(i) {
            if let Some((id, _, _)) = queries.get(end) {
                // ending twice must fail on both cores alike
                let _ = core.end_query(*id);
            }
        }
        core.match_document(DocId(i as u32), doc).unwrap();
    }
    drain(core)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn diff_engine_vs_reference(
        queries in queries_strategy(),
        documents in prop::collection::vec(document_strategy(), 1..6),
        ended in prop::collection::vec(0usize..8, 0..3),
    ) {
        let mut reference = ReferenceEngine::new();
        let expected = run_session(&mut reference, &queries, &documents, &ended);

        for config in configs() {
            let mut engine = Engine::with_config(config);
            let got = run_session(&mut engine, &queries, &documents, &ended);
            prop_assert_eq!(&got, &expected, "config={:?}", config);
            prop_assert_eq!(engine.stats().pending_results, 0);
        }
    }

    /// A single-keyword query matches exactly when some token is close enough.
    #[test]
    fn diff_single_keyword(
        keyword in unicode_word_strategy(),
        tokens in prop::collection::vec(unicode_word_strategy(), 0..6),
        match_type in 0u32..3,
        dist in 0u32..=3,
    ) {
        let mode = MatchMode::from_parts(match_type, dist).unwrap();
        let document = tokens.join(" ");

        let mut engine = Engine::with_config(MatcherConfig::sequential());
        engine.start_query(QueryId(1), &keyword, mode).unwrap();
        let matched = !engine.index().matches(&document).is_empty();

        prop_assert_eq!(matched, oracle_contains(mode, &document, &keyword));
    }

    /// Ending a query makes the engine behave as if it had never started.
    #[test]
    fn prop_end_query_forgets(
        queries in queries_strategy(),
        document in document_strategy(),
    ) {
        let mut engine = Engine::new();
        for (id, text, mode) in &queries {
            engine.start_query(*id, text, *mode).unwrap();
        }
        let (first, rest) = queries.split_first().unwrap();
        engine.end_query(first.0).unwrap();

        let mut fresh = Engine::new();
        for (id, text, mode) in rest {
            fresh.start_query(*id, text, *mode).unwrap();
        }

        prop_assert_eq!(engine.index().matches(&document), fresh.index().matches(&document));
        prop_assert_eq!(engine.stats(), fresh.stats());
    }
}
