//! End-to-end scenarios through `MatchingCore`.

use super::common::{drain, ids, match_one, start_all};
use lexwatch::{
    DocId, Engine, ErrorCode, MatchError, MatchMode, MatchingCore, QueryId, ReferenceEngine,
    MAX_KEYWORDS_PER_QUERY, MAX_KEYWORD_LEN,
};

/// Run `check` against both cores so they stay interchangeable.
fn both(check: impl Fn(&mut dyn MatchingCore)) {
    check(&mut Engine::new());
    check(&mut ReferenceEngine::new());
}

// ============================================================================
// MATCHING
// ============================================================================

#[test]
fn test_hamming_worked_example() {
    both(|core| {
        start_all(core, &[(1, "hello world", MatchMode::Hamming(1))]);
        core.match_document(DocId(1), "hxllo world").unwrap();
        core.match_document(DocId(2), "hell").unwrap();

        let first = core.get_next_avail_res().unwrap();
        assert_eq!((first.doc_id, ids(&first)), (DocId(1), vec![1]));

        let second = core.get_next_avail_res().unwrap();
        assert_eq!(second.doc_id, DocId(2));
        assert_eq!(second.match_count(), 0);

        assert_eq!(core.get_next_avail_res(), Err(MatchError::NoAvailableResult));
    });
}

#[test]
fn test_mixed_modes_one_document() {
    both(|core| {
        start_all(
            core,
            &[
                (10, "database", MatchMode::Exact),
                (11, "databse", MatchMode::Edit(1)),
                (12, "dotabase", MatchMode::Hamming(1)),
                (13, "dtbs", MatchMode::Edit(3)),
                (14, "dtbs", MatchMode::Edit(2)),
                (15, "database systems", MatchMode::Exact),
            ],
        );
        let result = match_one(core, 1, "modern database engines").unwrap();
        assert_eq!(ids(&result), vec![10, 11, 12]);
    });
}

#[test]
fn test_edit_distance_boundaries() {
    both(|core| {
        start_all(core, &[(1, "kitten", MatchMode::Edit(3)), (2, "kitten", MatchMode::Edit(2))]);
        // kitten -> sitting is the classic distance 3
        assert_eq!(ids(&match_one(core, 1, "sitting").unwrap()), vec![1]);
        assert_eq!(ids(&match_one(core, 2, "sittn").unwrap()), vec![1, 2]);
    });
}

#[test]
fn test_hamming_rejects_length_change() {
    both(|core| {
        start_all(core, &[(1, "cart", MatchMode::Hamming(3))]);
        assert!(match_one(core, 1, "car carts scart").unwrap().query_ids.is_empty());
        assert_eq!(ids(&match_one(core, 2, "dirt").unwrap()), vec![1]);
    });
}

#[test]
fn test_unicode_positions_are_chars() {
    both(|core| {
        start_all(core, &[(1, "café", MatchMode::Hamming(1)), (2, "naïve", MatchMode::Edit(1))]);
        let result = match_one(core, 1, "cafe naive").unwrap();
        assert_eq!(ids(&result), vec![1, 2]);
    });
}

#[test]
fn test_repeated_tokens_and_keywords() {
    both(|core| {
        start_all(core, &[(1, "echo echo", MatchMode::Exact), (2, "echo delta", MatchMode::Exact)]);
        assert_eq!(ids(&match_one(core, 1, "echo echo echo").unwrap()), vec![1]);
    });
}

#[test]
fn test_keywordless_query_matches_everything() {
    both(|core| {
        start_all(core, &[(4, "", MatchMode::Edit(2)), (5, "word", MatchMode::Exact)]);
        assert_eq!(ids(&match_one(core, 1, "").unwrap()), vec![4]);
        assert_eq!(ids(&match_one(core, 2, "a word").unwrap()), vec![4, 5]);
    });
}

// ============================================================================
// LIFECYCLE AND ERRORS
// ============================================================================

#[test]
fn test_results_in_submission_order() {
    both(|core| {
        start_all(core, &[(1, "x", MatchMode::Exact)]);
        for doc in [5, 3, 9, 1] {
            core.match_document(DocId(doc), "x").unwrap();
        }
        let order: Vec<u32> = drain(core).iter().map(|r| r.doc_id.get()).collect();
        assert_eq!(order, vec![5, 3, 9, 1]);
    });
}

#[test]
fn test_end_query_between_documents() {
    both(|core| {
        start_all(core, &[(1, "alpha", MatchMode::Edit(1)), (2, "alpha", MatchMode::Exact)]);
        core.match_document(DocId(1), "alpha").unwrap();
        core.end_query(QueryId(2)).unwrap();
        core.match_document(DocId(2), "alpha").unwrap();

        let results = drain(core);
        assert_eq!(ids(&results[0]), vec![1, 2]);
        assert_eq!(ids(&results[1]), vec![1]);
    });
}

#[test]
fn test_id_reuse_after_end() {
    both(|core| {
        start_all(core, &[(1, "old", MatchMode::Exact)]);
        core.end_query(QueryId(1)).unwrap();
        start_all(core, &[(1, "new", MatchMode::Exact)]);
        assert!(match_one(core, 1, "old").unwrap().query_ids.is_empty());
        assert_eq!(ids(&match_one(core, 2, "new").unwrap()), vec![1]);
    });
}

#[test]
fn test_error_codes() {
    both(|core| {
        start_all(core, &[(1, "a", MatchMode::Exact)]);
        assert_eq!(
            ErrorCode::of(&core.start_query(QueryId(1), "b", MatchMode::Exact)),
            ErrorCode::Fail
        );
        assert_eq!(ErrorCode::of(&core.end_query(QueryId(2))), ErrorCode::Fail);
        assert_eq!(ErrorCode::of(&core.get_next_avail_res()), ErrorCode::NoAvailableResult);
        assert_eq!(ErrorCode::of(&core.match_document(DocId(1), "a")), ErrorCode::Success);
    });
}

#[test]
fn test_capacity_limits() {
    both(|core| {
        let longest = "k".repeat(MAX_KEYWORD_LEN);
        assert!(core.start_query(QueryId(1), &longest, MatchMode::Edit(3)).is_ok());
        assert_eq!(ids(&match_one(core, 1, &"k".repeat(MAX_KEYWORD_LEN + 3)).unwrap()), vec![1]);

        let too_long = "k".repeat(MAX_KEYWORD_LEN + 1);
        assert!(matches!(
            core.start_query(QueryId(2), &too_long, MatchMode::Exact),
            Err(MatchError::CapacityExceeded { .. })
        ));

        let many: Vec<String> = (0..=MAX_KEYWORDS_PER_QUERY).map(|i| format!("w{}", i)).collect();
        assert!(core.start_query(QueryId(3), &many.join(" "), MatchMode::Exact).is_err());
        assert!(core.end_query(QueryId(3)).is_err(), "rejected query was never active");
    });
}

#[test]
fn test_initialize_and_destroy() {
    both(|core| {
        start_all(core, &[(1, "a", MatchMode::Exact)]);
        core.match_document(DocId(1), "a").unwrap();
        core.destroy_index();
        assert_eq!(core.get_next_avail_res(), Err(MatchError::NoAvailableResult));
        core.initialize_index();
        core.initialize_index();
        start_all(core, &[(1, "a", MatchMode::Exact)]);
    });
}
