//! Tier 3: Top-K Query
//!
//! The union of two ranked lists: higher front frequency first, first
//! keyword wins ties, each document at most once, at most K results.

use crate::test_utils::*;
use proptest::prelude::*;
use sift::{MatchedKeyword, DEFAULT_RESULT_LIMIT};
use std::collections::HashSet;

/// kw1 = "alpha": A=5, B=3; kw2 = "beta": C=5, B=4
fn scenario() -> sift::SearchEngine {
    engine_from(&[
        ("A", repeat("alpha", 5)),
        ("B", format!("{} {}", repeat("alpha", 3), repeat("beta", 4))),
        ("C", repeat("beta", 5)),
    ])
}

#[test]
fn tier3_tie_prefers_first_keyword_and_dedups() {
    let engine = scenario();
    assert_eq!(names(&engine.query("alpha", "beta")), vec!["A", "C", "B"]);
}

#[test]
fn tier3_hits_report_winning_occurrence() {
    let engine = scenario();
    let hits = engine.query_hits("alpha", "beta");
    let sources: Vec<MatchedKeyword> = hits.iter().map(|h| h.matched).collect();
    assert_eq!(
        sources,
        vec![MatchedKeyword::First, MatchedKeyword::Second, MatchedKeyword::Second]
    );
}

#[test]
fn tier3_only_first_keyword_known() {
    let docs: Vec<(String, String)> = (0..7)
        .map(|i| (format!("d{}", i), repeat("rain", 10 - i)))
        .collect();
    let borrowed: Vec<(&str, String)> = docs.iter().map(|(d, t)| (d.as_str(), t.clone())).collect();
    let engine = engine_from(&borrowed);

    let expected: Vec<&str> = engine
        .occurrences("rain")
        .unwrap()
        .documents()
        .take(DEFAULT_RESULT_LIMIT)
        .map(|d| d.as_str())
        .collect();
    assert_eq!(names(&engine.query("rain", "unknown")), expected);
    assert_eq!(expected, vec!["d0", "d1", "d2", "d3", "d4"]);
}

#[test]
fn tier3_only_second_keyword_known_with_short_list() {
    let engine = engine_from(&[("x", "snow".to_string()), ("y", "snow snow".to_string())]);
    assert_eq!(names(&engine.query("unknown", "snow")), vec!["y", "x"]);
}

#[test]
fn tier3_neither_keyword_known() {
    let engine = scenario();
    assert!(engine.query("gamma", "delta").is_empty());
}

#[test]
fn tier3_query_does_not_mutate_index() {
    let engine = scenario();
    let before = engine.occurrences("alpha").unwrap().clone();
    for _ in 0..3 {
        engine.query("alpha", "beta");
    }
    assert_eq!(engine.occurrences("alpha").unwrap(), &before);
}

#[test]
fn tier3_concurrent_readers_agree() {
    let engine = scenario();
    let expected = engine.query("alpha", "beta");
    let shared = &engine;
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(move || shared.query("alpha", "beta")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

proptest! {
    #[test]
    fn tier3_results_bounded_and_unique(
        docs in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["rain", "snow", "hail"]), 0..12),
            0..20
        ),
        kw1 in prop::sample::select(vec!["rain", "snow", "fog"]),
        kw2 in prop::sample::select(vec!["rain", "hail", "fog"]),
    ) {
        let corpus: Vec<(String, String)> = docs
            .iter()
            .enumerate()
            .map(|(i, words)| (format!("doc{}", i), words.join(" ")))
            .collect();
        let borrowed: Vec<(&str, String)> = corpus.iter().map(|(d, t)| (d.as_str(), t.clone())).collect();
        let engine = engine_from(&borrowed);

        let result = engine.query(kw1, kw2);
        prop_assert!(result.len() <= DEFAULT_RESULT_LIMIT);
        let unique: HashSet<_> = result.iter().collect();
        prop_assert_eq!(unique.len(), result.len());

        let hits = engine.query_hits(kw1, kw2);
        prop_assert!(hits.windows(2).all(|w| w[0].frequency >= w[1].frequency));
    }
}
