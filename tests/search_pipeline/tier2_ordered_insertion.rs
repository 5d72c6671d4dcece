//! Tier 2: Ordered Insertion
//!
//! Every OccurrenceList is non-increasing by frequency after every merge,
//! and equal frequencies keep arrival order.

use crate::test_utils::*;
use proptest::prelude::*;
use sift::{insert_last_occurrence, EngineConfig, NoiseWordSet, Occurrence, SearchEngine};

fn empty_engine() -> SearchEngine {
    init_tracing();
    SearchEngine::new(NoiseWordSet::new(), EngineConfig::default()).unwrap()
}

#[test]
fn tier2_ranked_after_each_merge() {
    let mut engine = empty_engine();
    for (i, freq) in [2usize, 7, 1, 7, 4, 2, 9].iter().enumerate() {
        let text = repeat("rain", *freq);
        engine
            .index_document(format!("d{}", i), text.split_whitespace())
            .unwrap();
        assert!(engine.occurrences("rain").unwrap().is_ranked());
    }
    assert_eq!(
        engine.occurrences("rain").unwrap().frequencies(),
        vec![9, 7, 7, 4, 2, 2, 1]
    );
}

#[test]
fn tier2_ties_in_arrival_order() {
    let mut engine = empty_engine();
    let plan = [("first", 5), ("second", 3), ("third", 3), ("fourth", 1), ("fifth", 3)];
    for (doc, freq) in plan {
        let text = repeat("tree", freq);
        engine.index_document(doc, text.split_whitespace()).unwrap();
    }

    let list = engine.occurrences("tree").unwrap();
    assert_eq!(list.frequencies(), vec![5, 3, 3, 3, 1]);
    let order: Vec<&str> = list.documents().map(|d| d.as_str()).collect();
    assert_eq!(order, vec!["first", "second", "third", "fifth", "fourth"]);
}

#[test]
fn tier2_diagnostic_trace() {
    let mut occs: Vec<Occurrence> = [5u32, 3, 3, 1, 3]
        .iter()
        .enumerate()
        .map(|(i, f)| Occurrence::new(format!("d{}", i), *f))
        .collect();
    assert_eq!(insert_last_occurrence(&mut occs), vec![1]);

    let mut single = vec![Occurrence::new("only", 4)];
    assert!(insert_last_occurrence(&mut single).is_empty());
}

#[test]
fn tier2_new_keyword_creates_singleton() {
    let mut engine = empty_engine();
    let stats = engine.index_document("d", ["fresh", "fresh"]).unwrap();
    assert_eq!(stats.new_keywords, 1);
    assert_eq!(stats.updated_keywords, 0);
    assert_eq!(engine.occurrences("fresh").unwrap().as_slice(), &[Occurrence::new("d", 2)]);
}

proptest! {
    #[test]
    fn tier2_every_keyword_ranked_for_random_corpora(
        docs in prop::collection::vec(
            prop::collection::vec(prop::sample::select(vec!["rain", "snow", "hail", "wind"]), 0..30),
            1..25
        )
    ) {
        let mut engine = empty_engine();
        for (i, words) in docs.iter().enumerate() {
            engine.index_document(format!("doc{}", i), words.iter()).unwrap();
            for (_, list) in engine.index().iter() {
                prop_assert!(list.is_ranked());
            }
        }
    }
}
