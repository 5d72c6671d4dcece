//! Tier 4: Sources and Configuration
//!
//! Filesystem collaborators feed the same pipeline; an unreadable source
//! aborts the whole batch.

use crate::test_utils::*;
use sift::{
    build_index, EngineConfig, FileDocumentSource, FileNoiseWords, NoiseWordSource, SearchEngine,
    SiftError, CONFIG_FILE_NAME,
};
use std::fs;
use tempfile::TempDir;

fn write_corpus(dir: &TempDir) {
    fs::write(
        dir.path().join("noisewords.txt"),
        "a\nan\nand\nthe\nof\nto\nwas\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("pohlx.txt"),
        "The deep sea. Deep, deeper, the DEEP! world of the sea",
    )
    .unwrap();
    fs::write(
        dir.path().join("Tyger.txt"),
        "Tyger Tyger, burning bright, In the forests of the night; deep deep",
    )
    .unwrap();
    fs::write(dir.path().join("docs.txt"), "pohlx.txt\nTyger.txt\n").unwrap();
}

#[test]
fn tier4_file_corpus_end_to_end() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    write_corpus(&dir);

    let documents = FileDocumentSource::new(dir.path().join("docs.txt"));
    let noise = FileNoiseWords::new(dir.path().join("noisewords.txt"));
    let engine = SearchEngine::build(&documents, &noise, EngineConfig::default()).unwrap();

    // pohlx: deep x3 ("deeper" is a separate keyword), Tyger: deep x2
    assert_eq!(engine.occurrences("deep").unwrap().frequencies(), vec![3, 2]);
    assert_eq!(names(&engine.query("deep", "tyger")), vec!["pohlx.txt", "Tyger.txt"]);
    assert_eq!(names(&engine.query("night", "sea")), vec!["pohlx.txt", "Tyger.txt"]);
    assert!(engine.occurrences("the").is_none());
}

#[test]
fn tier4_missing_document_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir);
    fs::write(dir.path().join("docs.txt"), "pohlx.txt\nmissing.txt\n").unwrap();

    let noise = FileNoiseWords::new(dir.path().join("noisewords.txt")).load().unwrap();
    let documents = FileDocumentSource::new(dir.path().join("docs.txt"));
    let err = build_index(&documents, &noise, &EngineConfig::default()).unwrap_err();
    assert!(matches!(err, SiftError::SourceUnavailable { .. }));
}

#[test]
fn tier4_missing_noise_file_is_source_unavailable() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir);

    let documents = FileDocumentSource::new(dir.path().join("docs.txt"));
    let noise = FileNoiseWords::new(dir.path().join("nope.txt"));
    let err = SearchEngine::build(&documents, &noise, EngineConfig::default()).unwrap_err();
    assert!(err.is_source_unavailable());
}

#[test]
fn tier4_config_file_drives_engine() {
    let dir = TempDir::new().unwrap();
    write_corpus(&dir);
    let config_path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(&config_path, "result_limit = 1\nparallel_counting = true\n").unwrap();

    let config = EngineConfig::from_file(&config_path).unwrap();
    let documents = FileDocumentSource::new(dir.path().join("docs.txt"));
    let noise = FileNoiseWords::new(dir.path().join("noisewords.txt"));
    let engine = SearchEngine::build(&documents, &noise, config).unwrap();

    assert_eq!(names(&engine.query("deep", "tyger")), vec!["pohlx.txt"]);
}

#[test]
fn tier4_stats_report_as_json() {
    let engine = engine_from(&[("a", "one two two".to_string()), ("b", "two".to_string())]);
    let json = serde_json::to_value(engine.stats()).unwrap();
    assert_eq!(json["documents"], 2);
    assert_eq!(json["keywords"], 2);
    assert_eq!(json["occurrences"], 3);
}
