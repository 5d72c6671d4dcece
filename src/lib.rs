//! sift - in-memory keyword index with frequency-ranked search
//!
//! Documents are reduced to keyword counts, folded into per-keyword lists
//! kept sorted by descending frequency, and queried as "kw1 or kw2" for the
//! top few documents.
//!
//! # Quick Start
//!
//! ```
//! use sift::{EngineConfig, MemorySource, SearchEngine, StaticNoiseWords};
//!
//! let docs = MemorySource::new()
//!     .with_document("storm.txt", "Rain. Rain, wind and rain!")
//!     .with_document("calm.txt", "wind, a little wind");
//! let noise = StaticNoiseWords::new(["a", "and"]);
//!
//! let engine = SearchEngine::build(&docs, &noise, EngineConfig::default())?;
//! let results = engine.query("rain", "WIND");
//! let top: Vec<&str> = results
//!     .iter()
//!     .map(|d| d.as_str())
//!     .collect();
//! assert_eq!(top, vec!["storm.txt", "calm.txt"]);
//! # Ok::<(), sift::SiftError>(())
//! ```
//!
//! # Architecture
//!
//! - `sift-core`: data model, noise words, normalization, collaborator traits
//! - `sift-engine`: index, counting, ordered merge, top-K query, facade

pub use sift_core::{
    normalize, DocumentId, DocumentSource, Keyword, NoiseWordSet, NoiseWordSource, Occurrence,
    SiftError, SiftResult, TokenStream,
};
pub use sift_engine::{
    build_index, insert_last_occurrence, merge, top, top_hits, DocumentIndexer, DocumentKeywords,
    EngineConfig, FileDocumentSource, FileNoiseWords, Index, IndexStats, MatchedKeyword,
    MemorySource, MergeStats, OccurrenceList, QueryHit, SearchEngine, StaticNoiseWords,
    CONFIG_FILE_NAME, DEFAULT_RESULT_LIMIT,
};
