//! Indexing and ranking engine for sift
//!
//! This crate builds the keyword index and answers two-keyword queries:
//! - Index / OccurrenceList: keyword -> occurrences ranked by frequency
//! - DocumentIndexer: per-document keyword counting
//! - merge: ordered insertion of a document's counts into the index
//! - query: bounded, deduplicated union of two ranked lists
//! - SearchEngine: batch construction, configuration and normalized queries
//! - source: in-memory and filesystem collaborators
//!
//! The engine never touches storage itself; documents and noise words come
//! through the `DocumentSource` and `NoiseWordSource` traits.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod engine;
pub mod index;
pub mod indexer;
pub mod merge;
pub mod query;
pub mod source;

pub use config::{EngineConfig, CONFIG_FILE_NAME};
pub use engine::{build_index, SearchEngine};
pub use index::{Index, IndexStats, OccurrenceList};
pub use indexer::{DocumentIndexer, DocumentKeywords};
pub use merge::{insert_last_occurrence, merge, MergeStats};
pub use query::{top, top_hits, MatchedKeyword, QueryHit, DEFAULT_RESULT_LIMIT};
pub use source::{FileDocumentSource, FileNoiseWords, MemorySource, StaticNoiseWords};
