//! Index construction and the search facade
//!
//! `build_index` drives counting and merging for every listed document.
//! A batch is all-or-nothing: every document is counted and checked before
//! the first merge, so a failing source never leaves a partial index.
//!
//! `SearchEngine` owns the configuration, the noise words and the index.
//! Queries borrow it immutably.

use crate::config::EngineConfig;
use crate::index::{Index, IndexStats, OccurrenceList};
use crate::indexer::{DocumentIndexer, DocumentKeywords};
use crate::merge::{merge, MergeStats};
use crate::query::{top_hits, QueryHit};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use sift_core::{
    normalize, DocumentId, DocumentSource, Keyword, NoiseWordSet, NoiseWordSource, SiftError,
    SiftResult,
};
use std::time::Instant;
use tracing::{debug, info, warn};

// ============================================================================
// Batch construction
// ============================================================================

/// Build a fresh index from every document the source lists
///
/// # Errors
///
/// - `SourceUnavailable` if the listing or any token stream cannot be opened
/// - `DuplicateDocument` if the listing repeats a document and
///   `reject_duplicate_documents` is set
pub fn build_index<S>(
    source: &S,
    noise_words: &NoiseWordSet,
    config: &EngineConfig,
) -> SiftResult<Index>
where
    S: DocumentSource + Sync + ?Sized,
{
    let mut index = Index::new();
    index_batch(&mut index, source, noise_words, config)?;
    Ok(index)
}

/// Count and merge a batch of documents into an existing index
///
/// Returns the number of documents merged. On error the index is unchanged.
fn index_batch<S>(
    index: &mut Index,
    source: &S,
    noise_words: &NoiseWordSet,
    config: &EngineConfig,
) -> SiftResult<usize>
where
    S: DocumentSource + Sync + ?Sized,
{
    let started = Instant::now();
    let documents = source.documents()?;
    let indexer = DocumentIndexer::new(noise_words);

    let counted: Vec<DocumentKeywords> = if config.parallel_counting {
        documents
            .par_iter()
            .enumerate()
            .map(|(entry, document)| count_document(source, &indexer, entry, document))
            .collect::<SiftResult<_>>()?
    } else {
        documents
            .iter()
            .enumerate()
            .map(|(entry, document)| count_document(source, &indexer, entry, document))
            .collect::<SiftResult<_>>()?
    };

    if config.reject_duplicate_documents {
        check_duplicates(index, counted.iter().map(DocumentKeywords::document))?;
    }

    let merged = counted.len();
    for counts in counted {
        merge_logged(index, counts);
    }

    info!(
        target: "sift::index",
        documents = merged,
        keywords = index.len(),
        elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        "Batch indexed"
    );
    Ok(merged)
}

fn count_document<S>(
    source: &S,
    indexer: &DocumentIndexer<'_>,
    entry: usize,
    document: &DocumentId,
) -> SiftResult<DocumentKeywords>
where
    S: DocumentSource + ?Sized,
{
    let tokens = source.tokens_at(entry, document)?;
    Ok(indexer.index_document(document.clone(), tokens))
}

/// Reject documents already in the index or repeated within the batch
fn check_duplicates<'a>(
    index: &Index,
    documents: impl Iterator<Item = &'a DocumentId>,
) -> SiftResult<()> {
    let mut batch: FxHashSet<&DocumentId> = FxHashSet::default();
    for document in documents {
        if index.contains_document(document) || !batch.insert(document) {
            warn!(target: "sift::index", document = %document, "Duplicate document rejected");
            return Err(SiftError::DuplicateDocument(document.clone()));
        }
    }
    Ok(())
}

fn merge_logged(index: &mut Index, counts: DocumentKeywords) -> MergeStats {
    let document = counts.document().clone();
    let tokens = counts.tokens_seen();
    let stats = merge(index, counts);
    debug!(
        target: "sift::index",
        document = %document,
        tokens,
        new_keywords = stats.new_keywords,
        updated_keywords = stats.updated_keywords,
        midpoints = stats.midpoints_visited,
        "Document merged"
    );
    stats
}

// ============================================================================
// SearchEngine
// ============================================================================

/// Owns an index together with the rules used to build and query it
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: EngineConfig,
    noise_words: NoiseWordSet,
    index: Index,
}

impl SearchEngine {
    /// Create an engine with an empty index
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(noise_words: NoiseWordSet, config: EngineConfig) -> SiftResult<Self> {
        config.validate()?;
        Ok(SearchEngine {
            config,
            noise_words,
            index: Index::new(),
        })
    }

    /// Load noise words once, then index every listed document
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::DocumentId;
    /// use sift_engine::{EngineConfig, MemorySource, SearchEngine, StaticNoiseWords};
    ///
    /// let docs = MemorySource::new()
    ///     .with_document("a", "rain rain rain")
    ///     .with_document("b", "the snow");
    /// let noise = StaticNoiseWords::new(["the"]);
    ///
    /// let engine = SearchEngine::build(&docs, &noise, EngineConfig::default()).unwrap();
    /// let hits = engine.query("Rain.", "SNOW");
    /// assert_eq!(hits, vec![DocumentId::new("a"), DocumentId::new("b")]);
    /// ```
    pub fn build<D, N>(documents: &D, noise: &N, config: EngineConfig) -> SiftResult<Self>
    where
        D: DocumentSource + Sync + ?Sized,
        N: NoiseWordSource + ?Sized,
    {
        let mut engine = SearchEngine::new(noise.load()?, config)?;
        engine.index_source(documents)?;
        Ok(engine)
    }

    /// Index every document of a source as one all-or-nothing batch
    ///
    /// Returns the number of documents merged.
    pub fn index_source<D>(&mut self, documents: &D) -> SiftResult<usize>
    where
        D: DocumentSource + Sync + ?Sized,
    {
        index_batch(&mut self.index, documents, &self.noise_words, &self.config)
    }

    /// Count and merge a single document
    ///
    /// # Errors
    ///
    /// `DuplicateDocument` if the document was merged before and
    /// `reject_duplicate_documents` is set. The index is unchanged on error.
    pub fn index_document<I, S>(
        &mut self,
        document: impl Into<DocumentId>,
        tokens: I,
    ) -> SiftResult<MergeStats>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let document = document.into();
        if self.config.reject_duplicate_documents {
            check_duplicates(&self.index, std::iter::once(&document))?;
        }
        let counts = DocumentIndexer::new(&self.noise_words).index_document(document, tokens);
        Ok(merge_logged(&mut self.index, counts))
    }

    /// Top documents for "kw1 or kw2"
    ///
    /// Raw input is normalized first, so casing and trailing punctuation do
    /// not matter. A keyword that normalizes to nothing matches nothing.
    pub fn query(&self, kw1: &str, kw2: &str) -> Vec<DocumentId> {
        self.query_hits(kw1, kw2)
            .into_iter()
            .map(|hit| hit.document)
            .collect()
    }

    /// Same as [`SearchEngine::query`], with frequency and source per hit
    pub fn query_hits(&self, kw1: &str, kw2: &str) -> Vec<QueryHit> {
        let first = normalize(kw1, &self.noise_words);
        let second = normalize(kw2, &self.noise_words);
        let hits = top_hits(
            &self.index,
            first.as_ref().map_or("", Keyword::as_str),
            second.as_ref().map_or("", Keyword::as_str),
            self.config.result_limit,
        );
        debug!(
            target: "sift::query",
            kw1 = ?first.as_ref().map(Keyword::as_str),
            kw2 = ?second.as_ref().map(Keyword::as_str),
            hits = hits.len(),
            "Query executed"
        );
        hits
    }

    /// Ranked occurrences of one keyword, after normalizing it
    pub fn occurrences(&self, keyword: &str) -> Option<&OccurrenceList> {
        let keyword = normalize(keyword, &self.noise_words)?;
        self.index.get(keyword.as_str())
    }

    /// Read-only view of the index
    pub fn index(&self) -> &Index {
        &self.index
    }

    /// Noise words in effect
    pub fn noise_words(&self) -> &NoiseWordSet {
        &self.noise_words
    }

    /// Configuration in effect
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Index size counters
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Give up the engine, keeping the index
    pub fn into_index(self) -> Index {
        self.index
    }
}
