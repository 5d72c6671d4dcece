//! Keyword index with frequency-ordered posting lists
//!
//! This module provides:
//! - OccurrenceList: per-keyword occurrences, non-increasing by frequency
//! - Index: Keyword -> OccurrenceList mapping plus the set of merged documents
//! - IndexStats: summary counters for reporting
//!
//! # Ownership
//!
//! Callers only ever see `&Index`. Every mutation goes through the merge
//! module, which keeps each OccurrenceList sorted after every single insert.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use sift_core::{DocumentId, Keyword, Occurrence};

// ============================================================================
// OccurrenceList
// ============================================================================

/// Occurrences of one keyword, ordered by descending frequency
///
/// Equal frequencies keep arrival order: an occurrence merged earlier
/// precedes one merged later.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceList {
    entries: Vec<Occurrence>,
}

impl OccurrenceList {
    /// Create a list holding a single occurrence
    pub(crate) fn singleton(occurrence: Occurrence) -> Self {
        OccurrenceList {
            entries: vec![occurrence],
        }
    }

    /// Mutable access for the merge path only
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<Occurrence> {
        &mut self.entries
    }

    /// All occurrences in ranked order
    pub fn as_slice(&self) -> &[Occurrence] {
        &self.entries
    }

    /// Iterate occurrences in ranked order
    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.entries.iter()
    }

    /// Document ids in ranked order
    pub fn documents(&self) -> impl Iterator<Item = &DocumentId> + '_ {
        self.entries.iter().map(|o| &o.document)
    }

    /// Frequencies in ranked order
    pub fn frequencies(&self) -> Vec<u32> {
        self.entries.iter().map(|o| o.frequency).collect()
    }

    /// Number of documents containing this keyword
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if frequencies never increase along the list
    pub fn is_ranked(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].frequency >= pair[1].frequency)
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ============================================================================
// Index
// ============================================================================

/// Inverted index from keyword to ranked occurrences
///
/// Grows monotonically as documents are merged. There is no removal.
#[derive(Debug, Clone, Default)]
pub struct Index {
    /// Keyword -> OccurrenceList mapping
    postings: FxHashMap<Keyword, OccurrenceList>,

    /// Documents merged so far
    documents: FxHashSet<DocumentId>,

    /// Sum of all list lengths
    total_occurrences: usize,
}

impl Index {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup the occurrences of a keyword
    ///
    /// Takes the keyword text, so already-normalized strings can be used
    /// directly. Returns None if the keyword was never indexed.
    pub fn get(&self, keyword: &str) -> Option<&OccurrenceList> {
        self.postings.get(keyword)
    }

    /// Check if a keyword is present
    pub fn contains_keyword(&self, keyword: &str) -> bool {
        self.postings.contains_key(keyword)
    }

    /// Check if a document has been merged
    pub fn contains_document(&self, document: &DocumentId) -> bool {
        self.documents.contains(document)
    }

    /// All keywords, in no particular order
    pub fn keywords(&self) -> impl Iterator<Item = &Keyword> + '_ {
        self.postings.keys()
    }

    /// All (keyword, list) pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &OccurrenceList)> + '_ {
        self.postings.iter()
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if nothing has been indexed
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of merged documents
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Summary counters
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            keywords: self.postings.len(),
            occurrences: self.total_occurrences,
        }
    }

    pub(crate) fn list_mut(&mut self, keyword: &str) -> Option<&mut OccurrenceList> {
        self.postings.get_mut(keyword)
    }

    pub(crate) fn insert_list(&mut self, keyword: Keyword, list: OccurrenceList) {
        self.postings.insert(keyword, list);
    }

    pub(crate) fn record_document(&mut self, document: DocumentId, occurrences: usize) {
        self.documents.insert(document);
        self.total_occurrences += occurrences;
    }
}

// ============================================================================
// IndexStats
// ============================================================================

/// Index size counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Documents merged
    pub documents: usize,
    /// Distinct keywords
    pub keywords: usize,
    /// Total (keyword, document) occurrences across all lists
    pub occurrences: usize,
}
