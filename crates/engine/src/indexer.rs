//! Per-document keyword counting
//!
//! Consumes one document's token stream once, in order, and counts each
//! keyword the normalizer accepts. Rejected tokens are skipped silently.

use rustc_hash::FxHashMap;
use sift_core::{normalize, DocumentId, Keyword, NoiseWordSet, Occurrence};

/// Keyword counts for a single document, ready to be merged
#[derive(Debug, Clone)]
pub struct DocumentKeywords {
    document: DocumentId,
    occurrences: FxHashMap<Keyword, Occurrence>,
    tokens_seen: usize,
}

impl DocumentKeywords {
    /// Document these counts belong to
    pub fn document(&self) -> &DocumentId {
        &self.document
    }

    /// Occurrence of a keyword in this document
    pub fn get(&self, keyword: &str) -> Option<&Occurrence> {
        self.occurrences.get(keyword)
    }

    /// Frequency of a keyword in this document (0 if absent)
    pub fn frequency(&self, keyword: &str) -> u32 {
        self.get(keyword).map(|o| o.frequency).unwrap_or(0)
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// True if no token survived normalization
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Total tokens consumed, accepted or not
    pub fn tokens_seen(&self) -> usize {
        self.tokens_seen
    }

    /// Iterate (keyword, occurrence) pairs, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &Occurrence)> + '_ {
        self.occurrences.iter()
    }

    pub(crate) fn into_parts(self) -> (DocumentId, FxHashMap<Keyword, Occurrence>) {
        (self.document, self.occurrences)
    }
}

/// Counts keywords in documents against a fixed noise word set
#[derive(Debug, Clone, Copy)]
pub struct DocumentIndexer<'a> {
    noise_words: &'a NoiseWordSet,
}

impl<'a> DocumentIndexer<'a> {
    /// Create an indexer using the given noise words
    pub fn new(noise_words: &'a NoiseWordSet) -> Self {
        DocumentIndexer { noise_words }
    }

    /// Count the keywords in one document's token stream
    ///
    /// # Example
    ///
    /// ```
    /// use sift_core::NoiseWordSet;
    /// use sift_engine::indexer::DocumentIndexer;
    ///
    /// let noise = NoiseWordSet::from_words(["the"]);
    /// let counts = DocumentIndexer::new(&noise)
    ///     .index_document("doc1".into(), "The rain, the RAIN.".split_whitespace());
    /// assert_eq!(counts.frequency("rain"), 2);
    /// assert_eq!(counts.len(), 1);
    /// ```
    pub fn index_document<I, S>(&self, document: DocumentId, tokens: I) -> DocumentKeywords
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut occurrences: FxHashMap<Keyword, Occurrence> = FxHashMap::default();
        let mut tokens_seen = 0;

        for token in tokens {
            tokens_seen += 1;
            let Some(keyword) = normalize(token.as_ref(), self.noise_words) else {
                continue;
            };
            occurrences
                .entry(keyword)
                .and_modify(|o| o.frequency += 1)
                .or_insert_with(|| Occurrence::new(document.clone(), 1));
        }

        DocumentKeywords {
            document,
            occurrences,
            tokens_seen,
        }
    }
}
