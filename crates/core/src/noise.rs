//! Noise word set
//!
//! Common words excluded from indexing. Built once before any document is
//! indexed and never mutated afterwards. Membership is an exact,
//! case-sensitive match: entries are expected to be lowercase already,
//! and lookups happen after the normalizer has lowercased the candidate.

use rustc_hash::FxHashSet;

/// Immutable set of excluded words
#[derive(Debug, Clone, Default)]
pub struct NoiseWordSet {
    words: FxHashSet<String>,
}

impl NoiseWordSet {
    /// Create an empty set (nothing is noise)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set from any word list
    ///
    /// Surrounding whitespace is trimmed and blank entries are dropped.
    /// Casing is kept as given.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .collect();
        NoiseWordSet { words }
    }

    /// Exact membership test
    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct noise words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if no word is excluded
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
