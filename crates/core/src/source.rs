//! Collaborator traits
//!
//! The index never reads storage itself. Document listings, token streams
//! and noise words arrive through these traits; adapters for memory and the
//! filesystem live in the engine crate.

use crate::error::SiftResult;
use crate::noise::NoiseWordSet;
use crate::types::DocumentId;

/// Lazy, finite stream of whitespace-delimited tokens for one document
pub type TokenStream<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Supplies the documents to index and their token streams
pub trait DocumentSource {
    /// Document ids in indexing order
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the listing cannot be produced.
    fn documents(&self) -> SiftResult<Vec<DocumentId>>;

    /// Open the token stream of one listed document
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the document cannot be opened.
    fn tokens(&self, document: &DocumentId) -> SiftResult<TokenStream<'_>>;

    /// Open the token stream of the listing entry at `entry`
    ///
    /// `entry` is the position of `document` in the last `documents()`
    /// listing. Sources whose listings may repeat an id override this so
    /// every entry reads its own text; the default looks the id up.
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the document cannot be opened.
    fn tokens_at(&self, entry: usize, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        let _ = entry;
        self.tokens(document)
    }
}

/// Supplies the noise word list
pub trait NoiseWordSource {
    /// All noise words, one entry per word
    ///
    /// # Errors
    ///
    /// `SourceUnavailable` if the list cannot be read.
    fn noise_words(&self) -> SiftResult<Vec<String>>;

    /// Load the list into an immutable set
    fn load(&self) -> SiftResult<NoiseWordSet> {
        Ok(NoiseWordSet::from_words(self.noise_words()?))
    }
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn documents(&self) -> SiftResult<Vec<DocumentId>> {
        (**self).documents()
    }

    fn tokens(&self, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        (**self).tokens(document)
    }

    fn tokens_at(&self, entry: usize, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        (**self).tokens_at(entry, document)
    }
}

impl<T: NoiseWordSource + ?Sized> NoiseWordSource for &T {
    fn noise_words(&self) -> SiftResult<Vec<String>> {
        (**self).noise_words()
    }
}
