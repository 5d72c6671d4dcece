//! Document and noise word sources
//!
//! Adapters implementing the collaborator traits from `sift_core::source`:
//! - MemorySource: documents held as in-memory text
//! - FileDocumentSource: a listing file naming document files
//! - FileNoiseWords / StaticNoiseWords: noise word lists
//!
//! Text is split on whitespace; everything else about a token is left to
//! the normalizer.

use rustc_hash::FxHashMap;
use sift_core::{DocumentId, DocumentSource, NoiseWordSource, SiftError, SiftResult, TokenStream};
use std::path::{Path, PathBuf};

// ============================================================================
// MemorySource
// ============================================================================

/// Documents supplied as text, indexed in insertion order
///
/// An id may be added more than once; each listing entry keeps its own
/// text. Lookup by id alone returns the first entry.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<(DocumentId, String)>,
    first_entry: FxHashMap<DocumentId, usize>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder style)
    pub fn with_document(mut self, id: impl Into<DocumentId>, text: impl Into<String>) -> Self {
        self.add(id, text);
        self
    }

    /// Add a document
    pub fn add(&mut self, id: impl Into<DocumentId>, text: impl Into<String>) {
        let id = id.into();
        self.first_entry
            .entry(id.clone())
            .or_insert(self.documents.len());
        self.documents.push((id, text.into()));
    }

    /// Number of documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the source holds no documents
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentSource for MemorySource {
    fn documents(&self) -> SiftResult<Vec<DocumentId>> {
        Ok(self.documents.iter().map(|(id, _)| id.clone()).collect())
    }

    fn tokens(&self, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        let entry = self
            .first_entry
            .get(document)
            .ok_or_else(|| SiftError::source_unavailable(document.as_str(), "no such document"))?;
        let (_, text) = &self.documents[*entry];
        Ok(split_text(text))
    }

    fn tokens_at(&self, entry: usize, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        match self.documents.get(entry) {
            Some((id, text)) if id == document => Ok(split_text(text)),
            _ => self.tokens(document),
        }
    }
}

fn split_text(text: &str) -> TokenStream<'_> {
    Box::new(text.split_whitespace().map(str::to_string))
}

// ============================================================================
// FileDocumentSource
// ============================================================================

/// Documents named by a listing file
///
/// The listing holds whitespace-separated document paths. A document id is
/// the path as written in the listing; relative paths resolve against the
/// base directory, which defaults to the listing file's own directory.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    listing: PathBuf,
    base_dir: PathBuf,
}

impl FileDocumentSource {
    /// Create a source reading the given listing file
    pub fn new(listing: impl Into<PathBuf>) -> Self {
        let listing = listing.into();
        let base_dir = listing
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        FileDocumentSource { listing, base_dir }
    }

    /// Resolve relative document paths against `base_dir` instead
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    /// Filesystem path of a listed document
    pub fn path_of(&self, document: &DocumentId) -> PathBuf {
        let path = Path::new(document.as_str());
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl DocumentSource for FileDocumentSource {
    fn documents(&self) -> SiftResult<Vec<DocumentId>> {
        let content = read_source(&self.listing)?;
        Ok(content.split_whitespace().map(DocumentId::from).collect())
    }

    fn tokens(&self, document: &DocumentId) -> SiftResult<TokenStream<'_>> {
        let content = read_source(&self.path_of(document))?;
        let tokens: Vec<String> = content.split_whitespace().map(str::to_string).collect();
        Ok(Box::new(tokens.into_iter()))
    }
}

// ============================================================================
// Noise word sources
// ============================================================================

/// Noise words read from a whitespace-separated file
#[derive(Debug, Clone)]
pub struct FileNoiseWords {
    path: PathBuf,
}

impl FileNoiseWords {
    /// Create a source reading the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileNoiseWords { path: path.into() }
    }
}

impl NoiseWordSource for FileNoiseWords {
    fn noise_words(&self) -> SiftResult<Vec<String>> {
        let content = read_source(&self.path)?;
        Ok(content.split_whitespace().map(str::to_string).collect())
    }
}

/// Noise words given in memory
#[derive(Debug, Clone, Default)]
pub struct StaticNoiseWords {
    words: Vec<String>,
}

impl StaticNoiseWords {
    /// Create a source from any word list
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticNoiseWords {
            words: words.into_iter().map(Into::into).collect(),
        }
    }
}

impl NoiseWordSource for StaticNoiseWords {
    fn noise_words(&self) -> SiftResult<Vec<String>> {
        Ok(self.words.clone())
    }
}

fn read_source(path: &Path) -> SiftResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| SiftError::source_unavailable(path.display().to_string(), e))
}
