//! Core types for sift
//!
//! This module defines the foundational types:
//! - Keyword: Normalized index key (lowercase, alphabetic, non-empty)
//! - DocumentId: Opaque document label
//! - Occurrence: (document, frequency) pair stored in posting lists

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A normalized keyword
///
/// Keywords are the identity keys of the index. The wrapped string is always
/// non-empty, purely alphabetic and lowercase. The normalizer is the usual way
/// to obtain one; [`Keyword::new`] checks the same shape without applying
/// noise-word filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Wrap an already-normalized string
    ///
    /// Returns None if the string is empty, contains a non-alphabetic
    /// character, or contains an uppercase character.
    pub fn new(word: impl Into<String>) -> Option<Self> {
        let word = word.into();
        if is_keyword_shaped(&word) {
            Some(Keyword(word))
        } else {
            None
        }
    }

    /// The keyword text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

fn is_keyword_shaped(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_alphabetic() && !c.is_uppercase())
}

impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Keyword {
    type Error = String;

    fn try_from(word: String) -> Result<Self, Self::Error> {
        if is_keyword_shaped(&word) {
            Ok(Keyword(word))
        } else {
            Err(format!("'{}' is not a normalized keyword", word))
        }
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

/// Opaque document identifier
///
/// The index never dereferences a document; it only carries this label
/// through posting lists and query results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document id from any string-like label
    pub fn new(label: impl Into<String>) -> Self {
        DocumentId(label.into())
    }

    /// The label text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(label: &str) -> Self {
        DocumentId(label.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(label: String) -> Self {
        DocumentId(label)
    }
}

impl PartialEq<str> for DocumentId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for DocumentId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// How often a keyword occurs in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Document in which the keyword occurs
    pub document: DocumentId,
    /// Number of occurrences in that document
    pub frequency: u32,
}

impl Occurrence {
    /// Create a new occurrence
    pub fn new(document: impl Into<DocumentId>, frequency: u32) -> Self {
        Occurrence {
            document: document.into(),
            frequency,
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.document, self.frequency)
    }
}
