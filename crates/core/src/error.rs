//! Error types for sift
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Note what is deliberately absent: a token that fails normalization and a
//! query for an unknown keyword are not errors. They shrink the output.

use crate::types::DocumentId;
use std::io;
use thiserror::Error;

/// Result type alias for sift operations
pub type SiftResult<T> = std::result::Result<T, SiftError>;

/// Error types for index construction and configuration
#[derive(Debug, Error)]
pub enum SiftError {
    /// A collaborator could not supply a document listing, a token stream,
    /// or the noise word list. Indexing aborts; no partial index is returned.
    #[error("Source unavailable: {source_name}: {reason}")]
    SourceUnavailable {
        /// Name of the unavailable source (path, document id, ...)
        source_name: String,
        /// Underlying failure
        reason: String,
    },

    /// A document id was submitted for merging a second time while
    /// duplicate rejection is enabled
    #[error("Document already indexed: {0}")]
    DuplicateDocument(DocumentId),

    /// Configuration could not be parsed or failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error from a filesystem adapter
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SiftError {
    /// Build a `SourceUnavailable` error
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        SiftError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SiftError::InvalidConfig(message.into())
    }

    /// True if this error came from an unreachable collaborator
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, SiftError::SourceUnavailable { .. })
    }
}
