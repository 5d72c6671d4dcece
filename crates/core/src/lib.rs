//! Core types and traits for sift
//!
//! This crate defines the leaves of the indexing pipeline:
//! - Keyword, DocumentId, Occurrence: the data model
//! - NoiseWordSet: immutable excluded-word membership test
//! - normalize: raw token to keyword (or rejection)
//! - DocumentSource / NoiseWordSource: collaborator traits
//! - SiftError: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod noise;
pub mod normalize;
pub mod source;
pub mod types;

pub use error::{SiftError, SiftResult};
pub use noise::NoiseWordSet;
pub use normalize::normalize;
pub use source::{DocumentSource, NoiseWordSource, TokenStream};
pub use types::{DocumentId, Keyword, Occurrence};
