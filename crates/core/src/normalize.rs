//! Keyword normalization
//!
//! The single rule for what counts as a keyword, used when indexing
//! documents and when resolving query input:
//!
//! 1. strip trailing non-letters
//! 2. reject if empty or if any non-letter remains (interior punctuation)
//! 3. lowercase
//! 4. reject noise words

use crate::noise::NoiseWordSet;
use crate::types::Keyword;

/// Turn a raw token into a keyword, or reject it
///
/// Pure function. Rejection is not an error; callers skip the token.
///
/// # Example
///
/// ```
/// use sift_core::{normalize, NoiseWordSet};
///
/// let noise = NoiseWordSet::from_words(["the"]);
/// assert_eq!(normalize("Rain.", &noise).unwrap().as_str(), "rain");
/// assert!(normalize("can't", &noise).is_none());
/// assert!(normalize("THE", &noise).is_none());
/// ```
pub fn normalize(token: &str, noise_words: &NoiseWordSet) -> Option<Keyword> {
    let stripped = token.trim_end_matches(|c: char| !c.is_alphabetic());
    if stripped.is_empty() || !stripped.chars().all(char::is_alphabetic) {
        return None;
    }

    let lowered = stripped.to_lowercase();
    if noise_words.contains(&lowered) {
        return None;
    }

    // Some letters lowercase into sequences that are not themselves letters
    // (e.g. a combining mark); Keyword::new rejects those.
    Keyword::new(lowered)
}
