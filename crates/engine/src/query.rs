//! Top-K union query over two keywords
//!
//! Both posting lists are already ranked, so the union is a merge scan with
//! one cursor per list:
//! - the higher front frequency wins; a tie goes to the first keyword
//! - a document already emitted is consumed without being emitted again
//! - the scan stops at `limit` results or when both cursors run out
//!
//! The stored lists are read through slices and never modified.

use crate::index::Index;
use serde::Serialize;
use sift_core::{DocumentId, Occurrence};

/// Default number of results of a top-K query
pub const DEFAULT_RESULT_LIMIT: usize = 5;

/// Which query keyword supplied a hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedKeyword {
    /// The first keyword of the query
    First,
    /// The second keyword of the query
    Second,
}

/// One ranked query result with the occurrence that selected it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryHit {
    /// Matching document
    pub document: DocumentId,
    /// Frequency of the winning keyword in that document
    pub frequency: u32,
    /// Keyword list the document was taken from
    pub matched: MatchedKeyword,
}

/// Ranked documents containing `kw1` or `kw2`, at most `limit` of them
///
/// Keywords are looked up verbatim; use [`crate::SearchEngine::query`] to
/// normalize raw input first. Unknown keywords contribute nothing.
pub fn top(index: &Index, kw1: &str, kw2: &str, limit: usize) -> Vec<DocumentId> {
    top_hits(index, kw1, kw2, limit)
        .into_iter()
        .map(|hit| hit.document)
        .collect()
}

/// Same selection as [`top`], keeping frequency and source per hit
pub fn top_hits(index: &Index, kw1: &str, kw2: &str, limit: usize) -> Vec<QueryHit> {
    let first = index.get(kw1).map(|l| l.as_slice()).unwrap_or(&[]);
    let second = index.get(kw2).map(|l| l.as_slice()).unwrap_or(&[]);
    union_ranked(first, second, limit)
}

fn union_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<QueryHit> {
    let mut hits: Vec<QueryHit> = Vec::with_capacity(limit.min(first.len() + second.len()));
    let (mut i, mut j) = (0, 0);

    while hits.len() < limit {
        let (occurrence, matched) = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.frequency >= b.frequency => {
                i += 1;
                (a, MatchedKeyword::First)
            }
            (_, Some(b)) => {
                j += 1;
                (b, MatchedKeyword::Second)
            }
            (Some(a), None) => {
                i += 1;
                (a, MatchedKeyword::First)
            }
            (None, None) => break,
        };

        // consumed, but not emitted twice
        if hits.iter().any(|h| h.document == occurrence.document) {
            continue;
        }
        hits.push(QueryHit {
            document: occurrence.document.clone(),
            frequency: occurrence.frequency,
            matched,
        });
    }

    hits
}
