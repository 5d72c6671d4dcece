//! Ordered insertion of per-document counts into the index
//!
//! Each keyword's OccurrenceList stays non-increasing by frequency after
//! every insert. A new occurrence is appended, then moved to its place:
//! positions 0..n-2 are already ranked, so a binary search over them finds
//! the spot and one rotation shifts the tail. No re-sort.
//!
//! Ties go after every existing occurrence of the same frequency, so lists
//! are ordered by (frequency desc, arrival asc).

use crate::index::{Index, OccurrenceList};
use crate::indexer::DocumentKeywords;
use sift_core::Occurrence;
use std::cmp::Ordering;

/// Counters from merging one document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Keywords seen for the first time
    pub new_keywords: usize,
    /// Keywords whose existing list received an occurrence
    pub updated_keywords: usize,
    /// Binary search midpoints visited across all updated lists
    pub midpoints_visited: usize,
}

/// Fold one document's keyword counts into the index
///
/// The caller is responsible for not merging the same document twice;
/// a second merge double counts.
pub fn merge(index: &mut Index, counts: DocumentKeywords) -> MergeStats {
    let (document, occurrences) = counts.into_parts();
    let added = occurrences.len();
    let mut stats = MergeStats::default();

    for (keyword, occurrence) in occurrences {
        match index.list_mut(keyword.as_str()) {
            Some(list) => {
                let entries = list.entries_mut();
                entries.push(occurrence);
                place_last(entries, |_| stats.midpoints_visited += 1);
                stats.updated_keywords += 1;
            }
            None => {
                index.insert_list(keyword, OccurrenceList::singleton(occurrence));
                stats.new_keywords += 1;
            }
        }
    }

    index.record_document(document, added);
    stats
}

/// Move the last element of `occurrences` to its ranked position and return
/// the midpoints the binary search visited
///
/// Diagnostic entry point for test harnesses. `occurrences[..n-1]` must
/// already be non-increasing by frequency. Returns an empty trace when the
/// slice has fewer than two elements.
///
/// # Example
///
/// ```
/// use sift_core::Occurrence;
/// use sift_engine::merge::insert_last_occurrence;
///
/// let mut occs: Vec<Occurrence> = [5, 3, 3, 1, 3]
///     .iter()
///     .enumerate()
///     .map(|(i, f)| Occurrence::new(format!("d{}", i), *f))
///     .collect();
/// let trace = insert_last_occurrence(&mut occs);
/// assert_eq!(trace, vec![1]);
/// let freqs: Vec<u32> = occs.iter().map(|o| o.frequency).collect();
/// assert_eq!(freqs, vec![5, 3, 3, 3, 1]);
/// ```
pub fn insert_last_occurrence(occurrences: &mut [Occurrence]) -> Vec<usize> {
    let mut trace = Vec::new();
    if occurrences.len() > 1 {
        place_last(occurrences, |mid| trace.push(mid));
    }
    trace
}

/// Rotate the trailing element into place; returns its final index
fn place_last(entries: &mut [Occurrence], visit: impl FnMut(usize)) -> usize {
    let Some((last, ranked)) = entries.split_last() else {
        return 0;
    };
    let position = insertion_point(ranked, last.frequency, visit);
    entries[position..].rotate_right(1);
    position
}

/// Binary search over a non-increasing slice
///
/// Stops early on an exact frequency match and then skips past the whole
/// run of equal frequencies.
fn insertion_point(ranked: &[Occurrence], target: u32, mut visit: impl FnMut(usize)) -> usize {
    if ranked.is_empty() {
        return 0;
    }

    let mut left = 0usize;
    let mut right = ranked.len() - 1;

    while left <= right {
        let mid = (left + right) / 2;
        visit(mid);

        match ranked[mid].frequency.cmp(&target) {
            Ordering::Greater => left = mid + 1,
            Ordering::Less => {
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
            Ordering::Equal => {
                let run = ranked[mid + 1..]
                    .iter()
                    .take_while(|o| o.frequency == target)
                    .count();
                return mid + 1 + run;
            }
        }
    }

    left
}
