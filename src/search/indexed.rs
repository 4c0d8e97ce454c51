//! Suffix-array-backed search.
//!
//! Every suffix sharing the query as a prefix sits in one contiguous run
//! of the sorted suffix array. The engine locates that run with two
//! monotone-predicate binary searches (lower bound of "suffix ≥ query",
//! then upper bound of "suffix starts with query"), so the whole lookup is
//! O(log n · m) regardless of how many suffixes match, with no linear
//! walk along the run boundaries.
//!
//! Unlike the masking scanner this engine reports *every* occurrence,
//! overlapping ones included.

use crate::index::SuffixArray;

/// Every occurrence of `query` in `reference`, ascending, via the
/// reference's suffix array.
///
/// An empty suffix array, an empty query, or an absent query all yield an
/// empty vector; an absent query converges to an empty run without
/// reporting spurious offsets.
#[must_use]
pub fn search_indexed(query: &[u8], suffix_array: &SuffixArray, reference: &[u8]) -> Vec<usize> {
    if query.is_empty() || suffix_array.is_empty() {
        return Vec::new();
    }

    let offsets = suffix_array.offsets();
    let lo = lower_bound(query, offsets, reference);
    let hi = upper_bound(query, offsets, reference, lo);

    let mut positions: Vec<usize> = offsets[lo..hi].iter().map(|&o| o as usize).collect();
    // Suffix order is not offset order
    positions.sort_unstable();
    positions
}

/// Smallest index whose suffix is lexicographically ≥ `query`.
///
/// A suffix shorter than the query but equal on the overlap compares less
/// than the query (standard slice ordering), so truncated suffixes never
/// need special casing.
fn lower_bound(query: &[u8], offsets: &[u32], reference: &[u8]) -> usize {
    let mut lo = 0;
    let mut hi = offsets.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = &reference[offsets[mid] as usize..];
        let head = &suffix[..suffix.len().min(query.len())];

        if head < query {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}

/// Smallest index at or after `start` whose suffix does NOT start with
/// `query`.
///
/// "Starts with query" is false for every index before the matching run
/// and true inside it, then false after. That is monotone over
/// `[start, len)` once `start` is the lower bound, so binary search
/// applies.
fn upper_bound(query: &[u8], offsets: &[u32], reference: &[u8], start: usize) -> usize {
    let mut lo = start;
    let mut hi = offsets.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let suffix = &reference[offsets[mid] as usize..];

        if suffix.len() >= query.len() && &suffix[..query.len()] == query {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    lo
}
