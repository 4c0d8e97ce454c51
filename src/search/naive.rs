//! Naive scan-and-mask search.
//!
//! The baseline engine: no preprocessing, repeated linear scans. Two
//! variants are provided:
//!
//! - [`search_naive`]: the masking scanner. Each found occurrence is
//!   overwritten with [`MASK_BYTE`](crate::core::alphabet::MASK_BYTE) in a
//!   per-call working copy so its span cannot rematch, which makes the
//!   reported occurrences *non-overlapping*.
//! - [`search_naive_overlapping`]: plain window scan reporting every
//!   occurrence, overlapping included. This is the oracle the indexed
//!   engine is cross-validated against.
//!
//! Both are O(k·n) and intended for small inputs and correctness checks.

use crate::core::alphabet::MASK_BYTE;

/// Leftmost occurrence of `needle` in `haystack`, scanning from the start.
fn find_leftmost(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Non-overlapping occurrences of `query` in `reference`, ascending.
///
/// Maintains a mutable working copy of the reference scoped to this call.
/// Each iteration finds the leftmost occurrence, records it, and masks the
/// matched span before rescanning from the start. Returns an empty vector
/// for an empty query or a query longer than the reference.
#[must_use]
pub fn search_naive(query: &[u8], reference: &[u8]) -> Vec<usize> {
    let mut positions = Vec::new();
    if query.is_empty() || query.len() > reference.len() {
        return positions;
    }

    let mut working = reference.to_vec();
    while let Some(pos) = find_leftmost(&working, query) {
        positions.push(pos);
        working[pos..pos + query.len()].fill(MASK_BYTE);
    }

    positions
}

/// Every occurrence of `query` in `reference`, overlapping included,
/// ascending.
#[must_use]
pub fn search_naive_overlapping(query: &[u8], reference: &[u8]) -> Vec<usize> {
    if query.is_empty() || query.len() > reference.len() {
        return Vec::new();
    }

    reference
        .windows(query.len())
        .enumerate()
        .filter(|(_, w)| *w == query)
        .map(|(i, _)| i)
        .collect()
}
