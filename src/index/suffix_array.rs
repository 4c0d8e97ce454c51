//! Suffix array construction and access.
//!
//! A suffix array is the permutation of `0..n` that orders the suffixes of
//! the reference lexicographically. It is built once per reference and
//! shared read-only across every query in a batch.
//!
//! Construction sorts the position vector by suffix comparison: O(n log n)
//! comparisons, parallelized with rayon above a size threshold. Plain
//! comparison sort keeps the index exactly lexicographic, which the
//! searcher's binary searches depend on.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Reference;

/// Below this many bases the parallel sort is not worth its overhead.
const PARALLEL_SORT_THRESHOLD: usize = 100_000;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("reference of {0} bases exceeds the 32-bit suffix array limit")]
    ReferenceTooLong(usize),
}

/// Sorted suffix array over a reference sequence.
///
/// Offsets are stored as `u32`, which bounds indexable references at
/// 4 GiB. Longer inputs are rejected at build time rather than truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixArray {
    offsets: Vec<u32>,
}

impl SuffixArray {
    /// Build the suffix array for `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::ReferenceTooLong`] if the sequence does not
    /// fit 32-bit offsets.
    pub fn build(reference: &Reference) -> Result<Self, IndexError> {
        let text = reference.sequence();
        let n = text.len();

        if u32::try_from(n).is_err() {
            return Err(IndexError::ReferenceTooLong(n));
        }

        #[allow(clippy::cast_possible_truncation)] // length checked above
        let mut offsets: Vec<u32> = (0..n as u32).collect();

        if n > PARALLEL_SORT_THRESHOLD {
            offsets.par_sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
        } else {
            offsets.sort_unstable_by(|&a, &b| text[a as usize..].cmp(&text[b as usize..]));
        }

        Ok(Self { offsets })
    }

    /// Wrap an externally constructed array.
    ///
    /// The caller is responsible for the sortedness and permutation
    /// invariants; [`SuffixArray::is_valid_for`] can verify them.
    #[must_use]
    pub fn from_offsets(offsets: Vec<u32>) -> Self {
        Self { offsets }
    }

    /// The sorted offsets.
    #[must_use]
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Number of suffixes (equals the reference length).
    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Verify the permutation and sortedness invariants against a reference.
    ///
    /// Intended for validating externally supplied arrays; `build` output
    /// satisfies this by construction.
    #[must_use]
    pub fn is_valid_for(&self, reference: &Reference) -> bool {
        let text = reference.sequence();
        if self.offsets.len() != text.len() {
            return false;
        }

        let mut seen = vec![false; text.len()];
        for &offset in &self.offsets {
            match seen.get_mut(offset as usize) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }

        self.offsets
            .windows(2)
            .all(|w| text[w[0] as usize..] <= text[w[1] as usize..])
    }
}
