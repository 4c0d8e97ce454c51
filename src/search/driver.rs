//! Batch driver: run one engine over an ordered read collection.
//!
//! Reads are validated up front (empty reads and out-of-alphabet symbols
//! are rejected, never silently searched), then fanned out with rayon over
//! the shared read-only reference (and, for the indexed engine, the
//! shared suffix array). Results are reassembled in input order.

use rayon::prelude::*;
use thiserror::Error;
use tracing::debug;

use crate::core::{Read, ReadSet, Reference};
use crate::index::{IndexError, SuffixArray};
use crate::search::indexed::search_indexed;
use crate::search::naive::{search_naive, search_naive_overlapping};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("read '{name}' is empty; empty queries are not searchable")]
    EmptyRead { name: String },

    #[error("read '{name}' contains invalid symbol '{symbol}' at offset {offset}")]
    InvalidSymbol {
        name: String,
        offset: usize,
        symbol: char,
    },

    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Which occurrences the naive engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NaiveMode {
    /// Scan-and-mask: non-overlapping occurrences only
    #[default]
    NonOverlapping,
    /// Plain window scan: every occurrence, overlapping included
    Overlapping,
}

/// Search every read (or the first `limit`) with the naive scanner.
///
/// Returns one ascending position list per read, in read order.
///
/// # Errors
///
/// Returns [`SearchError::EmptyRead`] or [`SearchError::InvalidSymbol`]
/// if any selected read fails validation; no read is searched in that
/// case.
pub fn naive_search(
    reference: &Reference,
    reads: &ReadSet,
    limit: Option<usize>,
) -> Result<Vec<Vec<usize>>, SearchError> {
    naive_search_with_mode(reference, reads, limit, NaiveMode::default())
}

/// [`naive_search`] with an explicit overlap mode.
///
/// # Errors
///
/// Same as [`naive_search`].
pub fn naive_search_with_mode(
    reference: &Reference,
    reads: &ReadSet,
    limit: Option<usize>,
    mode: NaiveMode,
) -> Result<Vec<Vec<usize>>, SearchError> {
    let selected = reads.take(limit);
    validate_reads(selected)?;

    debug!(
        reads = selected.len(),
        reference = %reference.name,
        ?mode,
        "naive batch search"
    );

    let results = selected
        .par_iter()
        .map(|read| match mode {
            NaiveMode::NonOverlapping => search_naive(read.sequence(), reference.sequence()),
            NaiveMode::Overlapping => {
                search_naive_overlapping(read.sequence(), reference.sequence())
            }
        })
        .collect();

    Ok(results)
}

/// Search every read (or the first `limit`) with the suffix-array engine.
///
/// Builds the suffix array for `reference`, then delegates to
/// [`suffix_search_with_index`]. When running several batches against one
/// reference, build the index once and call the latter directly.
///
/// # Errors
///
/// Returns [`SearchError::Index`] if the reference cannot be indexed, or
/// a validation error as for [`naive_search`].
pub fn suffix_search(
    reference: &Reference,
    reads: &ReadSet,
    limit: Option<usize>,
) -> Result<Vec<Vec<usize>>, SearchError> {
    let suffix_array = SuffixArray::build(reference)?;
    suffix_search_with_index(reference, &suffix_array, reads, limit)
}

/// Suffix-array batch search over a prebuilt index.
///
/// # Errors
///
/// Returns [`SearchError::EmptyRead`] or [`SearchError::InvalidSymbol`]
/// if any selected read fails validation.
pub fn suffix_search_with_index(
    reference: &Reference,
    suffix_array: &SuffixArray,
    reads: &ReadSet,
    limit: Option<usize>,
) -> Result<Vec<Vec<usize>>, SearchError> {
    let selected = reads.take(limit);
    validate_reads(selected)?;

    debug!(
        reads = selected.len(),
        reference = %reference.name,
        suffixes = suffix_array.len(),
        "indexed batch search"
    );

    let results = selected
        .par_iter()
        .map(|read| search_indexed(read.sequence(), suffix_array, reference.sequence()))
        .collect();

    Ok(results)
}

/// Reject empty reads and reads with out-of-alphabet symbols.
fn validate_reads(reads: &[Read]) -> Result<(), SearchError> {
    for read in reads {
        if read.is_empty() {
            return Err(SearchError::EmptyRead {
                name: read.name.clone(),
            });
        }
        if let Some((offset, symbol)) = crate::core::alphabet::first_invalid_symbol(read.sequence())
        {
            return Err(SearchError::InvalidSymbol {
                name: read.name.clone(),
                offset,
                symbol: symbol as char,
            });
        }
    }
    Ok(())
}
