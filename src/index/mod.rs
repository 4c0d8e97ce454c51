//! Reference indexing.
//!
//! Currently one index type: the [`SuffixArray`], consumed by the indexed
//! search engine.

pub mod suffix_array;

pub use suffix_array::{IndexError, SuffixArray};
