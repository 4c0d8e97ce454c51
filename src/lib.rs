//! # seed-search
//!
//! A library for exact-occurrence search of sequencing reads against a
//! reference genome, the seeding step of short-read alignment.
//!
//! Given a single-record reference FASTA and a multi-record reads FASTA,
//! seed-search reports, for every read, the reference positions at which
//! the read occurs verbatim.
//!
//! ## Engines
//!
//! - **Suffix-array search**: a one-time O(n log n) index build, then each
//!   read is answered with two binary searches over the sorted suffixes.
//!   O(log n · m) per read, every occurrence reported (overlapping
//!   included).
//! - **Naive scan-and-mask**: no preprocessing, repeated linear scans with
//!   span masking. The correctness baseline, reporting non-overlapping
//!   occurrences. An overlapping-aware brute-force variant serves as the
//!   testing oracle.
//!
//! ## Example
//!
//! ```rust
//! use seed_search::{suffix_search, Read, ReadSet, Reference};
//!
//! let reference = Reference::new("chr1", "GATTACA");
//! let reads = ReadSet::new(vec![Read::new("r1", "A")]);
//!
//! let results = suffix_search(&reference, &reads, None).unwrap();
//! assert_eq!(results, vec![vec![1, 3, 5]]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Reference, read, and alphabet types
//! - [`index`]: Suffix-array construction
//! - [`search`]: The two engines and the batch driver
//! - [`parsing`]: FASTA reading on noodles
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod index;
pub mod parsing;
pub mod search;

// Re-export commonly used types for convenience
pub use crate::core::{Read, ReadSet, Reference};
pub use index::{IndexError, SuffixArray};
pub use parsing::ParseError;
pub use search::{naive_search, suffix_search, NaiveMode, SearchError};
