//! Parsers for sequence files.
//!
//! Only FASTA input is supported: the reference is a single-record FASTA
//! file, the reads a multi-record one. Both may be gzip compressed.

pub mod fasta;

pub use fasta::{read_reads, read_reference, ParseError};
