//! FASTA reading using noodles.
//!
//! Loads reference and read sequences into memory. Supports both
//! uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::warn;

use crate::core::{Read, ReadSet, Reference};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("no sequences found in FASTA file")]
    Empty,

    #[error("reference file must contain exactly one record, found {found}")]
    RecordCount { found: usize },
}

/// Check if the path has a FASTA extension
#[must_use]
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    // Check for gzipped FASTA
    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    // Check for uncompressed FASTA
    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read the reference sequence from a FASTA file.
///
/// The file must contain exactly one record; anything else is a
/// configuration error, never a silent truncation to the first record.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, or `ParseError::RecordCount` if the file does not hold
/// exactly one record.
pub fn read_reference(path: &Path) -> Result<Reference, ParseError> {
    let mut records = read_records(path)?;

    if records.len() != 1 {
        return Err(ParseError::RecordCount {
            found: records.len(),
        });
    }

    let (name, sequence) = records.remove(0);
    let reference = Reference::new(name, sequence);

    if let Some((offset, symbol)) = reference.first_invalid_symbol() {
        warn!(
            reference = %reference.name,
            offset,
            symbol = %(symbol as char),
            "reference contains out-of-alphabet symbol"
        );
    }

    Ok(reference)
}

/// Read the query sequences from a FASTA file, in record order.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles`
/// if parsing fails, or `ParseError::Empty` if the file holds no records.
pub fn read_reads(path: &Path) -> Result<ReadSet, ParseError> {
    let records = read_records(path)?;

    if records.is_empty() {
        return Err(ParseError::Empty);
    }

    let reads = records
        .into_iter()
        .map(|(name, sequence)| Read::new(name, sequence))
        .collect();

    Ok(ReadSet::new(reads))
}

/// Read all records from a FASTA file as (name, sequence) pairs
fn read_records(path: &Path) -> Result<Vec<(String, Vec<u8>)>, ParseError> {
    if !is_fasta_file(path) {
        warn!(
            path = %path.display(),
            "input does not have a FASTA extension, attempting to parse anyway"
        );
    }

    if is_gzipped(path) {
        let file = std::fs::File::open(path)?;
        let decoder = GzDecoder::new(file);
        let reader = BufReader::new(decoder);
        read_records_from(fasta::io::Reader::new(reader))
    } else {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        read_records_from(fasta::io::Reader::new(reader))
    }
}

/// Drain a noodles FASTA reader into owned records
fn read_records_from<R: BufRead>(
    mut reader: fasta::io::Reader<R>,
) -> Result<Vec<(String, Vec<u8>)>, ParseError> {
    let mut records = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let name = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();

        records.push((name, sequence));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_fasta(content: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(content).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn test_is_fasta_file() {
        assert!(is_fasta_file(Path::new("test.fa")));
        assert!(is_fasta_file(Path::new("test.fasta")));
        assert!(is_fasta_file(Path::new("test.fna")));
        assert!(is_fasta_file(Path::new("reads.fasta.gz")));
        assert!(is_fasta_file(Path::new("ref.fa.bgz")));
        assert!(is_fasta_file(Path::new("/path/to/Reference.FA")));

        assert!(!is_fasta_file(Path::new("test.txt")));
        assert!(!is_fasta_file(Path::new("test.fai")));
    }

    #[test]
    fn test_read_reference() {
        let temp = write_fasta(b">chr1 partial\nGATT\nACA\n");

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.name, "chr1");
        assert_eq!(reference.sequence(), b"GATTACA");
    }

    #[test]
    fn test_read_reference_lowercase_normalized() {
        let temp = write_fasta(b">chr1\ngattaca\n");

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.sequence(), b"GATTACA");
    }

    #[test]
    fn test_read_reference_rejects_multiple_records() {
        let temp = write_fasta(b">chr1\nACGT\n>chr2\nGGGG\n");

        let err = read_reference(temp.path()).unwrap_err();
        assert!(matches!(err, ParseError::RecordCount { found: 2 }));
    }

    #[test]
    fn test_read_reference_rejects_empty_file() {
        let temp = write_fasta(b"");

        let err = read_reference(temp.path()).unwrap_err();
        assert!(matches!(err, ParseError::RecordCount { found: 0 }));
    }

    #[test]
    fn test_read_reads_order_preserved() {
        let temp = write_fasta(b">r1\nACGT\n>r2\nGATT\n>r3\nTTTT\n");

        let reads = read_reads(temp.path()).unwrap();
        let names: Vec<&str> = reads.reads().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_read_reads_empty_file() {
        let temp = write_fasta(b"");

        let err = read_reads(temp.path()).unwrap_err();
        assert!(matches!(err, ParseError::Empty));
    }

    #[test]
    fn test_read_gzipped() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b">chr1\nGATTACA\n").unwrap();
        let compressed = encoder.finish().unwrap();
        temp.write_all(&compressed).unwrap();
        temp.flush().unwrap();

        let reference = read_reference(temp.path()).unwrap();
        assert_eq!(reference.sequence(), b"GATTACA");
    }
}
