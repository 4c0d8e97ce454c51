//! Read (query) collections.

use serde::{Deserialize, Serialize};

/// A single read: a short query sequence with its record name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Read {
    /// Record name from the source file
    pub name: String,

    /// Uppercase sequence bytes
    sequence: Vec<u8>,
}

impl Read {
    /// Create a read from a record name and raw sequence bytes (uppercased).
    #[must_use]
    pub fn new(name: impl Into<String>, sequence: impl AsRef<[u8]>) -> Self {
        let sequence = sequence
            .as_ref()
            .iter()
            .map(u8::to_ascii_uppercase)
            .collect();

        Self {
            name: name.into(),
            sequence,
        }
    }

    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

/// An ordered collection of reads.
///
/// Order is significant: batch search results are reported one entry per
/// read, in this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadSet {
    reads: Vec<Read>,
}

impl ReadSet {
    #[must_use]
    pub fn new(reads: Vec<Read>) -> Self {
        Self { reads }
    }

    #[must_use]
    pub fn reads(&self) -> &[Read] {
        &self.reads
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reads.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    /// The first `limit` reads, or all of them when `limit` is `None`.
    ///
    /// A limit larger than the collection clamps to the whole collection.
    #[must_use]
    pub fn take(&self, limit: Option<usize>) -> &[Read] {
        match limit {
            Some(n) => &self.reads[..n.min(self.reads.len())],
            None => &self.reads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> ReadSet {
        ReadSet::new(vec![
            Read::new("r1", "ACGT"),
            Read::new("r2", "GATT"),
            Read::new("r3", "TTTT"),
        ])
    }

    #[test]
    fn test_read_uppercases() {
        let read = Read::new("r1", "acgt");
        assert_eq!(read.sequence(), b"ACGT");
    }

    #[test]
    fn test_take_no_limit() {
        let set = sample_set();
        assert_eq!(set.take(None).len(), 3);
    }

    #[test]
    fn test_take_limit() {
        let set = sample_set();
        let taken = set.take(Some(2));
        assert_eq!(taken.len(), 2);
        assert_eq!(taken[0].name, "r1");
        assert_eq!(taken[1].name, "r2");
    }

    #[test]
    fn test_take_limit_clamps() {
        let set = sample_set();
        assert_eq!(set.take(Some(10)).len(), 3);
    }
}
