//! The reference sequence being searched.

use serde::{Deserialize, Serialize};

use crate::core::alphabet;

/// A single reference sequence, immutable for the lifetime of a search.
///
/// The sequence is held as uppercase ASCII bytes. Construction normalizes
/// case but does not reject ambiguous symbols: real references routinely
/// carry `N` runs, and those are part of the alphabet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    /// Record name from the source file (e.g. `chr22`)
    pub name: String,

    /// Uppercase sequence bytes
    sequence: Vec<u8>,
}

impl Reference {
    /// Create a reference from a record name and raw sequence bytes.
    ///
    /// Bytes are uppercased; no other normalization is applied.
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

    /// The sequence bytes.
    #[must_use]
    pub fn sequence(&self) -> &[u8] {
        &self.sequence
    }

    /// Sequence length in bases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// First out-of-alphabet byte, if the sequence contains one.
    ///
    /// References are not rejected for this (see module docs), but callers
    /// may want to warn about unexpected symbols.
    #[must_use]
    pub fn first_invalid_symbol(&self) -> Option<(usize, u8)> {
        alphabet::first_invalid_symbol(&self.sequence)
    }
}
