//! Output records of an import: one encoded [`Sequence`] per input row,
//! collected into an [`Alignment`] together with the codec that encoded
//! them.

use crate::codec::StateCodec;
use crate::error::Result;

/// One taxon's encoded genotype row
///
/// A non-empty taxon label paired with the internal state ids of its loci,
/// in input order. Immutable once returned by the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    taxon: String,
    states: Vec<i32>,
}
impl Sequence {
    pub(crate) fn new(taxon: String, states: Vec<i32>) -> Self {
        Self { taxon, states }
    }

    /// The taxon label from the first field of the row
    #[inline]
    pub fn taxon(&self) -> &str {
        &self.taxon
    }

    /// The encoded internal state ids, one per locus
    #[inline]
    pub fn states(&self) -> &[i32] {
        &self.states
    }

    /// Number of loci
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Renders the sequence as its comma-joined codes, e.g. `5,6,?`
    ///
    /// The codec must be the one the sequence was encoded under.
    pub fn display(&self, codec: &StateCodec) -> Result<String> {
        let mut out = String::new();
        for (i, &state) in self.states.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(codec.code(state)?);
        }
        Ok(out)
    }
}

/// An imported collection of sequences
///
/// Holds the derived collection identifier, the codec the rows were encoded
/// under, and the sequences in input row order. This is the value handed to
/// the downstream alignment-assembly collaborator.
#[derive(Debug, Clone)]
pub struct Alignment {
    id: String,
    codec: StateCodec,
    sequences: Vec<Sequence>,
}
impl Alignment {
    pub(crate) fn new(id: String, codec: StateCodec, sequences: Vec<Sequence>) -> Self {
        Self {
            id,
            codec,
            sequences,
        }
    }

    /// Identifier derived from the source stream's name
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The codec the sequences were encoded under
    #[inline]
    pub fn codec(&self) -> &StateCodec {
        &self.codec
    }

    /// The sequences, in input row order
    #[inline]
    pub fn sequences(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Number of sequences
    #[inline]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
