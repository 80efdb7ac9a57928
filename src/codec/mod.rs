//! # State codec
//!
//! This module owns the bidirectional mapping between human-readable codes
//! (repeat-count digits or nucleotide symbols, plus the ambiguity, gap, and
//! missing markers) and dense internal state ids.
//!
//! A [`StateCodec`] is built once from a validated [`DataType`] and is
//! read-only afterwards, so it can be shared freely across any number of
//! row-parsing calls.
//!
//! ## Code table layout
//!
//! The code table is ordered, and its index is the canonical internal state
//! id:
//!
//! | Position                 | Entries                                |
//! | ------------------------ | -------------------------------------- |
//! | `0..state_count`         | Ordinary codes, ascending              |
//! | `state_count..len-2`     | Ambiguity codes (nucleotide mode only) |
//! | `len-2`                  | The gap code `-`                       |
//! | `len-1`                  | The missing-data code `?`              |
//!
//! Each entry has a matching state set: the ordinary states the code
//! resolves to. Ordinary codes resolve to themselves; gap and missing are
//! maximally ambiguous and resolve to the full ordinary range.

mod nucleotide;

use crate::config::DataType;
use crate::error::{CodecError, Result};

use nucleotide::{AMBIGUITY_CODES, NUCLEOTIDE_CODES};

/// Display character for an alignment gap
pub const GAP_CHAR: char = '-';

/// Display character for missing data
pub const MISSING_CHAR: char = '?';

/// Width of the resolved state set for gap and missing when the ordinary
/// state count is unknown.
///
/// This is a historical default inherited from earlier tooling, not a
/// principled choice; callers that know their state count never hit it.
pub const FALLBACK_STATE_WIDTH: usize = 10;

/// The full ordinary-state range `[0, state_count)`, falling back to
/// [`FALLBACK_STATE_WIDTH`] when the count is unknown.
fn full_state_set(state_count: Option<usize>) -> Vec<i32> {
    let n = state_count.unwrap_or(FALLBACK_STATE_WIDTH);
    (0..n as i32).collect()
}

/// Bidirectional mapping between codes and internal state ids
///
/// Immutable once built. All lookups by non-negative state id are bounds
/// checked; negative ids are accepted as the missing-data sentinel where
/// documented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCodec {
    /// The datatype the codec was built from
    data_type: DataType,

    /// Number of ordinary states
    state_count: usize,

    /// One human-readable code per internal state id
    codes: Vec<String>,

    /// Per internal state id, the ordinary states it resolves to
    state_sets: Vec<Vec<i32>>,
}
impl StateCodec {
    /// Builds the codec for a validated datatype
    ///
    /// In repeats mode the ordinary code for internal id `i` is the decimal
    /// string of `i + min`, the real-world repeat count. Nucleotide ids are
    /// already the natural alphabet index and carry no offset.
    pub fn new(data_type: DataType) -> Self {
        let state_count = data_type.state_count();
        let mut codes = Vec::with_capacity(state_count + 2);
        let mut state_sets = Vec::with_capacity(state_count + 2);

        match data_type {
            DataType::Repeats(bounds) => {
                let mut fmt = itoa::Buffer::new();
                for i in 0..state_count {
                    codes.push(fmt.format(bounds.min() + i as i32).to_string());
                    state_sets.push(vec![i as i32]);
                }
            }
            DataType::Nucleotide => {
                for (i, code) in NUCLEOTIDE_CODES.iter().enumerate() {
                    codes.push((*code).to_string());
                    state_sets.push(vec![i as i32]);
                }
                for (code, set) in AMBIGUITY_CODES {
                    codes.push(code.to_string());
                    state_sets.push(set.to_vec());
                }
            }
        }

        // gap then missing, always the last two entries
        codes.push(GAP_CHAR.to_string());
        state_sets.push(full_state_set(Some(state_count)));
        codes.push(MISSING_CHAR.to_string());
        state_sets.push(full_state_set(Some(state_count)));

        Self {
            data_type,
            state_count,
            codes,
            state_sets,
        }
    }

    /// The datatype this codec was built from
    #[inline]
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// Number of ordinary (non-ambiguous, non-gap, non-missing) states
    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// Total number of entries in the code table
    #[inline]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Always false; the table holds at least the gap and missing entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Internal state id of the gap code
    #[inline]
    pub fn gap_state(&self) -> i32 {
        (self.codes.len() - 2) as i32
    }

    /// Internal state id of the missing-data code
    #[inline]
    pub fn missing_state(&self) -> i32 {
        (self.codes.len() - 1) as i32
    }

    /// The ordinary states a state id resolves to
    ///
    /// Negative ids are the missing-data sentinel and resolve like the
    /// explicit missing code: the full ordinary range. Non-negative ids
    /// beyond the table fail with [`CodecError::StateOutOfRange`].
    pub fn states_for(&self, state: i32) -> Result<&[i32]> {
        if state < 0 {
            let missing = self.state_sets.len() - 1;
            return Ok(&self.state_sets[missing]);
        }
        self.state_sets
            .get(state as usize)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                CodecError::StateOutOfRange {
                    state,
                    len: self.state_sets.len(),
                }
                .into()
            })
    }

    /// The human-readable code for a state id
    ///
    /// Direct table lookup; any id outside `[0, len)` fails with
    /// [`CodecError::StateOutOfRange`].
    pub fn code(&self, state: i32) -> Result<&str> {
        usize::try_from(state)
            .ok()
            .and_then(|i| self.codes.get(i))
            .map(String::as_str)
            .ok_or_else(|| {
                CodecError::StateOutOfRange {
                    state,
                    len: self.codes.len(),
                }
                .into()
            })
    }

    /// Single display character for a state id: `?` for negative ids, else
    /// a character offset from `'0'`.
    ///
    /// A debug aid only. Beyond single-digit state spaces the derived
    /// character walks into the rest of the ASCII table and is not
    /// meaningful.
    pub fn char_for(&self, state: i32) -> char {
        if state < 0 {
            return MISSING_CHAR;
        }
        char::from_u32('0' as u32 + state as u32).unwrap_or(MISSING_CHAR)
    }

    /// The internal state id of a code, if the table defines it
    ///
    /// Lookup is ASCII case-insensitive, so lowercase nucleotide symbols
    /// resolve to the same states as their uppercase forms.
    pub fn state_of(&self, code: &str) -> Option<i32> {
        self.codes
            .iter()
            .position(|c| c.eq_ignore_ascii_case(code))
            .map(|i| i as i32)
    }

    /// [`Self::state_of`] for a single symbol
    pub fn state_of_symbol(&self, symbol: char) -> Option<i32> {
        let mut buf = [0u8; 4];
        self.state_of(symbol.encode_utf8(&mut buf))
    }
}
