//! Row parsing: one raw input record to a validated [`Sequence`].
//!
//! A [`RowParser`] borrows the active [`StateCodec`] and validates every
//! field of a row against its domain. Any single-field failure aborts the
//! whole row; no partial sequence is ever emitted.

use crate::codec::StateCodec;
use crate::config::DataType;
use crate::error::{Result, RowError};
use crate::record::Sequence;

/// Repeat-count value reserved to mean "ambiguous/unknown"
///
/// Always accepted regardless of the configured bounds and encoded as the
/// missing-data state.
pub const AMBIGUOUS_REPEAT: i32 = -1;

/// Validates raw rows against a codec's domain and encodes them
///
/// The codec is borrowed read-only, so one parser (or many) can run over
/// any number of rows.
#[derive(Debug, Clone, Copy)]
pub struct RowParser<'c> {
    codec: &'c StateCodec,
}
impl<'c> RowParser<'c> {
    pub fn new(codec: &'c StateCodec) -> Self {
        Self { codec }
    }

    /// Parses one row into a [`Sequence`].
    ///
    /// `fields[0]` is the taxon label; the remaining fields are per-locus
    /// values. `row` is the 1-based position of the record in its source,
    /// used only for error context.
    ///
    /// In repeats mode each field must parse as an integer within the
    /// configured bounds ([`AMBIGUOUS_REPEAT`] is always accepted). In
    /// nucleotide mode each field is resolved symbol by symbol through the
    /// alphabet, so a field may carry more than one base.
    pub fn parse<S: AsRef<str>>(&self, row: usize, fields: &[S]) -> Result<Sequence> {
        let taxon = fields.first().map_or("", |f| f.as_ref().trim());
        if taxon.is_empty() {
            return Err(RowError::MissingTaxonLabel { row }.into());
        }

        let mut states = Vec::with_capacity(fields.len() - 1);
        for (i, field) in fields[1..].iter().enumerate() {
            let column = i + 1;
            let raw = field.as_ref().trim();
            match self.codec.data_type() {
                DataType::Repeats(bounds) => {
                    let value: i32 = raw.parse().map_err(|_| RowError::MalformedField {
                        row,
                        taxon: taxon.to_string(),
                        column,
                        raw: raw.to_string(),
                    })?;
                    if bounds.is_out_of_bounds(value) {
                        return Err(RowError::AlleleOutOfRange {
                            row,
                            taxon: taxon.to_string(),
                            column,
                            value,
                            min_repeat: bounds.min(),
                            max_repeat: bounds.max(),
                        }
                        .into());
                    }
                    if value == AMBIGUOUS_REPEAT {
                        states.push(self.codec.missing_state());
                    } else {
                        // invert the offset applied at codec construction
                        let state = value - bounds.min();
                        if state < 0 {
                            // 0 (and negatives other than -1) pass the bounds
                            // predicate but name no state in the table
                            return Err(RowError::UnknownSymbol {
                                row,
                                taxon: taxon.to_string(),
                                column,
                                symbol: raw.to_string(),
                            }
                            .into());
                        }
                        states.push(state);
                    }
                }
                DataType::Nucleotide => {
                    for symbol in raw.chars() {
                        let state = self.codec.state_of_symbol(symbol).ok_or_else(|| {
                            RowError::UnknownSymbol {
                                row,
                                taxon: taxon.to_string(),
                                column,
                                symbol: symbol.to_string(),
                            }
                        })?;
                        states.push(state);
                    }
                }
            }
        }

        Ok(Sequence::new(taxon.to_string(), states))
    }
}
