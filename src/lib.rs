//! # satseq
//!
//! Import and state encoding of tabular genotype data for phylogenetic
//! inference.
//!
//! Each non-blank line of the input is one comma-separated record: a taxon
//! label followed by per-locus values. Two datatypes are supported:
//!
//! - **Repeats** — bounded integer repeat counts (microsatellite alleles),
//!   with a caller-chosen inclusive `[min, max]` domain and `-1` reserved
//!   to mean "ambiguous/unknown".
//! - **Nucleotide** — the fixed 4-state `A C G T` alphabet with the IUPAC
//!   ambiguity codes.
//!
//! A [`StateCodec`] is built once from the chosen [`DataType`] and owns the
//! mapping between human-readable codes and dense internal state ids,
//! including the gap and missing-data markers. A [`RowParser`] validates
//! each record against the codec's domain; the first failure aborts the
//! whole import.
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use satseq::{read_alignment, DataType};
//!
//! let table = "T1,12,13,-1\nT2,11,11,14\n";
//! let data_type = DataType::repeats(10, 15).unwrap();
//! let alignment = read_alignment("wolves.loci.csv", Cursor::new(table), data_type).unwrap();
//!
//! assert_eq!(alignment.id(), "wolves");
//! assert_eq!(alignment.len(), 2);
//!
//! // internal state ids are offset by the configured minimum
//! let codec = alignment.codec();
//! assert_eq!(alignment.sequences()[0].states()[0], 2);
//! assert_eq!(alignment.sequences()[0].display(codec).unwrap(), "12,13,?");
//! ```
//!
//! The crate performs no user interaction and no object-graph wiring into
//! any host framework; it returns the encoded sequences and the codec, and
//! an external adapter attaches them to an inference engine.

mod codec;
mod config;
mod error;
mod import;
mod record;
mod row;

pub mod prelude;

pub use codec::{StateCodec, FALLBACK_STATE_WIDTH, GAP_CHAR, MISSING_CHAR};
pub use config::{DataType, RepeatBounds, NUCLEOTIDE_STATE_COUNT};
pub use error::{CodecError, ConfigError, Error, Result, RowError};
pub use import::{collection_id, encode_rows, read_alignment, read_alignment_path};
pub use record::{Alignment, Sequence};
pub use row::{RowParser, AMBIGUOUS_REPEAT};

#[cfg(test)]
mod testing {
    use super::*;
    use anyhow::Result;
    use std::io::Cursor;

    #[test]
    fn test_repeats_import() -> Result<()> {
        let input = "T1,1,2,-1\nT2,3,3,1\n";
        let data_type = DataType::repeats(1, 3)?;
        let alignment = read_alignment("sample.data.csv", Cursor::new(input), data_type)?;

        assert_eq!(alignment.id(), "sample");
        assert_eq!(alignment.len(), 2);

        let codec = alignment.codec();
        let t1 = &alignment.sequences()[0];
        assert_eq!(t1.taxon(), "T1");
        assert_eq!(t1.states(), &[0, 1, codec.missing_state()]);
        assert_eq!(t1.display(codec)?, "1,2,?");

        let t2 = &alignment.sequences()[1];
        assert_eq!(t2.states(), &[2, 2, 0]);
        Ok(())
    }

    #[test]
    fn test_repeat_out_of_bounds_aborts_the_import() {
        let input = "T1,1,2\nT2,5\n";
        let data_type = DataType::repeats(1, 3).unwrap();
        let err = read_alignment("sample.csv", Cursor::new(input), data_type).unwrap_err();
        match err {
            Error::RowError(RowError::AlleleOutOfRange { value, taxon, .. }) => {
                assert_eq!(value, 5);
                assert_eq!(taxon, "T2");
            }
            other => panic!("expected an out-of-range allele, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_taxon_label_regardless_of_datatype() {
        for data_type in [DataType::repeats(1, 3).unwrap(), DataType::Nucleotide] {
            let err = read_alignment("x.csv", Cursor::new(",1\n"), data_type).unwrap_err();
            assert!(matches!(
                err,
                Error::RowError(RowError::MissingTaxonLabel { row: 1 })
            ));
        }
    }

    #[test]
    fn test_nucleotide_import() -> Result<()> {
        let input = "T1,ACGT,R\nT2,TTAA,N\n";
        let alignment = read_alignment("loci.csv", Cursor::new(input), DataType::Nucleotide)?;

        let codec = alignment.codec();
        let t1 = &alignment.sequences()[0];
        let r = codec.state_of("R").unwrap();
        assert_eq!(t1.states(), &[0, 1, 2, 3, r]);
        // R resolves to the purines
        assert_eq!(codec.states_for(r)?, &[0, 2]);
        Ok(())
    }

    #[test]
    fn test_codec_table_shape_across_bounds() -> Result<()> {
        for (min, max) in [(0, 0), (1, 3), (5, 9), (0, 9), (10, 25)] {
            let data_type = DataType::repeats(min, max)?;
            let codec = StateCodec::new(data_type);
            let expected = (max - min + 1) as usize;
            assert_eq!(codec.state_count(), expected);
            // ordinary states plus gap plus missing
            assert_eq!(codec.len(), expected + 2);
        }
        Ok(())
    }

    #[test]
    fn test_real_world_values_round_trip() -> Result<()> {
        let (min, max) = (10, 25);
        let data_type = DataType::repeats(min, max)?;
        let codec = StateCodec::new(data_type);
        for v in min..=max {
            let state = codec.state_of(&v.to_string()).unwrap();
            assert_eq!(state, v - min);
            assert_eq!(codec.code(state)?, v.to_string());
        }
        Ok(())
    }
}
