//! Importing delimited genotype tables.
//!
//! Each non-blank line of the input is one comma-separated record: a taxon
//! label followed by per-locus values. No header row is recognized. Blank
//! lines are skipped here, before any row reaches the parser, and the first
//! row failure aborts the whole import.
//!
//! The I/O-free seam is [`encode_rows`]; [`read_alignment`] layers line
//! handling over it for any [`BufRead`] source, and
//! [`read_alignment_path`] opens a file by path.

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::codec::StateCodec;
use crate::config::DataType;
use crate::error::Result;
use crate::record::{Alignment, Sequence};
use crate::row::RowParser;

/// Field delimiter of the input records
const DELIMITER: char = ',';

/// Derives a collection identifier from a source name.
///
/// The last extension segment is stripped, then the name is truncated at
/// the first remaining dot: `sample.data.csv` becomes `sample`. A name
/// without dots is used as-is.
pub fn collection_id(source_name: &str) -> String {
    let stem = source_name
        .rfind('.')
        .map_or(source_name, |i| &source_name[..i]);
    let stem = stem.find('.').map_or(stem, |i| &stem[..i]);
    stem.to_string()
}

/// Encodes pre-split rows under a datatype. Performs no I/O.
///
/// Builds the codec once, parses every row against it in order, and
/// returns the codec together with the encoded sequences. Rows are
/// numbered from 1 for error context.
pub fn encode_rows<R, S>(data_type: DataType, rows: &[R]) -> Result<(StateCodec, Vec<Sequence>)>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let codec = StateCodec::new(data_type);
    let parser = RowParser::new(&codec);
    let mut sequences = Vec::with_capacity(rows.len());
    for (idx, fields) in rows.iter().enumerate() {
        sequences.push(parser.parse(idx + 1, fields.as_ref())?);
    }
    Ok((codec, sequences))
}

/// Reads an alignment from a delimited text stream.
///
/// `source_name` is only used to derive the collection identifier; the
/// stream itself carries no name. Row numbers in errors refer to physical
/// line numbers (1-based), counting the blank lines that are skipped.
pub fn read_alignment<B: BufRead>(
    source_name: &str,
    reader: B,
    data_type: DataType,
) -> Result<Alignment> {
    let codec = StateCodec::new(data_type);
    debug!(
        "importing '{source_name}' as {:?} ({} ordinary states)",
        data_type,
        codec.state_count()
    );

    let parser = RowParser::new(&codec);
    let mut sequences = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(DELIMITER).collect();
        sequences.push(parser.parse(idx + 1, &fields)?);
    }

    let id = collection_id(source_name);
    debug!("imported {} sequences from '{source_name}' as '{id}'", sequences.len());
    Ok(Alignment::new(id, codec, sequences))
}

/// Reads an alignment from a file path.
///
/// The collection identifier is derived from the file name.
pub fn read_alignment_path<P: AsRef<Path>>(path: P, data_type: DataType) -> Result<Alignment> {
    let source_name = path
        .as_ref()
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or_default()
        .to_string();
    let reader = File::open(path).map(BufReader::new)?;
    read_alignment(&source_name, reader, data_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn collection_id_strips_extension_and_embedded_dots() {
        assert_eq!(collection_id("sample.data.csv"), "sample");
        assert_eq!(collection_id("x.csv"), "x");
        assert_eq!(collection_id("plain"), "plain");
        assert_eq!(collection_id("a.b.c.d"), "a");
    }

    #[test]
    fn blank_lines_are_skipped_and_order_is_preserved() {
        let input = "\nT1,1,2\n\n   \nT2,3,3\n\n";
        let data_type = DataType::repeats(1, 3).unwrap();
        let alignment = read_alignment("loci.csv", Cursor::new(input), data_type).unwrap();
        assert_eq!(alignment.len(), 2);
        assert_eq!(alignment.sequences()[0].taxon(), "T1");
        assert_eq!(alignment.sequences()[1].taxon(), "T2");
    }

    #[test]
    fn row_errors_carry_physical_line_numbers() {
        let input = "T1,1\n\nT2,9\n";
        let data_type = DataType::repeats(1, 3).unwrap();
        let err = read_alignment("loci.csv", Cursor::new(input), data_type).unwrap_err();
        // T2 sits on the third physical line
        assert!(err.to_string().contains("Row 3"), "{err}");
    }

    #[test]
    fn encode_rows_round_trips_the_codec() {
        let data_type = DataType::repeats(1, 3).unwrap();
        let rows = [vec!["T1", "1", "2", "-1"]];
        let (codec, sequences) = encode_rows(data_type, &rows).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].display(&codec).unwrap(), "1,2,?");
    }

    #[test]
    fn empty_input_imports_an_empty_alignment() {
        let data_type = DataType::repeats(0, 5).unwrap();
        let alignment = read_alignment("empty.csv", Cursor::new(""), data_type).unwrap();
        assert!(alignment.is_empty());
        assert_eq!(alignment.id(), "empty");
    }
}
