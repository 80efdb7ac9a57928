/// Custom Result type for satseq operations, wrapping the custom [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the satseq library, encompassing all possible error
/// cases that can occur while configuring, building, or running an import.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub enum Error {
    /// Errors raised while validating a datatype configuration
    ConfigError(#[from] ConfigError),
    /// Errors raised by state codec lookups
    CodecError(#[from] CodecError),
    /// Errors raised while parsing an input row
    RowError(#[from] RowError),
    /// Standard I/O errors from the Rust standard library
    IoError(#[from] std::io::Error),
    /// Generic errors that can occur in any part of the system
    AnyhowError(#[from] anyhow::Error),
}

/// Errors raised before any parsing starts, while validating the bounds of a
/// repeat-count datatype.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured repeat bounds violate `max >= min >= 0`.
    ///
    /// No codec is built from such a configuration.
    #[error("Invalid repeat bounds: min {min_repeat}, max {max_repeat} (max >= min >= 0 must hold)")]
    InvalidRepeatBounds { min_repeat: i32, max_repeat: i32 },
}

/// Errors raised by codec lookups.
///
/// These indicate a programming error in the caller (an internal state id
/// that was never issued by the codec), not malformed user input.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// A non-negative state id beyond the end of the code table
    ///
    /// # Fields
    /// * `state` - The requested state id
    /// * `len` - The number of entries in the code table
    #[error("State id {state} is out of range for a code table of {len} entries")]
    StateOutOfRange { state: i32, len: usize },
}

/// Errors raised while parsing one input row.
///
/// Every variant carries the 1-based row number and, where one exists, the
/// taxon label and the 1-based field position after the label, so a caller
/// can render a precise message. Any row error aborts the whole import.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum RowError {
    /// The first field of the row was empty or all-whitespace
    #[error("Row {row}: expected a taxon label in the first field")]
    MissingTaxonLabel { row: usize },

    /// A repeat-count field did not parse as an integer
    #[error("Row {row}, taxon '{taxon}', locus {column}: '{raw}' is not an integer repeat count")]
    MalformedField {
        row: usize,
        taxon: String,
        column: usize,
        raw: String,
    },

    /// A parsed repeat count fell outside the configured bounds
    ///
    /// Produced exactly when `(value > 0 && value < min_repeat) || value > max_repeat`;
    /// the ambiguity sentinel `-1` is always accepted.
    #[error("Row {row}, taxon '{taxon}', locus {column}: repeat count {value} is outside [{min_repeat}, {max_repeat}]")]
    AlleleOutOfRange {
        row: usize,
        taxon: String,
        column: usize,
        value: i32,
        min_repeat: i32,
        max_repeat: i32,
    },

    /// A field held a code the active datatype's alphabet does not define
    #[error("Row {row}, taxon '{taxon}', locus {column}: code '{symbol}' is not defined for this datatype")]
    UnknownSymbol {
        row: usize,
        taxon: String,
        column: usize,
        symbol: String,
    },
}
