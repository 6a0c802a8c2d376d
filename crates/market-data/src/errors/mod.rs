//! Error types for market data ingestion and alignment.

use thiserror::Error;

/// Errors raised while validating or combining tabular market data.
///
/// These are terminal for the unit of work that raised them - there is no
/// retry path. Undefined *computations* (division by zero, missing operands)
/// are not errors; they propagate as missing values in the derived columns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// A required column is absent from a raw record.
    #[error("Required column '{0}' is missing")]
    MissingColumn(String),

    /// An input series contains no rows.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Two series that must describe the same security do not.
    #[error("Security code mismatch: expected '{expected}', found '{found}'")]
    CodeMismatch { expected: String, found: String },

    /// A date cell could not be parsed to a calendar date.
    #[error("Unparseable date: '{0}'")]
    UnparseableDate(String),

    /// A security code has an unsupported shape.
    #[error("Invalid security code: '{0}'")]
    InvalidCode(String),
}
