use thiserror::Error;

/// Convenience result type for every stage of the analysis.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Error type returned by combinators, the statistics engine and the entry points.
///
/// The pipeline is all-or-nothing: any of these aborts the remaining stages and no partial result
/// is surfaced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed while splitting the source into raw records.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A row or column was accessed past its end (usually a malformed, too-short row).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A named column is not part of the table schema.
    #[error("column '{name}' not found")]
    ColumnNotFound { name: String },

    /// A value had the wrong type for the requested operation.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: String },

    /// Arithmetic division by zero (empty mean, n <= 1 variance, zero area, zero variance).
    #[error("division by zero in {operation}")]
    DivisionByZero { operation: &'static str },

    /// `min`/`max` over an empty sequence.
    #[error("{operation} of an empty sequence")]
    EmptySequence { operation: &'static str },

    /// Transpose requires every row to have the same length.
    #[error("ragged table: row {row} has {found} entries, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Two sequences that must be paired have different lengths.
    #[error("expected {expected} elements, got {found}")]
    DimensionMismatch { expected: usize, found: usize },
}
