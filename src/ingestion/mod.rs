//! Getting rows into the analysis.
//!
//! - [`csv`]: read a file into raw (split, unnormalized) records
//! - [`normalize`]: the row normalizer, raw text → typed [`crate::types::Record`]
//! - [`observability`]: observer hooks used by the [`crate::analysis`] entry points

pub mod csv;
pub mod normalize;
pub mod observability;

pub use normalize::{
    cast_field, line_normalizer, normalize_field, normalize_line, record_normalizer, split_line,
    DEFAULT_DELIMITER, DEFAULT_STRIP_CHARS,
};
pub use observability::{
    AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats, CompositeObserver,
    FileObserver, StdErrObserver,
};
