//! Generic combinators used to express the analysis as one composed transformation.
//!
//! Each combinator is configured first and applied later: `select_entries([1, 4])` builds a
//! stage, calling that stage with a row performs the selection. Stages are plain closures of the
//! form `Fn(&In) -> AnalysisResult<Out>`, so they compose with [`then`], [`pipeline`] and the
//! [`crate::pipe!`] macro, and fan out with [`do_each`].
//!
//! - [`for_each()`]: per-item mapping
//! - [`filter_by()`] and [`distinct()`]: filtering and last-wins deduplication
//! - [`select_entries()`], [`remove_entries()`], [`transpose()`]: positional projection
//! - [`do_each()`] (alias [`calculate()`]) and [`operating_on()`]: fan-out and per-position updates
//! - [`reduce()`] and [`try_reduce()`]: iterative left folds
//!
//! ## Example: column mean of a small matrix
//!
//! ```rust
//! use country_stats::pipe;
//! use country_stats::processing::{for_each, select_entry, transpose};
//! use country_stats::types::Value;
//!
//! let rows = vec![
//!     vec![Value::from("a"), Value::Int64(100)],
//!     vec![Value::from("b"), Value::Int64(400)],
//! ];
//! let mean_of_second_column = pipe!(
//!     transpose,
//!     select_entry(1),
//!     for_each(|v: &Value| v.as_f64()),
//!     |xs: &Vec<f64>| Ok(xs.iter().sum::<f64>() / xs.len() as f64),
//! );
//! assert_eq!(mean_of_second_column(&rows).unwrap(), 250.0);
//! ```

pub mod compose;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod select;

pub use compose::{
    do_each, do_each as calculate, identity, operating_on, pipeline, stage, then, Stage,
};
pub use filter::{distinct, filter_by};
pub use map::for_each;
pub use reduce::{reduce, try_reduce};
pub use select::{remove_entries, select_entries, select_entry, transpose, Selected};
