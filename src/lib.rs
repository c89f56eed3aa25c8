//! `country-stats` computes region-scoped descriptive statistics over a countries CSV (name,
//! population, yearly change, net change, land area, region, ...).
//!
//! For one region it reports:
//!
//! - the most and least populous countries (ignoring rows with negative yearly change),
//! - mean and sample standard deviation of population,
//! - population density per country, densest first,
//! - the Pearson correlation between population and land area,
//!
//! as a nested [`types::Value`] whose floats are rounded to 4 decimal places:
//! `[[max_name, min_name], [mean, std_dev], [[name, density], ...], correlation]`.
//!
//! The analysis itself is written as a composition of small generic combinators from
//! [`processing`] (pipeline, map, filter, distinct, select/remove, transpose, fan-out). Every
//! combinator is configured first and applied later, so the stages read like a declarative plan.
//!
//! ## Quick example
//!
//! ```rust
//! use country_stats::analysis::analyze_lines;
//!
//! let lines = [
//!     "\"Country\",\"Population\",\"Yearly Change\",\"Net Change\",\"Land Area\",\"Region\"",
//!     "\"Japan\",126476461,-0.3,-383840,364555,\"Asia\"",
//!     "\"India\",1380004385,0.99,13586631,2973190,\"Asia\"",
//!     "\"Nepal\",29136808,1.85,528098,143350,\"Asia\"",
//!     "\"France\",65273511,0.22,143783,547557,\"Europe\"",
//! ];
//! let result = analyze_lines(&lines, "asia").unwrap();
//! let parts = result.as_list().unwrap();
//!
//! // Japan is excluded from the extremal lookup (negative yearly change).
//! assert_eq!(parts[0].to_string(), "[india, nepal]");
//! ```
//!
//! ## Reading a file with logging
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use country_stats::analysis::{analyze_path, AnalysisOptions};
//! use country_stats::ingestion::StdErrObserver;
//!
//! # fn main() -> Result<(), country_stats::AnalysisError> {
//! let opts = AnalysisOptions {
//!     observer: Some(Arc::new(StdErrObserver)),
//!     ..Default::default()
//! };
//! let result = analyze_path("countries.csv", "Europe", &opts)?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: generic combinators
//! - [`ingestion`]: raw record reading, the row normalizer, observer hooks
//! - [`analysis`]: table shaper, statistics engine, rounding, entry points
//! - [`types`]: tagged values, schema, table
//! - [`error`]: the error type shared by every stage
//!
//! ## Failure model
//!
//! A stage that fails aborts the whole analysis; nothing partial is returned. A region with no
//! rows is not an error by itself, but the statistics over an empty table are, so such a call
//! fails; the extremal lookup runs first and reports [`AnalysisError::EmptySequence`].

pub mod analysis;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{AnalysisError, AnalysisResult};
