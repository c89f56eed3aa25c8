//! Region analysis entry points.
//!
//! The analysis is one composed transformation over raw records:
//!
//! ```text
//! raw records ─► normalize rows ─► shape (header, dedup, region, drop region column)
//!             ─► fan-out: extremal | mean/std-dev | density ranking | correlation
//!             ─► round floats to `precision` decimals
//! ```
//!
//! [`country_analysis`] builds that transformation; [`analyze_lines`], [`analyze_records`],
//! [`analyze_path`] and [`analyze_regions`] run it and report outcomes to an optional
//! [`AnalysisObserver`].
//!
//! ## Example
//!
//! ```rust
//! use country_stats::analysis::analyze_lines;
//! use country_stats::types::Value;
//!
//! let lines = [
//!     "name,pop,q,x,area,region",
//!     "a,100,1,_,10,asia",
//!     "b,400,1,_,20,asia",
//!     "c,50,-1,_,5,europe",
//! ];
//! let result = analyze_lines(&lines, "Asia").unwrap();
//! let parts = result.as_list().unwrap();
//! assert_eq!(parts[0], Value::List(vec![Value::from("b"), Value::from("a")]));
//! assert_eq!(parts[1], Value::List(vec![Value::Float64(250.0), Value::Float64(212.132)]));
//! assert_eq!(parts[3], Value::Float64(1.0));
//! ```

pub mod report;
pub mod round;
pub mod shape;
pub mod stats;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::AnalysisResult;
use crate::ingestion::csv::read_raw_records_from_path;
use crate::ingestion::normalize::{
    record_normalizer, split_line, DEFAULT_DELIMITER, DEFAULT_STRIP_CHARS,
};
use crate::ingestion::observability::{
    AnalysisContext, AnalysisObserver, AnalysisSeverity, AnalysisStats,
};
use crate::processing::{for_each, then};
use crate::types::{Table, Value};

pub use report::{
    analyze_table, density_ranking, extremal_populations, population_area_correlation,
    population_spread,
};
pub use round::{deep_round, round_to};
pub use shape::{shape_table, shaper};
pub use stats::{mean, pearson_correlation, sample_variance, std_dev, sum_of_squared_deviations};

/// Decimal places kept in every float of the result by default.
pub const DEFAULT_PRECISION: u32 = 4;

/// Options controlling how input is normalized and how results are reported.
///
/// Use [`Default`] for the countries source.
#[derive(Clone)]
pub struct AnalysisOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Characters stripped from both ends of every field before casting.
    pub strip_chars: Vec<char>,
    /// Decimal places kept in every float of the result.
    pub precision: u32,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn AnalysisObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: AnalysisSeverity,
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("delimiter", &char::from(self.delimiter))
            .field("strip_chars", &self.strip_chars)
            .field("precision", &self.precision)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            strip_chars: DEFAULT_STRIP_CHARS.to_vec(),
            precision: DEFAULT_PRECISION,
            observer: None,
            alert_at_or_above: AnalysisSeverity::Critical,
        }
    }
}

/// Stage: raw records (header first) → shaped table for `region`.
pub fn table_builder(
    region: &str,
    options: &AnalysisOptions,
) -> impl Fn(&Vec<Vec<String>>) -> AnalysisResult<Table> {
    then(
        for_each(record_normalizer(options.strip_chars.clone())),
        shaper(region),
    )
}

/// Stage: shaped table → rounded nested result.
pub fn table_reporter(precision: u32) -> impl Fn(&Table) -> AnalysisResult<Value> {
    then(analyze_table, deep_round(precision))
}

/// The whole analysis for `region` as a single transformation over raw records.
pub fn country_analysis(
    region: &str,
    options: &AnalysisOptions,
) -> impl Fn(&Vec<Vec<String>>) -> AnalysisResult<Value> {
    then(table_builder(region, options), table_reporter(options.precision))
}

/// Analyze text lines (header first) with default options.
///
/// Returns `[[max_name, min_name], [mean, std_dev], [[name, density], ...], correlation]`.
pub fn analyze_lines<S: AsRef<str>>(lines: &[S], region: &str) -> AnalysisResult<Value> {
    analyze_lines_with(lines, region, &AnalysisOptions::default())
}

/// Analyze text lines (header first).
pub fn analyze_lines_with<S: AsRef<str>>(
    lines: &[S],
    region: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<Value> {
    let records = split_lines(lines, options.delimiter);
    observed(context("<lines>", region), options, || run(&records, region, options))
}

/// Analyze records that are already split into raw fields (header first).
#[allow(clippy::ptr_arg)]
pub fn analyze_records(
    records: &Vec<Vec<String>>,
    region: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<Value> {
    observed(context("<records>", region), options, || run(records, region, options))
}

/// Read the file at `path` once and analyze it.
///
/// Read failures are reported with [`AnalysisSeverity::Critical`].
pub fn analyze_path(
    path: impl AsRef<Path>,
    region: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<Value> {
    let path = path.as_ref();
    observed(context(&path.display().to_string(), region), options, || {
        let records = read_raw_records_from_path(path, options.delimiter)?;
        run(&records, region, options)
    })
}

/// Analyze the same lines once per region.
///
/// Each region succeeds or fails on its own; results come back in the order of `regions`.
pub fn analyze_regions<S, R>(
    lines: &[S],
    regions: &[R],
    options: &AnalysisOptions,
) -> Vec<(String, AnalysisResult<Value>)>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    let records = split_lines(lines, options.delimiter);
    regions
        .iter()
        .map(|region| {
            let region = region.as_ref();
            let result = observed(context("<lines>", region), options, || {
                run(&records, region, options)
            });
            (region.to_owned(), result)
        })
        .collect()
}

fn split_lines<S: AsRef<str>>(lines: &[S], delimiter: u8) -> Vec<Vec<String>> {
    lines
        .iter()
        .map(|line| split_line(line.as_ref(), delimiter))
        .collect()
}

#[allow(clippy::ptr_arg)]
fn run(
    records: &Vec<Vec<String>>,
    region: &str,
    options: &AnalysisOptions,
) -> AnalysisResult<(Value, AnalysisStats)> {
    let table = table_builder(region, options)(records)?;
    let stats = AnalysisStats {
        input_rows: records.len(),
        shaped_rows: table.row_count(),
    };
    let value = table_reporter(options.precision)(&table)?;
    Ok((value, stats))
}

fn context(source: &str, region: &str) -> AnalysisContext {
    AnalysisContext {
        source: source.to_owned(),
        region: region.to_owned(),
    }
}

fn observed<F>(ctx: AnalysisContext, options: &AnalysisOptions, work: F) -> AnalysisResult<Value>
where
    F: FnOnce() -> AnalysisResult<(Value, AnalysisStats)>,
{
    let result = work();

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => obs.on_success(&ctx, *stats),
            Err(e) => {
                let sev = AnalysisSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result.map(|(value, _)| value)
}
