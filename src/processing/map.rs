//! Per-item mapping.

use crate::error::AnalysisResult;

/// Returns a stage that applies `f` to every item, preserving order and length.
///
/// Fails with the first error produced by `f`; no partial result is returned.
pub fn for_each<A, B, F>(f: F) -> impl Fn(&Vec<A>) -> AnalysisResult<Vec<B>>
where
    F: Fn(&A) -> AnalysisResult<B>,
{
    move |items| items.iter().map(&f).collect()
}
