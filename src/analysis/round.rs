//! Rounding normalizer for nested results.

use crate::error::AnalysisResult;
use crate::types::Value;

/// Round to `places` decimals; exact ties go to the even digit (`0.03125` → `0.0312`).
///
/// Rounding works on the exact decimal expansion of `value`, so a float that only looks like a
/// tie (`2.675` is stored as `2.67499..`) rounds by its true value. Non-finite values pass through.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.prec$}", prec = places as usize)
        .parse()
        .unwrap_or(value)
}

/// Returns a stage rounding every `Float64` leaf of a value, at any depth.
///
/// Lists are walked element by element; integers and text pass through.
pub fn deep_round(places: u32) -> impl Fn(&Value) -> AnalysisResult<Value> {
    move |value| Ok(round_value(value, places))
}

fn round_value(value: &Value, places: u32) -> Value {
    match value {
        Value::Float64(v) => Value::Float64(round_to(*v, places)),
        Value::List(items) => Value::List(items.iter().map(|item| round_value(item, places)).collect()),
        other => other.clone(),
    }
}
