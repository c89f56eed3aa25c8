//! Table shaper: normalized records → the region-scoped [`Table`] every analysis reads.

use crate::error::AnalysisResult;
use crate::pipe;
use crate::processing::{distinct, filter_by, remove_entries, select_entry, transpose};
use crate::types::{columns, Record, Schema, Table, Value};

/// Returns a stage that shapes normalized records (header row first) for `region`.
///
/// Steps, in order: drop the header row, keep the last row per country name, keep rows whose
/// region equals `region` (compared lowercased), then drop the region column. No matching rows
/// is not an error; the table is simply empty.
pub fn shaper(region: &str) -> impl Fn(&Vec<Record>) -> AnalysisResult<Table> {
    let region = region.to_lowercase();
    let layout = Schema::country_layout();
    move |records| {
        let key = layout.require(columns::NAME)?;
        let region_column = layout.require(columns::REGION)?;
        let rows = pipe!(
            remove_entries([0]),
            distinct(|row: &Record| select_entry(key)(row).map(|v: Value| v.to_string())),
            filter_by(|row: &Record| {
                Ok(select_entry(region_column)(row)?.as_str() == Some(region.as_str()))
            }),
            transpose,
            remove_entries([region_column]),
            transpose,
        )(records)?;
        Ok(Table::new(layout.without(columns::REGION), rows))
    }
}

/// Shape `records` for `region` in one call.
#[allow(clippy::ptr_arg)]
pub fn shape_table(records: &Vec<Record>, region: &str) -> AnalysisResult<Table> {
    shaper(region)(records)
}
