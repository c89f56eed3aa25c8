//! The four region analyses and their fan-out.
//!
//! Each analysis reads the same shaped [`Table`] and returns a [`Value`]; [`analyze_table`]
//! collects them, in order, into
//! `[[max_name, min_name], [mean, std_dev], [[name, density], ...], correlation]`.

use std::cmp::Ordering;

use crate::error::{AnalysisError, AnalysisResult};
use crate::pipe;
use crate::processing::{
    do_each, filter_by, for_each, operating_on, select_entries, select_entry, stage, Selected,
};
use crate::types::{columns, Record, Table, Value};

use super::stats::{mean, pearson_correlation, std_dev};

/// Names of the most and least populous countries, `[max, min]`.
///
/// Only rows whose yearly change is non-negative take part. The first row wins ties. An empty
/// candidate set fails with [`AnalysisError::EmptySequence`].
pub fn extremal_populations(table: &Table) -> AnalysisResult<Value> {
    let name = table.column_index(columns::NAME)?;
    let population = table.column_index(columns::POPULATION)?;
    let change = table.column_index(columns::YEARLY_CHANGE)?;

    pipe!(
        filter_by(|row: &Record| Ok(select_entry(change)(row)?.as_f64()? >= 0.0)),
        do_each(vec![
            stage(|rows: &Vec<Record>| {
                extreme_entry(rows, population, name, Ordering::Greater, "max")
            }),
            stage(|rows: &Vec<Record>| {
                extreme_entry(rows, population, name, Ordering::Less, "min")
            }),
        ]),
    )(&table.rows)
    .map(Value::List)
}

/// Field `pick` of the row whose `key` field compares `wanted` against every other row.
fn extreme_entry(
    rows: &[Record],
    key: usize,
    pick: usize,
    wanted: Ordering,
    operation: &'static str,
) -> AnalysisResult<Value> {
    let mut best: Option<(&Record, f64)> = None;
    for row in rows {
        let candidate = select_entry(key)(row)?.as_f64()?;
        match best {
            Some((_, current)) if candidate.partial_cmp(&current) != Some(wanted) => {}
            _ => best = Some((row, candidate)),
        }
    }
    let (row, _) = best.ok_or(AnalysisError::EmptySequence { operation })?;
    select_entry(pick)(row)
}

/// `[mean, sample_std_dev]` of the population column.
pub fn population_spread(table: &Table) -> AnalysisResult<Value> {
    pipe!(
        |t: &Table| t.numeric_column(columns::POPULATION),
        do_each(vec![
            stage(|xs: &Vec<f64>| mean(xs)),
            stage(|xs: &Vec<f64>| std_dev(xs)),
        ]),
        |spread: &Vec<f64>| Ok(Value::List(spread.iter().copied().map(Value::Float64).collect())),
    )(table)
}

/// `[[name, population / area], ...]`, densest first; equal densities keep row order.
///
/// A zero area fails with [`AnalysisError::DivisionByZero`].
pub fn density_ranking(table: &Table) -> AnalysisResult<Value> {
    let name = table.column_index(columns::NAME)?;
    let population = table.column_index(columns::POPULATION)?;
    let area = table.column_index(columns::LAND_AREA)?;

    pipe!(
        for_each(pipe!(
            select_entries([name, population, area]),
            |selected: &Selected<Value>| Ok(selected.clone().into_vec()),
            operating_on([1, 2], |v: &Value| v.as_f64().map(Value::Float64)),
            density_of,
        )),
        |densities: &Vec<(Value, f64)>| {
            let mut ranked = densities.clone();
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            Ok(Value::List(
                ranked
                    .into_iter()
                    .map(|(name, density)| Value::List(vec![name, Value::Float64(density)]))
                    .collect(),
            ))
        },
    )(&table.rows)
}

/// `[name, population, area]` → `(name, population / area)`.
#[allow(clippy::ptr_arg)]
fn density_of(entries: &Vec<Value>) -> AnalysisResult<(Value, f64)> {
    let population = select_entry(1)(entries)?.as_f64()?;
    let area = select_entry(2)(entries)?.as_f64()?;
    if area == 0.0 {
        return Err(AnalysisError::DivisionByZero { operation: "density" });
    }
    Ok((select_entry(0)(entries)?, population / area))
}

/// Pearson correlation between population and land area.
pub fn population_area_correlation(table: &Table) -> AnalysisResult<Value> {
    let population = table.numeric_column(columns::POPULATION)?;
    let area = table.numeric_column(columns::LAND_AREA)?;
    pearson_correlation(&population, &area).map(Value::Float64)
}

/// Run the four analyses on the same table and collect their results in order.
pub fn analyze_table(table: &Table) -> AnalysisResult<Value> {
    do_each(vec![
        stage(extremal_populations),
        stage(population_spread),
        stage(density_ranking),
        stage(population_area_correlation),
    ])(table)
    .map(Value::List)
}

#[cfg(test)]
mod tests {
    use super::{
        analyze_table, density_ranking, extremal_populations, population_area_correlation,
        population_spread,
    };
    use crate::error::AnalysisError;
    use crate::types::{Schema, Table, Value};

    fn table(rows: &[(&str, i64, f64, i64)]) -> Table {
        Table::new(
            Schema::country_layout().without("region"),
            rows.iter()
                .map(|&(name, pop, change, area)| {
                    vec![
                        Value::from(name),
                        Value::Int64(pop),
                        Value::Float64(change),
                        Value::Int64(0),
                        Value::Int64(area),
                    ]
                })
                .collect(),
        )
    }

    fn names(value: &Value) -> Vec<String> {
        value.as_list().unwrap().iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn extremal_ignores_negative_change_rows() {
        let t = table(&[("a", 100, 1.0, 10), ("big", 900, -0.5, 10), ("b", 400, 0.0, 20)]);
        assert_eq!(names(&extremal_populations(&t).unwrap()), vec!["b", "a"]);
    }

    #[test]
    fn extremal_ties_go_to_the_first_row() {
        let t = table(&[("first", 5, 1.0, 1), ("second", 5, 1.0, 1)]);
        assert_eq!(names(&extremal_populations(&t).unwrap()), vec!["first", "first"]);
    }

    #[test]
    fn extremal_with_no_candidates_fails() {
        let t = table(&[("a", 1, -1.0, 1)]);
        let err = extremal_populations(&t).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptySequence { operation: "max" }));
    }

    #[test]
    fn spread_reports_mean_and_sample_std_dev() {
        let t = table(&[("a", 100, 1.0, 10), ("b", 400, 1.0, 20)]);
        let spread = population_spread(&t).unwrap();
        let items = spread.as_list().unwrap();
        assert_eq!(items[0], Value::Float64(250.0));
        assert!((items[1].as_f64().unwrap() - 212.132_034_355_964_27).abs() < 1e-9);
    }

    #[test]
    fn spread_of_empty_table_is_division_by_zero() {
        let err = population_spread(&table(&[])).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { operation: "mean" }));
    }

    #[test]
    fn densities_are_sorted_descending_and_stable() {
        let t = table(&[("a", 100, 1.0, 10), ("b", 400, 1.0, 20), ("c", 50, 1.0, 5), ("d", 30, 1.0, 1)]);
        let ranked = density_ranking(&t).unwrap();
        let pairs = ranked.as_list().unwrap();
        let order: Vec<String> = pairs.iter().map(|p| p.as_list().unwrap()[0].to_string()).collect();
        assert_eq!(order, vec!["d", "b", "a", "c"]);

        let densities: Vec<f64> = pairs
            .iter()
            .map(|p| p.as_list().unwrap()[1].as_f64().unwrap())
            .collect();
        assert!(densities.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn zero_area_is_division_by_zero() {
        let t = table(&[("a", 100, 1.0, 0)]);
        let err = density_ranking(&t).unwrap_err();
        assert!(matches!(err, AnalysisError::DivisionByZero { operation: "density" }));
    }

    #[test]
    fn correlation_of_proportional_columns_is_one() {
        let t = table(&[("a", 100, 1.0, 10), ("b", 400, 1.0, 40), ("c", 250, 1.0, 25)]);
        let r = population_area_correlation(&t).unwrap().as_f64().unwrap();
        assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn analyze_table_collects_four_results_in_order() {
        let t = table(&[("a", 100, 1.0, 10), ("b", 400, 1.0, 20)]);
        let out = analyze_table(&t).unwrap();
        let parts = out.as_list().unwrap();
        assert_eq!(parts.len(), 4);
        assert_eq!(names(&parts[0]), vec!["b", "a"]);
        assert_eq!(parts[2].as_list().unwrap().len(), 2);
        assert!(matches!(parts[3], Value::Float64(_)));
    }
}
