//! Core data model: tagged field values, column schema and the shaped table.
//!
//! Rows are positional ([`Record`]) because that is how the source is laid out, but analyses
//! resolve positions by column name through a [`Schema`] so that removing a column cannot
//! silently shift what an index means.

use std::fmt;

use serde::Serialize;

use crate::error::{AnalysisError, AnalysisResult};
use crate::processing::{for_each, select_entry};

/// Column names of the countries source, in file order.
pub mod columns {
    pub const NAME: &str = "name";
    pub const POPULATION: &str = "population";
    pub const YEARLY_CHANGE: &str = "yearly_change";
    pub const NET_CHANGE: &str = "net_change";
    pub const LAND_AREA: &str = "land_area";
    pub const REGION: &str = "region";
}

/// A single typed value.
///
/// Record fields are `Int64`, `Float64` or `Utf8` depending on what the raw text casts to. The
/// analysis result nests values with `List`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
    /// Ordered list of nested values.
    List(Vec<Value>),
}

impl Value {
    /// Short name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int64(_) => "integer",
            Value::Float64(_) => "float",
            Value::Utf8(_) => "text",
            Value::List(_) => "list",
        }
    }

    /// Numeric view of the value; integers widen to `f64`.
    pub fn as_f64(&self) -> AnalysisResult<f64> {
        match self {
            Value::Int64(v) => Ok(*v as f64),
            Value::Float64(v) => Ok(*v),
            other => Err(AnalysisError::TypeMismatch {
                expected: "number",
                found: format!("{} '{}'", other.type_name(), other),
            }),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Utf8(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::Utf8(s) => write!(f, "{s}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float64(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Utf8(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Utf8(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

/// One normalized input row.
pub type Record = Vec<Value>;

/// Ordered column names describing the positional layout of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Column names in row order.
    pub fields: Vec<String>,
}

impl Schema {
    /// Create a new schema from column names.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Layout of the countries source: name, population, yearly change, net change, land area,
    /// region. Trailing source columns are never addressed by name.
    pub fn country_layout() -> Self {
        Self::new([
            columns::NAME,
            columns::POPULATION,
            columns::YEARLY_CHANGE,
            columns::NET_CHANGE,
            columns::LAND_AREA,
            columns::REGION,
        ])
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(String::as_str)
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f == name)
    }

    /// Like [`Self::index_of`] but fails with [`AnalysisError::ColumnNotFound`].
    pub fn require(&self, name: &str) -> AnalysisResult<usize> {
        self.index_of(name).ok_or_else(|| AnalysisError::ColumnNotFound {
            name: name.to_owned(),
        })
    }

    /// A copy of this schema with `name` removed; later columns shift down by one.
    pub fn without(&self, name: &str) -> Self {
        Self {
            fields: self.fields.iter().filter(|f| *f != name).cloned().collect(),
        }
    }
}

/// In-memory table: a schema plus row-major records.
///
/// The shaped table handed to the statistics engine is never mutated; every analysis reads the
/// same snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Schema describing row layout.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Record>,
}

impl Table {
    /// Create a table from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Record>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a named column.
    pub fn column_index(&self, name: &str) -> AnalysisResult<usize> {
        self.schema.require(name)
    }

    /// All values of a named column, in row order. An empty table yields an empty column.
    pub fn column(&self, name: &str) -> AnalysisResult<Vec<Value>> {
        let idx = self.column_index(name)?;
        for_each(select_entry(idx))(&self.rows)
    }

    /// A named column cast to `f64`; fails on the first non-numeric cell.
    pub fn numeric_column(&self, name: &str) -> AnalysisResult<Vec<f64>> {
        for_each(|v: &Value| v.as_f64())(&self.column(name)?)
    }
}
