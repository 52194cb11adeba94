//! Performance-metric tables and scenario collections.
//!
//! A table is one row per management procedure (MP) with one column per
//! metric plus the `MP` identifier column. Tables stay loosely typed at the
//! cell level because upstream simulation output may carry stray text or
//! gaps in metric columns; typing happens when records are produced.

use serde::{Deserialize, Serialize};

use crate::constants::MP_COLUMN;
use crate::errors::ReshapeError;

use super::collections::FxHashSet;

/// One table cell as delivered by the upstream result loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. Text is parsed; NaN, missing and
    /// unparsable text all yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Missing => return None,
        };
        (!value.is_nan()).then_some(value)
    }

    /// Text view of the cell, only for `Text` cells.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Option<f64>> for CellValue {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::Number)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Serialized shape of a table, validated on the way in.
#[derive(Debug, Deserialize)]
struct RawTable {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<CellValue>>,
}

/// A rectangular table of per-MP performance metrics.
///
/// Column names are unique and non-empty, and every row has one cell per
/// column. The presence of the `MP` column is deliberately not checked here:
/// that is a reshaping-time `SchemaMismatch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct PerformanceMetricTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl PerformanceMetricTable {
    /// Create an empty table with the given column names.
    pub fn new<I, S>(columns: I) -> Result<Self, ReshapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let mut seen = FxHashSet::default();
        for name in &columns {
            if name.trim().is_empty() {
                return Err(ReshapeError::schema("table", "column names must not be blank"));
            }
            if !seen.insert(name.as_str()) {
                return Err(ReshapeError::schema(
                    "table",
                    format!("duplicate column '{name}'"),
                ));
            }
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
        })
    }

    /// Create a table and append all `rows`.
    pub fn from_rows<I, S>(columns: I, rows: Vec<Vec<CellValue>>) -> Result<Self, ReshapeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new(columns)?;
        for row in rows {
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Build a table with an `MP` column followed by `metrics`, one row per
    /// `(mp, values)` pair.
    pub fn from_metric_rows<M, I, S>(metrics: &[M], rows: I) -> Result<Self, ReshapeError>
    where
        M: AsRef<str>,
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let columns = std::iter::once(MP_COLUMN.to_string())
            .chain(metrics.iter().map(|m| m.as_ref().to_string()));
        let mut table = Self::new(columns)?;
        for (mp, values) in rows {
            let row = std::iter::once(CellValue::Text(mp.into()))
                .chain(values.into_iter().map(CellValue::Number))
                .collect();
            table.push_row(row)?;
        }
        Ok(table)
    }

    /// Append a row. The row must have exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<(), ReshapeError> {
        if row.len() != self.columns.len() {
            return Err(ReshapeError::schema(
                "table",
                format!(
                    "row {} has {} cells, expected {}",
                    self.rows.len(),
                    row.len(),
                    self.columns.len()
                ),
            ));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every column except `MP`, with its index, in column order.
    pub fn metric_columns(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.as_str() != MP_COLUMN)
            .map(|(i, c)| (i, c.as_str()))
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(idx))
    }
}

impl TryFrom<RawTable> for PerformanceMetricTable {
    type Error = ReshapeError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::from_rows(raw.columns, raw.rows)
    }
}

/// Serialized shape of a collection, checked for unique scenario names.
#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    scenarios: Vec<(String, PerformanceMetricTable)>,
}

/// Insertion-ordered mapping from scenario name to its metric table.
///
/// Order is significant: it is the scenario order of every derived table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCollection")]
pub struct ScenarioCollection {
    scenarios: Vec<(String, PerformanceMetricTable)>,
}

impl ScenarioCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a scenario. An existing scenario with the same name is replaced
    /// in place (keeping its position) and the old table is returned.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        table: PerformanceMetricTable,
    ) -> Option<PerformanceMetricTable> {
        let name = name.into();
        match self.scenarios.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, table)),
            None => {
                self.scenarios.push((name, table));
                None
            }
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, table: PerformanceMetricTable) -> Self {
        self.insert(name, table);
        self
    }

    pub fn get(&self, name: &str) -> Option<&PerformanceMetricTable> {
        self.scenarios
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| t)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PerformanceMetricTable)> + '_ {
        self.scenarios.iter().map(|(n, t)| (n.as_str(), t))
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl TryFrom<RawCollection> for ScenarioCollection {
    type Error = ReshapeError;

    fn try_from(raw: RawCollection) -> Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();
        for (name, _) in &raw.scenarios {
            if !seen.insert(name.as_str()) {
                return Err(ReshapeError::schema(
                    "scenario collection",
                    format!("duplicate scenario '{name}'"),
                ));
            }
        }
        Ok(Self {
            scenarios: raw.scenarios,
        })
    }
}

impl<S: Into<String>> FromIterator<(S, PerformanceMetricTable)> for ScenarioCollection {
    fn from_iter<T: IntoIterator<Item = (S, PerformanceMetricTable)>>(iter: T) -> Self {
        let mut collection = Self::new();
        for (name, table) in iter {
            collection.insert(name, table);
        }
        collection
    }
}
