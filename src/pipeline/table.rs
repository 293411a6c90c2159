//! Strongly typed table of named numeric columns
//!
//! A [`Table`] is rectangular by construction: every column has the same
//! row count, names are unique, and every value is a finite `f64`.

use std::collections::HashSet;

use super::error::{SelectError, SelectResult};

/// A named column of finite floating-point values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<f64>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Minimum and maximum over all values, or `None` for an empty column.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// True when every value is identical (and the column is non-empty).
    pub fn is_constant(&self) -> bool {
        matches!(self.min_max(), Some((lo, hi)) if lo == hi)
    }
}

/// Ordered collection of equal-length named numeric columns
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table, validating the rectangular invariant.
    ///
    /// Fails with [`SelectError::InvalidInput`] when column lengths differ,
    /// a name repeats, or a value is NaN or infinite. Zero columns or zero
    /// rows are accepted here; operations that need data reject them.
    pub fn new(columns: Vec<Column>) -> SelectResult<Self> {
        let n_rows = columns.first().map(Column::len).unwrap_or(0);
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(SelectError::invalid(format!(
                    "duplicate column name '{}'",
                    column.name()
                )));
            }
            if column.len() != n_rows {
                return Err(SelectError::invalid(format!(
                    "column '{}' has {} rows, expected {}",
                    column.name(),
                    column.len(),
                    n_rows
                )));
            }
            if let Some(row) = column.values().iter().position(|v| !v.is_finite()) {
                return Err(SelectError::invalid(format!(
                    "column '{}' row {} is not a finite number ({})",
                    column.name(),
                    row,
                    column.values()[row]
                )));
            }
        }

        Ok(Self { columns, n_rows })
    }

    /// Convenience constructor from `(name, values)` pairs.
    pub fn from_pairs<I, S>(pairs: I) -> SelectResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(name, values)| Column::new(name, values))
                .collect(),
        )
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// True when the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.n_rows == 0
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    /// Sub-table with the named columns, in the order requested.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> SelectResult<Table> {
        let mut picked = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let column = self
                .column(name)
                .ok_or_else(|| SelectError::invalid(format!("unknown column '{}'", name)))?;
            picked.push(column.clone());
        }
        // Row count is carried over so a zero-column selection keeps it
        let mut table = Table::new(picked)?;
        table.n_rows = self.n_rows;
        Ok(table)
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}
