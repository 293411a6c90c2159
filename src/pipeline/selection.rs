//! Scale-and-filter feature selection
//!
//! Min-max scales every column, computes the population variance of each
//! scaled column, and keeps the columns whose variance meets the threshold.

use serde::Serialize;

use super::error::{SelectError, SelectResult};
use super::scaling::{min_max_column, population_variance};
use super::table::Table;

/// Scaled variance of one column and the selection decision for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnVariance {
    pub name: String,
    /// Population variance of the min-max scaled column
    pub variance: f64,
    /// Whether `variance >= threshold`
    pub retained: bool,
    /// Whether the input column was constant
    pub degenerate: bool,
}

/// Output of [`scale_and_filter`]
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Every input column, min-max scaled, in input order
    pub scaled: Table,
    /// The scaled columns that met the threshold, in input order
    pub filtered: Table,
    /// One entry per scaled column, in input order
    pub variances: Vec<ColumnVariance>,
}

impl Selection {
    pub fn retained_names(&self) -> Vec<String> {
        self.names_where(|v| v.retained)
    }

    pub fn dropped_names(&self) -> Vec<String> {
        self.names_where(|v| !v.retained)
    }

    pub fn degenerate_names(&self) -> Vec<String> {
        self.names_where(|v| v.degenerate)
    }

    fn names_where(&self, pred: impl Fn(&ColumnVariance) -> bool) -> Vec<String> {
        self.variances
            .iter()
            .filter(|v| pred(v))
            .map(|v| v.name.clone())
            .collect()
    }
}

fn validate_threshold(threshold: f64) -> SelectResult<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(SelectError::invalid(format!(
            "threshold must be a non-negative number, got {}",
            threshold
        )));
    }
    Ok(())
}

/// Min-max scale `table` and report each column's scaled variance.
///
/// Returns the scaled table together with `(name, variance, degenerate)`
/// triples, without applying any threshold.
pub fn variance_profile(table: &Table) -> SelectResult<(Table, Vec<(String, f64, bool)>)> {
    if table.n_cols() == 0 {
        return Err(SelectError::invalid("table has zero columns"));
    }
    if table.n_rows() == 0 {
        return Err(SelectError::EmptyTable);
    }

    let mut scaled_columns = Vec::with_capacity(table.n_cols());
    let mut profile = Vec::with_capacity(table.n_cols());

    for column in table {
        let (scaled, degenerate) = min_max_column(column)?;
        let variance = population_variance(scaled.values()).ok_or(SelectError::EmptyTable)?;

        if degenerate {
            tracing::warn!(column = column.name(), "constant column scaled to zero variance");
        }
        tracing::debug!(column = column.name(), variance, "scaled variance");

        profile.push((column.name().to_string(), variance, degenerate));
        scaled_columns.push(scaled);
    }

    Ok((Table::new(scaled_columns)?, profile))
}

/// Scale every column to [0, 1] and keep those with variance `>= threshold`.
///
/// Errors, in order of precedence:
/// - [`SelectError::InvalidInput`] for a negative or NaN threshold
/// - [`SelectError::InvalidInput`] for a table with zero columns
/// - [`SelectError::EmptyTable`] for a table with zero rows
///
/// A threshold of zero retains every column, constant ones included.
pub fn scale_and_filter(table: &Table, threshold: f64) -> SelectResult<Selection> {
    validate_threshold(threshold)?;

    let (scaled, profile) = variance_profile(table)?;

    let variances: Vec<ColumnVariance> = profile
        .into_iter()
        .map(|(name, variance, degenerate)| ColumnVariance {
            retained: variance >= threshold,
            name,
            variance,
            degenerate,
        })
        .collect();

    let keep: Vec<&str> = variances
        .iter()
        .filter(|v| v.retained)
        .map(|v| v.name.as_str())
        .collect();
    let filtered = scaled.select(&keep)?;

    tracing::debug!(
        threshold,
        retained = filtered.n_cols(),
        dropped = scaled.n_cols() - filtered.n_cols(),
        "variance threshold applied"
    );

    Ok(Selection {
        scaled,
        filtered,
        variances,
    })
}
