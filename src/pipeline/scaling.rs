//! Column scaling: min-max normalization and z-score standardization

use clap::ValueEnum;

use super::error::{SelectError, SelectResult};
use super::table::{Column, Table};

/// Value assigned to every row of a constant column.
///
/// A zero range is treated as a unit scale, so `x - min` is zero everywhere.
/// The same fill applies to z-score standardization of a zero-variance column.
pub const CONSTANT_COLUMN_FILL: f64 = 0.0;

/// Scaling method selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScaleMethod {
    /// Rescale each column to [0, 1]
    #[value(name = "minmax")]
    MinMax,
    /// Center on the mean and divide by the population standard deviation
    #[value(name = "zscore")]
    ZScore,
}

impl std::fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleMethod::MinMax => write!(f, "min-max"),
            ScaleMethod::ZScore => write!(f, "z-score"),
        }
    }
}

/// Mean over all values, or `None` for an empty slice.
pub fn population_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean squared deviation from the mean (no sample-size correction).
///
/// Two passes: the mean first, then the squared deviations.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = population_mean(values)?;
    let sum_sq: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Min-max scale a single column.
///
/// Returns the scaled column and whether it was constant. Operands are halved
/// before subtracting so the range of any finite column stays finite.
pub(crate) fn min_max_column(column: &Column) -> SelectResult<(Column, bool)> {
    let (min, max) = column.min_max().ok_or(SelectError::EmptyTable)?;

    if min == max {
        return Ok((
            Column::new(column.name(), vec![CONSTANT_COLUMN_FILL; column.len()]),
            true,
        ));
    }

    let half_min = min / 2.0;
    let half_range = max / 2.0 - half_min;
    let scaled = column
        .values()
        .iter()
        .map(|v| ((v / 2.0 - half_min) / half_range).clamp(0.0, 1.0))
        .collect();

    Ok((Column::new(column.name(), scaled), false))
}

/// Z-score standardize a single column using the population std.
pub(crate) fn z_score_column(column: &Column) -> SelectResult<(Column, bool)> {
    let values = column.values();
    let mean = population_mean(values).ok_or(SelectError::EmptyTable)?;
    let variance = population_variance(values).ok_or(SelectError::EmptyTable)?;
    let std = variance.sqrt();

    if std == 0.0 || column.is_constant() {
        return Ok((
            Column::new(column.name(), vec![CONSTANT_COLUMN_FILL; column.len()]),
            true,
        ));
    }

    let standardized = values.iter().map(|v| (v - mean) / std).collect();
    Ok((Column::new(column.name(), standardized), false))
}

fn check_scalable(table: &Table) -> SelectResult<()> {
    if table.n_cols() == 0 {
        return Err(SelectError::invalid("table has zero columns"));
    }
    if table.n_rows() == 0 {
        return Err(SelectError::EmptyTable);
    }
    Ok(())
}

fn scale_table_with(
    table: &Table,
    scale: fn(&Column) -> SelectResult<(Column, bool)>,
) -> SelectResult<Table> {
    check_scalable(table)?;
    let columns = table
        .iter()
        .map(|c| scale(c).map(|(scaled, _)| scaled))
        .collect::<SelectResult<Vec<_>>>()?;
    Table::new(columns)
}

/// Rescale every column to [0, 1]. Constant columns become
/// [`CONSTANT_COLUMN_FILL`].
pub fn min_max_scale(table: &Table) -> SelectResult<Table> {
    scale_table_with(table, min_max_column)
}

/// Standardize every column to zero mean and unit population std.
/// Constant columns become [`CONSTANT_COLUMN_FILL`].
pub fn standardize(table: &Table) -> SelectResult<Table> {
    scale_table_with(table, z_score_column)
}

/// Apply the chosen scaling method to the whole table.
pub fn scale_table(table: &Table, method: ScaleMethod) -> SelectResult<Table> {
    match method {
        ScaleMethod::MinMax => min_max_scale(table),
        ScaleMethod::ZScore => standardize(table),
    }
}
