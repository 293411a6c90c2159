//! Dummy-variable encoding of categorical columns
//!
//! Each categorical column is replaced by one 0/1 indicator column per
//! observed category, named `{column}_{category}`.

use std::collections::{BTreeSet, HashSet};

use anyhow::{Context, Result};
use polars::prelude::{Column as PlColumn, DataFrame, DataType};

/// Whether a dtype holds categorical values that need encoding
fn is_categorical_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::String | DataType::Categorical(..) | DataType::Enum(..)
    )
}

/// List string/categorical columns, skipping any names in `exclude`.
pub fn detect_categorical_columns(df: &DataFrame, exclude: &[&str]) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_categorical_dtype(col.dtype()) && !exclude.contains(&col.name().as_str()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Build indicator columns for one categorical column.
///
/// Categories are sorted so output is independent of row order. Nulls
/// produce all-zero indicators.
fn indicator_columns(column: &PlColumn, drop_first: bool) -> Result<Vec<PlColumn>> {
    let name = column.name().to_string();
    let as_str = column
        .cast(&DataType::String)
        .with_context(|| format!("Failed to cast column '{}' to string", name))?;
    let values = as_str
        .as_materialized_series()
        .str()
        .with_context(|| format!("Column '{}' is not string-typed after cast", name))?;

    let categories: BTreeSet<&str> = values.iter().flatten().collect();
    let skip = usize::from(drop_first);

    let indicators = categories
        .iter()
        .skip(skip)
        .map(|category| {
            let flags: Vec<f64> = values
                .iter()
                .map(|v| if v == Some(*category) { 1.0 } else { 0.0 })
                .collect();
            PlColumn::new(format!("{}_{}", name, category).into(), flags)
        })
        .collect();

    Ok(indicators)
}

/// Replace `columns` in `df` with dummy indicator columns.
///
/// Untouched columns keep their order; indicators are appended after them,
/// grouped by source column in the order given. With `drop_first` the
/// alphabetically first category of each column is omitted.
pub fn encode_dummies(df: &DataFrame, columns: &[String], drop_first: bool) -> Result<DataFrame> {
    if columns.is_empty() {
        return Ok(df.clone());
    }

    for name in columns {
        if df.column(name).is_err() {
            anyhow::bail!(
                "Column '{}' not found for encoding. Available columns: {:?}",
                name,
                df.get_column_names()
            );
        }
    }

    let mut output: Vec<PlColumn> = df
        .get_columns()
        .iter()
        .filter(|col| !columns.iter().any(|c| c == col.name().as_str()))
        .cloned()
        .collect();

    let mut taken: HashSet<String> = output.iter().map(|c| c.name().to_string()).collect();

    for name in columns {
        let source = df.column(name)?;
        for indicator in indicator_columns(source, drop_first)? {
            let indicator_name = indicator.name().to_string();
            if !taken.insert(indicator_name.clone()) {
                anyhow::bail!(
                    "Encoding column '{}' would create duplicate column '{}'",
                    name,
                    indicator_name
                );
            }
            output.push(indicator);
        }
        tracing::debug!(column = name.as_str(), "encoded categorical column");
    }

    DataFrame::new(output).context("Failed to assemble encoded DataFrame")
}
