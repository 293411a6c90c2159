//! Dataset loading, saving, and conversion between polars and [`Table`]

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{
    Column as PlColumn, CsvWriter, DataFrame, DataType, LazyCsvReader, LazyFileListReader,
    LazyFrame, ParquetWriter, SerWriter,
};

use super::error::{SelectError, SelectResult};
use super::table::{Column, Table};
use crate::utils::{create_spinner, finish_with_success};

fn file_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn scan_dataset(path: &Path, infer_schema_length: usize) -> Result<LazyFrame> {
    // 0 means scan the whole file
    let schema_length = if infer_schema_length == 0 {
        None
    } else {
        Some(infer_schema_length)
    };

    let lf = match file_extension(path).as_str() {
        "csv" => LazyCsvReader::new(path)
            .with_infer_schema_length(schema_length)
            .finish()
            .with_context(|| format!("Failed to load CSV file: {}", path.display()))?,
        "parquet" => LazyFrame::scan_parquet(path, Default::default())
            .with_context(|| format!("Failed to load Parquet file: {}", path.display()))?,
        other => anyhow::bail!(
            "Unsupported file format: '{}'. Supported formats: csv, parquet",
            other
        ),
    };

    Ok(lf)
}

/// Load a CSV or Parquet dataset with a spinner.
///
/// Returns the DataFrame together with its row count, column count, and
/// estimated in-memory size in MB.
pub fn load_dataset_with_progress(
    path: &Path,
    infer_schema_length: usize,
) -> Result<(DataFrame, usize, usize, f64)> {
    let spinner = create_spinner(&format!("Loading {}...", path.display()));
    let df = scan_dataset(path, infer_schema_length)?
        .collect()
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    let memory_mb = df.estimated_size() as f64 / (1024.0 * 1024.0);
    tracing::info!(path = %path.display(), rows, cols, "dataset loaded");

    Ok((df, rows, cols, memory_mb))
}

/// Read only the column names of a dataset.
pub fn get_column_names(path: &Path) -> Result<Vec<String>> {
    let schema = scan_dataset(path, 100)?
        .collect_schema()
        .with_context(|| format!("Failed to read schema: {}", path.display()))?;
    Ok(schema.iter_names().map(|name| name.to_string()).collect())
}

/// Save a dataset to CSV or Parquet based on the file extension.
pub fn save_dataset(df: &mut DataFrame, path: &Path) -> Result<()> {
    match file_extension(path).as_str() {
        "csv" => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            CsvWriter::new(&mut file)
                .finish(df)
                .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;
        }
        "parquet" => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            ParquetWriter::new(file)
                .finish(df)
                .with_context(|| format!("Failed to write Parquet file: {}", path.display()))?;
        }
        other => anyhow::bail!(
            "Unsupported output format: '{}'. Supported formats: csv, parquet",
            other
        ),
    }

    Ok(())
}

fn numeric_values(column: &PlColumn) -> SelectResult<Vec<f64>> {
    let name = column.name().as_str();
    let cast = column.cast(&DataType::Float64).map_err(|e| {
        SelectError::invalid(format!("column '{}' cannot be cast to f64: {}", name, e))
    })?;
    let ca = cast
        .f64()
        .map_err(|e| SelectError::invalid(format!("column '{}': {}", name, e)))?;

    ca.iter()
        .enumerate()
        .map(|(row, value)| {
            value.ok_or_else(|| {
                SelectError::invalid(format!("column '{}' has a null value at row {}", name, row))
            })
        })
        .collect()
}

fn parsed_values(column: &PlColumn) -> SelectResult<Vec<f64>> {
    let name = column.name().as_str();
    let ca = column
        .as_materialized_series()
        .str()
        .map_err(|e| SelectError::invalid(format!("column '{}': {}", name, e)))?;

    ca.iter()
        .enumerate()
        .map(|(row, value)| {
            let text = value.ok_or_else(|| {
                SelectError::invalid(format!("column '{}' has a null value at row {}", name, row))
            })?;
            text.trim().parse::<f64>().map_err(|_| {
                SelectError::invalid(format!(
                    "column '{}' row {} value '{}' is not numeric",
                    name, row, text
                ))
            })
        })
        .collect()
}

/// Convert every column of `df` not named in `exclude` into a [`Table`].
///
/// Numeric and boolean columns are cast to `f64`; string columns are parsed
/// cell by cell. Nulls, unparsable strings, and other dtypes fail with
/// [`SelectError::InvalidInput`].
pub fn dataframe_to_table(df: &DataFrame, exclude: &[&str]) -> SelectResult<Table> {
    let mut columns = Vec::with_capacity(df.width());

    for column in df.get_columns() {
        let name = column.name().as_str();
        if exclude.contains(&name) {
            continue;
        }

        let dtype = column.dtype();
        let values = if dtype.is_primitive_numeric() || matches!(dtype, DataType::Boolean) {
            numeric_values(column)?
        } else if matches!(dtype, DataType::String) {
            parsed_values(column)?
        } else {
            return Err(SelectError::invalid(format!(
                "column '{}' has unsupported dtype {}",
                name, dtype
            )));
        };

        columns.push(Column::new(name, values));
    }

    Table::new(columns)
}

/// Convert a [`Table`] back into a polars DataFrame.
pub fn table_to_dataframe(table: &Table) -> Result<DataFrame> {
    let columns: Vec<PlColumn> = table
        .iter()
        .map(|c| PlColumn::new(c.name().into(), c.values().to_vec()))
        .collect();
    DataFrame::new(columns).context("Failed to build DataFrame from table")
}

/// Append the named columns of `source` to `df` unchanged.
///
/// Used to carry the response column through alongside scaled features;
/// both frames must have the same height.
pub fn append_columns(df: DataFrame, source: &DataFrame, names: &[&str]) -> Result<DataFrame> {
    let mut columns: Vec<PlColumn> = df.get_columns().to_vec();
    for name in names {
        let column = source
            .column(name)
            .with_context(|| format!("Column '{}' not found", name))?;
        columns.push(column.clone());
    }
    DataFrame::new(columns).context("Failed to append passthrough columns")
}
