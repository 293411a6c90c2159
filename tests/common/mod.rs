//! Shared test utilities and fixture generators

#![allow(dead_code)]

use featscale::pipeline::Table;
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use tempfile::TempDir;

pub const EPS: f64 = 1e-9;

/// The two-column example: `A` spreads over [0, 10], `B` is constant
pub fn create_example_table() -> Table {
    Table::from_pairs([("A", vec![0.0, 5.0, 10.0]), ("B", vec![1.0, 1.0, 1.0])]).unwrap()
}

/// A housing-style table with features of very different spread
///
/// - `area`: wide, evenly spread values (high scaled variance)
/// - `rooms`: small integers
/// - `pool`: mostly zeros with a single one (low scaled variance)
/// - `constant`: zero variance
pub fn create_housing_table() -> Table {
    Table::from_pairs([
        (
            "area",
            vec![50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0],
        ),
        ("rooms", vec![1.0, 1.0, 2.0, 2.0, 3.0, 4.0, 5.0, 5.0, 6.0, 6.0]),
        ("pool", vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]),
        ("constant", vec![7.0; 10]),
    ])
    .unwrap()
}

/// Random table with `cols` columns of `rows` values drawn from varied ranges
pub fn create_random_table(rows: usize, cols: usize, seed: u64) -> Table {
    let mut rng = StdRng::seed_from_u64(seed);
    Table::from_pairs((0..cols).map(|i| {
        let scale = rng.gen_range(0.1..1000.0);
        let offset = rng.gen_range(-500.0..500.0);
        let values = (0..rows)
            .map(|_| offset + rng.gen::<f64>() * scale)
            .collect::<Vec<f64>>();
        (format!("feature_{}", i), values)
    }))
    .unwrap()
}

/// DataFrame resembling a small regression dataset with a categorical column
pub fn create_regression_dataframe() -> DataFrame {
    df! {
        "price" => [200.0f64, 340.0, 150.0, 500.0, 275.0, 410.0],
        "area" => [80.0f64, 120.0, 60.0, 200.0, 100.0, 150.0],
        "furnishing" => ["furnished", "semi", "unfurnished", "furnished", "semi", "semi"],
        "mainroad" => ["yes", "yes", "no", "yes", "no", "yes"],
        "stories" => [1i64, 2, 1, 3, 2, 2],
        "flag" => [1.0f64; 6],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Create a temporary directory with a test Parquet file
pub fn create_temp_parquet(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let parquet_path = temp_dir.path().join("test_data.parquet");

    let file = std::fs::File::create(&parquet_path).unwrap();
    ParquetWriter::new(file).finish(df).unwrap();

    (temp_dir, parquet_path)
}

/// Read a CSV written by the tool back into a DataFrame
pub fn read_csv(path: &std::path::Path) -> DataFrame {
    LazyCsvReader::new(path).finish().unwrap().collect().unwrap()
}

/// Column names of a DataFrame as owned strings
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|s| s.to_string()).collect()
}

/// Assert two slices are equal within `EPS`
pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < EPS,
            "Value mismatch at row {}: expected {}, got {}",
            i,
            e,
            a
        );
    }
}
