//! Unit tests for min-max scaling and z-score standardization

use featscale::pipeline::{
    min_max_scale, population_mean, population_variance, scale_table, standardize, ScaleMethod,
    SelectError, Table,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_min_max_scale_example() {
    let scaled = min_max_scale(&create_example_table()).unwrap();

    assert_close(scaled.column("A").unwrap().values(), &[0.0, 0.5, 1.0]);
    assert_close(scaled.column("B").unwrap().values(), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_min_max_handles_negative_values() {
    let table = Table::from_pairs([("t", vec![-20.0, -10.0, 0.0, 20.0])]).unwrap();
    let scaled = min_max_scale(&table).unwrap();
    assert_close(scaled.column("t").unwrap().values(), &[0.0, 0.25, 0.5, 1.0]);
}

#[test]
fn test_standardize_zero_mean_unit_std() {
    let table = create_random_table(200, 5, 42);
    let standardized = standardize(&table).unwrap();

    for column in standardized.columns() {
        let mean = population_mean(column.values()).unwrap();
        let std = population_variance(column.values()).unwrap().sqrt();
        assert!(mean.abs() < 1e-9, "'{}' mean should be ~0, got {}", column.name(), mean);
        assert!(
            (std - 1.0).abs() < 1e-9,
            "'{}' std should be ~1, got {}",
            column.name(),
            std
        );
    }
}

#[test]
fn test_standardize_known_values() {
    // mean 5, population std 2
    let table = Table::from_pairs([("x", vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0])]).unwrap();
    let standardized = standardize(&table).unwrap();
    assert_close(
        standardized.column("x").unwrap().values(),
        &[-1.5, -0.5, -0.5, -0.5, 0.0, 0.0, 1.0, 2.0],
    );
}

#[test]
fn test_standardize_constant_column() {
    let standardized = standardize(&create_example_table()).unwrap();
    assert_close(standardized.column("B").unwrap().values(), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_scale_table_dispatches_on_method() {
    let table = create_housing_table();
    assert_eq!(
        scale_table(&table, ScaleMethod::MinMax).unwrap(),
        min_max_scale(&table).unwrap()
    );
    assert_eq!(
        scale_table(&table, ScaleMethod::ZScore).unwrap(),
        standardize(&table).unwrap()
    );
}

#[test]
fn test_scaling_rejects_empty_tables() {
    let no_columns = Table::new(Vec::new()).unwrap();
    let no_rows = Table::from_pairs([("a", Vec::new())]).unwrap();

    assert!(matches!(
        min_max_scale(&no_columns),
        Err(SelectError::InvalidInput(_))
    ));
    assert_eq!(min_max_scale(&no_rows), Err(SelectError::EmptyTable));
    assert_eq!(standardize(&no_rows), Err(SelectError::EmptyTable));
}

#[test]
fn test_scaling_preserves_names_and_order() {
    let table = create_housing_table();
    let scaled = min_max_scale(&table).unwrap();
    assert_eq!(scaled.column_names(), table.column_names());
    assert_eq!(scaled.n_rows(), table.n_rows());
}
