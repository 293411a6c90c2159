//! Tests for scale-and-filter feature selection

use featscale::pipeline::{
    min_max_scale, scale_and_filter, variance_profile, SelectError, Table, CONSTANT_COLUMN_FILL,
};

#[path = "common/mod.rs"]
mod common;

use common::*;

#[test]
fn test_example_table_keeps_spread_column() {
    let selection = scale_and_filter(&create_example_table(), 0.01).unwrap();

    assert_close(selection.scaled.column("A").unwrap().values(), &[0.0, 0.5, 1.0]);
    assert_close(selection.scaled.column("B").unwrap().values(), &[0.0, 0.0, 0.0]);

    let var_a = selection.variances.iter().find(|v| v.name == "A").unwrap();
    assert!(
        (var_a.variance - 1.0 / 6.0).abs() < EPS,
        "var(A) should be 1/6, got {}",
        var_a.variance
    );

    assert_eq!(selection.filtered.column_names(), vec!["A"]);
    assert_eq!(selection.filtered.n_rows(), 3);
}

#[test]
fn test_zero_threshold_retains_degenerate_columns() {
    let selection = scale_and_filter(&create_example_table(), 0.0).unwrap();

    assert_eq!(
        selection.filtered.column_names(),
        selection.scaled.column_names(),
        "Threshold 0 should keep every column, constant ones included"
    );
    assert!(selection.variances.iter().all(|v| v.retained));
    assert_eq!(selection.degenerate_names(), vec!["B".to_string()]);
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    let table = create_example_table();
    let exact = 1.0 / 6.0;
    let var_a = variance_profile(&table).unwrap().1[0].1;

    let selection = scale_and_filter(&table, var_a).unwrap();
    assert_eq!(
        selection.filtered.column_names(),
        vec!["A"],
        "A feature exactly at the threshold must be kept"
    );

    let selection = scale_and_filter(&table, exact + 1e-6).unwrap();
    assert!(selection.filtered.column_names().is_empty());
}

#[test]
fn test_negative_threshold_rejected_for_any_table() {
    let tables = [
        create_example_table(),
        create_housing_table(),
        Table::new(Vec::new()).unwrap(),
        Table::from_pairs([("empty", Vec::new())]).unwrap(),
    ];

    for table in &tables {
        let result = scale_and_filter(table, -0.001);
        assert!(
            matches!(result, Err(SelectError::InvalidInput(_))),
            "Negative threshold must be InvalidInput, got {:?}",
            result
        );
    }
}

#[test]
fn test_zero_columns_is_invalid_input() {
    let table = Table::new(Vec::new()).unwrap();
    assert!(matches!(
        scale_and_filter(&table, 0.1),
        Err(SelectError::InvalidInput(_))
    ));
}

#[test]
fn test_zero_rows_is_empty_table() {
    let table = Table::from_pairs([("a", Vec::new()), ("b", Vec::new())]).unwrap();
    assert_eq!(scale_and_filter(&table, 0.1), Err(SelectError::EmptyTable));
}

#[test]
fn test_filtered_is_ordered_subset_of_scaled() {
    let table = create_random_table(40, 12, 7);
    let selection = scale_and_filter(&table, 0.08).unwrap();

    let scaled = selection.scaled.column_names();
    let filtered = selection.filtered.column_names();

    // Every filtered column appears in scaled, in the same relative order
    let mut cursor = 0;
    for name in &filtered {
        let pos = scaled[cursor..]
            .iter()
            .position(|s| s == name)
            .unwrap_or_else(|| panic!("'{}' missing or out of order in scaled table", name));
        cursor += pos + 1;
    }

    for name in &filtered {
        assert_eq!(
            selection.filtered.column(name).unwrap().values(),
            selection.scaled.column(name).unwrap().values(),
            "Filtered values must equal the scaled values for '{}'",
            name
        );
    }
}

#[test]
fn test_scaled_values_within_unit_interval() {
    let table = create_random_table(50, 8, 11);
    let selection = scale_and_filter(&table, 0.0).unwrap();

    for column in selection.scaled.columns() {
        let values = column.values();
        assert!(
            values.iter().all(|v| (0.0..=1.0).contains(v)),
            "Column '{}' has values outside [0, 1]",
            column.name()
        );
        assert!(values.contains(&0.0), "Minimum should map to 0.0");
        assert!(values.contains(&1.0), "Maximum should map to 1.0");
    }
}

#[test]
fn test_wide_finite_range_is_scaled() {
    let table = Table::from_pairs([("w", vec![-1.0e308, 0.0, 1.0e308])]).unwrap();
    let selection = scale_and_filter(&table, 0.01).unwrap();

    assert_close(selection.scaled.column("w").unwrap().values(), &[0.0, 0.5, 1.0]);
    assert_eq!(selection.retained_names(), vec!["w"]);
    assert!(!selection.variances[0].degenerate);
}

#[test]
fn test_threshold_monotonicity() {
    let table = create_random_table(30, 15, 23);
    let thresholds = [0.0, 0.02, 0.05, 0.07, 0.09, 0.12, 0.5];

    for pair in thresholds.windows(2) {
        let loose = scale_and_filter(&table, pair[0]).unwrap();
        let strict = scale_and_filter(&table, pair[1]).unwrap();
        let loose_names = loose.retained_names();
        for name in strict.retained_names() {
            assert!(
                loose_names.contains(&name),
                "'{}' kept at {} but dropped at {}",
                name,
                pair[1],
                pair[0]
            );
        }
    }
}

#[test]
fn test_rescaling_is_idempotent() {
    let table = create_housing_table();
    let once = min_max_scale(&table).unwrap();
    let twice = min_max_scale(&once).unwrap();

    for (a, b) in once.columns().iter().zip(twice.columns()) {
        assert_eq!(a.name(), b.name());
        assert_close(b.values(), a.values());
    }
}

#[test]
fn test_row_count_preserved() {
    for (rows, cols) in [(1, 1), (2, 5), (17, 3)] {
        let table = create_random_table(rows, cols, rows as u64);
        let selection = scale_and_filter(&table, 0.05).unwrap();
        assert_eq!(selection.scaled.n_rows(), rows);
        assert_eq!(selection.filtered.n_rows(), rows);
    }
}

#[test]
fn test_single_row_table_is_all_degenerate() {
    let table = Table::from_pairs([("x", vec![3.5]), ("y", vec![-2.0])]).unwrap();
    let selection = scale_and_filter(&table, 0.0).unwrap();

    assert_eq!(selection.degenerate_names().len(), 2);
    for column in selection.scaled.columns() {
        assert_eq!(column.values(), &[CONSTANT_COLUMN_FILL]);
    }
}

#[test]
fn test_housing_table_drops_sparse_and_constant() {
    let selection = scale_and_filter(&create_housing_table(), 0.05).unwrap();

    // pool: one 1.0 in ten rows -> variance 0.09; constant -> 0
    assert_eq!(selection.retained_names(), vec!["area", "rooms", "pool"]);
    assert_eq!(selection.dropped_names(), vec!["constant"]);

    let selection = scale_and_filter(&create_housing_table(), 0.1).unwrap();
    assert_eq!(selection.retained_names(), vec!["area", "rooms"]);
}

#[test]
fn test_input_table_not_mutated() {
    let table = create_housing_table();
    let before = table.clone();
    let _ = scale_and_filter(&table, 0.05).unwrap();
    assert_eq!(table, before);
}

#[test]
fn test_deterministic_across_calls() {
    let table = create_random_table(25, 6, 99);
    let first = scale_and_filter(&table, 0.06).unwrap();
    let second = scale_and_filter(&table, 0.06).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_calls_share_input() {
    let table = create_random_table(100, 10, 5);
    let expected = scale_and_filter(&table, 0.07).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| scale_and_filter(&table, 0.07).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
