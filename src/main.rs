//! featscale: Feature Scaling and Selection CLI Tool
//!
//! A command-line tool that prepares tabular data for linear regression by
//! dummy-encoding categorical columns, min-max scaling features, and
//! dropping features whose scaled variance falls below a threshold.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use featscale::cli::{self, confirm_drop_features, Cli, Commands};
use featscale::pipeline::{
    append_columns, dataframe_to_table, detect_categorical_columns, encode_dummies,
    load_dataset_with_progress, save_dataset, scale_and_filter, table_to_dataframe,
};
use featscale::report::{export_variance_report, ReportParams, SelectionSummary};
use featscale::utils::{
    create_spinner, finish_with_success, finish_with_warning, init_logging, print_banner,
    print_completion, print_config, print_count, print_info, print_step_header, print_step_time,
    print_success, print_warning, ConfigCard,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Scale {
                input,
                output,
                method,
                target,
                infer_schema_length,
            } => cli::scale::run_scale(
                input,
                output.as_deref(),
                *method,
                target.as_deref(),
                *infer_schema_length,
            ),
        };
    }

    // Main select pipeline - require input
    let input = cli.input().ok_or_else(|| {
        anyhow::anyhow!("Input file is required. Use -i/--input to specify a file.")
    })?;
    let output_path = cli
        .output_path()
        .ok_or_else(|| anyhow::anyhow!("Could not derive an output path from the input"))?;
    let target = cli.target.as_deref();
    let threshold = cli.threshold;

    print_banner(env!("CARGO_PKG_VERSION"));
    print_config(&ConfigCard {
        input,
        target,
        output: &output_path,
        threshold,
        encoded: &cli.encode,
    });

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    let step_start = Instant::now();
    let (mut df, rows, cols, memory_mb) =
        load_dataset_with_progress(input, cli.infer_schema_length)?;

    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    println!("      Estimated memory: {:.2} MB", memory_mb);

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    if let Some(target) = target {
        if !column_names.iter().any(|c| c == target) {
            anyhow::bail!(
                "Target column '{}' not found in dataset. Available columns: {:?}",
                target,
                column_names
            );
        }
    }

    if !cli.drop_columns.is_empty() {
        if let Some(missing) = cli.drop_columns.iter().find(|c| !column_names.contains(c)) {
            anyhow::bail!("Column '{}' in --drop-columns not found in dataset", missing);
        }
        if target.is_some_and(|t| cli.drop_columns.iter().any(|c| c == t)) {
            anyhow::bail!("The target column cannot be listed in --drop-columns");
        }
        df = df.drop_many(cli.drop_columns.iter().map(String::as_str));
        print_info(&format!("Dropped {} column(s) on request", cli.drop_columns.len()));
    }

    let exclude: Vec<&str> = target.into_iter().collect();
    let initial_features = df.width() - exclude.len();
    let mut summary = SelectionSummary::new(initial_features);
    let load_elapsed = step_start.elapsed();
    summary.set_load_time(load_elapsed);
    print_step_time(load_elapsed);

    // Step 2: Dummy encoding
    print_step_header(2, "Categorical Encoding");
    let step_start = Instant::now();
    let to_encode = if cli.encode_all {
        detect_categorical_columns(&df, &exclude)
    } else {
        cli.encode.clone()
    };

    if target.is_some_and(|t| to_encode.iter().any(|c| c == t)) {
        anyhow::bail!("The target column cannot be dummy-encoded");
    }

    if to_encode.is_empty() {
        print_info("No categorical columns to encode");
    } else {
        let before = df.width();
        df = encode_dummies(&df, &to_encode, cli.drop_first)?;
        print_count(
            "categorical column(s) encoded",
            to_encode.len(),
            Some(&format!("(+{} indicator columns)", df.width() + to_encode.len() - before)),
        );
        summary.set_encoded(initial_features, df.width() - exclude.len());
        print_success("Encoded categorical columns");
    }
    let encode_elapsed = step_start.elapsed();
    summary.set_encode_time(encode_elapsed);
    print_step_time(encode_elapsed);

    // Step 3: Scale and filter
    print_step_header(3, "Scale & Variance Filter");
    let step_start = Instant::now();
    let table = dataframe_to_table(&df, &exclude).context(
        "Features must be numeric; use --encode or --encode-all for categorical columns",
    )?;

    let spinner = create_spinner("Scaling features and computing variances...");
    let selection = scale_and_filter(&table, threshold)?;

    let degenerate = selection.degenerate_names();
    if degenerate.is_empty() {
        finish_with_success(&spinner, "Variance analysis complete");
    } else {
        finish_with_warning(
            &spinner,
            &format!("{} constant column(s) scaled to 0.0", degenerate.len()),
        );
        print_warning(&format!("Constant: {}", degenerate.join(", ")));
    }
    summary.set_degenerate(degenerate);

    let dropped = selection.dropped_names();
    let mut output_table = &selection.filtered;
    let mut drops_applied = true;
    if dropped.is_empty() {
        print_info("No features below the variance threshold");
    } else {
        print_count(
            "feature(s) with low variance",
            dropped.len(),
            Some(&format!("(<{})", threshold)),
        );

        let proceed = cli.no_confirm || confirm_drop_features(dropped.len(), threshold)?;
        if proceed {
            summary.add_variance_drops(dropped);
            print_success("Dropped low-variance features");
        } else {
            output_table = &selection.scaled;
            drops_applied = false;
            print_info("Keeping all scaled features");
        }
    }
    let select_elapsed = step_start.elapsed();
    summary.set_select_time(select_elapsed);
    print_step_time(select_elapsed);

    // Step 4: Save output
    print_step_header(4, "Save Results");
    let step_start = Instant::now();
    let spinner = create_spinner("Writing output file...");
    let mut out = append_columns(table_to_dataframe(output_table)?, &df, &exclude)?;
    save_dataset(&mut out, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    if let Some(scaled_path) = &cli.scaled_output {
        let mut scaled = append_columns(table_to_dataframe(&selection.scaled)?, &df, &exclude)?;
        save_dataset(&mut scaled, scaled_path)?;
        print_success(&format!("Full scaled table saved to {}", scaled_path.display()));
    }

    if let Some(report_path) = &cli.report {
        let input_file = input.display().to_string();
        let output_file = output_path.display().to_string();
        export_variance_report(
            &selection,
            report_path,
            &ReportParams {
                input_file: &input_file,
                output_file: &output_file,
                threshold,
                target_column: target,
                encoded_columns: &to_encode,
                drops_applied,
            },
        )?;
        print_success(&format!("Variance report saved to {}", report_path.display()));
    }
    let save_elapsed = step_start.elapsed();
    summary.set_save_time(save_elapsed);
    print_step_time(save_elapsed);

    summary.display();
    print_completion();

    Ok(())
}
