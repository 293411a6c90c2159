//! `scale` subcommand: apply one scaling method to every feature column

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use crate::cli::derive_output_path;
use crate::pipeline::{
    append_columns, dataframe_to_table, load_dataset_with_progress, save_dataset, scale_table,
    table_to_dataframe, ScaleMethod,
};
use crate::utils::{create_spinner, finish_with_success};

/// Scale all non-target columns of `input` and write them to `output`.
///
/// # Arguments
/// * `input` - CSV or Parquet file to read
/// * `output` - Optional output path; defaults to `<stem>_scaled.<ext>`
/// * `method` - Min-max or z-score
/// * `target` - Optional response column copied through unscaled
/// * `infer_schema_length` - Rows used for CSV schema inference
pub fn run_scale(
    input: &Path,
    output: Option<&Path>,
    method: ScaleMethod,
    target: Option<&str>,
    infer_schema_length: usize,
) -> Result<()> {
    let output_path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| derive_output_path(input, "scaled"));

    println!(
        "\n {} Scaling features ({})",
        style("◆").cyan().bold(),
        style(method).yellow()
    );
    println!("   Input:  {}", style(input.display()).dim());
    println!("   Output: {}", style(output_path.display()).dim());
    println!();

    let (df, rows, cols, _) = load_dataset_with_progress(input, infer_schema_length)?;

    if let Some(target) = target {
        if df.column(target).is_err() {
            anyhow::bail!("Target column '{}' not found in dataset", target);
        }
    }

    let exclude: Vec<&str> = target.into_iter().collect();
    let table = dataframe_to_table(&df, &exclude)
        .with_context(|| format!("Cannot scale {}", input.display()))?;

    let spinner = create_spinner("Scaling columns...");
    let scaled = scale_table(&table, method)?;
    let mut out = append_columns(table_to_dataframe(&scaled)?, &df, &exclude)?;
    finish_with_success(&spinner, &format!("Scaled {} column(s)", scaled.n_cols()));

    let spinner = create_spinner("Writing output file...");
    save_dataset(&mut out, &output_path)?;
    finish_with_success(&spinner, &format!("Saved to {}", output_path.display()));

    println!();
    println!(
        "   {} rows × {} columns",
        style(rows).yellow(),
        style(cols).yellow()
    );
    println!();
    println!(" {} Scaling complete!", style("✓").green().bold());

    Ok(())
}
