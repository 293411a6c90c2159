//! Command-line argument definitions using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::pipeline::ScaleMethod;

/// featscale - Scale features to [0, 1] and drop those with low variance
#[derive(Parser, Debug)]
#[command(name = "featscale")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input file path (CSV or Parquet)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Response column name. Excluded from scaling and selection,
    /// and copied unchanged as the last column of the output.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Output file path (CSV or Parquet, determined by extension).
    /// Defaults to input directory with '_selected' suffix (e.g., data.csv -> data_selected.csv).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Variance threshold - keep features whose min-max scaled variance is at least this value
    #[arg(long, default_value = "0.01", value_parser = validate_threshold)]
    pub threshold: f64,

    /// Categorical columns to dummy-encode before scaling (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub encode: Vec<String>,

    /// Dummy-encode every string/categorical column (overrides --encode)
    #[arg(long, default_value = "false")]
    pub encode_all: bool,

    /// Omit the first category of each encoded column
    #[arg(long, default_value = "false")]
    pub drop_first: bool,

    /// Columns to drop before processing (comma-separated).
    /// These columns will be removed from the dataset before any analysis.
    #[arg(long, value_delimiter = ',')]
    pub drop_columns: Vec<String>,

    /// Also write the full scaled table (all features) to this path
    #[arg(long)]
    pub scaled_output: Option<PathBuf>,

    /// Write a JSON report of per-feature scaled variances to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Skip interactive confirmation prompts
    #[arg(long, default_value = "false")]
    pub no_confirm: bool,

    /// Number of rows to use for schema inference (CSV only).
    /// Use 0 for full table scan (very slow for large files).
    #[arg(long, default_value = "10000")]
    pub infer_schema_length: usize,

    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scale every numeric column with one method and save the result
    Scale {
        /// Input file path (CSV or Parquet)
        input: PathBuf,

        /// Output file path (optional, defaults to input with '_scaled' suffix)
        output: Option<PathBuf>,

        /// Scaling method
        #[arg(long, value_enum, default_value_t = ScaleMethod::MinMax)]
        method: ScaleMethod,

        /// Response column to copy through unscaled
        #[arg(short, long)]
        target: Option<String>,

        /// Number of rows to use for schema inference (CSV only).
        #[arg(long, default_value = "10000")]
        infer_schema_length: usize,
    },
}

impl Cli {
    pub fn input(&self) -> Option<&PathBuf> {
        self.input.as_ref()
    }

    /// Get the output path, deriving from input if not explicitly provided.
    pub fn output_path(&self) -> Option<PathBuf> {
        let input = self.input.as_ref()?;
        Some(
            self.output
                .clone()
                .unwrap_or_else(|| derive_output_path(input, "selected")),
        )
    }
}

/// `dir/stem.ext` -> `dir/stem_{suffix}.ext`, keeping the input's extension.
pub fn derive_output_path(input: &Path, suffix: &str) -> PathBuf {
    let parent = input.parent().unwrap_or_else(|| Path::new("."));
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let extension = input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("parquet");
    parent.join(format!("{}_{}.{}", stem, suffix, extension))
}

/// Validator for the variance threshold
fn validate_threshold(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;

    if !value.is_finite() || value < 0.0 {
        Err(format!(
            "threshold must be a non-negative number, got {}",
            value
        ))
    } else {
        Ok(value)
    }
}
