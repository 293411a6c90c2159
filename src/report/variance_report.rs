//! JSON export of per-feature scaled variances

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use crate::pipeline::Selection;

/// Whether a feature is present in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureStatus {
    Retained,
    Dropped,
}

/// Metadata about the selection run
#[derive(Debug, Serialize)]
pub struct ReportMetadata {
    /// Timestamp of the run (RFC 3339, UTC)
    pub timestamp: String,
    pub featscale_version: String,
    pub input_file: String,
    pub output_file: String,
    pub threshold: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_column: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub encoded_columns: Vec<String>,
}

/// Aggregate counts over all analysed features
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub features_analyzed: usize,
    pub features_retained: usize,
    pub features_dropped: usize,
    pub degenerate_features: usize,
    pub mean_variance: f64,
}

/// One feature's scaled variance and outcome
#[derive(Debug, Serialize)]
pub struct FeatureEntry {
    pub name: String,
    pub variance: f64,
    pub status: FeatureStatus,
    /// Scaled variance fell below the threshold
    pub below_threshold: bool,
    pub degenerate: bool,
}

/// Complete variance report
#[derive(Debug, Serialize)]
pub struct VarianceReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub features: Vec<FeatureEntry>,
}

/// Parameters describing the run, for the report metadata
pub struct ReportParams<'a> {
    pub input_file: &'a str,
    pub output_file: &'a str,
    pub threshold: f64,
    pub target_column: Option<&'a str>,
    pub encoded_columns: &'a [String],
    /// False when the user kept the low-variance features
    pub drops_applied: bool,
}

impl VarianceReport {
    pub fn from_selection(selection: &Selection, params: &ReportParams) -> Self {
        let features: Vec<FeatureEntry> = selection
            .variances
            .iter()
            .map(|v| FeatureEntry {
                name: v.name.clone(),
                variance: v.variance,
                status: if v.retained || !params.drops_applied {
                    FeatureStatus::Retained
                } else {
                    FeatureStatus::Dropped
                },
                below_threshold: !v.retained,
                degenerate: v.degenerate,
            })
            .collect();

        let retained = features
            .iter()
            .filter(|f| f.status == FeatureStatus::Retained)
            .count();
        let mean_variance = if features.is_empty() {
            0.0
        } else {
            features.iter().map(|f| f.variance).sum::<f64>() / features.len() as f64
        };

        Self {
            metadata: ReportMetadata {
                timestamp: Utc::now().to_rfc3339(),
                featscale_version: env!("CARGO_PKG_VERSION").to_string(),
                input_file: params.input_file.to_string(),
                output_file: params.output_file.to_string(),
                threshold: params.threshold,
                target_column: params.target_column.map(str::to_string),
                encoded_columns: params.encoded_columns.to_vec(),
            },
            summary: ReportSummary {
                features_analyzed: features.len(),
                features_retained: retained,
                features_dropped: features.len() - retained,
                degenerate_features: features.iter().filter(|f| f.degenerate).count(),
                mean_variance,
            },
            features,
        }
    }
}

/// Write the variance report for `selection` as pretty-printed JSON.
pub fn export_variance_report(
    selection: &Selection,
    output_path: &Path,
    params: &ReportParams,
) -> Result<()> {
    let report = VarianceReport::from_selection(selection, params);
    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;

    std::fs::write(output_path, json)
        .with_context(|| format!("Failed to write report: {}", output_path.display()))?;

    tracing::info!(path = %output_path.display(), "variance report written");
    Ok(())
}
