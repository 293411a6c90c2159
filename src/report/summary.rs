//! Selection summary rendered as a terminal table

use std::time::Duration;

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::utils::format_duration;

/// Summary of one scale-and-filter run
#[derive(Debug, Default)]
pub struct SelectionSummary {
    pub initial_features: usize,
    pub encoded_added: usize,
    pub final_features: usize,
    pub dropped_low_variance: Vec<String>,
    pub degenerate: Vec<String>,
    pub load_time: Duration,
    pub encode_time: Duration,
    pub select_time: Duration,
    pub save_time: Duration,
}

impl SelectionSummary {
    pub fn new(initial_features: usize) -> Self {
        Self {
            initial_features,
            final_features: initial_features,
            ..Default::default()
        }
    }

    /// Record the net column change from dummy encoding.
    pub fn set_encoded(&mut self, features_before: usize, features_after: usize) {
        self.encoded_added = features_after.saturating_sub(features_before);
        self.final_features = features_after;
    }

    pub fn add_variance_drops(&mut self, features: Vec<String>) {
        self.final_features = self.final_features.saturating_sub(features.len());
        self.dropped_low_variance = features;
    }

    pub fn set_degenerate(&mut self, features: Vec<String>) {
        self.degenerate = features;
    }

    pub fn set_load_time(&mut self, elapsed: Duration) {
        self.load_time = elapsed;
    }

    pub fn set_encode_time(&mut self, elapsed: Duration) {
        self.encode_time = elapsed;
    }

    pub fn set_select_time(&mut self, elapsed: Duration) {
        self.select_time = elapsed;
    }

    pub fn set_save_time(&mut self, elapsed: Duration) {
        self.save_time = elapsed;
    }

    pub fn total_time(&self) -> Duration {
        self.load_time + self.encode_time + self.select_time + self.save_time
    }

    /// Percentage of scaled features removed by the threshold
    pub fn reduction_pct(&self) -> f64 {
        let scaled = self.final_features + self.dropped_low_variance.len();
        if scaled == 0 {
            0.0
        } else {
            self.dropped_low_variance.len() as f64 / scaled as f64 * 100.0
        }
    }

    fn build_table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Initial Features"),
            Cell::new(self.initial_features),
        ]);

        if self.encoded_added > 0 {
            table.add_row(vec![
                Cell::new("🏷️  Added (Encoding)"),
                Cell::new(format!("+{}", self.encoded_added)).fg(Color::Cyan),
            ]);
        }

        table.add_row(vec![
            Cell::new("🗑️  Dropped (Low Variance)"),
            Cell::new(self.dropped_low_variance.len()).fg(
                if self.dropped_low_variance.is_empty() {
                    Color::White
                } else {
                    Color::Red
                },
            ),
        ]);

        table.add_row(vec![
            Cell::new("⚖️  Constant Columns"),
            Cell::new(self.degenerate.len()).fg(if self.degenerate.is_empty() {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);

        table.add_row(vec![
            Cell::new("✅ Final Features"),
            Cell::new(self.final_features)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let reduction_pct = self.reduction_pct();
        let color = if reduction_pct > 30.0 {
            Color::Green
        } else if reduction_pct > 10.0 {
            Color::Yellow
        } else {
            Color::Cyan
        };
        table.add_row(vec![
            Cell::new("📉 Reduction"),
            Cell::new(format!("{:.1}%", reduction_pct))
                .fg(color)
                .add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("⏱  Total Time"),
            Cell::new(format_duration(self.total_time())),
        ]);

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("SELECTION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        for line in self.build_table().to_string().lines() {
            println!("    {}", line);
        }

        if !self.dropped_low_variance.is_empty() {
            println!();
            println!(
                "    {} {}",
                style("📝").cyan(),
                style("DROPPED FEATURES").white().bold()
            );
            println!("    {}", style("─".repeat(50)).dim());
            println!();
            println!(
                "      {} {}:",
                style("Low Variance").yellow(),
                style(format!("({})", self.dropped_low_variance.len())).dim()
            );
            for feature in &self.dropped_low_variance {
                let marker = if self.degenerate.contains(feature) {
                    style(" (constant)").dim().to_string()
                } else {
                    String::new()
                };
                println!("        {} {}{}", style("•").dim(), feature, marker);
            }
        }
    }
}
