use colored::Colorize;

use crate::analytics::ChartSpec;
use crate::session::{AbTestOutcome, AnalysisRecord};

/// Terminal formatting constants
const TERMINAL_WIDTH: usize = 80;
const SEPARATOR_WIDTH: usize = 40;
const BAR_WIDTH: usize = 50;
const RESULT_PREVIEW_CHARS: usize = 500;

/// Console renderer for analysis results and history
#[derive(Default)]
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn with_colors(self, use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        self
    }

    pub fn print_ab_test(&self, outcome: &AbTestOutcome) {
        self.print_header("A/B TEST ANALYSIS");

        println!("\n{}", "Cohorts".bright_white().bold());
        println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        println!(
            "  Control:   {} users, {} conversions ({:.2}%)",
            outcome.control.users, outcome.control.conversions, outcome.control_rate
        );
        println!(
            "  Treatment: {} users, {} conversions ({:.2}%)",
            outcome.treatment.users, outcome.treatment.conversions, outcome.treatment_rate
        );

        self.print_chart(&outcome.chart);

        println!("\n{}", "Analysis Results".bright_white().bold());
        println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        println!("{}", outcome.analysis);

        self.print_footer();
    }

    pub fn print_research(&self, topic: &str, result: &str) {
        self.print_header("MARKET RESEARCH");

        println!("\n{} {}", "Topic:".bright_white().bold(), topic);
        println!("\n{}", "Research Results".bright_white().bold());
        println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());
        println!("{}", result);

        self.print_footer();
    }

    /// Render the grouped-bar spec as scaled unicode bars
    pub fn print_chart(&self, chart: &ChartSpec) {
        println!("\n{}", chart.title.bright_white().bold());
        println!("{}", "─".repeat(SEPARATOR_WIDTH).bright_black());

        let max = chart
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0_f64, f64::max);

        let name_width = chart
            .series
            .iter()
            .map(|s| s.name.len())
            .max()
            .unwrap_or(0);

        for series in &chart.series {
            for value in &series.values {
                let filled = if max > 0.0 {
                    ((value / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let bar = "█".repeat(filled);
                let bar = if series.name == "Control" {
                    bar.bright_blue()
                } else {
                    bar.bright_red()
                };
                println!("  {:<name_width$}  {} {:.2}%", series.name, bar, value);
            }
        }
    }

    /// Print past analyses newest first, results truncated for display
    pub fn print_history(&self, records: &[AnalysisRecord]) {
        self.print_header("ANALYSIS HISTORY");

        if records.is_empty() {
            println!("\nNo analysis history yet.");
            self.print_footer();
            return;
        }

        for record in records.iter().rev() {
            println!(
                "\n{} {} - {}",
                "•".bright_blue(),
                record
                    .timestamp
                    .format("%Y-%m-%d %H:%M:%S")
                    .to_string()
                    .bright_white(),
                record.kind.label().bold()
            );
            println!("  Query: {}", first_line(&record.query));
            println!("  Result: {}", preview(&record.result, RESULT_PREVIEW_CHARS));
        }

        self.print_footer();
    }

    fn print_header(&self, title: &str) {
        println!("\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
        println!("{}", title.bright_white().bold());
        println!("{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
    }

    fn print_footer(&self) {
        println!("\n{}", "═".repeat(TERMINAL_WIDTH).bright_blue());
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}

fn preview(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let truncated: String = text.chars().take(limit).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_results() {
        let long = "x".repeat(600);
        let shown = preview(&long, 500);
        assert_eq!(shown.chars().count(), 503);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_preview_keeps_short_results() {
        assert_eq!(preview("short", 500), "short");
    }

    #[test]
    fn test_first_line() {
        assert_eq!(first_line("one\ntwo"), "one");
        assert_eq!(first_line(""), "");
    }
}
