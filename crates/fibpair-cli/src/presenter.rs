//! CLI result presenter.

use std::fmt::Write as _;
use std::time::Duration;

use serde::Serialize;

use fibpair_core::FibIndex;
use fibpair_orchestration::interfaces::{CalculationResult, ResultPresenter, SequenceResult};

use crate::output::{format_duration, format_number, format_result, format_sequence, OutputFormat};
use crate::ui;

#[derive(Serialize)]
struct JsonValue<'a> {
    n: u64,
    algorithm: &'a str,
    value: String,
    duration_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digits: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    comparison: Vec<JsonComparisonRow<'a>>,
}

#[derive(Serialize)]
struct JsonSequence<'a> {
    n: u64,
    algorithm: &'a str,
    generator: &'a str,
    sequence: Vec<String>,
    duration_ms: f64,
}

#[derive(Serialize)]
struct JsonComparisonRow<'a> {
    algorithm: &'a str,
    duration_ms: f64,
    matches: bool,
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    format: OutputFormat,
}

impl CLIResultPresenter {
    /// Presenter for the given verbosity and output format.
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, format: OutputFormat) -> Self {
        Self {
            verbose,
            quiet,
            format,
        }
    }

    fn json_result<'a>(
        result: &'a CalculationResult,
        n: FibIndex,
        details: bool,
        comparison: Vec<JsonComparisonRow<'a>>,
    ) -> String {
        let value = &result.value;
        let doc = JsonValue {
            n: n.get(),
            algorithm: &result.algorithm,
            value: value.to_string(),
            duration_ms: millis(result.duration),
            bits: details.then(|| value.bits()),
            digits: details.then(|| value.to_string().len()),
            comparison,
        };
        serde_json::to_string(&doc).unwrap_or_default()
    }

    /// Render a single result as it would be printed.
    #[must_use]
    pub fn render_result(&self, result: &CalculationResult, n: FibIndex, details: bool) -> String {
        let value = &result.value;
        if self.format == OutputFormat::Json {
            return Self::json_result(result, n, details, Vec::new());
        }

        if self.quiet {
            return value.to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {}", result.algorithm);
        let _ = writeln!(out, "N: {}", format_number(n.get()));
        let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
        if details {
            let _ = writeln!(out, "Result bits: {}", value.bits());
            let _ = writeln!(out, "Result digits: {}", value.to_string().len());
        }
        let _ = write!(
            out,
            "F({}) = {}",
            format_number(n.get()),
            format_result(value, self.verbose)
        );
        out
    }

    /// Render a sequence as it would be printed.
    #[must_use]
    pub fn render_sequence(&self, result: &SequenceResult, n: FibIndex) -> String {
        if self.format == OutputFormat::Json {
            let doc = JsonSequence {
                n: n.get(),
                algorithm: &result.algorithm,
                generator: &result.generator,
                sequence: result.values.iter().map(ToString::to_string).collect(),
                duration_ms: millis(result.duration),
            };
            return serde_json::to_string(&doc).unwrap_or_default();
        }

        if self.quiet {
            return format_sequence(&result.values).trim_end().to_string();
        }

        let mut out = String::new();
        let _ = writeln!(out, "Algorithm: {}", result.algorithm);
        let _ = writeln!(out, "Generator: {}", result.generator);
        let _ = writeln!(out, "Count: {}", format_number(n.get()));
        let _ = writeln!(out, "Duration: {}", format_duration(result.duration));
        for (i, value) in result.values.iter().enumerate() {
            let _ = writeln!(out, "F({i}) = {}", format_result(value, self.verbose));
        }
        out.trim_end().to_string()
    }

    /// Render F(n) from several calculators with the comparison table.
    ///
    /// The first result is the reference. JSON mode produces a single
    /// document carrying the rows under `comparison`. `None` when there are
    /// no results.
    #[must_use]
    pub fn render_comparison(
        &self,
        results: &[CalculationResult],
        n: FibIndex,
        details: bool,
    ) -> Option<String> {
        let first = results.first()?;
        let matches = |r: &CalculationResult| r.value == first.value;

        if self.format == OutputFormat::Json {
            let rows = results
                .iter()
                .map(|r| JsonComparisonRow {
                    algorithm: &r.algorithm,
                    duration_ms: millis(r.duration),
                    matches: matches(r),
                })
                .collect();
            return Some(Self::json_result(first, n, details, rows));
        }

        if self.quiet {
            return Some(self.render_result(first, n, details));
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", ui::header("Comparison Results"));
        for result in results {
            let _ = writeln!(
                out,
                "  {:<20} {:>10} {}",
                result.algorithm,
                format_duration(result.duration),
                ui::status_tag(matches(result)),
            );
        }
        let _ = writeln!(out);
        out.push_str(&self.render_result(first, n, details));
        Some(out)
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, result: &CalculationResult, n: FibIndex, details: bool) {
        println!("{}", self.render_result(result, n, details));
    }

    fn present_sequence(&self, result: &SequenceResult, n: FibIndex) {
        let text = self.render_sequence(result, n);
        if !text.is_empty() {
            println!("{text}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult], n: FibIndex, details: bool) {
        if let Some(text) = self.render_comparison(results, n, details) {
            println!("{text}");
        }
    }

    fn present_error(&self, error: &str) {
        ui::print_error(error);
    }
}
