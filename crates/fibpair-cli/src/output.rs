//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;
use tracing::debug;

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON document per run.
    Json,
}

/// Numbers with more digits than this are elided unless verbose.
const MAX_DISPLAY_DIGITS: usize = 100;

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_result(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > MAX_DISPLAY_DIGITS {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Render a sequence one value per line.
#[must_use]
pub fn format_sequence(values: &[BigUint]) -> String {
    let mut out = String::new();
    for value in values {
        let _ = writeln!(out, "{value}");
    }
    out
}

/// Write a single value to a file.
pub fn write_to_file(path: &Path, value: &BigUint) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    debug!(path = %path.display(), "wrote result");
    Ok(())
}

/// Write a sequence to a file, one value per line.
pub fn write_sequence_to_file(path: &Path, values: &[BigUint]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    for value in values {
        writeln!(file, "{value}")?;
    }
    file.flush()?;
    debug!(path = %path.display(), count = values.len(), "wrote sequence");
    Ok(())
}
