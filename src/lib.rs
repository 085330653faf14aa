//! Shared fixtures for the workspace-level integration tests.
//!
//! Golden values live in `tests/testdata/fibonacci_golden.json`. Small
//! indices carry the full decimal value; large ones carry a prefix, a
//! suffix and the digit count.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Parsed golden file.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

/// One known Fibonacci value.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<String>,
    #[serde(default)]
    pub fib_prefix: Option<String>,
    #[serde(default)]
    pub fib_suffix: Option<String>,
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

impl GoldenEntry {
    /// Check a decimal rendering against everything this entry records.
    ///
    /// Returns a description of the first disagreement.
    pub fn check(&self, decimal: &str) -> Result<(), String> {
        if let Some(expected) = &self.fib {
            if decimal != expected {
                return Err(format!("F({}) = {decimal}, expected {expected}", self.n));
            }
        }
        if let Some(prefix) = &self.fib_prefix {
            if !decimal.starts_with(prefix.as_str()) {
                return Err(format!("F({}) does not start with {prefix}", self.n));
            }
        }
        if let Some(suffix) = &self.fib_suffix {
            if !decimal.ends_with(suffix.as_str()) {
                return Err(format!("F({}) does not end with {suffix}", self.n));
            }
        }
        if let Some(digits) = self.fib_digits {
            if decimal.len() != digits {
                return Err(format!(
                    "F({}) has {} digits, expected {digits}",
                    self.n,
                    decimal.len()
                ));
            }
        }
        Ok(())
    }
}

/// Path of the golden file inside this workspace.
#[must_use]
pub fn golden_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/testdata/fibonacci_golden.json")
}

/// Load and parse the golden file.
pub fn load_golden_data(path: &Path) -> Result<GoldenData, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("failed to parse {}: {e}", path.display()))
}
