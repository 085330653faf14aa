//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

use fibpair_cli::OutputFormat;
use fibpair_core::{FibError, FibIndex};

/// fibpair: exact Fibonacci numbers by fast doubling.
#[derive(Parser, Debug)]
#[command(name = "fibpair", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute (non-negative integer).
    #[arg(
        short,
        long,
        default_value = "100",
        env = "FIBPAIR_N",
        allow_hyphen_values = true
    )]
    pub n: String,

    /// Algorithm to use: fast, iterative, memo, linear, or all.
    #[arg(long, default_value = "fast")]
    pub algo: String,

    /// Print F(0)..F(n-1) instead of F(n).
    #[arg(short, long)]
    pub sequence: bool,

    /// Generate the sequence on all cores.
    #[arg(long, requires = "sequence")]
    pub parallel: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Verbose output (never elide long numbers).
    #[arg(short, long)]
    pub verbose: bool,

    /// Show bit and digit counts.
    #[arg(short, long)]
    pub details: bool,

    /// Also write the result to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The validated index.
    pub fn index(&self) -> Result<FibIndex, FibError> {
        self.n.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("fibpair").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.algo, "fast");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.sequence);
        // FIBPAIR_N may be set in the environment running the tests.
        if std::env::var_os("FIBPAIR_N").is_none() {
            assert_eq!(config.index().unwrap().get(), 100);
        }
    }

    #[test]
    fn negative_index_reaches_validation() {
        let config = parse(&["-n", "-1"]);
        assert!(matches!(config.index(), Err(FibError::InvalidArgument(_))));
    }

    #[test]
    fn fractional_index_rejected() {
        let config = parse(&["--n", "2.5"]);
        assert!(matches!(config.index(), Err(FibError::InvalidArgument(_))));
    }

    #[test]
    fn sequence_flags() {
        let config = parse(&["-n", "12", "-s", "--parallel", "--format", "json"]);
        assert!(config.sequence);
        assert!(config.parallel);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.index().unwrap().get(), 12);
    }

    #[test]
    fn parallel_requires_sequence() {
        let result = AppConfig::try_parse_from(["fibpair", "--parallel"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_is_well_formed() {
        <AppConfig as clap::CommandFactory>::command().debug_assert();
    }
}
