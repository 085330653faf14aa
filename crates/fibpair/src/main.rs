//! fibpair: exact Fibonacci numbers from the command line.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use fibpair_lib::{app, config, errors};

fn main() {
    // RUST_LOG overrides the default; anything unset falls back to warn.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        fibpair_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
