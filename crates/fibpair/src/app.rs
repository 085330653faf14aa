//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibpair_cli::output::{write_sequence_to_file, write_to_file};
use fibpair_cli::presenter::CLIResultPresenter;
use fibpair_cli::progress::{sequence_bar, ProgressGenerator};
use fibpair_core::constants::SEQUENCE_PROGRESS_THRESHOLD;
use fibpair_core::sequence::{IncrementalGenerator, ParallelGenerator};
use fibpair_core::{CalculatorFactory, DefaultFactory, FibIndex, SequenceGenerator};
use fibpair_orchestration::calculator_selection::get_calculators_to_run;
use fibpair_orchestration::interfaces::ResultPresenter;
use fibpair_orchestration::orchestrator::{
    analyze_comparison_results, execute_calculations, execute_sequence,
};

use crate::config::AppConfig;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibpair_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    debug!(version = %full_version(), ?config, "starting");

    // Validate before any calculator is built.
    let n = config.index()?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.format);

    if config.sequence {
        run_sequence(config, n, &presenter)
    } else {
        run_single(config, n, &presenter)
    }
}

fn run_single(config: &AppConfig, n: FibIndex, presenter: &CLIResultPresenter) -> Result<()> {
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    info!(%n, count = calculators.len(), "computing F(n)");

    let results = execute_calculations(&calculators, n);
    let Some(first) = results.first() else {
        anyhow::bail!("no calculator produced a result");
    };

    if results.len() > 1 {
        presenter.present_comparison(&results, n, config.details);
        analyze_comparison_results(&results)?;
    } else {
        presenter.present_result(first, n, config.details);
    }

    if let Some(path) = &config.output {
        write_to_file(path, &first.value)
            .with_context(|| format!("writing result to {}", path.display()))?;
    }

    Ok(())
}

fn run_sequence(config: &AppConfig, n: FibIndex, presenter: &CLIResultPresenter) -> Result<()> {
    let factory = DefaultFactory::new();
    // An unknown name is a configuration error even when no calculator is used.
    get_calculators_to_run(&config.algo, &factory)?;

    let inner: Arc<dyn SequenceGenerator> = if config.parallel {
        Arc::new(ParallelGenerator::new(factory.get(&config.algo)?))
    } else {
        Arc::new(IncrementalGenerator::new())
    };

    let show_bar = !config.quiet && n.get() >= SEQUENCE_PROGRESS_THRESHOLD;
    let generator = ProgressGenerator::new(inner, sequence_bar(n.get(), show_bar));
    info!(%n, generator = generator.name(), "generating sequence");

    let result = execute_sequence(&generator, n)?;
    presenter.present_sequence(&result, n);

    if let Some(path) = &config.output {
        write_sequence_to_file(path, &result.values)
            .with_context(|| format!("writing sequence to {}", path.display()))?;
    }

    Ok(())
}
