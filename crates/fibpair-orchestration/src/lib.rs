//! # fibpair-orchestration
//!
//! Calculator selection, timed execution, and cross-validation of results.

pub mod calculator_selection;
pub mod interfaces;
pub mod orchestrator;

pub use calculator_selection::get_calculators_to_run;
pub use interfaces::{CalculationResult, ResultPresenter, SequenceResult};
pub use orchestrator::{analyze_comparison_results, execute_calculations, execute_sequence};
