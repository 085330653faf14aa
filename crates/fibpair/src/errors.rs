//! Error handling and exit codes.

use fibpair_core::constants::exit_codes;
use fibpair_core::FibError;

/// Handle a calculation error and return the appropriate exit code.
pub fn handle_error(err: &FibError) -> i32 {
    match err {
        FibError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
        FibError::Config(_) => exit_codes::ERROR_CONFIG,
        FibError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error, looking through `anyhow` context.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<FibError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
