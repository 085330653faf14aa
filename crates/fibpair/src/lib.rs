//! fibpair library: application logic for the `fibpair` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
