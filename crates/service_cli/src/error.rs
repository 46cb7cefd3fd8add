//! CLI error types
//!
//! The service layer adds only presentation-level failures on top of the
//! core taxonomy: argument parsing and serialisation.

use sim_core::types::SimulationError;
use thiserror::Error;

/// Result alias used throughout the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the CLI.
#[derive(Error, Debug)]
pub enum CliError {
    /// Malformed command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Validation or configuration failure reported by the core.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// JSON output serialisation failure.
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
