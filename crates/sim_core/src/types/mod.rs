//! Shared data types for simulation results and failures.
//!
//! - [`records`]: transient result records rebuilt whole on every run
//! - [`error`]: the error taxonomy and non-fatal reliability warnings

pub mod error;
pub mod records;

pub use error::{ReliabilityWarning, SimulationError};
pub use records::{ChiSquareAssessment, MomentComparison, MomentPair, RunSummary};
