//! Statistical comparison of empirical and theoretical distributions.
//!
//! The shared logic behind the frequency-based simulators:
//! - [`moments`]: expectation and variance of a labelled distribution
//! - [`relative_error`]: empirical-vs-theoretical deviation
//! - [`pearson_statistic`]: the chi-square goodness-of-fit statistic
//! - [`critical_value`] / [`assess`]: lookup and classification against
//!   the bundled critical-value table

mod chi_square;
mod moments;

pub use chi_square::{assess, critical_value, pearson_statistic, MAX_DEGREES_OF_FREEDOM};
pub use moments::{moments, relative_error};
