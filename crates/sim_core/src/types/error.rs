//! Error types for structured error handling.
//!
//! This module provides:
//! - `SimulationError`: validation and configuration failures raised
//!   before any sampling begins
//! - `ReliabilityWarning`: non-fatal advisories carried alongside results
//!
//! Propagation policy: a simulator validates its full input up front and
//! fails fast; no partially accumulated run state ever survives a failed
//! validation. Warnings never halt execution.

use std::fmt;
use thiserror::Error;

/// Categorised simulation errors.
///
/// Every input-validation variant names the offending field so the
/// surrounding collaborator (CLI, UI) can point at it directly.
///
/// # Variants
/// - `NonFiniteInput`: a numeric parameter was NaN or infinite
/// - `NegativeInput`: a non-negative parameter was negative
/// - `ZeroCount`: a trial/sample/range count below 1
/// - `EmptyDistribution`: a discrete distribution with no entries
/// - `TooManyCategories`: discrete entry count beyond the bundled table
/// - `ProbabilitySumMismatch`: probabilities do not sum to 1
/// - `CriticalValueUnavailable`: degrees-of-freedom key outside the table
///
/// # Examples
/// ```
/// use sim_core::types::SimulationError;
///
/// let err = SimulationError::NonFiniteInput {
///     field: "intensity".to_string(),
///     value: f64::NAN,
/// };
/// assert!(format!("{}", err).contains("intensity"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SimulationError {
    /// A numeric parameter was NaN or infinite.
    #[error("invalid {field}: expected a finite number, got {value}")]
    NonFiniteInput {
        /// Name of the offending input field
        field: String,
        /// The rejected value
        value: f64,
    },

    /// A parameter that must be non-negative was negative.
    #[error("invalid {field}: must be non-negative, got {value}")]
    NegativeInput {
        /// Name of the offending input field
        field: String,
        /// The rejected value
        value: f64,
    },

    /// A count parameter (trials, samples, outcome range) below 1.
    #[error("invalid {field}: must be at least 1")]
    ZeroCount {
        /// Name of the offending input field
        field: &'static str,
    },

    /// The discrete distribution has no entries.
    #[error("distribution has no entries")]
    EmptyDistribution,

    /// More discrete categories than the chi-square table can assess.
    #[error("chi-square comparison undefined for {count} categories (supported 1..={max})")]
    TooManyCategories {
        /// Number of entries supplied
        count: usize,
        /// Largest supported entry count
        max: usize,
    },

    /// Probabilities do not sum to 1 within the 6-decimal tolerance.
    #[error("probabilities sum to {sum}, expected 1")]
    ProbabilitySumMismatch {
        /// The offending sum
        sum: f64,
    },

    /// Degrees-of-freedom key outside the bundled critical-value table.
    #[error("no chi-square critical value for {key} degrees of freedom (table covers 1..={max})")]
    CriticalValueUnavailable {
        /// The unlookupable degrees-of-freedom key
        key: usize,
        /// Largest key the table covers
        max: usize,
    },
}

/// Non-fatal reliability advisory.
///
/// Surfaced alongside results rather than raised: execution proceeds,
/// the caller decides how loudly to present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ReliabilityWarning {
    /// Poisson outcome range beyond the extent of the critical-value
    /// table; the chi-square statistic is reported without a verdict.
    OutcomeRangeBeyondTable {
        /// The configured outcome range
        range: usize,
        /// Largest range the table can assess
        max: usize,
    },
}

impl fmt::Display for ReliabilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReliabilityWarning::OutcomeRangeBeyondTable { range, max } => write!(
                f,
                "outcome range {} exceeds the critical-value table (1..={}); \
                 chi-square verdict unavailable",
                range, max
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_input_display() {
        let err = SimulationError::NonFiniteInput {
            field: "probability 3".to_string(),
            value: f64::INFINITY,
        };
        assert_eq!(
            format!("{}", err),
            "invalid probability 3: expected a finite number, got inf"
        );
    }

    #[test]
    fn test_negative_input_display() {
        let err = SimulationError::NegativeInput {
            field: "intensity".to_string(),
            value: -2.0,
        };
        assert_eq!(
            format!("{}", err),
            "invalid intensity: must be non-negative, got -2"
        );
    }

    #[test]
    fn test_zero_count_display() {
        let err = SimulationError::ZeroCount { field: "trials" };
        assert_eq!(format!("{}", err), "invalid trials: must be at least 1");
    }

    #[test]
    fn test_probability_sum_mismatch_display() {
        let err = SimulationError::ProbabilitySumMismatch { sum: 0.9 };
        assert_eq!(format!("{}", err), "probabilities sum to 0.9, expected 1");
    }

    #[test]
    fn test_critical_value_unavailable_display() {
        let err = SimulationError::CriticalValueUnavailable { key: 25, max: 20 };
        assert_eq!(
            format!("{}", err),
            "no chi-square critical value for 25 degrees of freedom (table covers 1..=20)"
        );
    }

    #[test]
    fn test_too_many_categories_display() {
        let err = SimulationError::TooManyCategories { count: 11, max: 10 };
        assert_eq!(
            format!("{}", err),
            "chi-square comparison undefined for 11 categories (supported 1..=10)"
        );
    }

    #[test]
    fn test_warning_display() {
        let warning = ReliabilityWarning::OutcomeRangeBeyondTable { range: 25, max: 20 };
        let text = format!("{}", warning);
        assert!(text.contains("25"));
        assert!(text.contains("1..=20"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = SimulationError::EmptyDistribution;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = SimulationError::ZeroCount { field: "samples" };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
