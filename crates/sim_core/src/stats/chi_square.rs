//! Pearson chi-square statistic and the bundled critical-value table.

use crate::types::{ChiSquareAssessment, SimulationError};

/// Largest degrees-of-freedom key the bundled table covers.
pub const MAX_DEGREES_OF_FREEDOM: usize = 20;

/// Chi-square critical values at the 0.05 significance level, indexed by
/// degrees-of-freedom key 1..=20.
///
/// Entry 10 deliberately carries 18.301 rather than the conventional
/// 18.307; downstream comparisons depend on the bundled values verbatim.
const CRITICAL_VALUES: [f64; MAX_DEGREES_OF_FREEDOM] = [
    3.841, 5.991, 7.815, 9.488, 11.070, 12.592, 14.067, 15.507, 16.919, 18.301, 19.675, 21.026,
    22.362, 23.685, 24.996, 26.296, 27.587, 28.869, 30.144, 31.410,
];

/// Looks up the critical value for a degrees-of-freedom key.
///
/// The key convention is the raw category/range count, not count−1; the
/// table is bundled under that convention and reproduced verbatim.
///
/// # Errors
/// `CriticalValueUnavailable` when the key is outside 1..=20 — a loud
/// configuration failure rather than an undefined comparison.
///
/// # Examples
/// ```
/// use sim_core::stats::critical_value;
///
/// assert_eq!(critical_value(5).unwrap(), 11.070);
/// assert_eq!(critical_value(20).unwrap(), 31.410);
/// assert!(critical_value(21).is_err());
/// ```
pub fn critical_value(key: usize) -> Result<f64, SimulationError> {
    if key == 0 || key > MAX_DEGREES_OF_FREEDOM {
        return Err(SimulationError::CriticalValueUnavailable {
            key,
            max: MAX_DEGREES_OF_FREEDOM,
        });
    }
    Ok(CRITICAL_VALUES[key - 1])
}

/// Computes the Pearson chi-square statistic.
///
/// `χ² = Σ(tally_i²)/(N·prob_i) − N` over the category tallies and their
/// theoretical probabilities.
///
/// # Arguments
/// * `tally` - Observed count per category
/// * `probabilities` - Theoretical probability per category
/// * `trials` - Total trial count N
pub fn pearson_statistic(tally: &[u64], probabilities: &[f64], trials: u64) -> f64 {
    let n = trials as f64;
    let accumulated: f64 = tally
        .iter()
        .zip(probabilities)
        .map(|(&observed, &prob)| {
            let observed = observed as f64;
            observed * observed / (n * prob)
        })
        .sum();

    accumulated - n
}

/// Classifies a chi-square statistic against the bundled table.
///
/// The hypothesis is rejected when the statistic reaches or exceeds the
/// critical value; strictly below, it is not rejected.
///
/// # Errors
/// Propagates `CriticalValueUnavailable` for keys outside the table.
pub fn assess(statistic: f64, key: usize) -> Result<ChiSquareAssessment, SimulationError> {
    let critical = critical_value(key)?;
    Ok(ChiSquareAssessment {
        statistic,
        degrees_of_freedom: key,
        critical_value: critical,
        rejected: statistic >= critical,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ==========================================================
    // Critical-value table tests
    // ==========================================================

    #[test]
    fn test_table_reference_entries() {
        assert_eq!(critical_value(1).unwrap(), 3.841);
        assert_eq!(critical_value(2).unwrap(), 5.991);
        assert_eq!(critical_value(5).unwrap(), 11.070);
        assert_eq!(critical_value(20).unwrap(), 31.410);
    }

    #[test]
    fn test_table_bundled_tenth_entry() {
        // The bundled table says 18.301 at key 10; kept verbatim
        assert_eq!(critical_value(10).unwrap(), 18.301);
    }

    #[test]
    fn test_table_monotonically_increasing() {
        for key in 1..MAX_DEGREES_OF_FREEDOM {
            assert!(
                critical_value(key + 1).unwrap() > critical_value(key).unwrap(),
                "table not increasing at key {}",
                key
            );
        }
    }

    #[test]
    fn test_lookup_out_of_range() {
        assert_eq!(
            critical_value(0),
            Err(SimulationError::CriticalValueUnavailable { key: 0, max: 20 })
        );
        assert_eq!(
            critical_value(21),
            Err(SimulationError::CriticalValueUnavailable { key: 21, max: 20 })
        );
    }

    // ==========================================================
    // Pearson statistic tests
    // ==========================================================

    #[test]
    fn test_statistic_perfect_fit() {
        // Observed counts exactly proportional to probabilities:
        // Σ (N·p)² / (N·p) − N = Σ N·p − N = 0
        let statistic = pearson_statistic(&[500, 500], &[0.5, 0.5], 1000);
        assert_relative_eq!(statistic, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_statistic_known_value() {
        // tally = [600, 400], p = [0.5, 0.5], N = 1000:
        // 600²/500 + 400²/500 − 1000 = 720 + 320 − 1000 = 40
        let statistic = pearson_statistic(&[600, 400], &[0.5, 0.5], 1000);
        assert_relative_eq!(statistic, 40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_statistic_with_undercount() {
        // Trials that landed in no bucket still count towards N,
        // pushing the statistic down rather than breaking it
        let statistic = pearson_statistic(&[499, 499], &[0.5, 0.5], 1000);
        assert!(statistic.is_finite());
        assert!(statistic < 0.1);
    }

    // ==========================================================
    // Assessment tests
    // ==========================================================

    #[test]
    fn test_assess_not_rejected() {
        let assessment = assess(1.5, 2).unwrap();
        assert_eq!(assessment.degrees_of_freedom, 2);
        assert_eq!(assessment.critical_value, 5.991);
        assert!(!assessment.rejected);
    }

    #[test]
    fn test_assess_rejected() {
        let assessment = assess(6.0, 2).unwrap();
        assert!(assessment.rejected);
    }

    #[test]
    fn test_assess_boundary() {
        // At the critical value the hypothesis is rejected
        let assessment = assess(5.991, 2).unwrap();
        assert!(assessment.rejected);
    }

    #[test]
    fn test_assess_unavailable_key() {
        assert!(assess(1.0, 25).is_err());
    }
}
