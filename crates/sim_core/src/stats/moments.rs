//! Expectation, variance and relative error.

use crate::types::MomentPair;

/// Computes the expectation and variance of a labelled distribution.
///
/// `E = Σ label·prob` and `D = Σ prob·(label−E)²`. Passing empirical
/// frequencies in place of probabilities yields the empirical moments by
/// the same formulas.
///
/// The slices must be of equal length; the shorter is the effective
/// extent if they differ.
///
/// # Examples
/// ```
/// use sim_core::stats::moments;
///
/// // Two-point distribution {(0, p), (1, 1−p)}: E = 1−p, D = p(1−p)
/// let pair = moments(&[0.0, 1.0], &[0.3, 0.7]);
/// assert!((pair.expectation - 0.7).abs() < 1e-12);
/// assert!((pair.variance - 0.21).abs() < 1e-12);
/// ```
pub fn moments(labels: &[f64], probabilities: &[f64]) -> MomentPair {
    let expectation: f64 = labels
        .iter()
        .zip(probabilities)
        .map(|(&label, &prob)| label * prob)
        .sum();

    let variance: f64 = labels
        .iter()
        .zip(probabilities)
        .map(|(&label, &prob)| prob * (label - expectation) * (label - expectation))
        .sum();

    MomentPair {
        expectation,
        variance,
    }
}

/// Relative deviation of an empirical value from its theoretical one.
///
/// `|empirical − theoretical| / |theoretical|`. Non-finite when the
/// theoretical value is 0 and the empirical one is not; callers display
/// the result as-is.
#[inline]
pub fn relative_error(empirical: f64, theoretical: f64) -> f64 {
    (empirical - theoretical).abs() / theoretical.abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_point_distribution_moments() {
        // {(0, p), (1, 1−p)} must give E = 1−p, D = p(1−p)
        for p in [0.1, 0.25, 0.5, 0.9] {
            let pair = moments(&[0.0, 1.0], &[p, 1.0 - p]);
            assert_relative_eq!(pair.expectation, 1.0 - p, epsilon = 1e-12);
            assert_relative_eq!(pair.variance, p * (1.0 - p), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_distribution_moments() {
        // All mass on one label: E = label, D = 0
        let pair = moments(&[4.0], &[1.0]);
        assert_relative_eq!(pair.expectation, 4.0, epsilon = 1e-12);
        assert_relative_eq!(pair.variance, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_fair_die_moments() {
        let labels: Vec<f64> = (1..=6).map(f64::from).collect();
        let probs = vec![1.0 / 6.0; 6];

        let pair = moments(&labels, &probs);
        assert_relative_eq!(pair.expectation, 3.5, epsilon = 1e-12);
        // Var = (35/12)
        assert_relative_eq!(pair.variance, 35.0 / 12.0, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_error() {
        assert_relative_eq!(relative_error(1.1, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(relative_error(0.9, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(relative_error(-2.2, -2.0), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_relative_error_zero_theoretical() {
        assert!(relative_error(0.5, 0.0).is_infinite());
        assert!(relative_error(0.0, 0.0).is_nan());
    }
}
