//! Transient result records.
//!
//! Every record here is created fresh on each run and fully replaced on
//! the next; there is no cross-run accumulation. All records derive
//! serialisation under the `serde` feature for presentation adapters.

/// Expectation and variance of a distribution.
///
/// Computed twice per frequency-based run: once from theoretical
/// probabilities, once from empirical frequencies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentPair {
    /// Expectation E = Σ label·prob.
    pub expectation: f64,
    /// Variance D = Σ prob·(label−E)².
    pub variance: f64,
}

/// Theoretical vs empirical moments with relative errors.
///
/// The relative errors are `|empirical − theoretical| / |theoretical|`;
/// they are non-finite when the theoretical moment is 0, which callers
/// display as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MomentComparison {
    /// Moments of the theoretical distribution.
    pub theoretical: MomentPair,
    /// Moments recovered from empirical frequencies.
    pub empirical: MomentPair,
    /// Relative error of the empirical expectation.
    pub relative_error_expectation: f64,
    /// Relative error of the empirical variance.
    pub relative_error_variance: f64,
}

impl MomentComparison {
    /// Pairs theoretical and empirical moments, deriving relative errors.
    pub fn new(theoretical: MomentPair, empirical: MomentPair) -> Self {
        Self {
            theoretical,
            empirical,
            relative_error_expectation: crate::stats::relative_error(
                empirical.expectation,
                theoretical.expectation,
            ),
            relative_error_variance: crate::stats::relative_error(
                empirical.variance,
                theoretical.variance,
            ),
        }
    }
}

/// Outcome of a chi-square goodness-of-fit comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChiSquareAssessment {
    /// The Pearson statistic `Σ(tally²)/(N·prob) − N`.
    pub statistic: f64,
    /// Degrees-of-freedom key used for the lookup (the raw category
    /// count, per the bundled table's convention).
    pub degrees_of_freedom: usize,
    /// Critical value at the bundled 0.05 significance level.
    pub critical_value: f64,
    /// Whether the theoretical-distribution hypothesis is rejected
    /// (statistic at or above the critical value).
    pub rejected: bool,
}

/// Flat summary record for textual display.
///
/// `expectation` and `variance` are the theoretical moments, with the
/// empirical deviation expressed through the relative errors — the shape
/// the collaborating presentation layer prints directly. The chi-square
/// fields are absent for runs without an assessment (Gaussian curves,
/// Poisson ranges beyond the table).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSummary {
    /// Theoretical expectation.
    pub expectation: f64,
    /// Theoretical variance.
    pub variance: f64,
    /// Relative error of the empirical expectation.
    pub relative_error_expectation: f64,
    /// Relative error of the empirical variance.
    pub relative_error_variance: f64,
    /// Chi-square statistic, when a comparison was performed.
    pub chi_square: Option<f64>,
    /// Critical value the statistic was compared against.
    pub critical_value: Option<f64>,
    /// Rejection verdict, when a comparison was performed.
    pub rejected: Option<bool>,
}

impl RunSummary {
    /// Builds a summary from a moment comparison and an optional
    /// chi-square assessment.
    pub fn new(moments: &MomentComparison, chi_square: Option<&ChiSquareAssessment>) -> Self {
        Self {
            expectation: moments.theoretical.expectation,
            variance: moments.theoretical.variance,
            relative_error_expectation: moments.relative_error_expectation,
            relative_error_variance: moments.relative_error_variance,
            chi_square: chi_square.map(|a| a.statistic),
            critical_value: chi_square.map(|a| a.critical_value),
            rejected: chi_square.map(|a| a.rejected),
        }
    }
}
