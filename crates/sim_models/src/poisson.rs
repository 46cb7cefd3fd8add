//! Poisson arrival-process simulation.
//!
//! Simulates arrival counts in a unit interval via the exponential
//! waiting-time construction and compares the empirical frequencies
//! against the closed-form Poisson probability mass function.
//!
//! # Waiting-time construction
//!
//! A Poisson(λ) count is generated by accumulating `ln(U_i)` over uniform
//! draws until the running sum drops below −λ; the number of increments
//! before the crossing is the arrival count. Counts outside the
//! configured outcome range are discarded from the tally (not retried,
//! not redistributed) — an intentional undercount policy.
//!
//! # Example
//!
//! ```
//! use sim_core::rng::LcgSource;
//! use sim_models::poisson::PoissonModel;
//!
//! let model = PoissonModel::new(2.0, 10_000, 10).unwrap();
//! let mut rng = LcgSource::from_seed(42);
//! let run = model.run(&mut rng);
//!
//! assert_eq!(run.empirical_frequencies.len(), 10);
//! assert_eq!(run.theoretical_pmf.len(), 10);
//! assert!(run.assessment.is_some());
//! ```

use sim_core::math::poisson_pmf;
use sim_core::rng::LcgSource;
use sim_core::stats;
use sim_core::types::{
    ChiSquareAssessment, MomentComparison, ReliabilityWarning, RunSummary, SimulationError,
};
use tracing::debug;

/// Validated Poisson simulation model.
///
/// Holds the intensity λ, the trial count and the finite outcome range
/// `0..range−1` the comparison is restricted to. An outcome range beyond
/// the bundled critical-value table is legal but flagged with a
/// [`ReliabilityWarning`] at construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoissonModel {
    intensity: f64,
    trials: u64,
    outcome_range: usize,
    warnings: Vec<ReliabilityWarning>,
}

impl PoissonModel {
    /// Validates and constructs a Poisson model.
    ///
    /// # Arguments
    ///
    /// * `intensity` - Arrival rate λ, finite and non-negative
    /// * `trials` - Number of simulated unit intervals, at least 1
    /// * `outcome_range` - Number of discrete outcomes `0..range−1`
    ///
    /// # Errors
    ///
    /// - `NonFiniteInput` / `NegativeInput` naming `intensity`
    /// - `ZeroCount` for a zero trial count or outcome range
    ///
    /// A range beyond the critical-value table does not error: the model
    /// is built with an advisory warning and its runs carry the
    /// chi-square statistic without a verdict.
    pub fn new(
        intensity: f64,
        trials: u64,
        outcome_range: usize,
    ) -> Result<Self, SimulationError> {
        if !intensity.is_finite() {
            return Err(SimulationError::NonFiniteInput {
                field: "intensity".to_string(),
                value: intensity,
            });
        }
        if intensity < 0.0 {
            return Err(SimulationError::NegativeInput {
                field: "intensity".to_string(),
                value: intensity,
            });
        }
        if trials == 0 {
            return Err(SimulationError::ZeroCount { field: "trials" });
        }
        if outcome_range == 0 {
            return Err(SimulationError::ZeroCount {
                field: "outcome range",
            });
        }

        let mut warnings = Vec::new();
        if outcome_range > stats::MAX_DEGREES_OF_FREEDOM {
            warnings.push(ReliabilityWarning::OutcomeRangeBeyondTable {
                range: outcome_range,
                max: stats::MAX_DEGREES_OF_FREEDOM,
            });
        }

        Ok(Self {
            intensity,
            trials,
            outcome_range,
            warnings,
        })
    }

    /// Arrival rate λ.
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    /// Configured trial count.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Number of discrete outcomes compared.
    pub fn outcome_range(&self) -> usize {
        self.outcome_range
    }

    /// Advisory warnings raised at construction.
    pub fn warnings(&self) -> &[ReliabilityWarning] {
        &self.warnings
    }

    /// Theoretical PMF over the configured outcome range.
    pub fn theoretical_pmf(&self) -> Vec<f64> {
        (0..self.outcome_range)
            .map(|m| poisson_pmf(self.intensity, m as u32))
            .collect()
    }

    /// Simulates one arrival count via the waiting-time construction.
    fn sample_count(&self, rng: &mut LcgSource) -> u64 {
        let mut accumulated = 0.0;
        let mut count = 0u64;
        loop {
            // ln(0) is −∞ and crosses immediately, which is the correct
            // limit for the coarse uniform hitting exactly 0
            accumulated += rng.uniform().ln();
            if accumulated < -self.intensity {
                return count;
            }
            count += 1;
        }
    }

    /// Runs one complete simulation.
    ///
    /// The tally is zeroed at the start of the run. Arrival counts at or
    /// above the outcome range are discarded; the empirical frequencies
    /// still divide by the full trial count.
    pub fn run(&self, rng: &mut LcgSource) -> PoissonRun {
        let mut tally = vec![0u64; self.outcome_range];
        let mut discarded = 0u64;

        for _ in 0..self.trials {
            let count = self.sample_count(rng);
            match tally.get_mut(count as usize) {
                Some(bucket) => *bucket += 1,
                None => discarded += 1,
            }
        }

        let empirical_frequencies: Vec<f64> = tally
            .iter()
            .map(|&count| count as f64 / self.trials as f64)
            .collect();
        let theoretical_pmf = self.theoretical_pmf();
        let outcomes: Vec<f64> = (0..self.outcome_range).map(|m| m as f64).collect();

        let theoretical = stats::moments(&outcomes, &theoretical_pmf);
        let empirical = stats::moments(&outcomes, &empirical_frequencies);
        let moments = MomentComparison::new(theoretical, empirical);

        let chi_square = stats::pearson_statistic(&tally, &theoretical_pmf, self.trials);
        // Beyond the table the statistic stands alone; the construction
        // warning already explains the missing verdict
        let assessment = stats::assess(chi_square, self.outcome_range).ok();

        debug!(
            trials = self.trials,
            discarded, chi_square, "poisson run complete"
        );

        PoissonRun {
            outcomes,
            tally,
            discarded,
            empirical_frequencies,
            theoretical_pmf,
            moments,
            chi_square,
            assessment,
            warnings: self.warnings.clone(),
        }
    }
}

/// Complete result of one Poisson simulation run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoissonRun {
    /// Outcome values 0..range−1 as chartable abscissas.
    pub outcomes: Vec<f64>,
    /// Observed count per outcome.
    pub tally: Vec<u64>,
    /// Trials whose arrival count fell outside the outcome range.
    pub discarded: u64,
    /// Tally divided by the full trial count.
    pub empirical_frequencies: Vec<f64>,
    /// Closed-form PMF values over the outcome range.
    pub theoretical_pmf: Vec<f64>,
    /// Theoretical vs empirical moments with relative errors.
    pub moments: MomentComparison,
    /// The Pearson statistic, reported even without a verdict.
    pub chi_square: f64,
    /// Classification against the table; absent when the outcome range
    /// exceeds the table (see the accompanying warning).
    pub assessment: Option<ChiSquareAssessment>,
    /// Advisory warnings carried over from the model.
    pub warnings: Vec<ReliabilityWarning>,
}

impl PoissonRun {
    /// Flat summary record for textual display.
    ///
    /// Always carries the chi-square statistic; the critical value and
    /// verdict are present only when the table covers the outcome range.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::new(&self.moments, self.assessment.as_ref());
        summary.chi_square = Some(self.chi_square);
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Validation tests
    // ========================================

    #[test]
    fn test_new_valid_model() {
        let model = PoissonModel::new(2.0, 1_000, 10).unwrap();
        assert_eq!(model.intensity(), 2.0);
        assert_eq!(model.trials(), 1_000);
        assert_eq!(model.outcome_range(), 10);
        assert!(model.warnings().is_empty());
    }

    #[test]
    fn test_new_rejects_nan_intensity() {
        let err = PoissonModel::new(f64::NAN, 1_000, 10).unwrap_err();
        match err {
            SimulationError::NonFiniteInput { field, .. } => assert_eq!(field, "intensity"),
            other => panic!("expected NonFiniteInput, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_negative_intensity() {
        let err = PoissonModel::new(-1.0, 1_000, 10).unwrap_err();
        assert!(matches!(err, SimulationError::NegativeInput { .. }));
    }

    #[test]
    fn test_new_rejects_zero_counts() {
        assert!(matches!(
            PoissonModel::new(2.0, 0, 10),
            Err(SimulationError::ZeroCount { field: "trials" })
        ));
        assert!(matches!(
            PoissonModel::new(2.0, 1_000, 0),
            Err(SimulationError::ZeroCount { .. })
        ));
    }

    #[test]
    fn test_new_warns_beyond_table() {
        let model = PoissonModel::new(2.0, 1_000, 25).unwrap();
        assert_eq!(
            model.warnings(),
            &[ReliabilityWarning::OutcomeRangeBeyondTable { range: 25, max: 20 }]
        );
    }

    // ========================================
    // Theoretical PMF tests
    // ========================================

    #[test]
    fn test_theoretical_pmf_lambda_two() {
        let model = PoissonModel::new(2.0, 100, 5).unwrap();
        let pmf = model.theoretical_pmf();

        let e2 = (-2.0_f64).exp();
        let expected = [e2, 2.0 * e2, 2.0 * e2, 4.0 / 3.0 * e2, 2.0 / 3.0 * e2];
        for (m, &want) in expected.iter().enumerate() {
            assert!(
                (pmf[m] - want).abs() < 1e-9,
                "P({}) = {}, expected {}",
                m,
                pmf[m],
                want
            );
        }
    }

    // ========================================
    // Simulation tests
    // ========================================

    #[test]
    fn test_run_zero_intensity_concentrates_at_zero() {
        let model = PoissonModel::new(0.0, 1_000, 5).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        // Every unit interval sees zero arrivals
        assert_eq!(run.tally[0], 1_000);
        assert_eq!(run.discarded, 0);
        assert_relative_eq!(run.empirical_frequencies[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_run_tally_accounts_for_every_trial() {
        let model = PoissonModel::new(3.0, 5_000, 8).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        let observed: u64 = run.tally.iter().sum();
        assert_eq!(observed + run.discarded, 5_000);
    }

    #[test]
    fn test_run_reproducible_for_fixed_seed() {
        let model = PoissonModel::new(2.0, 2_000, 10).unwrap();

        let run_a = model.run(&mut LcgSource::from_seed(99));
        let run_b = model.run(&mut LcgSource::from_seed(99));

        assert_eq!(run_a.tally, run_b.tally);
        assert_eq!(run_a.chi_square, run_b.chi_square);
    }

    #[test]
    fn test_run_empirical_mean_near_intensity() {
        // E of Poisson(2) is 2; the range-truncated comparison keeps the
        // bulk of the mass, so the empirical mean lands nearby
        let model = PoissonModel::new(2.0, 20_000, 15).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        assert!(
            (run.moments.empirical.expectation - 2.0).abs() < 0.1,
            "empirical mean {} too far from 2",
            run.moments.empirical.expectation
        );
    }

    #[test]
    fn test_run_assessment_keyed_by_range() {
        let model = PoissonModel::new(2.0, 1_000, 10).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        let assessment = run.assessment.expect("range 10 is lookupable");
        assert_eq!(assessment.degrees_of_freedom, 10);
        assert_eq!(assessment.critical_value, 18.301);
        assert_eq!(assessment.statistic, run.chi_square);
    }

    #[test]
    fn test_run_beyond_table_reports_statistic_without_verdict() {
        let model = PoissonModel::new(2.0, 1_000, 25).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        assert!(run.assessment.is_none());
        assert!(run.chi_square.is_finite());
        assert_eq!(
            run.warnings,
            vec![ReliabilityWarning::OutcomeRangeBeyondTable { range: 25, max: 20 }]
        );

        let summary = run.summary();
        assert_eq!(summary.chi_square, Some(run.chi_square));
        assert_eq!(summary.critical_value, None);
        assert_eq!(summary.rejected, None);
    }

    #[test]
    fn test_summary_includes_verdict_within_table() {
        let model = PoissonModel::new(2.0, 1_000, 10).unwrap();
        let mut rng = LcgSource::from_seed(42);
        let run = model.run(&mut rng);

        let summary = run.summary();
        assert_eq!(summary.chi_square, Some(run.chi_square));
        assert!(summary.critical_value.is_some());
        assert!(summary.rejected.is_some());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(48))]

            /// Property test: observed plus discarded trials always equal
            /// the configured trial count.
            #[test]
            fn prop_trials_conserved(
                seed in any::<u32>(),
                intensity in 0.0f64..8.0,
                range in 1usize..20,
            ) {
                let model = PoissonModel::new(intensity, 500, range).unwrap();
                let run = model.run(&mut LcgSource::from_seed(seed));

                let observed: u64 = run.tally.iter().sum();
                prop_assert_eq!(observed + run.discarded, 500);
            }
        }
    }
}
