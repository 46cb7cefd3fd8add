//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the RNG is accessible via absolute path.
#[test]
fn test_rng_module_exports() {
    use sim_core::rng::LcgSource;

    let mut rng = LcgSource::from_seed(42);
    assert_eq!(rng.seed(), 42);
    let _ = rng.next_raw();
    let _ = rng.uniform();
}

/// Test that distribution functions are accessible via absolute path.
#[test]
fn test_math_module_exports() {
    use sim_core::math::distributions::{factorial, norm_pdf, poisson_pmf};

    let _ = norm_pdf(0.0_f64);
    let _ = poisson_pmf(2.0, 3);
    let _ = factorial(5);

    // And via the math re-exports
    let _ = sim_core::math::norm_pdf(1.0_f64);
}

/// Test that statistics functions are accessible via absolute path.
#[test]
fn test_stats_module_exports() {
    use sim_core::stats::{assess, critical_value, moments, pearson_statistic, relative_error};

    let pair = moments(&[0.0, 1.0], &[0.5, 0.5]);
    assert!((pair.expectation - 0.5).abs() < 1e-12);

    let _ = relative_error(1.05, 1.0);
    let statistic = pearson_statistic(&[5, 5], &[0.5, 0.5], 10);
    let _ = assess(statistic, 2).unwrap();
    assert!(critical_value(2).is_ok());
    assert_eq!(sim_core::stats::MAX_DEGREES_OF_FREEDOM, 20);
}

/// Test that records and errors are accessible both via `types` and the
/// crate root re-exports.
#[test]
fn test_types_module_exports() {
    use sim_core::types::{ChiSquareAssessment, MomentComparison, MomentPair, RunSummary};
    use sim_core::{ReliabilityWarning, SimulationError};

    let theoretical = MomentPair {
        expectation: 1.0,
        variance: 0.5,
    };
    let empirical = MomentPair {
        expectation: 1.1,
        variance: 0.55,
    };
    let comparison = MomentComparison::new(theoretical, empirical);

    let assessment = ChiSquareAssessment {
        statistic: 0.5,
        degrees_of_freedom: 2,
        critical_value: 5.991,
        rejected: false,
    };
    let summary = RunSummary::new(&comparison, Some(&assessment));
    assert_eq!(summary.rejected, Some(false));

    let err = SimulationError::EmptyDistribution;
    let _ = format!("{}", err);

    let warning = ReliabilityWarning::OutcomeRangeBeyondTable { range: 25, max: 20 };
    let _ = format!("{}", warning);
}
