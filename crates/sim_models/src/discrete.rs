//! Discrete distribution simulation.
//!
//! Samples events from a user-defined finite distribution by inverse-CDF
//! lookup and derives empirical vs theoretical mean/variance plus a
//! chi-square goodness-of-fit statistic.
//!
//! # Sampling
//!
//! Each trial draws one uniform value `r` and selects the first entry
//! whose cumulative probability reaches `r`. When floating-point rounding
//! leaves the cumulative sum fractionally short of 1, a trial whose draw
//! exceeds it lands in no bucket; the trial is counted towards N but
//! tallied nowhere. This undercount is intentional — there is no
//! catch-all bucket.
//!
//! # Example
//!
//! ```
//! use sim_core::rng::LcgSource;
//! use sim_models::discrete::{DiscreteDistribution, DiscreteSimulator};
//!
//! let distribution =
//!     DiscreteDistribution::new(&[(1.0, 0.5), (2.0, 0.5)]).unwrap();
//! let simulator = DiscreteSimulator::new(distribution, 10_000).unwrap();
//!
//! let mut rng = LcgSource::from_seed(42);
//! let run = simulator.run(&mut rng).unwrap();
//!
//! let observed: u64 = run.tally.iter().sum();
//! assert!(observed <= 10_000);
//! assert!(!run.chi_square.statistic.is_nan());
//! ```

use sim_core::rng::LcgSource;
use sim_core::stats;
use sim_core::types::{ChiSquareAssessment, MomentComparison, MomentPair, RunSummary, SimulationError};
use tracing::debug;

/// Largest number of categories the bundled critical-value lookup
/// supports for the discrete tool.
pub const MAX_CATEGORIES: usize = 10;

/// Validated finite distribution of (label, probability) pairs.
///
/// Construction enforces the full input contract; a value of this type
/// is always simulatable. Entry order is preserved — it defines the
/// cumulative-probability walk used by the sampler.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscreteDistribution {
    labels: Vec<f64>,
    probabilities: Vec<f64>,
}

impl DiscreteDistribution {
    /// Validates and constructs a distribution from (label, probability)
    /// pairs.
    ///
    /// # Errors
    ///
    /// - `EmptyDistribution` for zero entries
    /// - `TooManyCategories` beyond [`MAX_CATEGORIES`] (the chi-square
    ///   key would be unlookupable — a loud configuration failure)
    /// - `NonFiniteInput` naming the offending 1-based row when a label
    ///   or probability is NaN or infinite
    /// - `ProbabilitySumMismatch` when the probabilities, rounded to six
    ///   decimals, do not sum to exactly 1
    ///
    /// A failed validation constructs nothing: no partial state survives.
    pub fn new(entries: &[(f64, f64)]) -> Result<Self, SimulationError> {
        if entries.is_empty() {
            return Err(SimulationError::EmptyDistribution);
        }
        if entries.len() > MAX_CATEGORIES {
            return Err(SimulationError::TooManyCategories {
                count: entries.len(),
                max: MAX_CATEGORIES,
            });
        }

        for (row, &(label, probability)) in entries.iter().enumerate() {
            if !label.is_finite() {
                return Err(SimulationError::NonFiniteInput {
                    field: format!("label {}", row + 1),
                    value: label,
                });
            }
            if !probability.is_finite() {
                return Err(SimulationError::NonFiniteInput {
                    field: format!("probability {}", row + 1),
                    value: probability,
                });
            }
        }

        let sum: f64 = entries.iter().map(|&(_, probability)| probability).sum();
        // Tolerance contract: the sum rounded to 6 decimals must be 1
        if (sum * 1e6).round() as i64 != 1_000_000 {
            return Err(SimulationError::ProbabilitySumMismatch { sum });
        }

        let (labels, probabilities) = entries.iter().copied().unzip();
        Ok(Self {
            labels,
            probabilities,
        })
    }

    /// Number of (label, probability) entries.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Always false — construction rejects empty distributions.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Event labels in entry order.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Event probabilities in entry order.
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    /// Theoretical expectation and variance of the distribution.
    pub fn theoretical_moments(&self) -> MomentPair {
        stats::moments(&self.labels, &self.probabilities)
    }
}

/// Monte Carlo simulator for a validated discrete distribution.
#[derive(Debug, Clone)]
pub struct DiscreteSimulator {
    distribution: DiscreteDistribution,
    trials: u64,
}

impl DiscreteSimulator {
    /// Creates a simulator for `trials` draws from `distribution`.
    ///
    /// # Errors
    ///
    /// `ZeroCount` when `trials` is 0.
    pub fn new(distribution: DiscreteDistribution, trials: u64) -> Result<Self, SimulationError> {
        if trials == 0 {
            return Err(SimulationError::ZeroCount { field: "trials" });
        }
        Ok(Self {
            distribution,
            trials,
        })
    }

    /// The distribution this simulator draws from.
    pub fn distribution(&self) -> &DiscreteDistribution {
        &self.distribution
    }

    /// Configured trial count.
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Runs one complete simulation.
    ///
    /// Tallies are zeroed at the start of every run; nothing carries over
    /// from previous runs. The chi-square degrees-of-freedom key is the
    /// entry count, matching the bundled table's convention.
    pub fn run(&self, rng: &mut LcgSource) -> Result<DiscreteRun, SimulationError> {
        let probabilities = self.distribution.probabilities();
        let mut tally = vec![0u64; self.distribution.len()];

        for _ in 0..self.trials {
            let draw = rng.uniform();
            let mut cumulative = 0.0;
            for (bucket, &probability) in probabilities.iter().enumerate() {
                cumulative += probability;
                if draw <= cumulative {
                    tally[bucket] += 1;
                    break;
                }
                // A draw above the rounding-short cumulative sum lands in
                // no bucket: counted towards N, tallied nowhere.
            }
        }

        let empirical_probabilities: Vec<f64> = tally
            .iter()
            .map(|&count| count as f64 / self.trials as f64)
            .collect();

        let theoretical = self.distribution.theoretical_moments();
        let empirical = stats::moments(self.distribution.labels(), &empirical_probabilities);
        let moments = MomentComparison::new(theoretical, empirical);

        let statistic = stats::pearson_statistic(&tally, probabilities, self.trials);
        let chi_square = stats::assess(statistic, self.distribution.len())?;

        debug!(
            trials = self.trials,
            observed = tally.iter().sum::<u64>(),
            statistic,
            "discrete run complete"
        );

        Ok(DiscreteRun {
            labels: self.distribution.labels().to_vec(),
            tally,
            empirical_probabilities,
            moments,
            chi_square,
        })
    }
}

/// Complete result of one discrete simulation run.
///
/// Carries the chartable series (labels vs tallies or empirical
/// probabilities) and the flat statistical comparison.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DiscreteRun {
    /// Event labels, in distribution entry order.
    pub labels: Vec<f64>,
    /// Observed count per entry; sums to the trial count minus any
    /// no-bucket undercount.
    pub tally: Vec<u64>,
    /// Tally divided by the trial count, per entry.
    pub empirical_probabilities: Vec<f64>,
    /// Theoretical vs empirical moments with relative errors.
    pub moments: MomentComparison,
    /// Chi-square comparison keyed by entry count.
    pub chi_square: ChiSquareAssessment,
}

impl DiscreteRun {
    /// Flat summary record for textual display.
    pub fn summary(&self) -> RunSummary {
        RunSummary::new(&self.moments, Some(&self.chi_square))
    }
}
