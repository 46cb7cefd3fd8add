//! Gaussian density curve sampling.
//!
//! Evaluates the scaled standard normal density at uniformly drawn
//! abscissas over a symmetric domain. The output is a *deterministic
//! density curve sampled at random x positions* — NOT a set of
//! Gaussian-distributed variates — and is intended as a visualisation
//! aid. No chi-square comparison applies (there is no discrete
//! bucketing).
//!
//! # Example
//!
//! ```
//! use sim_core::rng::LcgSource;
//! use sim_models::gaussian::GaussianModel;
//!
//! let model = GaussianModel::new(0.0, 1.0, 1_000, 5.0).unwrap();
//! let mut rng = LcgSource::from_seed(42);
//! let curve = model.run(&mut rng);
//!
//! assert_eq!(curve.abscissas.len(), 1_000);
//! assert!(curve.abscissas.iter().all(|x| (-5.0..=5.0).contains(x)));
//! assert!(curve.densities.iter().all(|y| *y >= 0.0));
//! ```

use sim_core::math::norm_pdf;
use sim_core::rng::LcgSource;
use sim_core::types::SimulationError;

/// Validated Gaussian density-curve model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaussianModel {
    mean: f64,
    variance: f64,
    samples: usize,
    half_width: f64,
}

impl GaussianModel {
    /// Validates and constructs a Gaussian curve model.
    ///
    /// # Arguments
    ///
    /// * `mean` - Vertical offset μ of the rescaled curve
    /// * `variance` - Vertical scale σ² of the rescaled curve
    /// * `samples` - Number of abscissas to draw, at least 1
    /// * `half_width` - Half-width w of the symmetric domain [−w, w]
    ///
    /// # Errors
    ///
    /// `NonFiniteInput` naming the offending field; `ZeroCount` for a
    /// zero sample count.
    pub fn new(
        mean: f64,
        variance: f64,
        samples: usize,
        half_width: f64,
    ) -> Result<Self, SimulationError> {
        for (field, value) in [
            ("mean", mean),
            ("variance", variance),
            ("half-width", half_width),
        ] {
            if !value.is_finite() {
                return Err(SimulationError::NonFiniteInput {
                    field: field.to_string(),
                    value,
                });
            }
        }
        if samples == 0 {
            return Err(SimulationError::ZeroCount { field: "samples" });
        }

        Ok(Self {
            mean,
            variance,
            samples,
            half_width,
        })
    }

    /// Vertical offset μ.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Vertical scale σ².
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Configured sample count.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Half-width of the symmetric abscissa domain.
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Evaluates the curve at `samples` random abscissas.
    ///
    /// Each sample draws `x = (uniform − 0.5) · 2w` and evaluates
    /// `y = μ + σ² · φ(x)` with the standard normal density φ. The pair
    /// sequences are returned in generation order.
    pub fn run(&self, rng: &mut LcgSource) -> GaussianCurve {
        let mut abscissas = Vec::with_capacity(self.samples);
        let mut densities = Vec::with_capacity(self.samples);

        for _ in 0..self.samples {
            let x = (rng.uniform() - 0.5) * 2.0 * self.half_width;
            let y = self.mean + self.variance * norm_pdf(x);
            abscissas.push(x);
            densities.push(y);
        }

        GaussianCurve {
            abscissas,
            densities,
        }
    }
}

/// Paired (x, y) series of one Gaussian curve evaluation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaussianCurve {
    /// Randomly drawn x positions in [−w, w], generation order.
    pub abscissas: Vec<f64>,
    /// Rescaled density values `μ + σ²·φ(x)`, parallel to `abscissas`.
    pub densities: Vec<f64>,
}
