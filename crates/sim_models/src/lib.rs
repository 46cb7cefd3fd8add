//! # sim_models: Stochlab Simulation Models
//!
//! Monte Carlo simulators validated against their theoretical
//! distributions:
//! - [`discrete`]: user-defined discrete distribution, inverse-CDF
//!   sampling, moment and chi-square comparison
//! - [`poisson`]: Poisson arrival counts via the exponential
//!   waiting-time construction, compared against the closed-form PMF
//! - [`gaussian`]: Gaussian density curve evaluated at random abscissas
//!
//! ## Design Principles
//!
//! - **Validate at construction**: every model checks its full input
//!   before it can be run; a run never starts with partially valid state.
//! - **Explicit randomness**: each run borrows an [`sim_core::rng::LcgSource`]
//!   by `&mut` reference — no hidden generator state, so independent
//!   reproducible runs can coexist.
//! - **Whole-result records**: a run returns one record carrying the
//!   tallies, both series and the statistical comparison; nothing
//!   accumulates across runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod discrete;
pub mod gaussian;
pub mod poisson;
