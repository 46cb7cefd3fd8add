//! # Pseudo-Random Source
//!
//! Randomness provider for all stochlab simulators: a seeded
//! linear-congruential generator with a deliberately coarse uniform
//! quantisation inherited from the system it models.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the generator is an explicit value, never a
//!   module-level singleton. Simulators take it by `&mut` reference, so
//!   independent instances can run reproducibly side by side.
//! - **Determinism**: the same seed and the same call order produce the
//!   same sequence, which the statistical tests rely on.
//! - **Single consumer**: one run executes at a time; no locking.
//!
//! ## Quantisation Caveat
//!
//! [`LcgSource::uniform`] has only 10 000 distinct levels. This is a
//! documented limitation of the generator contract, not an accuracy bug:
//! callers must tolerate ties at the 1e-4 resolution boundary.
//!
//! ## Usage Example
//!
//! ```rust
//! use sim_core::rng::LcgSource;
//!
//! // Fixed seed for a reproducible run
//! let mut rng = LcgSource::from_seed(12345);
//! let u = rng.uniform();
//! assert!(u >= 0.0 && u < 1.0);
//!
//! // Batch generation into a pre-allocated buffer
//! let mut buffer = vec![0.0; 100];
//! rng.fill_uniform(&mut buffer);
//! ```

mod lcg;

pub use lcg::LcgSource;
