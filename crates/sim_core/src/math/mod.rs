//! Closed-form distribution functions.
//!
//! Exact evaluations used to build the theoretical side of each
//! simulation comparison:
//! - [`distributions::norm_pdf`]: standard normal density
//! - [`distributions::poisson_pmf`]: Poisson probability mass function
//! - [`distributions::factorial`]: exact integer factorial

pub mod distributions;

pub use distributions::{factorial, norm_pdf, poisson_pmf};
