//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod discrete;
pub mod gaussian;
pub mod oracle;
pub mod poisson;

use crate::CliError;

/// Formats a relative error for display, tolerating the non-finite
/// values the core reports when a theoretical moment is zero.
pub fn percentage(relative_error: f64) -> String {
    if relative_error.is_finite() {
        format!("{:.1}%", relative_error * 100.0)
    } else {
        "n/a".to_string()
    }
}

/// Rejects output formats no command understands.
pub fn unknown_format(format: &str) -> CliError {
    CliError::InvalidArgument(format!(
        "Unknown format: {}. Supported: json, table",
        format
    ))
}

/// Renders the moment lines shared by the frequency-based commands.
pub fn print_summary(summary: &sim_core::types::RunSummary) {
    println!(
        "Expectation: {:.3} (error {})",
        summary.expectation,
        percentage(summary.relative_error_expectation)
    );
    println!(
        "Variance:    {:.3} (error {})",
        summary.variance,
        percentage(summary.relative_error_variance)
    );

    match (summary.chi_square, summary.critical_value, summary.rejected) {
        (Some(statistic), Some(critical), Some(true)) => {
            println!("Chi-square:  {:.3} >= {} (rejected)", statistic, critical);
        }
        (Some(statistic), Some(critical), Some(false)) => {
            println!("Chi-square:  {:.3} < {} (not rejected)", statistic, critical);
        }
        (Some(statistic), _, _) => {
            println!("Chi-square:  {:.3} (no verdict)", statistic);
        }
        _ => {}
    }
}
