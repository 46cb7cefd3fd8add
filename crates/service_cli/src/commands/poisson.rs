//! Poisson simulation command
//!
//! Runs the arrival-count simulator and renders empirical frequencies
//! against the closed-form PMF.

use serde::Serialize;
use sim_core::rng::LcgSource;
use sim_core::types::RunSummary;
use sim_models::poisson::{PoissonModel, PoissonRun};
use tracing::info;

use crate::Result;

use super::{print_summary, unknown_format};

/// JSON payload for one Poisson run.
#[derive(Serialize)]
struct Payload<'a> {
    seed: u32,
    intensity: f64,
    trials: u64,
    summary: RunSummary,
    run: &'a PoissonRun,
}

/// Run the poisson command
pub fn run(
    intensity: f64,
    trials: u64,
    range: usize,
    mut rng: LcgSource,
    format: &str,
) -> Result<()> {
    let model = PoissonModel::new(intensity, trials, range)?;

    info!(seed = rng.seed(), intensity, trials, range, "starting poisson simulation");
    let run = model.run(&mut rng);
    let summary = run.summary();

    for warning in &run.warnings {
        eprintln!("warning: {}", warning);
    }

    match format {
        "json" => {
            let payload = Payload {
                seed: rng.seed(),
                intensity,
                trials,
                summary,
                run: &run,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("\n┌────────────┬────────────┬────────────┬────────────┐");
            println!("│ Arrivals   │ Count      │ Empirical  │ PMF        │");
            println!("├────────────┼────────────┼────────────┼────────────┤");
            for ((outcome, tally), (empirical, theoretical)) in
                run.outcomes.iter().zip(&run.tally).zip(
                    run.empirical_frequencies
                        .iter()
                        .zip(&run.theoretical_pmf),
                )
            {
                println!(
                    "│ {:>10} │ {:>10} │ {:>10.4} │ {:>10.4} │",
                    outcome, tally, empirical, theoretical
                );
            }
            println!("└────────────┴────────────┴────────────┴────────────┘");
            if run.discarded > 0 {
                println!("(discarded {} trials outside the outcome range)", run.discarded);
            }
            println!();

            print_summary(&summary);
        }
        other => return Err(unknown_format(other)),
    }

    Ok(())
}
