//! Discrete simulation command
//!
//! Parses LABEL:PROB entries, runs the discrete simulator and renders
//! the tally table plus the statistical summary.

use serde::Serialize;
use sim_core::rng::LcgSource;
use sim_core::types::RunSummary;
use sim_models::discrete::{DiscreteDistribution, DiscreteRun, DiscreteSimulator};
use tracing::info;

use crate::{CliError, Result};

use super::{print_summary, unknown_format};

/// JSON payload for one discrete run.
#[derive(Serialize)]
struct Payload<'a> {
    seed: u32,
    trials: u64,
    summary: RunSummary,
    run: &'a DiscreteRun,
}

/// Run the discrete command
pub fn run(entries: &[String], trials: u64, mut rng: LcgSource, format: &str) -> Result<()> {
    let parsed = parse_entries(entries)?;
    let distribution = DiscreteDistribution::new(&parsed)?;
    let simulator = DiscreteSimulator::new(distribution, trials)?;

    info!(seed = rng.seed(), trials, "starting discrete simulation");
    let run = simulator.run(&mut rng)?;
    let summary = run.summary();

    match format {
        "json" => {
            let payload = Payload {
                seed: rng.seed(),
                trials,
                summary,
                run: &run,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("\n┌────────────┬────────────┬────────────┐");
            println!("│ Event      │ Count      │ Frequency  │");
            println!("├────────────┼────────────┼────────────┤");
            for ((label, tally), frequency) in run
                .labels
                .iter()
                .zip(&run.tally)
                .zip(&run.empirical_probabilities)
            {
                println!(
                    "│ {:>10} │ {:>10} │ {:>9.1}% │",
                    label,
                    tally,
                    frequency * 100.0
                );
            }
            println!("└────────────┴────────────┴────────────┘\n");

            print_summary(&summary);
        }
        other => return Err(unknown_format(other)),
    }

    Ok(())
}

/// Parses `LABEL:PROB` pairs into (label, probability) primitives.
///
/// Only the syntax is handled here; numeric validation (finiteness,
/// sum-to-one) belongs to the core.
fn parse_entries(entries: &[String]) -> Result<Vec<(f64, f64)>> {
    entries
        .iter()
        .map(|entry| {
            let (label, probability) = entry.split_once(':').ok_or_else(|| {
                CliError::InvalidArgument(format!(
                    "Entry '{}' is not of the form LABEL:PROB",
                    entry
                ))
            })?;
            let label: f64 = label.trim().parse().map_err(|_| {
                CliError::InvalidArgument(format!("Entry label '{}' is not a number", label))
            })?;
            let probability: f64 = probability.trim().parse().map_err(|_| {
                CliError::InvalidArgument(format!(
                    "Entry probability '{}' is not a number",
                    probability
                ))
            })?;
            Ok((label, probability))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entries_valid() {
        let entries = vec!["1:0.5".to_string(), "2.5 : 0.5".to_string()];
        let parsed = parse_entries(&entries).unwrap();
        assert_eq!(parsed, vec![(1.0, 0.5), (2.5, 0.5)]);
    }

    #[test]
    fn test_parse_entries_missing_separator() {
        let entries = vec!["1=0.5".to_string()];
        assert!(matches!(
            parse_entries(&entries),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_parse_entries_non_numeric() {
        let entries = vec!["a:0.5".to_string()];
        assert!(parse_entries(&entries).is_err());

        let entries = vec!["1:half".to_string()];
        assert!(parse_entries(&entries).is_err());
    }
}
