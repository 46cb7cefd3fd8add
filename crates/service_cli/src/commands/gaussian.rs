//! Gaussian curve command
//!
//! Evaluates the density curve and renders the paired series. No
//! chi-square comparison applies to this model.

use serde::Serialize;
use sim_core::rng::LcgSource;
use sim_models::gaussian::{GaussianCurve, GaussianModel};
use tracing::info;

use crate::Result;

use super::unknown_format;

/// JSON payload for one curve evaluation.
#[derive(Serialize)]
struct Payload<'a> {
    seed: u32,
    mean: f64,
    variance: f64,
    half_width: f64,
    curve: &'a GaussianCurve,
}

/// Run the gaussian command
pub fn run(
    mean: f64,
    variance: f64,
    samples: usize,
    half_width: f64,
    mut rng: LcgSource,
    format: &str,
) -> Result<()> {
    let model = GaussianModel::new(mean, variance, samples, half_width)?;

    info!(seed = rng.seed(), samples, "evaluating gaussian curve");
    let curve = model.run(&mut rng);

    match format {
        "json" => {
            let payload = Payload {
                seed: rng.seed(),
                mean,
                variance,
                half_width,
                curve: &curve,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("\n┌──────────────┬──────────────┐");
            println!("│ x            │ y            │");
            println!("├──────────────┼──────────────┤");
            for (&x, &y) in curve.abscissas.iter().zip(&curve.densities) {
                println!("│ {:>12.4} │ {:>12.4} │", x, y);
            }
            println!("└──────────────┴──────────────┘");
            println!("({} samples over [-{}, {}])", samples, half_width, half_width);
        }
        other => return Err(unknown_format(other)),
    }

    Ok(())
}
