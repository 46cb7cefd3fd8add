//! Stochlab CLI - Command Line Operations for the Simulation Engine
//!
//! This is the presentation adapter for the stochlab simulation library.
//!
//! # Commands
//!
//! - `stochlab discrete` - Simulate a user-defined discrete distribution
//! - `stochlab poisson` - Simulate Poisson arrival counts
//! - `stochlab gaussian` - Evaluate a Gaussian density curve
//! - `stochlab oracle` - Ask the main question
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate holds no numeric
//! logic: it parses arguments into primitives, hands them to the model
//! layer for validation and simulation, and renders the structured
//! results it gets back.

use clap::{Parser, Subcommand};
use sim_core::rng::LcgSource;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Stochlab Simulation Engine CLI
#[derive(Parser)]
#[command(name = "stochlab")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    /// Fixed seed for a reproducible run (drawn from entropy if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a user-defined discrete distribution
    Discrete {
        /// Distribution entry as LABEL:PROB (repeat per entry)
        #[arg(short, long = "entry", value_name = "LABEL:PROB", required = true)]
        entries: Vec<String>,

        /// Number of trials
        #[arg(short, long, default_value = "100")]
        trials: u64,
    },

    /// Simulate Poisson arrival counts against the closed-form PMF
    Poisson {
        /// Arrival intensity λ
        #[arg(short, long)]
        intensity: f64,

        /// Number of simulated unit intervals
        #[arg(short, long, default_value = "1000")]
        trials: u64,

        /// Number of discrete outcomes 0..RANGE-1
        #[arg(short, long, default_value = "10")]
        range: usize,
    },

    /// Evaluate a Gaussian density curve at random abscissas
    Gaussian {
        /// Vertical offset μ of the rescaled curve
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        mean: f64,

        /// Vertical scale σ² of the rescaled curve
        #[arg(short = 'd', long, default_value = "1")]
        variance: f64,

        /// Number of abscissas to draw
        #[arg(short = 'n', long, default_value = "1000")]
        samples: usize,

        /// Half-width of the symmetric domain [-w, w]
        #[arg(short = 'w', long, default_value = "5")]
        half_width: f64,
    },

    /// Ask the main question
    Oracle,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let rng = match cli.seed {
        Some(seed) => LcgSource::from_seed(seed),
        None => LcgSource::from_entropy(),
    };

    match cli.command {
        Commands::Discrete { entries, trials } => {
            commands::discrete::run(&entries, trials, rng, &cli.format)
        }
        Commands::Poisson {
            intensity,
            trials,
            range,
        } => commands::poisson::run(intensity, trials, range, rng, &cli.format),
        Commands::Gaussian {
            mean,
            variance,
            samples,
            half_width,
        } => commands::gaussian::run(mean, variance, samples, half_width, rng, &cli.format),
        Commands::Oracle => commands::oracle::run(rng),
    }
}
