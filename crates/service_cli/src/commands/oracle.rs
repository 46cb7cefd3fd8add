//! Main-question command
//!
//! Answers yes or no from the parity of one raw generator draw.

use sim_core::rng::LcgSource;

use crate::Result;

/// Run the oracle command
pub fn run(mut rng: LcgSource) -> Result<()> {
    let answer = if rng.next_raw() % 2 == 1 { "Yes" } else { "No" };
    println!("{}", answer);
    Ok(())
}
