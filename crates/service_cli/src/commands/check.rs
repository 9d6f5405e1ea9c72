//! Check command implementation.
//!
//! Engine self-check: generates a few fixed seeds, confirms determinism and
//! solution correctness, and reports the result. Useful as a smoke test
//! after deployment or a toolchain change.

use tracing::info;

use crate::{CliError, Result};

const CHECK_SEEDS: [&str; 3] = ["alice", "bob", "self-check"];

/// Run the check command
pub fn run() -> Result<()> {
    info!("Running engine self-check...");

    for seed in CHECK_SEEDS {
        let first = puzzle_engine::generate_puzzle(seed)?;
        let second = puzzle_engine::generate_puzzle(seed)?;

        if first != second {
            return Err(CliError::SelfCheck(format!(
                "determinism check failed for seed {seed:?}"
            )));
        }

        let (item1, item2) = first.solution_items().ok_or_else(|| {
            CliError::SelfCheck(format!("solution items missing for seed {seed:?}"))
        })?;
        let cart = [item1.clone(), item2.clone()];
        if !puzzle_engine::verify_solution(&cart, first.target) {
            return Err(CliError::SelfCheck(format!(
                "solution check failed for seed {seed:?}"
            )));
        }

        info!(
            "  seed {:?}: target {}, {} items, solution ok",
            seed,
            first.target,
            first.products.len()
        );
    }

    println!("Self-check passed ({} seeds)", CHECK_SEEDS.len());
    Ok(())
}
