//! Verify command implementation.
//!
//! Reconstructs the puzzle from the seed (only the seed is ever persisted),
//! resolves the selected item ids against the regenerated catalog, and
//! checks the selection against the target.

use tracing::info;

use crate::{CliError, Result};

/// Run the verify command
pub fn run(seed: &str, items: &str) -> Result<()> {
    info!("Verifying selection...");
    info!("  Seed: {}", seed);

    let ids: Vec<&str> = items
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();
    if ids.is_empty() {
        return Err(CliError::InvalidArgument(
            "no item ids given; expected --items id1,id2,...".to_string(),
        ));
    }

    let puzzle = puzzle_engine::generate_puzzle(seed)?;

    let mut selection = Vec::with_capacity(ids.len());
    for id in ids {
        let item = puzzle
            .item(id)
            .ok_or_else(|| CliError::UnknownItem(id.to_string()))?;
        info!("  {} {} {}", item.id, item.name, item.price);
        selection.push(item.clone());
    }

    let total: puzzle_core::Money = selection.iter().map(|item| item.price).sum();
    let solved = puzzle_engine::verify_solution(&selection, puzzle.target);

    info!("  Selection total: {}", total);
    info!("  Target: {}", puzzle.target);

    if solved {
        println!("SOLVED: selection sums to the target {}", puzzle.target);
    } else {
        println!(
            "NOT SOLVED: selection sums to {}, target is {}",
            total, puzzle.target
        );
    }

    Ok(())
}
