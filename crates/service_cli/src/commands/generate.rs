//! Generate command implementation.
//!
//! Generates the puzzle for a seed and emits it as JSON or a summary table.
//! The JSON output carries the full external shape (target, shuffled
//! catalog, solution reference) and can be fed to storefront fixtures.

use std::fs;

use tracing::info;

use crate::{CliError, Result};

/// Run the generate command
pub fn run(seed: &str, format: &str, output: Option<&str>) -> Result<()> {
    info!("Generating puzzle...");
    info!("  Seed: {}", seed);
    info!("  Output format: {}", format);

    let puzzle = puzzle_engine::generate_puzzle(seed)?;

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&puzzle)?,
        "table" => render_table(&puzzle),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered)?;
            info!("Puzzle written to {}", path);
        }
        None => println!("{rendered}"),
    }

    info!("Generation complete");
    Ok(())
}

fn render_table(puzzle: &puzzle_core::PuzzleConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("Target: {}\n", puzzle.target));
    out.push_str(&format!("Catalog: {} items\n", puzzle.products.len()));
    out.push_str(&format!(
        "Solution: {} + {} ({} + {})\n\n",
        puzzle.solution.item1_id,
        puzzle.solution.item2_id,
        puzzle.solution.price1,
        puzzle.solution.price2,
    ));

    out.push_str("┌──────────────────┬────────────────────────────┬────────────┐\n");
    out.push_str("│ Id               │ Name                       │ Price      │\n");
    out.push_str("├──────────────────┼────────────────────────────┼────────────┤\n");
    for item in puzzle.products.iter().take(10) {
        out.push_str(&format!(
            "│ {:<16.16} │ {:<26.26} │ {:>10} │\n",
            item.id, item.name, item.price
        ));
    }
    out.push_str("└──────────────────┴────────────────────────────┴────────────┘\n");
    out.push_str(&format!(
        "({} further items omitted)\n",
        puzzle.products.len().saturating_sub(10)
    ));
    out
}
