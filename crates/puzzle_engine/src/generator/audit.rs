//! Global uniqueness post-condition.
//!
//! The incremental collision check in the generator covers every pair once
//! (each item is checked against all earlier items as it is placed), but the
//! soundness of the catalog is too important to trust to one pass order:
//! this module re-verifies "exactly the solution pair sums to the target"
//! by brute force over the finished catalog.

use puzzle_core::types::{Item, Money, SolutionRef, TOLERANCE};

use crate::error::GenerateError;

/// Exhaustively verifies that exactly one unordered pair of catalog items
/// sums to the target within tolerance, and that the pair is the designated
/// solution.
///
/// O(n²) over the catalog; at the fixed catalog size this is ~7000 cent
/// comparisons per generation.
///
/// # Errors
///
/// [`GenerateError::AuditFailed`] naming the offending pair, or reporting a
/// missing solution pair.
pub fn audit_catalog(
    products: &[Item],
    target: Money,
    solution: &SolutionRef,
) -> Result<(), GenerateError> {
    let mut solution_pairs = 0usize;

    for (i, a) in products.iter().enumerate() {
        for b in &products[i + 1..] {
            if (a.price + b.price).abs_diff(target) >= TOLERANCE {
                continue;
            }
            if is_solution_pair(a, b, solution) {
                solution_pairs += 1;
            } else {
                return Err(GenerateError::AuditFailed {
                    reason: format!(
                        "items {} ({}) and {} ({}) also sum to the target {}",
                        a.id, a.price, b.id, b.price, target
                    ),
                });
            }
        }
    }

    if solution_pairs != 1 {
        return Err(GenerateError::AuditFailed {
            reason: format!("expected exactly one solution pair, found {solution_pairs}"),
        });
    }

    Ok(())
}

fn is_solution_pair(a: &Item, b: &Item, solution: &SolutionRef) -> bool {
    (a.id == solution.item1_id && b.id == solution.item2_id)
        || (a.id == solution.item2_id && b.id == solution.item1_id)
}
