//! Solution verification.

use puzzle_core::types::{Item, Money, TOLERANCE};

/// Returns `true` when the selected items' prices sum to the target within
/// tolerance.
///
/// Deliberately accepts any item count, not only two: any subset hitting the
/// target satisfies the puzzle. The generator guarantees by construction
/// that, at the fixed catalog size, only the designated pair does.
///
/// Never errors: verification is a pure comparison over well-typed input,
/// and malformed input is rejected by the serialisation boundary before it
/// gets here. An empty selection sums to zero and only verifies against a
/// zero target, which generation never produces.
///
/// # Examples
///
/// ```rust
/// use puzzle_engine::{generate_puzzle, verify_solution};
///
/// let puzzle = generate_puzzle("alice").unwrap();
/// let (first, second) = puzzle.solution_items().unwrap();
///
/// assert!(verify_solution(&[first.clone(), second.clone()], puzzle.target));
/// assert!(!verify_solution(&[first.clone()], puzzle.target));
/// ```
pub fn verify_solution(items: &[Item], target: Money) -> bool {
    let total: Money = items.iter().map(|item| item.price).sum();
    total.abs_diff(target) < TOLERANCE
}
