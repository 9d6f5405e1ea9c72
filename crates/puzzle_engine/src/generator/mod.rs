//! Catalog and solution generation.
//!
//! [`generate_puzzle`] is a pure deterministic function of the seed string:
//! it derives a target amount, splits it into a solution pair, surrounds the
//! pair with decoys whose prices are repaired until no second pair sums to
//! the target, and shuffles the result so position reveals nothing.
//!
//! # Draw Order
//!
//! The draw order against the seeded random source is part of the
//! compatibility contract (target, solution prices, name-pair index, decoy
//! name shuffle, solution SKUs, the per-decoy draws, final catalog shuffle).
//! Inserting or removing a draw changes every stored seed's puzzle.
//!
//! # Uniqueness
//!
//! Each decoy candidate is checked against *all already-placed items* (the
//! solution pair is placed first), not just the solution prices. Checking
//! only against the solution pair would allow two decoys to form a second
//! valid pair. The incremental check is then backed by an exhaustive
//! post-generation audit ([`audit::audit_catalog`]).

use puzzle_core::types::{Item, Money, PuzzleConfig, SolutionRef, TOLERANCE};

use crate::error::GenerateError;
use crate::rng::SeededRng;

pub mod audit;
mod names;

use names::{CATEGORIES, PRODUCT_NAMES, SKU_PREFIXES, SOLUTION_NAME_PAIRS};

/// Number of decoy items per catalog.
pub const DECOY_COUNT: usize = 118;

/// Total catalog size: the solution pair plus [`DECOY_COUNT`] decoys.
pub const CATALOG_SIZE: usize = DECOY_COUNT + 2;

/// Defensive cap on the per-decoy collision-repair loop. Repair offsets are
/// redrawn each iteration, so exhaustion marks the seed degenerate rather
/// than looping forever.
const REPAIR_ATTEMPT_CAP: u32 = 50;

/// Target dollar range, inclusive.
const TARGET_DOLLARS: (i64, i64) = (200, 1500);

/// Decoy base-price dollar range, inclusive.
const DECOY_DOLLARS: (i64, i64) = (10, 900);

/// Lower bound on either solution price, and the headroom kept below the
/// target so the second price stays meaningful.
const SOLUTION_FLOOR_DOLLARS: f64 = 50.0;

/// Lower bound on the first solution price as a share of the target.
const SOLUTION_MIN_SHARE: f64 = 0.2;

/// Repair offset dollar range, inclusive.
const REPAIR_OFFSET_DOLLARS: (i64, i64) = (5, 50);

/// Generates the puzzle for a seed: target, shuffled catalog, solution
/// reference.
///
/// Same seed, same puzzle — byte-identical target, catalog order, prices,
/// and solution identity across invocations.
///
/// # Errors
///
/// - [`GenerateError::EmptySeed`] for an empty seed string.
/// - [`GenerateError::RepairExhausted`] when a decoy price cannot be made
///   collision-free within the attempt cap.
/// - [`GenerateError::AuditFailed`] when the exhaustive post-condition scan
///   finds the catalog unsound.
///
/// # Examples
///
/// ```rust
/// use puzzle_engine::generate_puzzle;
///
/// let first = generate_puzzle("alice").unwrap();
/// let second = generate_puzzle("alice").unwrap();
/// assert_eq!(first, second);
/// assert_eq!(first.solution.price1 + first.solution.price2, first.target);
/// ```
pub fn generate_puzzle(seed: &str) -> Result<PuzzleConfig, GenerateError> {
    if seed.is_empty() {
        return Err(GenerateError::EmptySeed);
    }

    let mut rng = SeededRng::new(seed);

    let target = draw_amount(&mut rng, TARGET_DOLLARS.0, TARGET_DOLLARS.1);

    // Solution pair: one price drawn, the other the exact cent remainder, so
    // the pair sums to the target by construction.
    let target_dollars = target.as_f64();
    let min_dollars = (target_dollars * SOLUTION_MIN_SHARE).max(SOLUTION_FLOOR_DOLLARS);
    let max_dollars = target_dollars - SOLUTION_FLOOR_DOLLARS;
    let price1 = draw_amount(&mut rng, min_dollars.floor() as i64, max_dollars.floor() as i64);
    let price2 = target - price1;

    let pair_index = rng.next_int(0, SOLUTION_NAME_PAIRS.len() as i64 - 1) as usize;
    let (solution_name1, solution_name2) = SOLUTION_NAME_PAIRS[pair_index];

    let solution1_id = format!("sol-{seed}-1");
    let solution2_id = format!("sol-{seed}-2");

    let decoy_names = rng.shuffled(PRODUCT_NAMES.to_vec());

    let mut products: Vec<Item> = Vec::with_capacity(CATALOG_SIZE);
    products.push(Item {
        id: solution1_id.clone(),
        name: solution_name1.to_string(),
        price: price1,
        category: "Electronics".to_string(),
        sku: draw_sku(&mut rng, "SN"),
    });
    products.push(Item {
        id: solution2_id.clone(),
        name: solution_name2.to_string(),
        price: price2,
        category: "Engine".to_string(),
        sku: draw_sku(&mut rng, "PN"),
    });

    for i in 0..DECOY_COUNT {
        let mut price = draw_amount(&mut rng, DECOY_DOLLARS.0, DECOY_DOLLARS.1);

        // Repair until this decoy forms no pair with any placed item.
        let mut attempts = 0;
        while forms_pair_with_placed(price, target, &products) {
            if attempts == REPAIR_ATTEMPT_CAP {
                return Err(GenerateError::RepairExhausted {
                    decoy_index: i,
                    attempts,
                });
            }
            let offset = rng.next_int(REPAIR_OFFSET_DOLLARS.0, REPAIR_OFFSET_DOLLARS.1);
            price += Money::from_parts(offset, 0);
            attempts += 1;
        }

        let category = CATEGORIES[rng.next_int(0, CATEGORIES.len() as i64 - 1) as usize];
        let prefix = SKU_PREFIXES[rng.next_int(0, SKU_PREFIXES.len() as i64 - 1) as usize];
        products.push(Item {
            id: format!("prod-{seed}-{i}"),
            name: decoy_name(&decoy_names, i),
            price,
            category: category.to_string(),
            sku: draw_sku(&mut rng, prefix),
        });
    }

    let products = rng.shuffled(products);

    let solution = SolutionRef {
        item1_id: solution1_id,
        item2_id: solution2_id,
        price1,
        price2,
    };

    audit::audit_catalog(&products, target, &solution)?;

    Ok(PuzzleConfig {
        target,
        products,
        solution,
    })
}

/// Draws a currency amount as whole dollars in `[min, max]` plus an
/// independent cents draw in `[0, 99]`.
fn draw_amount(rng: &mut SeededRng, min_dollars: i64, max_dollars: i64) -> Money {
    let dollars = rng.next_int(min_dollars, max_dollars);
    let cents = rng.next_int(0, 99);
    Money::from_parts(dollars, cents)
}

/// Draws a stock keeping code: prefix plus an uppercase-hex serial.
fn draw_sku(rng: &mut SeededRng, prefix: &str) -> String {
    format!("{prefix}-{:X}", rng.next_int(1000, 9999))
}

/// Returns `true` when `price` plus any already-placed price equals the
/// target within tolerance.
fn forms_pair_with_placed(price: Money, target: Money, placed: &[Item]) -> bool {
    placed
        .iter()
        .any(|item| (price + item.price).abs_diff(target) < TOLERANCE)
}

/// Decoy display name: pool entry, with a version suffix once the pool has
/// wrapped.
fn decoy_name(pool: &[&str], index: usize) -> String {
    let name = pool[index % pool.len()];
    if index >= pool.len() {
        format!("{name} v{}", index / pool.len() + 1)
    } else {
        name.to_string()
    }
}
