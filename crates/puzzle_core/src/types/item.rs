//! Catalog items and the generated puzzle configuration.
//!
//! These are the boundary types shared with the storefront: an [`Item`] is
//! one catalog entry, a [`PuzzleConfig`] is everything a storefront session
//! needs (target, shuffled catalog, solution reference). The serde shape of
//! an item is `{id, name, price, category, sku}` with `price` as a 2-decimal
//! number.

use super::money::Money;

/// One catalog entry.
///
/// Immutable once generated; ids are unique within a catalog.
///
/// # Examples
///
/// ```
/// use puzzle_core::types::{Item, Money};
///
/// let item = Item {
///     id: "prod-alice-0".to_string(),
///     name: "Turbocharger Kit".to_string(),
///     price: Money::from_parts(299, 99),
///     category: "Engine".to_string(),
///     sku: "SN-3E7".to_string(),
/// };
/// assert!(item.price.is_positive());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Stable identifier, unique within one catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in fixed-point currency.
    pub price: Money,
    /// Display category (e.g. "Engine", "Brakes").
    pub category: String,
    /// Stock keeping code.
    pub sku: String,
}

/// Reference to the designated solution pair.
///
/// Carries the two item ids plus their exact prices so a consumer can check
/// the pair without re-scanning the catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionRef {
    /// Id of the first solution item.
    pub item1_id: String,
    /// Id of the second solution item.
    pub item2_id: String,
    /// Exact price of the first solution item.
    pub price1: Money,
    /// Exact price of the second solution item.
    pub price2: Money,
}

/// A fully generated puzzle: target, shuffled catalog, solution reference.
///
/// Two generations from the same seed produce structurally identical values
/// (same target, same items in the same order, same solution reference).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PuzzleConfig {
    /// The currency value the solution pair sums to.
    pub target: Money,
    /// The shuffled catalog (solution pair + decoys).
    pub products: Vec<Item>,
    /// The designated solution pair.
    pub solution: SolutionRef,
}

impl PuzzleConfig {
    /// Looks up a catalog item by id.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # fn example(puzzle: &puzzle_core::PuzzleConfig) {
    /// let first = puzzle.item(&puzzle.solution.item1_id).unwrap();
    /// assert_eq!(first.price, puzzle.solution.price1);
    /// # }
    /// ```
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.products.iter().find(|item| item.id == id)
    }

    /// Returns the two solution items in reference order.
    ///
    /// Returns `None` if either id is missing from the catalog, which a
    /// correctly generated puzzle never exhibits.
    pub fn solution_items(&self) -> Option<(&Item, &Item)> {
        Some((
            self.item(&self.solution.item1_id)?,
            self.item(&self.solution.item2_id)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item(id: &str, cents: i64) -> Item {
        Item {
            id: id.to_string(),
            name: "Test Part".to_string(),
            price: Money::from_cents(cents),
            category: "Engine".to_string(),
            sku: "SN-FFF".to_string(),
        }
    }

    fn sample_puzzle() -> PuzzleConfig {
        PuzzleConfig {
            target: Money::from_parts(500, 0),
            products: vec![
                sample_item("prod-x-0", 12345),
                sample_item("sol-x-1", 20000),
                sample_item("sol-x-2", 30000),
            ],
            solution: SolutionRef {
                item1_id: "sol-x-1".to_string(),
                item2_id: "sol-x-2".to_string(),
                price1: Money::from_cents(20000),
                price2: Money::from_cents(30000),
            },
        }
    }

    #[test]
    fn test_item_lookup() {
        let puzzle = sample_puzzle();
        assert_eq!(puzzle.item("prod-x-0").unwrap().price.cents(), 12345);
        assert!(puzzle.item("missing").is_none());
    }

    #[test]
    fn test_solution_items() {
        let puzzle = sample_puzzle();
        let (first, second) = puzzle.solution_items().unwrap();
        assert_eq!(first.id, "sol-x-1");
        assert_eq!(second.id, "sol-x-2");
        assert_eq!(first.price + second.price, puzzle.target);
    }

    #[test]
    fn test_solution_items_missing_id() {
        let mut puzzle = sample_puzzle();
        puzzle.products.remove(1);
        assert!(puzzle.solution_items().is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_item_serde_shape() {
        let item = sample_item("prod-x-0", 29999);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "prod-x-0");
        assert_eq!(json["price"], 299.99);
        assert_eq!(json["sku"], "SN-FFF");

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
