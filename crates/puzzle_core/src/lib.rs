//! # puzzle_core: Data Model for the Gearlock Puzzle Engine
//!
//! ## Foundation Layer Role
//!
//! puzzle_core is the bottom layer of the three-layer workspace, providing:
//! - Fixed-point currency arithmetic: `Money` (`types::money`)
//! - Catalog data model: `Item`, `PuzzleConfig`, `SolutionRef` (`types::item`)
//! - Error types: `MoneyError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other workspace crates, with
//! minimal external dependencies:
//! - thiserror: Structured error derivation
//! - serde: Serialisation support (optional, enabled by default)
//!
//! ## Fixed-Point Currency
//!
//! All price arithmetic happens in integer cents. Binary floating point only
//! appears at the display/serialisation boundary, which makes "sums to exactly
//! target" a property of integer arithmetic rather than a rounding accident.
//!
//! ## Usage Examples
//!
//! ```rust
//! use puzzle_core::types::{Money, TOLERANCE};
//!
//! let target = Money::from_parts(734, 18);
//! let price1 = Money::from_parts(312, 40);
//! let price2 = target - price1;
//!
//! assert_eq!(price1 + price2, target);
//! assert_eq!(price2.to_string(), "421.78");
//! assert!((price1 + price2).abs_diff(target) < TOLERANCE);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod types;

pub use types::{Item, Money, MoneyError, PuzzleConfig, SolutionRef, TOLERANCE};
