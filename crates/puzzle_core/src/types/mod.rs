//! Core currency and catalog types.
//!
//! This module provides:
//! - `money`: Fixed-point currency amounts in integer cents
//! - `item`: Catalog items and the generated puzzle configuration
//! - `error`: Structured error types for currency parsing and conversion
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level:
//! - [`Money`] and [`TOLERANCE`] from `money`
//! - [`Item`], [`PuzzleConfig`], [`SolutionRef`] from `item`
//! - [`MoneyError`] from `error`

pub mod error;
pub mod item;
pub mod money;

pub use error::MoneyError;
pub use item::{Item, PuzzleConfig, SolutionRef};
pub use money::{Money, TOLERANCE};
