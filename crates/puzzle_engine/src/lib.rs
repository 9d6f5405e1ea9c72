//! # puzzle_engine: Deterministic Puzzle Construction and Verification
//!
//! ## Engine Layer Role
//!
//! puzzle_engine sits between the `puzzle_core` data model and the service
//! layer, providing:
//! - Seeded random source keyed by an arbitrary string ([`rng::SeededRng`])
//! - Catalog/solution generation with collision repair ([`generate_puzzle`])
//! - Solution verification ([`verify_solution`])
//!
//! ## Determinism Contract
//!
//! Everything downstream of a seed string is a pure function of that string.
//! Two calls to [`generate_puzzle`] with identical seed text produce
//! structurally identical output: same target, same catalog values in the
//! same order, same solution identity. The mixing function is fixed
//! bit-for-bit; changing it would invalidate every stored seed.
//!
//! ## Usage Example
//!
//! ```rust
//! use puzzle_engine::{generate_puzzle, verify_solution};
//!
//! let puzzle = generate_puzzle("alice").unwrap();
//! let (first, second) = puzzle.solution_items().unwrap();
//!
//! let cart = [first.clone(), second.clone()];
//! assert!(verify_solution(&cart, puzzle.target));
//! ```
//!
//! ## Uniqueness Guarantee
//!
//! The generator enforces, and then exhaustively audits, the invariant that
//! exactly one unordered pair of catalog items sums to the target within one
//! cent. A seed for which the bounded repair loop cannot establish this is
//! reported as a typed error, never shipped as an unsound catalog.

#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod generator;
pub mod rng;
pub mod verify;

pub use error::GenerateError;
pub use generator::{generate_puzzle, CATALOG_SIZE, DECOY_COUNT};
pub use rng::SeededRng;
pub use verify::verify_solution;
