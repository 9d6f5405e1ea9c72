//! # Seeded Random Source
//!
//! This module provides the deterministic random source behind puzzle
//! generation: a mulberry32-style generator keyed by an arbitrary seed
//! string.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: the same seed string always yields the same draw
//!   sequence; stored seeds regenerate identical puzzles indefinitely.
//! - **Fixed algorithm**: the string hash, the `0x6D2B79F5` increment, and
//!   the two multiply/XOR mixing steps are part of the compatibility
//!   contract and must not change.
//! - **Single ownership**: a [`SeededRng`] is stateful and owned by exactly
//!   one generation sequence; concurrent generations each seed their own
//!   instance.
//!
//! Not a goal: cryptographic unpredictability. Anyone who knows the seed and
//! the algorithm can derive the whole sequence.
//!
//! ## Module Structure
//!
//! - [`seeded`]: the generator itself, plus its `rand::RngCore` integration

mod seeded;

pub use seeded::SeededRng;

#[cfg(test)]
mod tests;
