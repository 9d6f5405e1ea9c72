//! Error types for puzzle generation.

use thiserror::Error;

/// Puzzle generation error.
///
/// Generation is a single deterministic pass; the only failure modes are an
/// invalid seed and the degenerate-seed cases, where the catalog cannot be
/// made collision-free. A degenerate seed must surface as a typed error,
/// never as a silently unsound catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The seed string was empty. An empty seed usually means the storefront
    /// lost its persisted identifier, so generation refuses it loudly.
    #[error("seed must be a non-empty string")]
    EmptySeed,

    /// The collision-repair loop could not find a non-colliding price for a
    /// decoy within the attempt cap.
    #[error("degenerate seed: decoy {decoy_index} still collides after {attempts} repair attempts")]
    RepairExhausted {
        /// Zero-based index of the decoy that could not be repaired.
        decoy_index: usize,
        /// Number of repair attempts made.
        attempts: u32,
    },

    /// The post-generation audit found the catalog unsound: either a
    /// non-solution pair sums to the target, or the solution pair does not.
    #[error("catalog audit failed: {reason}")]
    AuditFailed {
        /// Human-readable description of the violated invariant.
        reason: String,
    },
}
