//! CLI error types.

use thiserror::Error;

/// Convenience result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI operation error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid command line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An item id was not present in the seed's catalog.
    #[error("Unknown item id: {0}")]
    UnknownItem(String),

    /// The engine self-check found an inconsistency.
    #[error("Self-check failed: {0}")]
    SelfCheck(String),

    /// Puzzle generation failed.
    #[error("Generation failed: {0}")]
    Generate(#[from] puzzle_engine::GenerateError),

    /// Output serialisation failed.
    #[error("Serialisation failed: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
