//! Error types for grids, tree expansion and configuration.

use crate::types::Coordinates;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Error raised when a grid or coordinate fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GridError {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Coordinates ({row}, {col}) are out of bounds (must be 0-2)")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coordinates),

    /// Grid has the wrong shape or contains unknown symbols.
    #[display("Malformed grid: {}", _0)]
    MalformedInput(String),
}

impl std::error::Error for GridError {}

/// Error raised while expanding the game tree.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum TreeError {
    /// A grid failed validation at the boundary.
    #[display("{}", _0)]
    Grid(GridError),

    /// An internal invariant was broken. Not recoverable.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for TreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TreeError::Grid(err) => Some(err),
            TreeError::InvariantViolation(_) => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
