//! Moves: edges between canonical boards.
//!
//! A move remembers the cell as literally played on its source grid and
//! where that cell sits on the destination board's stored grid, which
//! may be a rotated or reflected copy of the grid the move produced.

use crate::board::BoardId;
use crate::error::TreeError;
use crate::registry::BoardRegistry;
use crate::transform::Transform;
use crate::types::{Coordinates, Mark};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{instrument, trace};

/// A single placement from one canonical board to another.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct Move {
    /// Display index, sequential across the whole run (starts at 1).
    index: usize,
    /// Board the move is played on.
    source: BoardId,
    /// Mark placed.
    mark: Mark,
    /// Cell as played on the source grid.
    prev_coordinates: Coordinates,
    /// Same cell on the destination board's stored grid.
    next_coordinates: Coordinates,
    /// Board reached.
    destination: BoardId,
    /// Transform mapping the played grid onto the destination grid.
    transform: Transform,
}

impl Move {
    /// Plays `mark` at `at` on `source` and resolves the destination.
    ///
    /// Registers a new board if this is the first grid of its class.
    /// The display index is assigned later, once duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::Grid` with `GridError::CellOccupied` if `at`
    /// already holds a mark, or `TreeError::InvariantViolation` if
    /// `source` is out of range for `registry`.
    #[instrument(skip(registry, source), fields(source = %source))]
    pub(crate) fn resolve(
        registry: &mut BoardRegistry,
        source: BoardId,
        at: Coordinates,
        mark: Mark,
    ) -> Result<Self, TreeError> {
        let grid = registry.grid_of(source)?.with_mark(at, mark)?;
        let (destination, transform) = registry.lookup_or_insert(grid);
        let next_coordinates = transform.apply_to_coordinates(at);

        trace!(
            destination = %destination,
            transform = %transform,
            next = %next_coordinates,
            "Move resolved"
        );

        Ok(Self {
            index: 0,
            source,
            mark,
            prev_coordinates: at,
            next_coordinates,
            destination,
            transform,
        })
    }

    pub(crate) fn with_index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Move {}: {} {} at {} -> {} at {}",
            self.index,
            self.source,
            self.mark,
            self.prev_coordinates,
            self.destination,
            self.next_coordinates
        )
    }
}
