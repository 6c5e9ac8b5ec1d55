//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::grid::Grid;

/// Checks if the grid is full (no empty cell remains).
pub fn is_full(grid: &Grid) -> bool {
    grid.cells().all(|cell| !cell.is_empty())
}

/// A full grid with no winner.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}
