//! Win detection logic for tic-tac-toe.

use crate::grid::Grid;
use crate::types::{Coordinates, Mark};

const fn at(row: usize, col: usize) -> Coordinates {
    Coordinates::on_grid(row, col)
}

/// The eight winning lines: three rows, three columns, two diagonals.
///
/// The set is closed under every rotation and reflection of the square,
/// so win status never depends on orientation.
pub const LINES: [[Coordinates; 3]; 8] = [
    // Rows
    [at(0, 0), at(0, 1), at(0, 2)],
    [at(1, 0), at(1, 1), at(1, 2)],
    [at(2, 0), at(2, 1), at(2, 2)],
    // Columns
    [at(0, 0), at(1, 0), at(2, 0)],
    [at(0, 1), at(1, 1), at(2, 1)],
    [at(0, 2), at(1, 2), at(2, 2)],
    // Diagonals
    [at(0, 0), at(1, 1), at(2, 2)],
    [at(0, 2), at(1, 1), at(2, 0)],
];

/// Checks if there is a winner on the grid.
///
/// Returns `Some(mark)` if that mark has three in a row,
/// `None` otherwise.
pub fn check_winner(grid: &Grid) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = grid.get(a).mark()?;
        (grid.get(b).mark() == Some(mark) && grid.get(c).mark() == Some(mark)).then_some(mark)
    })
}
