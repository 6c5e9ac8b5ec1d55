//! Core domain types for the symmetry-reduced game tree.

use crate::error::GridError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    /// Mark X (plays first by default).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the mark played on the following ply.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Lowercase symbol used in grid ids.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Symbol used in grid ids and canonical keys (`_`, `x`, `o`).
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Marked(mark) => mark.symbol(),
        }
    }

    /// Parses a single id symbol. Accepts either case for marks.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Cell::Empty),
            'x' | 'X' => Some(Cell::Marked(Mark::X)),
            'o' | 'O' => Some(Cell::Marked(Mark::O)),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// A (row, col) position on the grid, both in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coordinates {
    row: usize,
    col: usize,
}

impl Coordinates {
    /// Creates coordinates, rejecting anything outside the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, GridError> {
        if row >= SIZE || col >= SIZE {
            return Err(GridError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Builds coordinates already known to lie on the grid.
    pub(crate) const fn on_grid(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Coordinates::on_grid(row, col)))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent().opponent(), Mark::O);
    }

    #[test]
    fn test_coordinates_out_of_bounds() {
        assert_eq!(
            Coordinates::new(3, 0),
            Err(GridError::OutOfBounds { row: 3, col: 0 })
        );
        assert!(Coordinates::new(0, 7).is_err());
        assert!(Coordinates::new(2, 2).is_ok());
    }

    #[test]
    fn test_all_is_row_major() {
        let indices: Vec<usize> = Coordinates::all().map(|c| c.index()).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_cell_symbols() {
        for symbol in ['_', 'x', 'o'] {
            let cell = Cell::from_symbol(symbol).expect("known symbol");
            assert_eq!(cell.symbol(), symbol);
        }
        assert_eq!(Cell::from_symbol('X'), Some(Cell::Marked(Mark::X)));
        assert_eq!(Cell::from_symbol('?'), None);
    }
}
