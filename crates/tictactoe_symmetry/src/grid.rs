//! The 3x3 cell matrix and its pure primitives.

use crate::error::GridError;
use crate::rules;
use crate::types::{Cell, Coordinates, Mark, SIZE};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A 3x3 matrix of cells, row-major.
///
/// Grids are plain values: every primitive returns a new grid and
/// leaves its input untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from rows ingested from outside the crate.
    ///
    /// # Errors
    ///
    /// Returns `GridError::MalformedInput` unless there are exactly three
    /// rows of exactly three cells.
    #[instrument(skip(rows), fields(rows = rows.len()))]
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, GridError> {
        if rows.len() != SIZE {
            return Err(GridError::MalformedInput(format!(
                "expected {} rows, found {}",
                SIZE,
                rows.len()
            )));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != SIZE {
                return Err(GridError::MalformedInput(format!(
                    "row {} has {} cells, expected {}",
                    r,
                    row.len(),
                    SIZE
                )));
            }
            cells[r].copy_from_slice(row);
        }

        Ok(Self { cells })
    }

    /// Returns the cell at the given coordinates.
    pub fn get(&self, at: Coordinates) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Returns a copy of this grid with `mark` placed at `at`.
    ///
    /// # Errors
    ///
    /// Returns `GridError::CellOccupied` if the cell already holds a mark.
    #[instrument(skip(self), fields(grid = %self.id()))]
    pub fn with_mark(&self, at: Coordinates, mark: Mark) -> Result<Self, GridError> {
        if !self.get(at).is_empty() {
            return Err(GridError::CellOccupied(at));
        }
        let mut next = *self;
        next.cells[at.row()][at.col()] = Cell::Marked(mark);
        Ok(next)
    }

    /// Rows of the grid.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        Coordinates::all().filter(|&at| self.get(at).is_empty())
    }

    /// Number of marks on the grid.
    pub fn mark_count(&self) -> usize {
        self.cells().filter(|cell| !cell.is_empty()).count()
    }

    /// Flattened 9-character id (`_`, `x`, `o`), row-major.
    pub fn id(&self) -> String {
        self.cells().map(Cell::symbol).collect()
    }

    /// Rotates 90 degrees clockwise: result (r, c) is input (2 - c, r).
    pub fn rotate_clockwise(&self) -> Self {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[SIZE - 1 - c][r];
            }
        }
        Self { cells }
    }

    /// Reverses each row.
    pub fn flip_horizontal(&self) -> Self {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Self { cells }
    }

    /// Cell-wise equality.
    pub fn identical(&self, other: &Grid) -> bool {
        self.cells == other.cells
    }

    /// True if any of the eight lines holds three identical marks.
    pub fn is_winner(&self) -> bool {
        rules::check_winner(self).is_some()
    }

    /// The mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<Cell>> {
    fn from(grid: Grid) -> Self {
        grid.cells.iter().map(|row| row.to_vec()).collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses a flattened id such as `"x_o/___/__x"`.
    ///
    /// Whitespace and `/` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_ascii_whitespace() && *ch != '/')
            .map(|ch| {
                Cell::from_symbol(ch)
                    .ok_or_else(|| GridError::MalformedInput(format!("unknown symbol {:?}", ch)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if cells.len() != SIZE * SIZE {
            return Err(GridError::MalformedInput(format!(
                "expected {} cells, found {}",
                SIZE * SIZE,
                cells.len()
            )));
        }

        let rows: Vec<Vec<Cell>> = cells.chunks(SIZE).map(<[Cell]>::to_vec).collect();
        Grid::from_rows(&rows)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_rotate_clockwise_moves_corner() {
        let g = grid("x__/___/___");
        assert_eq!(g.rotate_clockwise(), grid("__x/___/___"));
    }

    #[test]
    fn test_rotate_has_order_four() {
        let g = grid("xo_/_x_/o__");
        let once = g.rotate_clockwise();
        assert_ne!(once, g);
        assert_eq!(
            once.rotate_clockwise().rotate_clockwise().rotate_clockwise(),
            g
        );
    }

    #[test]
    fn test_flip_has_order_two() {
        let g = grid("xo_/__o/x__");
        assert_eq!(g.flip_horizontal(), grid("_ox/o__/__x"));
        assert_eq!(g.flip_horizontal().flip_horizontal(), g);
    }

    #[test]
    fn test_with_mark_rejects_occupied() {
        let g = grid("x__/___/___");
        let at = Coordinates::on_grid(0, 0);
        assert_eq!(g.with_mark(at, Mark::O), Err(GridError::CellOccupied(at)));
        let next = g.with_mark(Coordinates::on_grid(2, 1), Mark::O).expect("empty cell");
        assert_eq!(next, grid("x__/___/_o_"));
        assert_eq!(g.mark_count(), 1);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "x__/___".parse::<Grid>(),
            Err(GridError::MalformedInput(_))
        ));
        assert!(matches!(
            "x__/_z_/___".parse::<Grid>(),
            Err(GridError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_short_row() {
        let rows = vec![
            vec![Cell::Empty; 3],
            vec![Cell::Empty; 2],
            vec![Cell::Empty; 3],
        ];
        assert!(matches!(
            Grid::from_rows(&rows),
            Err(GridError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_id_and_display() {
        let g = grid("XO_ / ___ / __x");
        assert_eq!(g.id(), "xo______x");
        assert_eq!(g.to_string(), "x|o|_\n_|_|_\n_|_|x");
    }
}
