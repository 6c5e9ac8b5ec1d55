//! Board registry: the canonicalization engine.
//!
//! Maps any grid to the single [`Board`] standing for its equivalence
//! class. Lookups hash the grid's normal-form key, so each call costs
//! eight transforms plus one hash probe regardless of registry size.
//!
//! A registry is scoped to one enumeration run. Equivalent grids always
//! resolve to the same [`BoardId`] for the registry's whole lifetime.

use crate::board::{Board, BoardId};
use crate::canonical::{CanonicalKey, normal_form};
use crate::error::{GridError, TreeError};
use crate::grid::Grid;
use crate::moves::Move;
use crate::transform::Transform;
use crate::types::Mark;
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument, trace, warn};

/// Owns every board reached during a run.
#[derive(Debug, Default)]
pub struct BoardRegistry {
    boards: Vec<Board>,
    by_key: HashMap<CanonicalKey, BoardId>,
    last_move_index: usize,
}

impl BoardRegistry {
    /// Creates an empty registry.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board for the empty grid, registering it on first use.
    #[instrument(skip(self))]
    pub fn empty_board(&mut self) -> BoardId {
        self.lookup_or_insert(Grid::new()).0
    }

    /// Resolves `grid` to its canonical board.
    ///
    /// Returns the board together with the transform that maps `grid`
    /// onto the board's stored grid. Apply that transform to any
    /// coordinates taken from `grid` to find the same cell on the board.
    /// A miss registers `grid` unmodified as a new board and reports the
    /// identity.
    #[instrument(skip(self, grid), fields(grid = %grid.id()))]
    pub fn lookup_or_insert(&mut self, grid: Grid) -> (BoardId, Transform) {
        let (key, to_key) = normal_form(&grid);

        if let Some(&id) = self.by_key.get(&key) {
            let board = &self.boards[id.0];
            let transform = to_key.then(board.orientation().inverse());
            trace!(board = %id, transform = %transform, "Registry hit");
            return (id, transform);
        }

        let id = BoardId(self.boards.len());
        self.boards.push(Board::new(id, grid, key, to_key));
        self.by_key.insert(key, id);
        debug!(board = %id, key = %key, "Registered new board");
        (id, Transform::Identity)
    }

    /// Resolves `grid` and returns the board itself.
    pub fn get(&mut self, grid: Grid) -> &Board {
        let (id, _) = self.lookup_or_insert(grid);
        &self.boards[id.0]
    }

    /// Looks `grid` up without registering anything.
    #[instrument(skip(self, grid), fields(grid = %grid.id()))]
    pub fn find(&self, grid: &Grid) -> Option<(BoardId, Transform)> {
        let (key, to_key) = normal_form(grid);
        self.by_key.get(&key).map(|&id| {
            let orientation = self.boards[id.0].orientation();
            (id, to_key.then(orientation.inverse()))
        })
    }

    /// Board with the given id, if it is in range for this registry.
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(id.0)
    }

    /// All boards in creation order.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of registered boards.
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// True if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Number of deduplicated moves generated so far.
    pub fn move_count(&self) -> usize {
        self.last_move_index
    }

    /// Ids are plain indices: an id taken from another registry is only
    /// rejected when it is out of range here.
    pub(crate) fn grid_of(&self, id: BoardId) -> Result<Grid, TreeError> {
        self.board(id).map(|board| *board.grid()).ok_or_else(|| {
            TreeError::InvariantViolation(format!("board {} is not in this registry", id))
        })
    }

    /// Generates the moves of `mark` from board `id`.
    ///
    /// Won boards get no moves. Otherwise every empty cell is played in
    /// row-major order and only the first move reaching each destination
    /// board is kept. Survivors receive run-wide sequential indices.
    /// Expanding a board twice for the same mark leaves it untouched.
    ///
    /// Returns the number of moves the board holds.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvariantViolation` if an occupied cell is
    /// played, `id` is out of range for this registry, or the board was
    /// already expanded for the other mark.
    #[instrument(skip(self, id), fields(board = %id))]
    pub fn fill_possible_moves(&mut self, id: BoardId, mark: Mark) -> Result<usize, TreeError> {
        let grid = self.grid_of(id)?;
        let board = &self.boards[id.0];

        if let Some(previous) = board.expanded_for() {
            if previous != mark {
                warn!(
                    expanded_for = %previous,
                    requested = %mark,
                    "Board expanded for the other mark"
                );
                return Err(TreeError::InvariantViolation(format!(
                    "board {} already expanded for {}, not {}",
                    id, previous, mark
                )));
            }
            trace!("Board already expanded");
            return Ok(board.moves().len());
        }

        if grid.is_winner() {
            trace!("Won board, no moves");
            self.boards[id.0].set_moves(Vec::new(), mark);
            return Ok(0);
        }

        let mut seen = HashSet::new();
        let mut kept = Vec::new();
        for at in grid.empty_cells() {
            let candidate = Move::resolve(self, id, at, mark).map_err(|err| match err {
                TreeError::Grid(GridError::CellOccupied(at)) => {
                    warn!(cell = %at, "Generated a move onto an occupied cell");
                    TreeError::InvariantViolation(format!("cell {} played twice", at))
                }
                other => other,
            })?;
            if seen.insert(*candidate.destination()) {
                kept.push(candidate);
            }
        }

        let kept: Vec<Move> = kept
            .into_iter()
            .map(|candidate| {
                self.last_move_index += 1;
                candidate.with_index(self.last_move_index)
            })
            .collect();
        let count = kept.len();
        self.boards[id.0].set_moves(kept, mark);

        debug!(moves = count, "Board expanded");
        Ok(count)
    }
}
