//! Canonical boards: one per equivalence class of grids.

use crate::canonical::CanonicalKey;
use crate::grid::Grid;
use crate::moves::Move;
use crate::transform::Transform;
use crate::types::Mark;
use derive_getters::Getters;
use serde::Serialize;

/// Stable handle of a board inside its registry.
///
/// Ids are handed out in creation order starting at 0 (the empty board)
/// and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BoardId(pub(crate) usize);

impl BoardId {
    /// Creation-order index, for display and ordering only.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The representative of one equivalence class of grids.
///
/// Boards are only built by [`crate::BoardRegistry`]; the grid is the
/// first one seen for the class, stored as played.
#[derive(Debug, Clone, Getters)]
pub struct Board {
    /// Handle inside the owning registry.
    id: BoardId,
    /// Grid as first reached.
    grid: Grid,
    /// Normal-form key shared by every grid of the class.
    key: CanonicalKey,
    /// Transform taking `grid` to its normal form.
    #[getter(skip)]
    orientation: Transform,
    /// Deduplicated moves leaving this board.
    moves: Vec<Move>,
    /// Mark the moves were generated for, once expanded.
    #[getter(skip)]
    expanded_for: Option<Mark>,
}

impl Board {
    pub(crate) fn new(id: BoardId, grid: Grid, key: CanonicalKey, orientation: Transform) -> Self {
        Self {
            id,
            grid,
            key,
            orientation,
            moves: Vec::new(),
            expanded_for: None,
        }
    }

    /// Creation-order index.
    pub fn index(&self) -> usize {
        self.id.index()
    }

    /// True if a line of three is complete.
    pub fn is_winner(&self) -> bool {
        self.grid.is_winner()
    }

    /// Mark owning a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.grid.winner()
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Won or full: the tree does not continue from here.
    pub fn is_terminal(&self) -> bool {
        self.is_winner() || self.is_full()
    }

    /// Whether moves have been generated for this board.
    pub fn is_expanded(&self) -> bool {
        self.expanded_for.is_some()
    }

    /// Mark whose moves were generated, if expanded.
    pub fn expanded_for(&self) -> Option<Mark> {
        self.expanded_for
    }

    pub(crate) fn orientation(&self) -> Transform {
        self.orientation
    }

    pub(crate) fn set_moves(&mut self, moves: Vec<Move>, mark: Mark) {
        self.moves = moves;
        self.expanded_for = Some(mark);
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Board {}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board {} [{}]", self.id, self.key)?;
        write!(f, "{}", self.grid)
    }
}
