//! One breadth-first ply of the game tree.

use crate::board::BoardId;
use crate::error::TreeError;
use crate::invariants;
use crate::registry::BoardRegistry;
use crate::types::Mark;
use std::collections::HashSet;
use tracing::{info, instrument, warn};

/// A ply: the boards on which `mark` is about to play.
///
/// Building a turn expands every active board and collects the
/// deduplicated, non-terminal destinations that make up the next ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    number: usize,
    mark: Mark,
    boards: Vec<BoardId>,
    next_boards: Vec<BoardId>,
    move_count: usize,
}

impl Turn {
    /// First turn of a run: `mark` plays on the empty board.
    ///
    /// # Errors
    ///
    /// Propagates expansion failures from [`Turn::new`].
    #[instrument(skip(registry))]
    pub fn initial(registry: &mut BoardRegistry, mark: Mark) -> Result<Self, TreeError> {
        let empty = registry.empty_board();
        Self::new(registry, mark, vec![empty], 1)
    }

    /// Expands `boards` for `mark` and records the next ply's boards.
    ///
    /// # Errors
    ///
    /// Returns `TreeError::InvariantViolation` if expansion breaks a
    /// registry invariant (checked in debug builds) or plays onto an
    /// occupied cell.
    #[instrument(skip(registry, boards), fields(active = boards.len()))]
    pub fn new(
        registry: &mut BoardRegistry,
        mark: Mark,
        boards: Vec<BoardId>,
        number: usize,
    ) -> Result<Self, TreeError> {
        let mut move_count = 0;
        for &id in &boards {
            move_count += registry.fill_possible_moves(id, mark)?;
        }

        let mut seen = HashSet::new();
        let mut next_boards = Vec::new();
        for &id in &boards {
            let Some(board) = registry.board(id) else {
                continue;
            };
            for m in board.moves() {
                let destination = *m.destination();
                let terminal = registry
                    .board(destination)
                    .is_none_or(|next| next.is_terminal());
                if !terminal && seen.insert(destination) {
                    next_boards.push(destination);
                }
            }
        }

        if cfg!(debug_assertions) {
            invariants::check_registry(registry).map_err(|violations| {
                let descriptions = violations
                    .iter()
                    .map(|v| v.description.as_str())
                    .collect::<Vec<_>>()
                    .join("; ");
                warn!(turn = number, violations = %descriptions, "Registry invariant violated");
                TreeError::InvariantViolation(descriptions)
            })?;
        }

        info!(
            turn = number,
            mark = %mark,
            active = boards.len(),
            moves = move_count,
            next = next_boards.len(),
            "Turn expanded"
        );

        Ok(Self {
            number,
            mark,
            boards,
            next_boards,
            move_count,
        })
    }

    /// The following ply, or `None` once no board can continue.
    ///
    /// # Errors
    ///
    /// Propagates expansion failures from [`Turn::new`].
    #[instrument(skip(self, registry), fields(turn = self.number))]
    pub fn next(&self, registry: &mut BoardRegistry) -> Result<Option<Turn>, TreeError> {
        if self.next_boards.is_empty() {
            return Ok(None);
        }
        Turn::new(
            registry,
            self.mark.opponent(),
            self.next_boards.clone(),
            self.number + 1,
        )
        .map(Some)
    }

    /// Ply number, starting at 1.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Mark played this turn.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Boards on which this turn is played.
    pub fn boards(&self) -> &[BoardId] {
        &self.boards
    }

    /// Deduplicated, non-terminal boards forming the next ply.
    pub fn next_boards(&self) -> &[BoardId] {
        &self.next_boards
    }

    /// Number of active boards.
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    /// Total deduplicated moves over all active boards.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// True when no board continues past this turn.
    pub fn is_last(&self) -> bool {
        self.next_boards.is_empty()
    }
}
