//! Tree driver: advances turns until the game tree is exhausted.

use crate::config::TreeConfig;
use crate::error::TreeError;
use crate::registry::BoardRegistry;
use crate::turn::Turn;
use crate::types::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Counts for a single ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct PlyStats {
    /// Ply number, starting at 1.
    pub ply: usize,
    /// Mark played.
    pub mark: Mark,
    /// Boards expanded this ply.
    pub active_boards: usize,
    /// Deduplicated moves generated this ply.
    pub moves: usize,
    /// Non-terminal boards handed to the next ply.
    pub next_boards: usize,
}

impl From<&Turn> for PlyStats {
    fn from(turn: &Turn) -> Self {
        PlyStats::new(
            turn.number(),
            turn.mark(),
            turn.board_count(),
            turn.move_count(),
            turn.next_boards().len(),
        )
    }
}

/// Totals of a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct TreeSummary {
    /// Per-ply counts in order.
    plies: Vec<PlyStats>,
    /// Canonical boards registered, including the empty board.
    total_boards: usize,
    /// Boards that are won or full.
    terminal_boards: usize,
    /// Boards won by X.
    x_wins: usize,
    /// Boards won by O.
    o_wins: usize,
    /// Full boards without a winner.
    draws: usize,
    /// Deduplicated moves across the run.
    total_moves: usize,
    /// Boards produced by each mark's moves.
    boards_by_mark: BTreeMap<Mark, usize>,
}

impl TreeSummary {
    #[instrument(skip(registry, turns))]
    fn collect(registry: &BoardRegistry, turns: &[Turn], first_mark: Mark) -> Self {
        let boards = registry.boards();
        let wins = |mark: Mark| boards.iter().filter(|b| b.winner() == Some(mark)).count();

        let mut boards_by_mark = BTreeMap::new();
        for board in boards.iter().filter(|b| b.grid().mark_count() > 0) {
            let mover = if board.grid().mark_count() % 2 == 1 {
                first_mark
            } else {
                first_mark.opponent()
            };
            *boards_by_mark.entry(mover).or_insert(0) += 1;
        }

        Self {
            plies: turns.iter().map(PlyStats::from).collect(),
            total_boards: boards.len(),
            terminal_boards: boards.iter().filter(|b| b.is_terminal()).count(),
            x_wins: wins(Mark::X),
            o_wins: wins(Mark::O),
            draws: boards
                .iter()
                .filter(|b| b.is_full() && !b.is_winner())
                .count(),
            total_moves: registry.move_count(),
            boards_by_mark,
        }
    }
}

/// Breadth-first enumeration of every canonical board.
///
/// Owns the registry for its run, so separate trees never share boards.
#[derive(Debug)]
pub struct GameTree {
    config: TreeConfig,
    registry: BoardRegistry,
    turns: Vec<Turn>,
}

impl GameTree {
    /// Creates a tree with a fresh, empty registry.
    #[instrument]
    pub fn new(config: TreeConfig) -> Self {
        Self {
            config,
            registry: BoardRegistry::new(),
            turns: Vec::new(),
        }
    }

    /// Runs turns until no board remains active or the ply limit is hit.
    ///
    /// Running an already finished tree returns the same summary without
    /// expanding anything.
    ///
    /// # Errors
    ///
    /// Propagates `TreeError` from turn expansion.
    #[instrument(skip(self), fields(first_mark = %self.config.first_mark()))]
    pub fn run(&mut self) -> Result<TreeSummary, TreeError> {
        if self.turns.is_empty() {
            info!(max_plies = *self.config.max_plies(), "Enumerating game tree");

            let mut turn = Some(Turn::initial(&mut self.registry, *self.config.first_mark())?);
            while let Some(current) = turn {
                let next = if current.number() < *self.config.max_plies() {
                    current.next(&mut self.registry)?
                } else {
                    None
                };
                self.turns.push(current);
                turn = next;
            }
        }

        let summary = TreeSummary::collect(&self.registry, &self.turns, *self.config.first_mark());
        info!(
            turns = self.turns.len(),
            boards = summary.total_boards,
            terminal = summary.terminal_boards,
            moves = summary.total_moves,
            "Game tree exhausted"
        );
        Ok(summary)
    }

    /// Turns played so far, in order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// The run's registry.
    pub fn registry(&self) -> &BoardRegistry {
        &self.registry
    }

    /// The run's configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ply_limit_truncates() {
        let config = TreeConfig::new(Mark::X, 2).expect("valid config");
        let mut tree = GameTree::new(config);
        let summary = tree.run().expect("runs");
        assert_eq!(tree.turns().len(), 2);
        assert_eq!(summary.plies().len(), 2);
        // Empty board, 3 after X, 12 after O.
        assert_eq!(*summary.total_boards(), 16);
        assert_eq!(*summary.terminal_boards(), 0);
    }

    #[test]
    fn test_run_is_repeatable_on_same_tree() {
        let config = TreeConfig::new(Mark::X, 3).expect("valid config");
        let mut tree = GameTree::new(config);
        let first = tree.run().expect("runs");
        let second = tree.run().expect("runs");
        assert_eq!(first, second);
        assert_eq!(tree.turns().len(), 3);
    }

    #[test]
    fn test_ply_stats_from_turn() {
        let mut tree = GameTree::new(TreeConfig::new(Mark::X, 1).expect("valid config"));
        let summary = tree.run().expect("runs");
        assert_eq!(summary.plies()[0], PlyStats::new(1, Mark::X, 1, 3, 3));
        assert_eq!(summary.boards_by_mark().get(&Mark::X), Some(&3));
        assert_eq!(summary.boards_by_mark().get(&Mark::O), None);
    }
}
