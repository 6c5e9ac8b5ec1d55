//! Won boards end their branch.

use super::Invariant;
use crate::registry::BoardRegistry;

/// Invariant: a board with a complete line has no moves.
pub struct WonBoardsAreLeaves;

impl Invariant<BoardRegistry> for WonBoardsAreLeaves {
    fn holds(registry: &BoardRegistry) -> bool {
        registry
            .boards()
            .iter()
            .filter(|board| board.is_winner())
            .all(|board| board.moves().is_empty())
    }

    fn description() -> &'static str {
        "Won boards never generate moves"
    }
}
