//! Deduplicated moves never alias a destination.

use super::Invariant;
use crate::registry::BoardRegistry;
use std::collections::HashSet;

/// Invariant: the moves of a board reach pairwise distinct boards, and
/// move indices grow strictly across the run.
pub struct DistinctMoveTargets;

impl Invariant<BoardRegistry> for DistinctMoveTargets {
    fn holds(registry: &BoardRegistry) -> bool {
        let mut indices = HashSet::new();
        registry.boards().iter().all(|board| {
            let mut targets = HashSet::new();
            board.moves().iter().all(|m| {
                *m.source() == *board.id()
                    && targets.insert(*m.destination())
                    && indices.insert(*m.index())
            })
        }) && indices.len() == registry.move_count()
    }

    fn description() -> &'static str {
        "Moves of a board target distinct boards and carry unique indices"
    }
}
