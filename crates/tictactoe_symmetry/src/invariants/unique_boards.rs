//! One board per equivalence class, indexed in creation order.

use super::Invariant;
use crate::canonical::normal_form;
use crate::registry::BoardRegistry;
use std::collections::HashSet;

/// Invariant: each canonical key appears once, each board's key is the
/// normal form of its stored grid, and ids match creation order.
pub struct UniqueCanonicalBoards;

impl Invariant<BoardRegistry> for UniqueCanonicalBoards {
    fn holds(registry: &BoardRegistry) -> bool {
        let mut keys = HashSet::new();
        registry.boards().iter().enumerate().all(|(i, board)| {
            board.index() == i
                && normal_form(board.grid()).0 == *board.key()
                && keys.insert(*board.key())
        })
    }

    fn description() -> &'static str {
        "Registry holds exactly one board per equivalence class, in creation order"
    }
}
