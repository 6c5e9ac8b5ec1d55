//! Translated coordinates point at the played mark.

use super::Invariant;
use crate::registry::BoardRegistry;

/// Invariant: for every move, the destination's stored grid holds the
/// move's mark at `next_coordinates`, and the move's transform carries
/// `prev_coordinates` there.
pub struct MoveCoordinatesAgree;

impl Invariant<BoardRegistry> for MoveCoordinatesAgree {
    fn holds(registry: &BoardRegistry) -> bool {
        registry.boards().iter().flat_map(|board| board.moves()).all(|m| {
            let Some(destination) = registry.board(*m.destination()) else {
                return false;
            };
            destination.grid().get(*m.next_coordinates()).mark() == Some(*m.mark())
                && m.transform().apply_to_coordinates(*m.prev_coordinates())
                    == *m.next_coordinates()
        })
    }

    fn description() -> &'static str {
        "Move coordinates land on the played mark of the destination board"
    }
}
