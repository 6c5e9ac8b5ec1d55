//! First-class invariants of the board registry.
//!
//! Invariants are logical properties that must hold after every
//! expansion. They are testable independently and checked by the tree
//! driver in debug builds.

mod distinct_targets;
mod move_coordinates;
mod unique_boards;
mod won_leaves;

pub use distinct_targets::DistinctMoveTargets;
pub use move_coordinates::MoveCoordinatesAgree;
pub use unique_boards::UniqueCanonicalBoards;
pub use won_leaves::WonBoardsAreLeaves;

use crate::registry::BoardRegistry;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for four-element tuples, one per registry invariant.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        for (holds, description) in [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
            (I4::holds(state), I4::description()),
        ] {
            if !holds {
                violations.push(InvariantViolation::new(description));
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant of a registry, checked together.
pub type RegistryInvariants = (
    UniqueCanonicalBoards,
    DistinctMoveTargets,
    WonBoardsAreLeaves,
    MoveCoordinatesAgree,
);

/// Checks every registry invariant.
pub fn check_registry(registry: &BoardRegistry) -> Result<(), Vec<InvariantViolation>> {
    RegistryInvariants::check_all(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_fresh_registry_satisfies_all() {
        let registry = BoardRegistry::new();
        assert!(check_registry(&registry).is_ok());
    }

    #[test]
    fn test_expanded_registry_satisfies_all() {
        let mut registry = BoardRegistry::new();
        let root = registry.empty_board();
        registry.fill_possible_moves(root, Mark::X).expect("expands");
        let children: Vec<_> = registry
            .board(root)
            .expect("registered")
            .moves()
            .iter()
            .map(|m| *m.destination())
            .collect();
        for child in children {
            registry.fill_possible_moves(child, Mark::O).expect("expands");
        }
        assert_eq!(check_registry(&registry), Ok(()));
    }

    #[test]
    fn test_set_reports_each_failure() {
        struct Never;
        impl Invariant<()> for Never {
            fn holds(_: &()) -> bool {
                false
            }
            fn description() -> &'static str {
                "never holds"
            }
        }
        struct Always;
        impl Invariant<()> for Always {
            fn holds(_: &()) -> bool {
                true
            }
            fn description() -> &'static str {
                "always holds"
            }
        }

        assert_eq!(
            <(Always, Never, Always, Always)>::check_all(&()),
            Err(vec![InvariantViolation::new("never holds")])
        );
        assert_eq!(
            <(Never, Always, Never, Never)>::check_all(&()).map_err(|v| v.len()),
            Err(3)
        );
        assert_eq!(<(Always, Always, Always, Always)>::check_all(&()), Ok(()));
    }
}
