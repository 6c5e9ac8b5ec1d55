//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a grid. Rules are kept apart from grid
//! storage so the symmetry code can rely on them being transform-invariant.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};
