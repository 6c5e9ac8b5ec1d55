//! Tic-tac-toe symmetry library - the game tree up to rotation and reflection
//!
//! Enumerates every distinct tic-tac-toe position, treating two grids as
//! the same board when one is a rotation or flip of the other, and lays
//! the positions out in breadth-first plies for downstream rendering.
//!
//! # Architecture
//!
//! - **Grid**: pure 3x3 primitives (rotate, flip, win and full detection)
//! - **Transform**: the eight symmetries of the square, composable and invertible
//! - **Registry**: maps any grid to its canonical board and reports the transform used
//! - **Move**: an edge between boards, with the played cell translated onto the destination
//! - **Turn / GameTree**: breadth-first driver that runs until the tree is exhausted
//!
//! # Example
//!
//! ```
//! use tictactoe_symmetry::{GameTree, TreeConfig};
//!
//! # fn example() -> Result<(), tictactoe_symmetry::TreeError> {
//! let mut tree = GameTree::new(TreeConfig::default());
//! let summary = tree.run()?;
//! assert_eq!(*summary.total_boards(), 765);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod canonical;
mod config;
mod error;
mod grid;
mod moves;
mod registry;
mod transform;
mod tree;
mod turn;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Grid primitives
pub use grid::Grid;
pub use types::{Cell, Coordinates, Mark, SIZE};

// Crate-level exports - Symmetry
pub use canonical::{CanonicalKey, equivalent, normal_form};
pub use transform::Transform;

// Crate-level exports - Canonicalization engine
pub use board::{Board, BoardId};
pub use moves::Move;
pub use registry::BoardRegistry;

// Crate-level exports - Tree driver
pub use config::{MAX_PLIES, TreeConfig};
pub use tree::{GameTree, PlyStats, TreeSummary};
pub use turn::Turn;

// Crate-level exports - Errors
pub use error::{ConfigError, GridError, TreeError};
