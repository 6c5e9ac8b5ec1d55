//! Normal form of a grid under the symmetry group.
//!
//! The key of a grid is the lexicographically smallest flattened id
//! (`_` < `o` < `x`) among its eight images. Two grids share a key
//! exactly when one is a transform of the other.

use crate::grid::Grid;
use crate::transform::Transform;
use crate::types::{Cell, SIZE};
use serde::{Serialize, Serializer};

/// Canonical key of an equivalence class of grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey([u8; SIZE * SIZE]);

impl CanonicalKey {
    /// Key of a single orientation, without minimizing.
    fn of(grid: &Grid) -> Self {
        let mut bytes = [0u8; SIZE * SIZE];
        for (byte, cell) in bytes.iter_mut().zip(grid.cells()) {
            *byte = cell.symbol() as u8;
        }
        Self(bytes)
    }

    /// The key as a 9-character string.
    pub fn as_str(&self) -> &str {
        // Bytes only ever come from `Cell::symbol`, which is ASCII.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// The grid this key spells out.
    pub fn grid(&self) -> Grid {
        let rows: Vec<Vec<Cell>> = self
            .0
            .chunks(SIZE)
            .map(|row| {
                row.iter()
                    .map(|&byte| Cell::from_symbol(byte as char).unwrap_or_default())
                    .collect()
            })
            .collect();
        Grid::from_rows(&rows).unwrap_or_default()
    }
}

impl std::fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Computes the canonical key of `grid` and the transform reaching it.
///
/// Ties go to the earliest transform in [`Transform::ALL`], so the
/// result is deterministic.
pub fn normal_form(grid: &Grid) -> (CanonicalKey, Transform) {
    let mut best = (CanonicalKey::of(grid), Transform::Identity);
    for t in Transform::ALL.into_iter().skip(1) {
        let key = CanonicalKey::of(&t.apply_to_grid(grid));
        if key < best.0 {
            best = (key, t);
        }
    }
    best
}

/// True if some transform maps `a` onto `b`.
pub fn equivalent(a: &Grid, b: &Grid) -> bool {
    normal_form(a).0 == normal_form(b).0
}
