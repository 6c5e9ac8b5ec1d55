//! The eight symmetries of the square (dihedral group of order 8).
//!
//! Every transform is an optional horizontal flip followed by zero to
//! three clockwise quarter turns. Grid and coordinate mappings agree:
//! a mark at `at` in `grid` lands at `t.apply_to_coordinates(at)` in
//! `t.apply_to_grid(&grid)`.

use crate::grid::Grid;
use crate::types::{Coordinates, SIZE};
use serde::{Deserialize, Serialize};

/// One element of the symmetry group of the square.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Transform {
    /// Leaves the grid unchanged.
    #[default]
    Identity,
    /// Quarter turn clockwise.
    Rotate90,
    /// Half turn.
    Rotate180,
    /// Three quarter turns clockwise.
    Rotate270,
    /// Horizontal flip (each row reversed).
    Flip,
    /// Flip, then a quarter turn.
    FlipRotate90,
    /// Flip, then a half turn.
    FlipRotate180,
    /// Flip, then three quarter turns.
    FlipRotate270,
}

impl Transform {
    /// All eight transforms in canonical order. Ties in the normal form
    /// go to the earliest entry.
    pub const ALL: [Transform; 8] = [
        Transform::Identity,
        Transform::Rotate90,
        Transform::Rotate180,
        Transform::Rotate270,
        Transform::Flip,
        Transform::FlipRotate90,
        Transform::FlipRotate180,
        Transform::FlipRotate270,
    ];

    /// Whether a horizontal flip is applied before rotating.
    pub fn flipped(self) -> bool {
        matches!(
            self,
            Transform::Flip
                | Transform::FlipRotate90
                | Transform::FlipRotate180
                | Transform::FlipRotate270
        )
    }

    /// Number of clockwise quarter turns (0-3).
    pub fn rotations(self) -> usize {
        match self {
            Transform::Identity | Transform::Flip => 0,
            Transform::Rotate90 | Transform::FlipRotate90 => 1,
            Transform::Rotate180 | Transform::FlipRotate180 => 2,
            Transform::Rotate270 | Transform::FlipRotate270 => 3,
        }
    }

    /// Position in [`Transform::ALL`].
    pub fn ordinal(self) -> usize {
        usize::from(self.flipped()) * 4 + self.rotations()
    }

    /// Applies this transform to a grid.
    pub fn apply_to_grid(self, grid: &Grid) -> Grid {
        let mut out = if self.flipped() {
            grid.flip_horizontal()
        } else {
            *grid
        };
        for _ in 0..self.rotations() {
            out = out.rotate_clockwise();
        }
        out
    }

    /// Applies this transform to a cell position.
    pub fn apply_to_coordinates(self, at: Coordinates) -> Coordinates {
        let (mut row, mut col) = (at.row(), at.col());
        if self.flipped() {
            col = SIZE - 1 - col;
        }
        for _ in 0..self.rotations() {
            (row, col) = (col, SIZE - 1 - row);
        }
        Coordinates::on_grid(row, col)
    }

    /// Transform that flips when `flipped`, then turns `rotations` times.
    fn from_parts(flipped: bool, rotations: usize) -> Transform {
        Transform::ALL[usize::from(flipped) * 4 + rotations % 4]
    }

    /// Composition: the transform equal to applying `self`, then `next`.
    pub fn then(self, next: Transform) -> Transform {
        // A flip reverses the turn direction of whatever ran before it.
        let rotations = if next.flipped() {
            next.rotations() + 4 - self.rotations()
        } else {
            next.rotations() + self.rotations()
        };
        Transform::from_parts(self.flipped() != next.flipped(), rotations)
    }

    /// The transform undoing this one.
    pub fn inverse(self) -> Transform {
        match self {
            Transform::Rotate90 => Transform::Rotate270,
            Transform::Rotate270 => Transform::Rotate90,
            // Half turn and all reflections are involutions.
            other => other,
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Transform::Identity => "identity",
            Transform::Rotate90 => "rotate 90",
            Transform::Rotate180 => "rotate 180",
            Transform::Rotate270 => "rotate 270",
            Transform::Flip => "flip",
            Transform::FlipRotate90 => "flip + rotate 90",
            Transform::FlipRotate180 => "flip + rotate 180",
            Transform::FlipRotate270 => "flip + rotate 270",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
