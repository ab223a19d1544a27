//! Pieces module - tetromino shape matrices and naive rotation
//!
//! Every shape is a small boolean occupancy matrix (at most 4x4). Rotation is
//! a plain transpose-and-reverse of that matrix around its own origin: there
//! is no kick table and no center-of-mass correction, so a rotation that ends
//! up colliding is simply rejected by the caller.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{Rgb, ShapeType, BOARD_WIDTH};

/// Largest side of any shape matrix.
pub const MAX_SHAPE_DIM: usize = 4;

/// One row of a shape matrix.
pub type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Rectangular occupancy matrix of a piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeMatrix {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl ShapeMatrix {
    /// Build a matrix from rows of 0/1 flags.
    ///
    /// All rows must have the same length and no side may exceed
    /// [`MAX_SHAPE_DIM`]; anything else is a programming error.
    pub fn from_bits(bits: &[&[u8]]) -> Self {
        assert!(bits.len() <= MAX_SHAPE_DIM, "shape has too many rows");
        let width = bits.first().map_or(0, |row| row.len());
        assert!(width <= MAX_SHAPE_DIM, "shape has too many columns");

        let rows = bits
            .iter()
            .map(|row| {
                assert_eq!(row.len(), width, "shape rows must be rectangular");
                row.iter().map(|&b| b != 0).collect::<ShapeRow>()
            })
            .collect();
        Self { rows }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[ShapeRow] {
        &self.rows
    }

    /// Offsets `(x, y)` of every filled sub-cell, row by row.
    pub fn filled(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise: transpose, then reverse each new row.
    ///
    /// New row `i` is old column `i` read from bottom to top, so a `w x h`
    /// matrix becomes `h x w`.
    pub fn rotated_cw(&self) -> Self {
        let height = self.height();
        let rows = (0..self.width())
            .map(|col| {
                (0..height)
                    .rev()
                    .map(|row| self.rows[row][col])
                    .collect::<ShapeRow>()
            })
            .collect();
        Self { rows }
    }
}

/// Canonical spawn-orientation matrix for a shape type.
pub fn canonical_shape(kind: ShapeType) -> ShapeMatrix {
    match kind {
        ShapeType::I => ShapeMatrix::from_bits(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        ShapeType::J => ShapeMatrix::from_bits(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        ShapeType::L => ShapeMatrix::from_bits(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        ShapeType::O => ShapeMatrix::from_bits(&[&[1, 1], &[1, 1]]),
        ShapeType::S => ShapeMatrix::from_bits(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        ShapeType::T => ShapeMatrix::from_bits(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        ShapeType::Z => ShapeMatrix::from_bits(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    }
}

/// Spawn column for a shape of the given width: horizontally centered.
pub fn spawn_x(shape_width: usize) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape_width / 2) as i8
}

/// Active falling piece
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Tetromino {
    pub kind: ShapeType,
    pub shape: ShapeMatrix,
    pub color: Rgb,
    /// Column of the matrix's top-left corner.
    pub x: i8,
    /// Row of the matrix's top-left corner; may be negative.
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position (centered, row 0)
    pub fn new(kind: ShapeType) -> Self {
        let shape = canonical_shape(kind);
        Self {
            kind,
            x: spawn_x(shape.width()),
            y: 0,
            color: kind.color(),
            shape,
        }
    }

    /// Absolute board coordinates of every filled sub-cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .filled()
            .map(move |(sx, sy)| (self.x.saturating_add(sx), self.y.saturating_add(sy)))
    }

    /// Same piece shifted by `(dx, dy)`. Legality is the caller's concern.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self.clone()
        }
    }

    /// Same piece rotated 90° clockwise in place; O comes back unchanged.
    pub fn rotated(&self) -> Self {
        if self.kind == ShapeType::O {
            return self.clone();
        }
        Self {
            shape: self.shape.rotated_cw(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in ShapeType::ALL {
            assert_eq!(canonical_shape(kind).filled().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_spawn_positions_are_centered() {
        assert_eq!(Tetromino::new(ShapeType::I).x, 3);
        assert_eq!(Tetromino::new(ShapeType::O).x, 4);
        assert_eq!(Tetromino::new(ShapeType::T).x, 4);
        for kind in ShapeType::ALL {
            assert_eq!(Tetromino::new(kind).y, 0);
        }
    }

    #[test]
    fn test_rotation_of_t() {
        let rotated = canonical_shape(ShapeType::T).rotated_cw();
        assert_eq!(
            rotated,
            ShapeMatrix::from_bits(&[&[0, 1, 0], &[0, 1, 1], &[0, 1, 0]])
        );
    }

    #[test]
    fn test_rotation_transposes_dimensions() {
        let bar = ShapeMatrix::from_bits(&[&[1, 1, 1, 1]]);
        let upright = bar.rotated_cw();
        assert_eq!(upright.width(), 1);
        assert_eq!(upright.height(), 4);
        assert_eq!(upright.rotated_cw().rotated_cw().rotated_cw(), bar);
    }

    #[test]
    fn test_translate_keeps_shape() {
        let piece = Tetromino::new(ShapeType::L);
        let moved = piece.translated(-2, 3);
        assert_eq!(moved.shape, piece.shape);
        assert_eq!((moved.x, moved.y), (piece.x - 2, piece.y + 3));
    }
}
