//! Pieces module - the tetromino catalog and the rotation transform
//!
//! Every piece is four cell offsets relative to the anchor. Rotation turns the offsets a quarter
//! turn clockwise about the local origin, `(x, y) -> (-y, x)`, with no wall kicks. The visual
//! pivot therefore differs per shape, and the O piece shifts one column when turned.

use crate::types::{Color, PieceKind, Rotation};

/// Offset of a single block relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Unrotated offsets for a piece kind.
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    match kind {
        PieceKind::I => [(0, 0), (1, 0), (2, 0), (3, 0)],
        PieceKind::J => [(0, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::L => [(0, 1), (1, 1), (2, 1), (2, 0)],
        PieceKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        PieceKind::S => [(1, 0), (2, 0), (0, 1), (1, 1)],
        PieceKind::T => [(1, 0), (0, 1), (1, 1), (2, 1)],
        PieceKind::Z => [(0, 0), (1, 0), (1, 1), (2, 1)],
    }
}

/// Turn every offset a quarter turn clockwise (y grows downward).
pub fn rotate_shape(shape: &PieceShape) -> PieceShape {
    shape.map(|(x, y)| (-y, x))
}

/// A tetromino in a particular orientation.
///
/// Rotating produces a new `Piece`; the original is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: Rotation,
    shape: PieceShape,
}

impl Piece {
    /// The catalog form of `kind`.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            shape: spawn_shape(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// This piece turned a quarter turn clockwise.
    pub fn rotated(&self) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.rotate_cw(),
            shape: rotate_shape(&self.shape),
        }
    }

    /// Absolute board cells when anchored at `(x, y)`.
    pub fn cells_at(&self, x: i8, y: i8) -> [(i8, i8); 4] {
        self.shape.map(|(dx, dy)| (x + dx, y + dy))
    }
}
