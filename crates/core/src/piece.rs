//! The active falling piece.

use arrayvec::ArrayVec;

use crate::pieces::{Shape, Template};
use crate::types::{Rgb, MAX_SHAPE_DIM};

/// Absolute board cells covered by a piece
pub type PieceCells = ArrayVec<(i32, i32), { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// A shape with a color, anchored at the board cell of its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub shape: Shape,
    pub color: Rgb,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece at the spawn position: horizontally centred, top row
    pub fn spawn(template: &Template, cols: u16) -> Self {
        let x = (cols / 2) as i32 - (template.shape.cols() / 2) as i32;
        Self {
            shape: template.shape,
            color: template.color,
            x,
            y: 0,
        }
    }

    /// Replace the shape with its clockwise rotation.
    ///
    /// Does not look at the board; the caller validates the new orientation.
    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    /// Absolute cells after an offset of (dx, dy)
    pub fn cells_at(&self, dx: i32, dy: i32) -> PieceCells {
        self.shape
            .cells()
            .map(|(cx, cy)| (self.x + cx + dx, self.y + cy + dy))
            .collect()
    }

    pub fn cells(&self) -> PieceCells {
        self.cells_at(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::PieceKind;

    #[test]
    fn test_spawn_is_centred() {
        // 10 / 2 - 4 / 2 = 3
        let i = Piece::spawn(&PieceKind::I.template(), 10);
        assert_eq!((i.x, i.y), (3, 0));

        // 10 / 2 - 3 / 2 = 4
        let t = Piece::spawn(&PieceKind::T.template(), 10);
        assert_eq!((t.x, t.y), (4, 0));

        // 10 / 2 - 2 / 2 = 4
        let o = Piece::spawn(&PieceKind::O.template(), 10);
        assert_eq!((o.x, o.y), (4, 0));
    }

    #[test]
    fn test_spawn_keeps_template_color() {
        let piece = Piece::spawn(&PieceKind::S.template(), 10);
        assert_eq!(piece.color, PieceKind::S.color());
        assert_eq!(piece.shape, PieceKind::S.shape());
    }

    #[test]
    fn test_rotate_keeps_anchor() {
        let mut piece = Piece::spawn(&PieceKind::L.template(), 10);
        let (x, y) = (piece.x, piece.y);
        piece.rotate();
        assert_eq!((piece.x, piece.y), (x, y));
        assert_eq!(piece.shape, PieceKind::L.shape().rotated());
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece {
            x: 2,
            y: 5,
            ..Piece::spawn(&PieceKind::O.template(), 10)
        };
        let cells: Vec<_> = piece.cells().into_iter().collect();
        assert_eq!(cells, vec![(2, 5), (3, 5), (2, 6), (3, 6)]);

        let below: Vec<_> = piece.cells_at(0, 1).into_iter().collect();
        assert_eq!(below, vec![(2, 6), (3, 6), (2, 7), (3, 7)]);
    }
}
