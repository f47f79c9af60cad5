//! The falling piece and the moves it can make against a board.
//!
//! Every move is checked against the board first and either fully applied or not applied at all.

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::PieceSource;
use crate::types::PieceKind;

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fall {
    /// The piece moved down one row.
    Fell,
    /// The piece is resting on something and has to lock.
    Landed,
}

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub piece: Piece,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Anchor where new pieces appear: `(width / 2, 0)`.
    pub fn spawn_anchor(board: &Board) -> (i8, i8) {
        ((board.width() / 2) as i8, 0)
    }

    /// Place a fresh `kind` at the spawn anchor.
    ///
    /// Returns `None` when the anchor is blocked, which ends the game.
    pub fn spawn(kind: PieceKind, board: &Board) -> Option<Self> {
        let (x, y) = Self::spawn_anchor(board);
        let active = Self {
            piece: Piece::new(kind),
            x,
            y,
        };
        active.is_valid(board).then_some(active)
    }

    /// Draw the next kind from `source` and spawn it.
    pub fn spawn_from(source: &mut impl PieceSource, board: &Board) -> Option<Self> {
        Self::spawn(source.next_kind(), board)
    }

    pub fn kind(&self) -> PieceKind {
        self.piece.kind()
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.piece.cells_at(self.x, self.y)
    }

    /// Check if all blocks are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_position(&self.piece, self.x, self.y)
    }

    /// Shift by `(dx, dy)` if the target position is free.
    pub fn try_move(&mut self, board: &Board, dx: i8, dy: i8) -> bool {
        let (x, y) = (self.x + dx, self.y + dy);
        if !board.is_valid_position(&self.piece, x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    /// Turn a quarter turn clockwise in place. No kicks: a blocked turn is simply refused.
    pub fn try_rotate(&mut self, board: &Board) -> bool {
        let rotated = self.piece.rotated();
        if !board.is_valid_position(&rotated, self.x, self.y) {
            return false;
        }
        self.piece = rotated;
        true
    }

    /// One row of gravity.
    pub fn step_down(&mut self, board: &Board) -> Fall {
        if self.try_move(board, 0, 1) {
            Fall::Fell
        } else {
            Fall::Landed
        }
    }

    /// Fall until blocked; returns the number of rows travelled.
    pub fn drop_to_floor(&mut self, board: &Board) -> u32 {
        let mut rows = 0;
        while self.step_down(board) == Fall::Fell {
            rows += 1;
        }
        rows
    }
}
