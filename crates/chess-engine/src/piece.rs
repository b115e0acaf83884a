//! Pieces on the board.

use std::fmt;

use chess_core::{ChessError, Color, Coord, PieceKind};

use crate::movegen::{legal_moves, MoveSet};
use crate::Board;

/// A piece with its identity and current square.
///
/// `kind` and `color` never change after creation. `position` and
/// `has_moved` are only updated by the [`Board`] that owns the piece, so
/// the position always matches the square the board keeps it on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Coord,
    has_moved: bool,
}

impl Piece {
    /// Creates an unmoved piece.
    pub const fn new(kind: PieceKind, color: Color, position: Coord) -> Self {
        Piece {
            kind,
            color,
            position,
            has_moved: false,
        }
    }

    /// Creates a piece from its lowercase kind name ("king", "pawn", ...).
    pub fn from_name(name: &str, color: Color, position: Coord) -> Result<Self, ChessError> {
        let kind = name.parse::<PieceKind>()?;
        Ok(Piece::new(kind, color, position))
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub const fn position(&self) -> Coord {
        self.position
    }

    /// Returns true once the piece has been relocated, castling included.
    #[inline]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Returns the glyph used to draw this piece.
    #[inline]
    pub const fn symbol(&self) -> char {
        self.kind.symbol(self.color)
    }

    /// Returns the squares this piece may move to on `board`.
    ///
    /// Moves are pseudo-legal: a move that leaves the own king in check is
    /// still listed.
    pub fn legal_moves(&self, board: &Board) -> MoveSet {
        legal_moves(self, board)
    }

    pub(crate) fn set_position(&mut self, position: Coord) {
        self.position = position;
    }

    pub(crate) fn mark_moved(&mut self) {
        self.has_moved = true;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
