//! Chess piece kinds.

use std::fmt;
use std::str::FromStr;

use crate::{ChessError, Color};

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Back rank layout, from column 0 outward.
    pub const BACK_RANK: [PieceKind; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Returns the glyph used to draw this piece with the given color.
    pub const fn symbol(self, color: Color) -> char {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => '♙',
            (PieceKind::Knight, Color::White) => '♘',
            (PieceKind::Bishop, Color::White) => '♗',
            (PieceKind::Rook, Color::White) => '♖',
            (PieceKind::Queen, Color::White) => '♕',
            (PieceKind::King, Color::White) => '♔',
            (PieceKind::Pawn, Color::Black) => '♟',
            (PieceKind::Knight, Color::Black) => '♞',
            (PieceKind::Bishop, Color::Black) => '♝',
            (PieceKind::Rook, Color::Black) => '♜',
            (PieceKind::Queen, Color::Black) => '♛',
            (PieceKind::King, Color::Black) => '♚',
        }
    }

    /// Returns the lowercase name used by the piece factory.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for PieceKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ChessError::InvalidPieceType(s.to_string()))
    }
}
