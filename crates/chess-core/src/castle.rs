//! Castling sides.

use std::fmt;
use std::str::FromStr;

use crate::ChessError;

/// The two directions a king can castle in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the rook on the highest column.
    Kingside,
    /// Toward the rook on column 0.
    Queenside,
}

impl CastleSide {
    /// Column step from the king toward the castling rook.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Kingside => write!(f, "kingside"),
            CastleSide::Queenside => write!(f, "queenside"),
        }
    }
}

impl FromStr for CastleSide {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kingside" | "king" => Ok(CastleSide::Kingside),
            "queenside" | "queen" => Ok(CastleSide::Queenside),
            _ => Err(ChessError::InvalidCastleSide(s.to_string())),
        }
    }
}
