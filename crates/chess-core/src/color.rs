//! Player color representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChessError;

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Both colors, white first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the pawn direction for this color (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the row pawns of this color start on for a board of `size` rows.
    #[inline]
    pub const fn pawn_rank(self, size: i32) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => size - 2,
        }
    }

    /// Returns the back rank for this color on a board of `size` rows.
    #[inline]
    pub const fn back_rank(self, size: i32) -> i32 {
        match self {
            Color::White => 0,
            Color::Black => size - 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for Color {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            _ => Err(ChessError::InvalidColor(s.to_string())),
        }
    }
}
