//! Board coordinates.

use std::fmt;
use std::str::FromStr;

use crate::ChessError;

/// Side length of the standard board.
pub const BOARD_SIZE: i32 = 8;

/// A (row, column) pair identifying a board square.
///
/// Components are signed so that offsets stepping off the board can be
/// represented; whether a coordinate lies on a given board is decided by
/// [`Coord::in_bounds`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Creates a coordinate from row and column.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Coord { row, col }
    }

    /// Returns the coordinate shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Coord {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Returns true if both components fall in `0..size`.
    #[inline]
    pub const fn in_bounds(self, size: i32) -> bool {
        self.row >= 0 && self.row < size && self.col >= 0 && self.col < size
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses the console form: two whitespace separated integers, row first.
impl FromStr for Coord {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidCoord(s.to_string());
        let mut parts = s.split_whitespace();
        let row = parts.next().ok_or_else(invalid)?;
        let col = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }
        let row = row.parse::<i32>().map_err(|_| invalid())?;
        let col = col.parse::<i32>().map_err(|_| invalid())?;
        Ok(Coord::new(row, col))
    }
}
