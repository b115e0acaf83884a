//! Errors raised by board operations and value parsing.

use thiserror::Error;

use crate::{CastleSide, Color, Coord};

/// Errors that can occur when operating on a board or parsing core values.
///
/// Every variant is recoverable: a caller can report it and ask again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChessError {
    #[error("coordinate {0} is off the board")]
    OutOfBounds(Coord),

    #[error("no piece at {0}")]
    MissingPiece(Coord),

    #[error("invalid piece type: {0}")]
    InvalidPieceType(String),

    #[error("invalid color: expected 'white' or 'black', got '{0}'")]
    InvalidColor(String),

    #[error("invalid coordinate: expected 'row col', got '{0}'")]
    InvalidCoord(String),

    #[error("invalid castling side: expected 'kingside' or 'queenside', got '{0}'")]
    InvalidCastleSide(String),

    #[error("more than one {0} king on the board")]
    MultipleKings(Color),

    #[error("{color} cannot castle {side}")]
    CastlingUnavailable { color: Color, side: CastleSide },
}
