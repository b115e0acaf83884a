//! Core types for console chess.
//!
//! This crate provides the value types shared by the engine and the console:
//! - [`PieceKind`] and [`Color`] for piece identity
//! - [`Coord`] and [`BOARD_SIZE`] for board coordinates
//! - [`CastleSide`] for castling requests
//! - [`ChessError`] for recoverable board and parsing failures

mod castle;
mod color;
mod coord;
mod error;
mod piece;

pub use castle::CastleSide;
pub use color::Color;
pub use coord::{Coord, BOARD_SIZE};
pub use error::ChessError;
pub use piece::PieceKind;
