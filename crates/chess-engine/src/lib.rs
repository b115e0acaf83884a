//! Move legality, check, and checkmate rules for a two-player chess game.
//!
//! This crate provides:
//! - [`Piece`] - a piece with its kind, color, and current square
//! - [`Board`] - piece placement and the capture log
//! - Move generation ([`legal_moves`]) for all six piece kinds
//! - Check, checkmate, and castling rules in [`rules`]
//! - [`Game`] - turn management on top of a board
//!
//! # Architecture
//!
//! The board is a row-major grid of owned pieces. Move generation takes a
//! shared reference to the board; only [`Board::place`], [`Board::remove`],
//! [`Board::relocate`], and castling mutate it. Hypothetical moves are
//! evaluated on clones.
//!
//! # Example
//!
//! ```
//! use chess_core::{Color, Coord};
//! use chess_engine::{is_in_check, is_in_checkmate, move_piece, Board};
//!
//! let mut board = Board::new();
//! let pawn = board.piece_at(Coord::new(1, 4)).unwrap().unwrap();
//! assert!(pawn.legal_moves(&board).contains(&Coord::new(3, 4)));
//!
//! move_piece(&mut board, Coord::new(1, 4), Coord::new(3, 4)).unwrap();
//! assert!(!is_in_check(&board, Color::Black));
//! assert!(!is_in_checkmate(&board, Color::Black));
//! println!("{}", board);
//! ```

mod board;
mod game;
pub mod movegen;
mod piece;
mod render;
pub mod rules;

pub use board::{move_piece, Board};
pub use game::{Game, GameError, GameStatus, MoveOutcome};
pub use movegen::{legal_moves, MoveSet};
pub use piece::Piece;
pub use rules::{can_castle, castle, is_in_check, is_in_checkmate, is_square_attacked};
