//! Check, checkmate, and castling rules.
//!
//! Every query here is a pure function of a [`Board`](crate::Board).
//! Hypothetical moves are played out on clones, never on the caller's board.

mod castling;
mod check;
mod checkmate;

pub use castling::{can_castle, castle};
pub use check::{is_in_check, is_square_attacked};
pub use checkmate::is_in_checkmate;
