//! Parsing of one line of player input.

use std::str::FromStr;

use chess_core::{CastleSide, ChessError, Coord};

/// What a player typed at the source prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the piece on this square.
    Square(Coord),
    /// Castle toward this side.
    Castle(CastleSide),
    /// End the session.
    Quit,
}

impl FromStr for Command {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            return Ok(Command::Quit);
        }
        let mut words = line.split_whitespace();
        if words.next().is_some_and(|w| w.eq_ignore_ascii_case("castle")) {
            let side = words.collect::<Vec<_>>().join(" ");
            return side.parse().map(Command::Castle);
        }
        line.parse().map(Command::Square)
    }
}
