//! The interactive turn loop.
//!
//! A [`Session`] alternates between drawing the board and reading a move
//! for the side to play. Input and output are generic so the loop can be
//! driven from a script in tests.

use std::io::{self, BufRead, Write};

use chess_core::{ChessError, Color};
use chess_engine::{Game, GameStatus, MoveOutcome};

use crate::command::Command;

const FROM_PROMPT: &str =
    "Enter the row and column of the piece you want to move (e.g., '6 3'): ";
const TO_PROMPT: &str =
    "Enter the row and column where you want to move the piece (e.g., '4 3'): ";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Checkmate(Color),
    KingCaptured(Color),
    Quit,
    EndOfInput,
}

/// One game played over a line-based reader and writer.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
    show_captures: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W, show_captures: bool) -> Self {
        Session {
            game,
            input,
            output,
            show_captures,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Plays until checkmate, a captured king, `quit`, or end of input.
    ///
    /// Bad input and rejected moves are reported and the same player is
    /// asked again. Only I/O failures end the loop with an error.
    pub fn run(&mut self) -> io::Result<SessionEnd> {
        if let Some(end) = self.finished()? {
            return Ok(end);
        }

        loop {
            writeln!(self.output, "{}", self.game.board().render(self.show_captures))?;
            writeln!(self.output, "{}'s turn:", self.game.turn())?;
            if self.game.is_check() {
                writeln!(self.output, "{} is in check.", self.game.turn())?;
            }

            let Some(line) = self.prompt(FROM_PROMPT)? else {
                return Ok(SessionEnd::EndOfInput);
            };
            let result = match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(self.quit()),
                Ok(Command::Castle(side)) => self.game.try_castle(side),
                Ok(Command::Square(from)) => {
                    let Some(line) = self.prompt(TO_PROMPT)? else {
                        return Ok(SessionEnd::EndOfInput);
                    };
                    match line.parse::<Command>() {
                        Ok(Command::Square(to)) => self.game.try_move(from, to),
                        Ok(Command::Quit) => return Ok(self.quit()),
                        Ok(Command::Castle(_)) => {
                            let e = ChessError::InvalidCoord(line.trim().to_string());
                            self.reject_input(&line, &e)?;
                            continue;
                        }
                        Err(e) => {
                            self.reject_input(&line, &e)?;
                            continue;
                        }
                    }
                }
                Err(e) => {
                    self.reject_input(&line, &e)?;
                    continue;
                }
            };

            match result {
                Ok(MoveOutcome::Moved { captured, .. }) => {
                    if let Some(kind) = captured {
                        writeln!(self.output, "Captured {}.", kind)?;
                    }
                }
                Ok(MoveOutcome::GameOver(_)) => {
                    if let Some(end) = self.finished()? {
                        return Ok(end);
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "move rejected");
                    writeln!(self.output, "Invalid move: {}. Try again.", e)?;
                }
            }
        }
    }

    /// Announces the result if the game is over.
    fn finished(&mut self) -> io::Result<Option<SessionEnd>> {
        let end = match self.game.status() {
            GameStatus::InProgress => return Ok(None),
            GameStatus::Checkmate { winner } => {
                writeln!(self.output, "{}", self.game.board().render(self.show_captures))?;
                writeln!(self.output, "Checkmate! {} wins.", winner)?;
                SessionEnd::Checkmate(winner)
            }
            GameStatus::KingCaptured { winner } => {
                writeln!(self.output, "{}", self.game.board().render(self.show_captures))?;
                writeln!(self.output, "The king has fallen! {} wins.", winner)?;
                SessionEnd::KingCaptured(winner)
            }
        };
        tracing::info!(?end, "game over");
        Ok(Some(end))
    }

    fn quit(&self) -> SessionEnd {
        tracing::info!(turn = %self.game.turn(), "player quit");
        SessionEnd::Quit
    }

    /// Writes `prompt` and reads one line. Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn reject_input(&mut self, line: &str, error: &dyn std::error::Error) -> io::Result<()> {
        tracing::warn!(input = line.trim(), %error, "unparseable input");
        writeln!(self.output, "Invalid input: {}. Try again.", error)
    }
}
