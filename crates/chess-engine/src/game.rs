//! Turn management for a two-player game.
//!
//! [`Game`] owns one [`Board`] and the side to move. It validates a
//! requested move against the mover's legal moves, applies it, and then
//! checks whether the opponent has been checkmated.

use chess_core::{CastleSide, ChessError, Color, Coord, PieceKind};
use thiserror::Error;

use crate::rules::{castle, is_in_check, is_in_checkmate};
use crate::{move_piece, Board};

/// Error type for game operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameOver,
    /// There is no piece on the source square.
    #[error("no piece at {0}")]
    EmptySquare(Coord),
    /// The piece on the source square belongs to the other player.
    #[error("it is {expected}'s turn, but that piece is {found}")]
    WrongColor { expected: Color, found: Color },
    /// The destination is not among the piece's legal moves.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },
    /// The board rejected the operation.
    #[error(transparent)]
    Board(#[from] ChessError),
}

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// The side to move is waiting to play.
    InProgress,
    /// The loser's king is in check with no escape.
    Checkmate { winner: Color },
    /// The loser's king was taken. Moves are pseudo-legal, so a player may
    /// leave their king en prise and lose it outright.
    KingCaptured { winner: Color },
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied and the turn passed.
    Moved {
        /// Kind of the piece taken by the move, if any.
        captured: Option<PieceKind>,
        /// Whether the player now to move is in check.
        check: bool,
    },
    /// The move ended the game.
    GameOver(GameStatus),
}

/// A game in progress.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game from the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            status: GameStatus::InProgress,
        }
    }

    /// Creates a game from a custom board with `turn` to move.
    ///
    /// Fails when either color has more than one king. A position that is
    /// already mate starts out finished.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, GameError> {
        for color in Color::ALL {
            board.king(color)?;
        }
        let status = if is_in_checkmate(&board, turn) {
            GameStatus::Checkmate {
                winner: turn.opposite(),
            }
        } else {
            GameStatus::InProgress
        };
        Ok(Game {
            board,
            turn,
            status,
        })
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_in_check(&self.board, self.turn)
    }

    /// Moves the side to move's piece on `from` to `to`.
    pub fn try_move(&mut self, from: Coord, to: Coord) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let piece = self
            .board
            .piece_at(from)?
            .ok_or(GameError::EmptySquare(from))?;
        if piece.color() != self.turn {
            return Err(GameError::WrongColor {
                expected: self.turn,
                found: piece.color(),
            });
        }
        if !self.board.in_bounds(to) {
            return Err(ChessError::OutOfBounds(to).into());
        }
        if !piece.legal_moves(&self.board).contains(&to) {
            tracing::debug!(%from, %to, kind = %piece.kind(), "rejected move");
            return Err(GameError::IllegalMove { from, to });
        }

        let captures_before = self.board.captured().len();
        move_piece(&mut self.board, from, to)?;
        let captured = self.board.captured()[captures_before..]
            .first()
            .map(|p| p.kind());

        tracing::info!(color = %self.turn, %from, %to, "move applied");
        Ok(self.finish_turn(captured))
    }

    /// Castles the side to move toward `side`.
    pub fn try_castle(&mut self, side: CastleSide) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        castle(&mut self.board, self.turn, side)?;
        tracing::info!(color = %self.turn, %side, "castled");
        Ok(self.finish_turn(None))
    }

    /// Detects the end of the game, otherwise hands the move to the opponent.
    fn finish_turn(&mut self, captured: Option<PieceKind>) -> MoveOutcome {
        let mover = self.turn;
        let opponent = mover.opposite();

        if captured == Some(PieceKind::King) {
            self.status = GameStatus::KingCaptured { winner: mover };
        } else if is_in_checkmate(&self.board, opponent) {
            self.status = GameStatus::Checkmate { winner: mover };
        }

        if self.is_over() {
            tracing::info!(status = ?self.status, "game over");
            return MoveOutcome::GameOver(self.status);
        }

        self.turn = opponent;
        MoveOutcome::Moved {
            captured,
            check: is_in_check(&self.board, opponent),
        }
    }
}
