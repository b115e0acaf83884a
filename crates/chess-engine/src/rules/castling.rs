//! Castling.

use chess_core::{CastleSide, ChessError, Color, Coord, PieceKind};

use super::is_in_check;
use crate::Board;

/// The four squares involved in one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CastlePlan {
    king_from: Coord,
    king_to: Coord,
    rook_from: Coord,
    rook_to: Coord,
}

/// Works out the castling move for `color` toward `side`, if it is allowed.
///
/// The castling rook is the first piece met walking from the king toward
/// `side`; on a standard board that is the corner rook. It and the king must
/// never have moved, the king must not be in check, and none of the squares
/// between them may be attacked. A square counts as attacked when the king,
/// stood on it in a cloned board, would be in check.
fn plan(board: &Board, color: Color, side: CastleSide) -> Option<CastlePlan> {
    let king = board.find(PieceKind::King, color)?;
    if king.has_moved() || is_in_check(board, color) {
        return None;
    }

    let king_from = king.position();
    let dir = side.direction();
    let mut between = Vec::new();
    let mut rook_from = king_from.offset(0, dir);
    while board.in_bounds(rook_from) && board.occupant(rook_from).is_none() {
        between.push(rook_from);
        rook_from = rook_from.offset(0, dir);
    }

    let rook = board.occupant(rook_from)?;
    if rook.kind() != PieceKind::Rook || rook.color() != color || rook.has_moved() {
        return None;
    }
    // The king travels two squares and the rook lands on the one it crossed.
    if between.len() < 2 {
        return None;
    }

    let attacked = between.iter().any(|&sq| {
        let mut trial = board.clone();
        trial.relocate(king_from, sq).is_err() || is_in_check(&trial, color)
    });
    if attacked {
        return None;
    }

    Some(CastlePlan {
        king_from,
        king_to: king_from.offset(0, 2 * dir),
        rook_from,
        rook_to: king_from.offset(0, dir),
    })
}

/// Returns true if `color` may castle toward `side` on `board`.
pub fn can_castle(board: &Board, color: Color, side: CastleSide) -> bool {
    plan(board, color, side).is_some()
}

/// Castles `color` toward `side`, moving king and rook together.
///
/// Fails with [`ChessError::CastlingUnavailable`] without touching the board
/// when the move is not allowed.
pub fn castle(board: &mut Board, color: Color, side: CastleSide) -> Result<(), ChessError> {
    let plan = plan(board, color, side).ok_or(ChessError::CastlingUnavailable { color, side })?;

    // Every square in the plan is on the board and the landing squares are
    // empty, so neither relocation can fail.
    board.relocate(plan.king_from, plan.king_to)?;
    board.relocate(plan.rook_from, plan.rook_to)?;

    tracing::debug!(
        %color,
        %side,
        king = %plan.king_to,
        rook = %plan.rook_to,
        "castled"
    );
    Ok(())
}
