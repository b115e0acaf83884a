//! Checkmate detection.

use chess_core::{Color, PieceKind};

use super::is_in_check;
use crate::Board;

/// Returns true if the king of `color` is in check and no king move escapes.
///
/// Each king destination is tried on a clone of `board`. Blocking the check
/// or capturing the checker with another piece is not considered, so some
/// positions with a non-king defence are reported as mate.
pub fn is_in_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    let Some(king) = board.find(PieceKind::King, color) else {
        return false;
    };

    let from = king.position();
    let escape = king.legal_moves(board).into_iter().find(|&to| {
        let mut trial = board.clone();
        trial.relocate(from, to).is_ok() && !is_in_check(&trial, color)
    });

    match escape {
        Some(to) => {
            tracing::trace!(%color, %from, %to, "king escapes check");
            false
        }
        None => {
            tracing::debug!(%color, king = %from, "checkmate");
            true
        }
    }
}
