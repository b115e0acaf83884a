//! Attack and check detection.

use chess_core::{Color, Coord, PieceKind};

use crate::Board;

/// Returns true if any piece of `by` can move onto `square`.
pub fn is_square_attacked(board: &Board, square: Coord, by: Color) -> bool {
    board
        .all_pieces(by)
        .any(|piece| piece.legal_moves(board).contains(&square))
}

/// Returns true if the king of `color` is attacked by an opposing piece.
///
/// Only opposing pieces are asked for their moves. A board with no king of
/// `color` is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    debug_assert!(
        board.king(color).is_ok(),
        "more than one {} king on the board",
        color
    );

    match board.find(PieceKind::King, color) {
        Some(king) => is_square_attacked(board, king.position(), color.opposite()),
        None => false,
    }
}
