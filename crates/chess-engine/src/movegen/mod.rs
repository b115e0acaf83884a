//! Move generation.
//!
//! Each piece kind has its own destination rule, dispatched by
//! [`legal_moves`]. Generated moves are pseudo-legal: they respect board
//! edges, blockers and captures, but not whether the mover's own king is
//! left in check.

mod attacks;

use std::collections::BTreeSet;

use chess_core::{Coord, PieceKind};

use crate::{Board, Piece};
use attacks::{ray_targets, step_targets, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONALS};

/// A set of destination squares, ordered row-major.
pub type MoveSet = BTreeSet<Coord>;

/// Returns the squares `piece` may move to on `board`.
pub fn legal_moves(piece: &Piece, board: &Board) -> MoveSet {
    let mut moves = MoveSet::new();
    let from = piece.position();
    let color = piece.color();

    match piece.kind() {
        PieceKind::Pawn => pawn_moves(piece, board, &mut moves),
        PieceKind::Knight => step_targets(board, from, color, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => ray_targets(board, from, color, &DIAGONALS, &mut moves),
        PieceKind::Rook => ray_targets(board, from, color, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            ray_targets(board, from, color, &DIAGONALS, &mut moves);
            ray_targets(board, from, color, &ORTHOGONALS, &mut moves);
        }
        PieceKind::King => step_targets(board, from, color, &KING_OFFSETS, &mut moves),
    }

    moves
}

/// Pawn pushes and diagonal captures. No en passant.
fn pawn_moves(pawn: &Piece, board: &Board, moves: &mut MoveSet) {
    let from = pawn.position();
    let color = pawn.color();
    let dir = color.pawn_direction();

    let single = from.offset(dir, 0);
    if board.in_bounds(single) && board.occupant(single).is_none() {
        moves.insert(single);

        let double = from.offset(2 * dir, 0);
        if from.row == color.pawn_rank(board.size())
            && board.in_bounds(double)
            && board.occupant(double).is_none()
        {
            moves.insert(double);
        }
    }

    for d_col in [-1, 1] {
        let target = from.offset(dir, d_col);
        if let Some(victim) = board.occupant(target) {
            if victim.color() != color {
                moves.insert(target);
            }
        }
    }
}
