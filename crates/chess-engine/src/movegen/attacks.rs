//! Step and ray destination generation shared by the piece kinds.

use chess_core::{Color, Coord};

use super::MoveSet;
use crate::Board;

/// Knight offsets: (row delta, column delta).
pub(crate) const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King offsets: the eight adjacent squares.
pub(crate) const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Bishop ray directions.
pub(crate) const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Rook ray directions.
pub(crate) const ORTHOGONALS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Single-step destinations: on the board and not holding a piece of `color`.
pub(crate) fn step_targets(
    board: &Board,
    from: Coord,
    color: Color,
    offsets: &[(i32, i32)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in offsets {
        let to = from.offset(d_row, d_col);
        if !board.in_bounds(to) {
            continue;
        }
        match board.occupant(to) {
            Some(other) if other.color() == color => {}
            _ => {
                moves.insert(to);
            }
        }
    }
}

/// Ray destinations: each ray runs until the board edge, stops before a
/// piece of `color`, and stops on (including) an opposing piece.
pub(crate) fn ray_targets(
    board: &Board,
    from: Coord,
    color: Color,
    directions: &[(i32, i32)],
    moves: &mut MoveSet,
) {
    for &(d_row, d_col) in directions {
        let mut to = from.offset(d_row, d_col);
        while board.in_bounds(to) {
            if let Some(other) = board.occupant(to) {
                if other.color() != color {
                    moves.insert(to);
                }
                break;
            }
            moves.insert(to);
            to = to.offset(d_row, d_col);
        }
    }
}
