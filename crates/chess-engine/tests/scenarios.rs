//! End-to-end rule scenarios on full boards.

use chess_core::{CastleSide, Color, Coord, PieceKind, BOARD_SIZE};
use chess_engine::{
    can_castle, is_in_check, is_in_checkmate, legal_moves, move_piece, Board, Game, GameStatus,
    MoveOutcome, Piece,
};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

/// Empties the standard board down to the given pieces.
fn cleared(pieces: &[(PieceKind, Color, Coord)]) -> Board {
    let mut board = Board::new();
    let occupied: Vec<Coord> = board.pieces().map(|p| p.position()).collect();
    for at in occupied {
        board.remove(at).unwrap();
    }
    for &(kind, color, at) in pieces {
        board.place(Piece::new(kind, color, at), at).unwrap();
    }
    board
}

#[test]
fn start_position_has_no_check() {
    let board = Board::new();
    assert!(!is_in_check(&board, Color::White));
    assert!(!is_in_check(&board, Color::Black));
    assert!(!is_in_checkmate(&board, Color::White));
    assert!(!is_in_checkmate(&board, Color::Black));
}

#[test]
fn lone_king_escapes_rook() {
    let board = cleared(&[
        (PieceKind::King, Color::White, c(0, 0)),
        (PieceKind::Rook, Color::Black, c(0, 7)),
    ]);
    assert!(is_in_check(&board, Color::White));
    assert!(!is_in_checkmate(&board, Color::White));

    let king = board.piece_at(c(0, 0)).unwrap().unwrap();
    let moves = legal_moves(king, &board);
    assert!(moves.contains(&c(1, 0)));
    assert!(moves.contains(&c(1, 1)));
}

#[test]
fn back_rank_mate_with_queen() {
    let board = cleared(&[
        (PieceKind::King, Color::Black, c(7, 4)),
        (PieceKind::Pawn, Color::Black, c(6, 3)),
        (PieceKind::Pawn, Color::Black, c(6, 4)),
        (PieceKind::Pawn, Color::Black, c(6, 5)),
        (PieceKind::Queen, Color::White, c(7, 1)),
        (PieceKind::King, Color::White, c(0, 6)),
    ]);
    assert!(is_in_check(&board, Color::Black));
    assert!(is_in_checkmate(&board, Color::Black));
    assert!(!is_in_check(&board, Color::White));
}

#[test]
fn fools_mate_is_detected() {
    // 1. f3 e5 2. g4 Qh4#
    let mut game = Game::new();
    game.try_move(c(1, 5), c(2, 5)).unwrap();
    game.try_move(c(6, 4), c(4, 4)).unwrap();
    game.try_move(c(1, 6), c(3, 6)).unwrap();
    let outcome = game.try_move(c(7, 3), c(3, 7)).unwrap();

    let mated = GameStatus::Checkmate {
        winner: Color::Black,
    };
    assert_eq!(outcome, MoveOutcome::GameOver(mated));
    assert!(is_in_check(game.board(), Color::White));
}

#[test]
fn scholars_mate_is_detected() {
    // 1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7#
    let mut game = Game::new();
    for (from, to) in [
        (c(1, 4), c(3, 4)),
        (c(6, 4), c(4, 4)),
        (c(0, 3), c(4, 7)),
        (c(7, 1), c(5, 2)),
        (c(0, 5), c(3, 2)),
        (c(7, 6), c(5, 5)),
    ] {
        game.try_move(from, to).unwrap();
    }
    let outcome = game.try_move(c(4, 7), c(6, 5)).unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::GameOver(GameStatus::Checkmate {
            winner: Color::White
        })
    );
    assert_eq!(game.board().captured().len(), 1);
    assert_eq!(game.board().captured()[0].kind(), PieceKind::Pawn);
}

#[test]
fn checkmate_implies_check() {
    let positions = [
        Board::new(),
        cleared(&[
            (PieceKind::King, Color::White, c(0, 0)),
            (PieceKind::Rook, Color::Black, c(0, 7)),
            (PieceKind::Rook, Color::Black, c(1, 7)),
        ]),
        cleared(&[
            (PieceKind::King, Color::White, c(3, 3)),
            (PieceKind::Knight, Color::Black, c(5, 4)),
        ]),
    ];
    for board in &positions {
        for color in Color::ALL {
            if is_in_checkmate(board, color) {
                assert!(is_in_check(board, color));
            }
        }
    }
}

#[test]
fn relocate_round_trip() {
    let mut board = Board::new();
    let before: Vec<(PieceKind, Color, Coord)> = board
        .pieces()
        .map(|p| (p.kind(), p.color(), p.position()))
        .collect();

    move_piece(&mut board, c(0, 6), c(2, 5)).unwrap();
    move_piece(&mut board, c(2, 5), c(0, 6)).unwrap();

    let after: Vec<(PieceKind, Color, Coord)> = board
        .pieces()
        .map(|p| (p.kind(), p.color(), p.position()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn castling_opens_after_clearing_back_rank() {
    let mut game = Game::new();
    // Knight, pawn, bishop out of the way on the kingside.
    for (from, to) in [
        (c(0, 6), c(2, 5)),
        (c(6, 0), c(5, 0)),
        (c(1, 4), c(2, 4)),
        (c(5, 0), c(4, 0)),
        (c(0, 5), c(3, 2)),
        (c(4, 0), c(3, 0)),
    ] {
        game.try_move(from, to).unwrap();
    }
    assert!(can_castle(game.board(), Color::White, CastleSide::Kingside));
    assert!(!can_castle(game.board(), Color::White, CastleSide::Queenside));

    game.try_castle(CastleSide::Kingside).unwrap();
    let king = game.board().find(PieceKind::King, Color::White).unwrap();
    assert_eq!(king.position(), c(0, 6));
    assert_eq!(
        game.board().piece_at(c(0, 5)).unwrap().map(|p| p.kind()),
        Some(PieceKind::Rook)
    );
}

#[test]
fn default_board_uses_board_size() {
    let board = Board::default();
    assert_eq!(board.size(), BOARD_SIZE);
    assert!(board.in_bounds(c(BOARD_SIZE - 1, BOARD_SIZE - 1)));
    assert!(!board.in_bounds(c(BOARD_SIZE, 0)));
}
