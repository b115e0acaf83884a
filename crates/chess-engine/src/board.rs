//! Board state: which piece stands where, plus the capture log.

use chess_core::{ChessError, Color, Coord, PieceKind, BOARD_SIZE};

use crate::Piece;

/// The single source of truth for piece placement.
///
/// Squares are stored row-major in a flat vector of `size * size` slots.
/// Pieces are owned values, so [`Clone`] yields a fully independent board
/// that can be mutated to evaluate a hypothetical move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: i32,
    squares: Vec<Option<Piece>>,
    captured: Vec<Piece>,
}

impl Board {
    /// Creates the standard starting position on a [`BOARD_SIZE`] board.
    pub fn new() -> Self {
        Self::standard(BOARD_SIZE).expect("standard layout fits the default board")
    }

    /// Creates an empty board with `size` rows and columns.
    pub fn empty(size: i32) -> Self {
        let size = size.max(0);
        let slots = (size * size) as usize;
        Board {
            size,
            squares: vec![None; slots],
            captured: Vec::new(),
        }
    }

    /// Creates the starting layout on a board with `size` rows and columns.
    ///
    /// Pawns fill rows 1 and `size - 2`; the back ranks hold rook, knight,
    /// bishop, queen, king, bishop, knight, rook from column 0. Boards narrower
    /// than eight columns cannot hold the back rank and fail with
    /// [`ChessError::OutOfBounds`].
    pub fn standard(size: i32) -> Result<Self, ChessError> {
        let mut board = Board::empty(size);

        for color in Color::ALL {
            let pawn_row = color.pawn_rank(size);
            for col in 0..size {
                let at = Coord::new(pawn_row, col);
                board.place(Piece::new(PieceKind::Pawn, color, at), at)?;
            }

            let back_row = color.back_rank(size);
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                let at = Coord::new(back_row, col as i32);
                board.place(Piece::new(kind, color, at), at)?;
            }
        }

        Ok(board)
    }

    /// Returns the number of rows (and columns).
    #[inline]
    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Returns true if `coord` lies on this board.
    #[inline]
    pub const fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    fn index(&self, coord: Coord) -> Result<usize, ChessError> {
        if self.in_bounds(coord) {
            Ok((coord.row * self.size + coord.col) as usize)
        } else {
            Err(ChessError::OutOfBounds(coord))
        }
    }

    /// Returns the piece on `coord`, treating off-board squares as empty.
    ///
    /// Move generation filters with [`in_bounds`](Self::in_bounds) itself and
    /// uses this to avoid threading errors through every ray.
    #[inline]
    pub(crate) fn occupant(&self, coord: Coord) -> Option<&Piece> {
        self.index(coord).ok().and_then(|i| self.squares[i].as_ref())
    }

    /// Returns the piece on `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Result<Option<&Piece>, ChessError> {
        let i = self.index(coord)?;
        Ok(self.squares[i].as_ref())
    }

    /// Puts `piece` on `coord`, overwriting whatever stood there.
    ///
    /// An opposing occupant is appended to the capture log first. The
    /// piece's own position is updated to `coord`.
    pub fn place(&mut self, mut piece: Piece, coord: Coord) -> Result<(), ChessError> {
        let i = self.index(coord)?;
        if let Some(previous) = self.squares[i].take() {
            if previous.color() != piece.color() {
                tracing::debug!(
                    captured = %previous.kind(),
                    color = %previous.color(),
                    square = %coord,
                    "piece captured"
                );
                self.captured.push(previous);
            }
        }
        piece.set_position(coord);
        self.squares[i] = Some(piece);
        Ok(())
    }

    /// Takes the piece off `coord` and returns it.
    pub fn remove(&mut self, coord: Coord) -> Result<Piece, ChessError> {
        let i = self.index(coord)?;
        self.squares[i].take().ok_or(ChessError::MissingPiece(coord))
    }

    /// Moves the piece on `from` to `to`, capturing an opposing piece there.
    ///
    /// Both squares are validated before anything changes, so a failed call
    /// leaves the board untouched.
    pub fn relocate(&mut self, from: Coord, to: Coord) -> Result<(), ChessError> {
        self.index(to)?;
        let mut piece = self.remove(from)?;
        piece.mark_moved();
        self.place(piece, to)
    }

    /// Returns the first piece of the given kind and color, scanning row-major.
    pub fn find(&self, kind: PieceKind, color: Color) -> Option<&Piece> {
        self.pieces()
            .find(|p| p.kind() == kind && p.color() == color)
    }

    /// Returns the king of `color`.
    ///
    /// Exactly one king per color is ever placed by a game; finding more than
    /// one is an invariant violation reported as [`ChessError::MultipleKings`].
    pub fn king(&self, color: Color) -> Result<Option<&Piece>, ChessError> {
        let mut kings = self
            .all_pieces(color)
            .filter(|p| p.kind() == PieceKind::King);
        let king = kings.next();
        if kings.next().is_some() {
            return Err(ChessError::MultipleKings(color));
        }
        Ok(king)
    }

    /// Iterates over every piece on the board, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.squares.iter().flatten()
    }

    /// Iterates over every piece of `color`, row-major.
    pub fn all_pieces(&self, color: Color) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |p| p.color() == color)
    }

    /// Returns the captured pieces in capture order.
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Relocates the piece on `from` to `to` without checking legality.
///
/// Callers validate the destination against [`Piece::legal_moves`] first.
pub fn move_piece(board: &mut Board, from: Coord, to: Coord) -> Result<(), ChessError> {
    board.relocate(from, to)
}
