//! Text rendering of a board.

use std::fmt::{self, Write};

use chess_core::Coord;

use crate::Board;

/// Empty squares are drawn as a dot in a four-character cell.
const EMPTY_CELL: &str = " .  ";
const CELL_WIDTH: usize = 4;

impl Board {
    /// Draws the board as a grid with row and column labels.
    ///
    /// Row 0 is printed first. Each cell is four characters wide. When
    /// `show_captures` is set, a final `losses: [...]` line lists captured
    /// pieces in capture order.
    pub fn render(&self, show_captures: bool) -> String {
        let mut out = String::new();
        self.write_grid(&mut out, show_captures)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_grid(&self, out: &mut impl Write, show_captures: bool) -> fmt::Result {
        // Column labels sit over the glyph of their cell.
        let label_width = (self.size() - 1).max(0).to_string().len();
        let labels = (0..self.size())
            .map(|col| format!("{:<width$}", col, width = CELL_WIDTH))
            .collect::<String>();
        let header = format!("{:indent$}{}", "", labels.trim_end(), indent = label_width + 2);
        writeln!(out, "{}", header)?;

        for row in 0..self.size() {
            write!(out, "{:>width$} ", row, width = label_width)?;
            for col in 0..self.size() {
                match self.occupant(Coord::new(row, col)) {
                    Some(piece) => write!(out, " {}  ", piece.symbol())?,
                    None => out.write_str(EMPTY_CELL)?,
                }
            }
            writeln!(out, " {}", row)?;
        }

        write!(out, "{}", header)?;

        if show_captures {
            let losses = self
                .captured()
                .iter()
                .map(|p| p.symbol().to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(out, "\nlosses: [{}]", losses)?;
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;
    use chess_core::{Color, PieceKind};

    #[test]
    fn small_board_layout() {
        let mut board = Board::empty(3);
        let at = Coord::new(1, 2);
        board
            .place(Piece::new(PieceKind::Knight, Color::White, at), at)
            .unwrap();

        let expected = [
            "   0   1   2",
            "0  .   .   .   0",
            "1  .   .   ♘   1",
            "2  .   .   .   2",
            "   0   1   2",
            "losses: []",
        ]
        .join("\n");
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn captures_listed_in_order() {
        let mut board = Board::empty(4);
        let a = Coord::new(0, 0);
        let b = Coord::new(0, 3);
        let d = Coord::new(3, 3);
        board.place(Piece::new(PieceKind::Rook, Color::White, a), a).unwrap();
        board.place(Piece::new(PieceKind::Pawn, Color::Black, b), b).unwrap();
        board.place(Piece::new(PieceKind::Queen, Color::Black, d), d).unwrap();
        board.relocate(a, b).unwrap();
        board.relocate(b, d).unwrap();

        let text = board.to_string();
        assert!(text.ends_with("losses: [♟, ♛]"), "{}", text);
    }

    #[test]
    fn render_can_hide_captures() {
        let board = Board::new();
        let text = board.render(false);
        assert!(!text.contains("losses"));
        assert_eq!(text.lines().count(), 10);
        assert!(text.lines().nth(1).unwrap().starts_with("0  ♖   ♘   ♗   ♕   ♔"));
    }

    #[test]
    fn wide_board_labels_line_up_with_cells() {
        let mut board = Board::empty(12);
        for col in [0, 9, 11] {
            let at = Coord::new(10, col);
            board
                .place(Piece::new(PieceKind::Rook, Color::Black, at), at)
                .unwrap();
        }
        let text = board.render(false);
        let lines: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let header = &lines[0];
        let row_ten = &lines[11];
        let row_two = &lines[3];

        assert_eq!(&header[..5], &[' ', ' ', ' ', ' ', '0']);
        for (col, label) in [(0, "0"), (9, "9"), (11, "11")] {
            let at = 4 + CELL_WIDTH * col;
            let found: String = header[at..at + label.len()].iter().collect();
            assert_eq!(found, label, "column {}", col);
            assert_eq!(row_ten[at], '♜', "column {}", col);
            assert_eq!(row_two[at], '.', "column {}", col);
        }
        assert!(row_two.starts_with(&[' ', '2', ' ']));
    }

    #[test]
    fn every_cell_is_four_wide() {
        let board = Board::new();
        let text = board.render(false);
        for (row, line) in text.lines().skip(1).take(8).enumerate() {
            let label = row.to_string();
            let cells = &line[label.len() + 1..line.len() - label.len() - 1];
            assert_eq!(cells.chars().count(), 4 * 8, "row {}", row);
        }
    }
}
