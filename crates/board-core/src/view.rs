//! Host-independent render model of a board.
//!
//! A [`BoardView`] fixes everything a host needs to draw the board: row and
//! cell order, the dark/light shade of each square, the selection marker and
//! the glyph text. Hosts rebuild their whole visual tree from a fresh view on
//! every redraw.

use crate::board::Board;
use crate::piece::Piece;
use crate::square::{BOARD_SIZE, Square};

/// Shade of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Dark,
    Light,
}

impl Shade {
    /// A square is dark when `file + rank` is even, so A1 is dark.
    #[inline]
    pub fn of(sq: Square) -> Shade {
        if (sq.file() + sq.rank()) % 2 == 0 {
            Shade::Dark
        } else {
            Shade::Light
        }
    }
}

/// A single drawn square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub square: Square,
    pub shade: Shade,
    pub selected: bool,
    pub piece: Option<Piece>,
}

impl CellView {
    /// Glyph shown in the cell, `None` for an empty square.
    #[inline]
    pub fn glyph(&self) -> Option<char> {
        self.piece.map(Piece::glyph)
    }

    #[inline]
    pub fn file(&self) -> u8 {
        self.square.file()
    }

    #[inline]
    pub fn rank(&self) -> u8 {
        self.square.rank()
    }
}

/// One drawn rank, cells ordered from file 0 to file 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub rank: u8,
    pub cells: [CellView; BOARD_SIZE],
}

/// The drawn board, rows ordered from rank 7 down to rank 0 so that Black's
/// side is on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub rows: Vec<RowView>,
}

impl BoardView {
    /// Builds the render model for the current state of `board`.
    pub fn from_board(board: &Board) -> Self {
        let selected = board.selected();
        let rows = (0..BOARD_SIZE as u8)
            .rev()
            .map(|rank| RowView {
                rank,
                cells: std::array::from_fn(|file| {
                    let square = Square::new(file as u8, rank);
                    CellView {
                        square,
                        shade: Shade::of(square),
                        selected: selected == Some(square),
                        piece: board.get(square),
                    }
                }),
            })
            .collect();
        BoardView { rows }
    }

    /// Iterates over all cells in drawing order.
    pub fn cells(&self) -> impl Iterator<Item = &CellView> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade() {
        assert_eq!(Shade::of(Square::A1), Shade::Dark);
        assert_eq!(Shade::of(Square::B1), Shade::Light);
        assert_eq!(Shade::of(Square::A2), Shade::Light);
        assert_eq!(Shade::of(Square::H8), Shade::Dark);
        assert_eq!(Shade::of(Square::H1), Shade::Light);
    }

    #[test]
    fn test_row_order() {
        let view = BoardView::from_board(&Board::new());
        assert_eq!(view.rows.len(), 8);
        let ranks: Vec<u8> = view.rows.iter().map(|row| row.rank).collect();
        assert_eq!(ranks, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        for row in &view.rows {
            for (file, cell) in row.cells.iter().enumerate() {
                assert_eq!(cell.file() as usize, file);
                assert_eq!(cell.rank(), row.rank);
            }
        }
    }

    #[test]
    fn test_first_cell_is_black_rook() {
        let view = BoardView::from_board(&Board::new());
        let first = view.cells().next().unwrap();
        assert_eq!(first.square, Square::A8);
        assert_eq!(first.glyph(), Some('♜'));
        assert_eq!(first.shade, Shade::Light);
    }

    #[test]
    fn test_selected_cell() {
        let mut board = Board::new();
        assert_eq!(BoardView::from_board(&board).cells().filter(|c| c.selected).count(), 0);

        board.set_selected(Some(Square::G1));
        let view = BoardView::from_board(&board);
        let selected: Vec<Square> = view.cells().filter(|c| c.selected).map(|c| c.square).collect();
        assert_eq!(selected, vec![Square::G1]);
    }

    #[test]
    fn test_empty_cells_have_no_glyph() {
        let view = BoardView::from_board(&Board::new());
        for cell in view.cells() {
            assert_eq!(cell.glyph().is_some(), !(2..6).contains(&cell.rank()));
        }
    }
}
