//! Board widget for rendering the chessboard.

use board_core::square::Square;
use board_core::view::{BoardView, CellView, Shade};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const DARK_SQUARE: Color = Color::Rgb(181, 136, 99);
const LIGHT_SQUARE: Color = Color::Rgb(240, 217, 181);
const SELECTED_SQUARE: Color = Color::Rgb(246, 246, 105);

/// Widget for rendering the chessboard.
pub struct BoardWidget<'a> {
    /// Render model of the board
    view: &'a BoardView,
    /// Cursor position
    cursor: Option<Square>,
    /// Draw letters instead of chess symbols
    ascii: bool,
}

impl<'a> BoardWidget<'a> {
    /// Creates a new board widget.
    pub fn new(view: &'a BoardView) -> Self {
        Self {
            view,
            cursor: None,
            ascii: false,
        }
    }

    /// Sets the cursor position.
    pub fn cursor(mut self, sq: Square) -> Self {
        self.cursor = Some(sq);
        self
    }

    /// Sets whether to draw letters.
    pub fn ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    fn cell_content(&self, cell: &CellView) -> String {
        match cell.piece {
            Some(piece) if self.ascii => format!(" {} ", piece.to_char()),
            Some(piece) => format!(" {} ", piece.glyph()),
            None => "   ".to_string(),
        }
    }

    fn cell_style(&self, cell: &CellView) -> Style {
        let bg = if cell.selected {
            SELECTED_SQUARE
        } else {
            match cell.shade {
                Shade::Dark => DARK_SQUARE,
                Shade::Light => LIGHT_SQUARE,
            }
        };
        let mut style = Style::default().fg(Color::Black).bg(bg);
        if self.cursor == Some(cell.square) {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        style
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Minimum size check
        if area.width < 36 || area.height < 18 {
            return;
        }

        // Column headers
        let mut header = vec![Span::raw("    ")];
        for (i, file) in ('a'..='h').enumerate() {
            if i > 0 {
                header.push(Span::raw("   "));
            }
            header.push(Span::styled(file.to_string(), Style::default().fg(Color::Cyan)));
        }
        buf.set_line(area.x, area.y, &Line::from(header), area.width);

        // Top border
        let top_border = "  ┌───┬───┬───┬───┬───┬───┬───┬───┐";
        buf.set_string(area.x, area.y + 1, top_border, Style::default());

        for (i, row) in self.view.rows.iter().enumerate() {
            let y = area.y + 2 + (i as u16) * 2;

            let rank_label = format!("{} │", row.rank + 1);
            buf.set_string(area.x, y, &rank_label, Style::default().fg(Color::Cyan));

            for (col, cell) in row.cells.iter().enumerate() {
                let x = area.x + 3 + (col as u16) * 4;
                buf.set_string(x, y, self.cell_content(cell), self.cell_style(cell));

                // Cell separator
                if col < 7 {
                    buf.set_string(x + 3, y, "│", Style::default());
                }
            }

            // Right border
            buf.set_string(area.x + 34, y, "│", Style::default());

            // Row separator
            if i < 7 {
                let separator = "  ├───┼───┼───┼───┼───┼───┼───┼───┤";
                buf.set_string(area.x, y + 1, separator, Style::default());
            }
        }

        // Bottom border
        let bottom_border = "  └───┴───┴───┴───┴───┴───┴───┴───┘";
        buf.set_string(area.x, area.y + 17, bottom_border, Style::default());

        // Cursor position indicator
        if let Some(cursor) = self.cursor {
            if area.height > 18 {
                let cursor_info = format!("  Cursor: {cursor}");
                buf.set_string(
                    area.x,
                    area.y + 18,
                    &cursor_info,
                    Style::default().fg(Color::Cyan),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::board::Board;

    fn render(board: &Board, ascii: bool) -> Buffer {
        let view = BoardView::from_board(board);
        let area = Rect::new(0, 0, 40, 19);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&view).ascii(ascii).render(area, &mut buf);
        buf
    }

    #[test]
    fn test_top_row_is_black_back_rank() {
        let buf = render(&Board::new(), true);
        assert_eq!(buf[(4, 2)].symbol(), "r");
        assert_eq!(buf[(8, 2)].symbol(), "n");
        assert_eq!(buf[(20, 2)].symbol(), "k");
        assert_eq!(buf[(0, 2)].symbol(), "8");
    }

    #[test]
    fn test_bottom_row_is_white_back_rank() {
        let buf = render(&Board::new(), false);
        assert_eq!(buf[(4, 16)].symbol(), "♖");
        assert_eq!(buf[(16, 16)].symbol(), "♕");
        assert_eq!(buf[(0, 16)].symbol(), "1");
    }

    #[test]
    fn test_square_colors() {
        let mut board = Board::new();
        board.set_selected(Some(Square::B1));
        let buf = render(&board, false);
        // a1 dark, b1 selected, c1 dark, a8 light
        assert_eq!(buf[(4, 16)].bg, DARK_SQUARE);
        assert_eq!(buf[(8, 16)].bg, SELECTED_SQUARE);
        assert_eq!(buf[(12, 16)].bg, DARK_SQUARE);
        assert_eq!(buf[(4, 2)].bg, LIGHT_SQUARE);
    }

    #[test]
    fn test_too_small_area_draws_nothing() {
        let view = BoardView::from_board(&Board::new());
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        BoardWidget::new(&view).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
