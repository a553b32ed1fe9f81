//! Plain colored text output of the board.

use board_core::board::Board;
use board_core::controller::{ClickOutcome, Controller};
use board_core::square::Square;
use board_core::view::{BoardView, CellView, Shade};
use colored::{ColoredString, Colorize};

/// Text drawn for a cell, three columns wide.
pub fn cell_text(cell: &CellView, ascii: bool) -> String {
    match cell.piece {
        Some(piece) if ascii => format!(" {} ", piece.to_char()),
        Some(piece) => format!(" {} ", piece.glyph()),
        None => "   ".to_string(),
    }
}

fn styled_cell(cell: &CellView, ascii: bool) -> ColoredString {
    let text = cell_text(cell, ascii).black();
    let text = match cell.shade {
        Shade::Dark => text.on_truecolor(181, 136, 99),
        Shade::Light => text.on_truecolor(240, 217, 181),
    };
    if cell.selected { text.on_bright_yellow() } else { text }
}

/// Applies `clicks` to `board` through the controller and prints the result.
pub fn print_after_clicks(board: Board, clicks: &[Square], ascii: bool) {
    let mut controller = Controller::with_board(board);
    for &sq in clicks {
        match controller.on_square_click(sq) {
            ClickOutcome::Moved { from, to, .. } => println!("{from} -> {to}"),
            ClickOutcome::Ignored(sq) => println!("{}", format!("{sq} is empty").bright_black()),
            ClickOutcome::Selected(_) | ClickOutcome::Cancelled(_) => {}
        }
    }
    print(controller.board(), ascii);
}

/// Prints the board with Black's side on top, followed by its board string.
pub fn print(board: &Board, ascii: bool) {
    let view = BoardView::from_board(board);

    println!("      a  b  c  d  e  f  g  h");
    for row in &view.rows {
        print!("  {}  ", row.rank + 1);
        for cell in &row.cells {
            print!("{}", styled_cell(cell, ascii));
        }
        println!("  {}", row.rank + 1);
    }
    println!("      a  b  c  d  e  f  g  h");
    println!();

    if let Some(sq) = board.selected() {
        println!("  Selected: {}", sq.to_string().bright_yellow());
    }
    println!("  Pieces:   {}", board.piece_count());
    println!("  Board:    {board}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text() {
        let view = BoardView::from_board(&Board::new());
        let cells: Vec<&CellView> = view.cells().collect();
        // a8 holds the black rook
        assert_eq!(cell_text(cells[0], false), " ♜ ");
        assert_eq!(cell_text(cells[0], true), " r ");
        // e1 holds the white king
        assert_eq!(cell_text(cells[60], true), " K ");
        // a4 is empty
        assert_eq!(cell_text(cells[32], false), "   ");
    }
}
