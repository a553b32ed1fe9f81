//! TUI (Terminal User Interface) host for the chessboard.
//!
//! Draws the board with ratatui and feeds mouse clicks and keyboard
//! selection into the board controller.

use board_core::board::Board;

mod app;
mod event;
mod render;
mod widgets;

use app::App;

/// Runs the TUI until the user quits.
pub fn run(board: Board, ascii: bool) -> std::io::Result<()> {
    let app = App::new(board, ascii);

    let terminal = ratatui::init();
    let result = app.run(terminal);
    ratatui::restore();

    result
}
