//! Application state and main loop for the TUI.

use std::time::Duration;

use board_core::board::Board;
use board_core::controller::{ClickOutcome, Controller};
use board_core::square::Square;
use log::info;
use ratatui::DefaultTerminal;

use super::event::{self, Event};
use super::render;

const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// UI mode for handling different interaction states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Normal board interaction
    Normal,
    /// Confirming quit
    ConfirmQuit,
}

/// Main application state.
pub struct App {
    /// Board and selection state machine
    pub controller: Controller,
    /// Cursor position on the board
    pub cursor: Square,
    /// Draw letters instead of chess symbols
    pub ascii: bool,
    /// Current UI mode
    pub ui_mode: UiMode,
    /// Whether the application should quit
    pub should_quit: bool,
    /// Result of the last click, for the info panel
    pub last_outcome: Option<ClickOutcome>,
}

impl App {
    /// Creates a new App over `board`.
    pub fn new(board: Board, ascii: bool) -> Self {
        Self {
            controller: Controller::with_board(board),
            cursor: Square::E2,
            ascii,
            ui_mode: UiMode::Normal,
            should_quit: false,
            last_outcome: None,
        }
    }

    /// Runs the main TUI loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> std::io::Result<()> {
        crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;
        info!("terminal board started");

        while !self.should_quit {
            // Every event triggers a full redraw
            terminal.draw(|frame| render::render(frame, &self))?;

            if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
                self.handle_event(event);
            }
        }

        crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture)?;
        Ok(())
    }

    /// Handles an input event.
    pub fn handle_event(&mut self, event: Event) {
        match self.ui_mode {
            UiMode::Normal => self.handle_normal_event(event),
            UiMode::ConfirmQuit => self.handle_confirm_quit_event(event),
        }
    }

    /// Handles events in normal mode.
    fn handle_normal_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit => {
                self.should_quit = true;
            }
            Event::Quit => {
                self.ui_mode = UiMode::ConfirmQuit;
            }
            Event::CursorUp => self.move_cursor(0, 1),
            Event::CursorDown => self.move_cursor(0, -1),
            Event::CursorLeft => self.move_cursor(-1, 0),
            Event::CursorRight => self.move_cursor(1, 0),
            Event::Select => self.click(self.cursor),
            Event::Click(file, rank) => {
                if let Ok(sq) = Square::try_new(file.into(), rank.into()) {
                    self.cursor = sq;
                    self.click(sq);
                }
            }
            Event::Reset => {
                self.controller.reset();
                self.last_outcome = None;
            }
            Event::Char(_) => {}
        }
    }

    /// Handles events in quit confirmation mode.
    fn handle_confirm_quit_event(&mut self, event: Event) {
        match event {
            Event::ForceQuit | Event::Char('y') | Event::Char('Y') => {
                self.should_quit = true;
            }
            Event::Char('n') | Event::Char('N') | Event::Quit => {
                self.ui_mode = UiMode::Normal;
            }
            _ => {}
        }
    }

    fn click(&mut self, sq: Square) {
        let outcome = self.controller.on_square_click(sq);
        if let ClickOutcome::Moved { from, to, .. } = outcome {
            info!("moved {from} -> {to}");
        }
        self.last_outcome = Some(outcome);
    }

    fn move_cursor(&mut self, df: i8, dr: i8) {
        let file = (self.cursor.file() as i8 + df).clamp(0, 7);
        let rank = (self.cursor.rank() as i8 + dr).clamp(0, 7);
        self.cursor = Square::new(file as u8, rank as u8);
    }
}
