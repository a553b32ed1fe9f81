//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton,
    MouseEventKind,
};

/// Application events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Quit the application
    Quit,
    /// Force quit the application (Ctrl+C)
    ForceQuit,
    /// Move cursor one rank up
    CursorUp,
    /// Move cursor one rank down
    CursorDown,
    /// Move cursor one file left
    CursorLeft,
    /// Move cursor one file right
    CursorRight,
    /// Click the square under the cursor (Enter or Space)
    Select,
    /// Mouse click on a square (file, rank)
    Click(u8, u8),
    /// Restore the starting position
    Reset,
    /// Any other character
    Char(char),
}

/// Board area configuration for mouse click detection.
/// These values should match the render layout.
pub struct BoardArea {
    pub start_row: u16,
    pub start_col: u16,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl Default for BoardArea {
    fn default() -> Self {
        Self {
            // Layout calculation:
            // - Title block: 3 rows (y=0-2)
            // - Content starts at y=3
            // - Board block border: +1 row
            // - Board inner area starts at y=4
            // - Column header row: y=4
            // - Top border row: y=5
            // - First cell row (rank 8): y=6
            start_row: 6,
            // - Board block border: +1 col
            // - Rank number + separator: 3 chars ("8 │")
            // - Cell content starts at x=4 (1 + 3)
            start_col: 4,
            cell_width: 4,  // Each cell is 4 chars wide (" ♜ │")
            cell_height: 2, // Each cell is 2 rows tall (content + separator)
        }
    }
}

impl BoardArea {
    /// Maps a terminal position to board coordinates (file, rank). The top
    /// row of cells is rank 7.
    pub fn square_at(&self, column: u16, row: u16) -> Option<(u8, u8)> {
        if row < self.start_row || column < self.start_col {
            return None;
        }
        let row_index = (row - self.start_row) / self.cell_height;
        let file = (column - self.start_col) / self.cell_width;
        if row_index < 8 && file < 8 {
            Some((file as u8, 7 - row_index as u8))
        } else {
            None
        }
    }
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }

    match event::read()? {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('c'))
            {
                return Ok(Some(Event::ForceQuit));
            }
            Ok(map_key_event(key.code))
        }
        CrosstermEvent::Mouse(mouse) => Ok(map_mouse_event(mouse)),
        _ => Ok(None),
    }
}

/// Maps a key code to an application event.
fn map_key_event(code: KeyCode) -> Option<Event> {
    let event = match code {
        KeyCode::Char('q') | KeyCode::Esc => Event::Quit,

        // Cursor movement - Arrow keys
        KeyCode::Up => Event::CursorUp,
        KeyCode::Down => Event::CursorDown,
        KeyCode::Left => Event::CursorLeft,
        KeyCode::Right => Event::CursorRight,

        // Cursor movement - WASD
        KeyCode::Char('w') => Event::CursorUp,
        KeyCode::Char('s') => Event::CursorDown,
        KeyCode::Char('a') => Event::CursorLeft,
        KeyCode::Char('d') => Event::CursorRight,

        // Cursor movement - Vim style
        KeyCode::Char('k') => Event::CursorUp,
        KeyCode::Char('j') => Event::CursorDown,
        KeyCode::Char('h') => Event::CursorLeft,
        KeyCode::Char('l') => Event::CursorRight,

        KeyCode::Enter | KeyCode::Char(' ') => Event::Select,
        KeyCode::Char('r') => Event::Reset,
        KeyCode::Char(c) => Event::Char(c),

        _ => return None,
    };
    Some(event)
}

/// Maps a mouse event to an application event.
fn map_mouse_event(mouse: crossterm::event::MouseEvent) -> Option<Event> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => BoardArea::default()
            .square_at(mouse.column, mouse.row)
            .map(|(file, rank)| Event::Click(file, rank)),
        _ => None,
    }
}
