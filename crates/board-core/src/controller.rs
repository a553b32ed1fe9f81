//! Two-click "select then move" interaction.
//!
//! The controller owns the board and the interaction state. Every click is
//! handled synchronously and reported as a [`ClickOutcome`]; hosts redraw
//! after every click whatever the outcome.

use log::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::square::Square;

/// Interaction state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interaction {
    /// No source square chosen.
    #[default]
    Idle,
    /// A source square has been chosen and the next click picks the
    /// destination.
    Armed { source: Square },
}

/// What a click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An occupied square was chosen as the source.
    Selected(Square),
    /// An empty square was clicked with nothing selected.
    Ignored(Square),
    /// The source content was relocated onto `to`, overwriting `replaced`.
    Moved {
        from: Square,
        to: Square,
        piece: Option<Piece>,
        replaced: Option<Piece>,
    },
    /// The source square was clicked again and the selection dropped.
    Cancelled(Square),
}

/// Board plus interaction state.
///
/// No move legality is checked: any occupied square can be picked up and
/// dropped on any other square, replacing whatever was there.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    board: Board,
    interaction: Interaction,
}

impl Controller {
    /// Creates a controller over the standard starting position.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller over an arbitrary layout. Any selection on
    /// `board` is dropped so that the board and the interaction agree.
    pub fn with_board(mut board: Board) -> Self {
        board.set_selected(None);
        Self {
            board,
            interaction: Interaction::Idle,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable access for hosts that edit the layout directly. A pending
    /// selection is not re-validated afterwards.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }

    /// Restores the starting position and drops any selection.
    pub fn reset(&mut self) {
        info!("board reset to the starting position");
        self.board = Board::new();
        self.interaction = Interaction::Idle;
    }

    /// Handles a click on `square`.
    pub fn on_square_click(&mut self, square: Square) -> ClickOutcome {
        let outcome = match self.interaction {
            Interaction::Idle => match self.board.get(square) {
                Some(_) => {
                    self.arm(square);
                    ClickOutcome::Selected(square)
                }
                None => ClickOutcome::Ignored(square),
            },
            Interaction::Armed { source } if source == square => {
                self.disarm();
                ClickOutcome::Cancelled(square)
            }
            Interaction::Armed { source } => {
                let piece = self.board.get(source);
                let replaced = self.board.get(square);
                self.board.set(square, piece);
                self.board.set(source, None);
                self.disarm();
                ClickOutcome::Moved {
                    from: source,
                    to: square,
                    piece,
                    replaced,
                }
            }
        };
        debug!("click on {square}: {outcome:?}");
        outcome
    }

    /// Handles a click given as raw coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `file` or `rank` is >= 8.
    pub fn on_click_at(&mut self, file: u8, rank: u8) -> ClickOutcome {
        self.on_square_click(Square::new(file, rank))
    }

    fn arm(&mut self, source: Square) {
        self.interaction = Interaction::Armed { source };
        self.board.set_selected(Some(source));
    }

    fn disarm(&mut self) {
        self.interaction = Interaction::Idle;
        self.board.set_selected(None);
    }
}
