mod logger;
mod render;

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::str::FromStr;

use board_core::board::Board;
use board_core::controller::{ClickOutcome, Controller};
use board_core::square::Square;
use board_core::view::BoardView;
use js_sys::Function;
use log::{LevelFilter, debug, info};
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::render::{CellClosure, ClassNames};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

struct BoardState {
    controller: Controller,
    container: Option<Element>,
    class_names: ClassNames,
    on_square_click: Option<Function>,
    handlers: Vec<CellClosure>,
    // Listeners from the previous draw. A redraw usually runs inside one of
    // them, so they are only dropped on the draw after.
    retired: Vec<CellClosure>,
}

impl BoardState {
    fn new(controller: Controller) -> Self {
        BoardState {
            controller,
            container: None,
            class_names: ClassNames::default(),
            on_square_click: None,
            handlers: Vec::new(),
            retired: Vec::new(),
        }
    }
}

/// A chessboard rendered into a DOM element.
///
/// Clicking an occupied square selects it, clicking it again drops the
/// selection, and clicking any other square moves the selected piece there.
#[wasm_bindgen]
pub struct ChessBoard {
    state: Rc<RefCell<BoardState>>,
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ChessBoard {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ChessBoard {
        Self::with_controller(Controller::new())
    }

    /// Creates a board from a 64-character board string, A1 first.
    pub fn from_board_string(board_string: &str) -> Result<ChessBoard, JsValue> {
        let board = Board::from_string(board_string)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse board: {e}")))?;
        Ok(Self::with_controller(Controller::with_board(board)))
    }

    /// Renders the board into `container`, replacing its children. Later
    /// clicks redraw into the same element.
    pub fn draw(&self, container: &Element) -> Result<(), JsValue> {
        self.state.borrow_mut().container = Some(container.clone());
        redraw(&self.state)
    }

    /// Redraws into the last container passed to `draw`.
    pub fn redraw(&self) -> Result<(), JsValue> {
        redraw(&self.state)
    }

    /// Runs the built-in select-then-move handling for a square and redraws.
    pub fn click(&self, file: u32, rank: u32) -> Result<(), JsValue> {
        let square = Square::try_new(file, rank).map_err(|e| JsValue::from_str(&e.to_string()))?;
        handle_click(&self.state, square)
    }

    /// Sets the handler invoked as `callback(file, rank)` when a square is
    /// clicked. It replaces the built-in handling, which the callback can
    /// still reach through `click`. Passing `undefined` restores the
    /// built-in handling.
    pub fn set_on_square_click(&self, callback: Option<Function>) {
        self.state.borrow_mut().on_square_click = callback;
    }

    /// Algebraic name of the selected square, e.g. `"e2"`.
    pub fn selected(&self) -> Option<String> {
        let state = self.state.borrow();
        state.controller.board().selected().map(|sq| sq.to_string())
    }

    /// The piece layout as a 64-character board string, A1 first.
    pub fn board_string(&self) -> String {
        self.state.borrow().controller.board().to_string()
    }

    /// Glyph of the piece on a square, `undefined` when empty.
    pub fn piece_at(&self, file: u32, rank: u32) -> Result<Option<String>, JsValue> {
        let square = Square::try_new(file, rank).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let state = self.state.borrow();
        Ok(state
            .controller
            .board()
            .get(square)
            .map(|piece| piece.glyph().to_string()))
    }

    /// Restores the starting position and redraws.
    pub fn reset(&self) -> Result<(), JsValue> {
        self.state.borrow_mut().controller.reset();
        redraw(&self.state)
    }

    /// Overrides the class names put on rows and cells. Takes effect on the
    /// next draw.
    pub fn set_class_names(
        &self,
        row: String,
        square: String,
        dark: String,
        light: String,
        selected: String,
    ) {
        self.state.borrow_mut().class_names = ClassNames {
            row,
            square,
            dark,
            light,
            selected,
        };
    }

    /// Sets the console log level ("off", "error", "warn", "info", "debug",
    /// "trace").
    pub fn set_log_level(&self, level: &str) -> Result<(), JsValue> {
        let level = LevelFilter::from_str(level)
            .map_err(|e| JsValue::from_str(&format!("Invalid log level '{level}': {e}")))?;
        logger::set_level(level);
        Ok(())
    }
}

impl ChessBoard {
    fn with_controller(controller: Controller) -> ChessBoard {
        console_error_panic_hook::set_once();
        logger::init(DEFAULT_LOG_LEVEL);

        ChessBoard {
            state: Rc::new(RefCell::new(BoardState::new(controller))),
        }
    }
}

fn handle_click(state: &Rc<RefCell<BoardState>>, square: Square) -> Result<(), JsValue> {
    let outcome = state.borrow_mut().controller.on_square_click(square);
    if let ClickOutcome::Moved {
        from,
        to,
        piece: Some(piece),
        ..
    } = outcome
    {
        info!("{} {} moved {from} -> {to}", piece.color, piece.glyph());
    }
    redraw(state)
}

/// Listener for a cell click: forwards to the JS handler if one is set,
/// otherwise runs the built-in handling.
fn on_cell_click(state: &Weak<RefCell<BoardState>>, file: u8, rank: u8) {
    let Some(state) = state.upgrade() else {
        return;
    };

    let callback = state.borrow().on_square_click.clone();
    let result = match callback {
        Some(callback) => callback
            .call2(&JsValue::NULL, &JsValue::from(file), &JsValue::from(rank))
            .map(|_| ()),
        None => handle_click(&state, Square::new(file, rank)),
    };

    if let Err(e) = result {
        web_sys::console::error_2(&"Square click handler failed:".into(), &e);
    }
}

fn redraw(state: &Rc<RefCell<BoardState>>) -> Result<(), JsValue> {
    let (container, view, class_names) = {
        let state = state.borrow();
        let Some(container) = state.container.clone() else {
            debug!("redraw skipped, no container");
            return Ok(());
        };
        let view = BoardView::from_board(state.controller.board());
        (container, view, state.class_names.clone())
    };

    let document = container
        .owner_document()
        .ok_or_else(|| JsValue::from_str("Container is not attached to a document"))?;

    let weak = Rc::downgrade(state);
    let handlers = render::draw(&document, &container, &view, &class_names, |file, rank| {
        let weak = weak.clone();
        Closure::new(move |_event: MouseEvent| on_cell_click(&weak, file, rank))
    })?;

    let mut guard = state.borrow_mut();
    let state = &mut *guard;
    state.retired = std::mem::replace(&mut state.handlers, handlers);
    Ok(())
}
