//! Browser tests for the DOM host. Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use log::LevelFilter;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web::ChessBoard;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const START: &str = "RNBQKBNRPPPPPPPP--------------------------------pppppppprnbqkbnr";

fn container() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    document.create_element("div").unwrap()
}

/// The cell element for (file, rank). The first row drawn is rank 7.
fn cell(container: &Element, file: u32, rank: u32) -> HtmlElement {
    let row = container.children().item(7 - rank).unwrap();
    row.children().item(file).unwrap().dyn_into().unwrap()
}

fn text(element: &HtmlElement) -> String {
    element.text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_draw_replaces_children_with_rows_and_cells() {
    let container = container();
    container.set_inner_html("<p>stale</p><p>stale</p>");

    let board = ChessBoard::new();
    board.draw(&container).unwrap();

    assert!(container.query_selector("p").unwrap().is_none());
    assert_eq!(container.child_element_count(), 8);
    for i in 0..8 {
        let row = container.children().item(i).unwrap();
        assert_eq!(row.tag_name(), "DIV");
        assert_eq!(row.class_name(), "row");
        assert_eq!(row.child_element_count(), 8);
        for file in 0..8 {
            let cell = row.children().item(file).unwrap();
            assert_eq!(cell.get_attribute("data-file"), Some(file.to_string()));
            assert_eq!(cell.get_attribute("data-rank"), Some((7 - i).to_string()));
        }
    }

    // A redraw does not stack a second board
    board.redraw().unwrap();
    assert_eq!(container.child_element_count(), 8);
}

#[wasm_bindgen_test]
fn test_cell_classes_and_glyphs() {
    let container = container();
    let board = ChessBoard::new();
    board.draw(&container).unwrap();

    let a1 = cell(&container, 0, 0);
    assert_eq!(a1.class_name(), "square dark");
    assert_eq!(text(&a1), "♖");

    let b1 = cell(&container, 1, 0);
    assert_eq!(b1.class_name(), "square light");
    assert_eq!(text(&b1), "♘");

    let e8 = cell(&container, 4, 7);
    assert_eq!(text(&e8), "♚");

    let e4 = cell(&container, 4, 3);
    assert_eq!(e4.class_name(), "square light");
    assert_eq!(text(&e4), "");
}

#[wasm_bindgen_test]
fn test_clicks_use_built_in_handling() {
    let container = container();
    let board = ChessBoard::new();
    board.draw(&container).unwrap();

    cell(&container, 4, 1).click();
    assert_eq!(board.selected(), Some("e2".to_string()));
    // The click redrew the board, so look the cell up again
    assert_eq!(cell(&container, 4, 1).class_name(), "square light selected");

    cell(&container, 4, 3).click();
    assert_eq!(board.selected(), None);

    let mut expected: Vec<char> = START.chars().collect();
    expected[12] = '-';
    expected[28] = 'P';
    assert_eq!(board.board_string(), expected.into_iter().collect::<String>());
    assert_eq!(text(&cell(&container, 4, 3)), "♙");
    assert_eq!(text(&cell(&container, 4, 1)), "");
}

#[wasm_bindgen_test]
fn test_click_callback_replaces_built_in_handling() {
    let container = container();
    let board = ChessBoard::new();
    board.draw(&container).unwrap();

    let clicks = Rc::new(RefCell::new(Vec::new()));
    let recorder = {
        let clicks = clicks.clone();
        Closure::<dyn FnMut(u32, u32)>::new(move |file: u32, rank: u32| {
            clicks.borrow_mut().push((file, rank));
        })
    };
    let callback: Function = recorder.as_ref().unchecked_ref::<Function>().clone();
    board.set_on_square_click(Some(callback));

    cell(&container, 6, 0).click();
    cell(&container, 5, 2).click();
    assert_eq!(*clicks.borrow(), vec![(6, 0), (5, 2)]);
    assert_eq!(board.selected(), None);
    assert_eq!(board.board_string(), START);

    board.set_on_square_click(None);
    cell(&container, 6, 0).click();
    assert_eq!(board.selected(), Some("g1".to_string()));
    assert_eq!(clicks.borrow().len(), 2);
}

#[wasm_bindgen_test]
fn test_callback_can_forward_to_click() {
    let container = container();
    let board = Rc::new(ChessBoard::new());
    board.draw(&container).unwrap();

    let forward = {
        let board = board.clone();
        Closure::<dyn FnMut(u32, u32)>::new(move |file: u32, rank: u32| {
            board.click(file, rank).unwrap();
        })
    };
    board.set_on_square_click(Some(forward.as_ref().unchecked_ref::<Function>().clone()));

    cell(&container, 6, 0).click();
    cell(&container, 5, 2).click();
    assert_eq!(board.piece_at(5, 2).unwrap(), Some("♘".to_string()));
    assert_eq!(board.piece_at(6, 0).unwrap(), None);
    assert_eq!(text(&cell(&container, 5, 2)), "♘");
}

#[wasm_bindgen_test]
fn test_custom_class_names() {
    let container = container();
    let board = ChessBoard::new();
    board.set_class_names(
        "rank".to_string(),
        "sq".to_string(),
        "d".to_string(),
        "l".to_string(),
        "on".to_string(),
    );
    board.draw(&container).unwrap();
    board.click(0, 0).unwrap();

    assert_eq!(container.children().item(0).unwrap().class_name(), "rank");
    assert_eq!(cell(&container, 0, 0).class_name(), "sq d on");
    assert_eq!(cell(&container, 1, 0).class_name(), "sq l");
}

#[wasm_bindgen_test]
fn test_bad_input_is_an_error() {
    assert!(ChessBoard::from_board_string("RNB").is_err());
    let board = ChessBoard::new();
    assert!(board.click(8, 0).is_err());
    assert!(board.piece_at(0, 8).is_err());
    assert!(board.set_log_level("loud").is_err());
}

#[wasm_bindgen_test]
fn test_new_board_keeps_log_level() {
    let first = ChessBoard::new();
    first.set_log_level("debug").unwrap();
    let _second = ChessBoard::new();
    assert_eq!(log::max_level(), LevelFilter::Debug);
    first.set_log_level("info").unwrap();
}
