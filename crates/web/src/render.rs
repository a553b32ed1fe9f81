//! DOM back-end for the board render model.

use board_core::view::{BoardView, CellView, Shade};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

/// Click handler attached to one cell.
pub type CellClosure = Closure<dyn FnMut(MouseEvent)>;

/// Class names put on the generated elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNames {
    pub row: String,
    pub square: String,
    pub dark: String,
    pub light: String,
    pub selected: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            row: "row".to_string(),
            square: "square".to_string(),
            dark: "dark".to_string(),
            light: "light".to_string(),
            selected: "selected".to_string(),
        }
    }
}

/// Space-separated class list of a cell element.
pub fn cell_class_name(cell: &CellView, names: &ClassNames) -> String {
    let shade = match cell.shade {
        Shade::Dark => &names.dark,
        Shade::Light => &names.light,
    };
    let mut class_name = format!("{} {}", names.square, shade);
    if cell.selected {
        class_name.push(' ');
        class_name.push_str(&names.selected);
    }
    class_name
}

/// Replaces the children of `container` with one row element per rank and
/// one cell element per square, in the order given by `view`.
///
/// The rows are built into a detached fragment first; `container` is only
/// touched once every element exists, so on error it keeps its old board.
///
/// `make_handler` is called once per cell with its file and rank; the
/// returned closures are attached as click listeners and handed back so the
/// caller can keep them alive.
pub fn draw<F>(
    document: &Document,
    container: &Element,
    view: &BoardView,
    names: &ClassNames,
    mut make_handler: F,
) -> Result<Vec<CellClosure>, JsValue>
where
    F: FnMut(u8, u8) -> CellClosure,
{
    let fragment = document.create_document_fragment();
    let mut handlers = Vec::with_capacity(64);
    for row in &view.rows {
        let row_element = document.create_element("div")?;
        row_element.set_class_name(&names.row);
        row_element.set_attribute("data-rank", &row.rank.to_string())?;

        for cell in &row.cells {
            let cell_element = document.create_element("div")?;
            cell_element.set_class_name(&cell_class_name(cell, names));
            cell_element.set_attribute("data-file", &cell.file().to_string())?;
            cell_element.set_attribute("data-rank", &cell.rank().to_string())?;
            if let Some(glyph) = cell.glyph() {
                cell_element.set_text_content(Some(&glyph.to_string()));
            }

            let handler = make_handler(cell.file(), cell.rank());
            cell_element
                .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            handlers.push(handler);

            row_element.append_child(&cell_element)?;
        }
        fragment.append_child(&row_element)?;
    }

    container.replace_children_with_node_1(&fragment);
    Ok(handlers)
}
