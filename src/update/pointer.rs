//! Pointer update functions - driving the selection tracker
//!
//! Pointer events only ever touch selection state; they never mutate a
//! store. A position that no longer exists in the model (stale render, block
//! resynced underneath the drag) is an addressing miss and silently ignored.

use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::store::{CellPosition, PageId};
use crate::model::{BlockId, EngineModel};
use crate::selection::SelectionTarget;

pub fn update_pointer(model: &mut EngineModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Down {
            block,
            page,
            position,
        } => pointer_down(model, block, page, position),
        PointerMsg::Move {
            block,
            page,
            position,
        } => pointer_move(model, block, page, position),
        PointerMsg::Up => pointer_up(model),
    }
}

/// Check that a position actually addresses a cell in the current model
fn cell_exists(model: &EngineModel, block: BlockId, page: &PageId, position: CellPosition) -> bool {
    model
        .block(block)
        .and_then(|b| b.store.page(page))
        .and_then(|p| p.cell_at(position))
        .is_some()
}

fn pointer_down(
    model: &mut EngineModel,
    block: BlockId,
    page: PageId,
    position: CellPosition,
) -> Option<Cmd> {
    if !cell_exists(model, block, &page, position) {
        return None;
    }
    let had_selection = model.selection.target().is_some();
    model.selection.begin(SelectionTarget { block, page }, position);

    // Dropping a previous highlight needs a repaint even though the new
    // selection is still a single cell.
    had_selection.then_some(Cmd::Redraw)
}

fn pointer_move(
    model: &mut EngineModel,
    block: BlockId,
    page: PageId,
    position: CellPosition,
) -> Option<Cmd> {
    if !model.selection.is_selecting() {
        return None;
    }
    if !cell_exists(model, block, &page, position) {
        return None;
    }
    let before = model.selection.positions().len();
    model.selection.extend(&SelectionTarget { block, page }, position);

    let grew = model.selection.positions().len() > before;
    (grew && model.selection.highlight_active()).then_some(Cmd::Redraw)
}

fn pointer_up(model: &mut EngineModel) -> Option<Cmd> {
    if !model.selection.is_selecting() {
        return None;
    }
    model.selection.finish();
    // A surviving range keeps its highlight and a sub-range selection was
    // never highlighted, so nothing needs repainting either way.
    None
}
