//! Table edit update functions
//!
//! Every handler follows the same shape: refuse when editing is disabled or
//! a session is in flight, resolve the addressed block/page (a miss is a
//! silent no-op - stale UI state after a structural edit is expected), apply
//! the mutation to a *clone* of the block's store, and stage the clone for
//! commit. The block's own store is only replaced once the host replace
//! succeeds, so a failed session never leaves a half-applied edit visible.

use tracing::debug;

use crate::commands::Cmd;
use crate::grid;
use crate::messages::TableMsg;
use crate::model::store::{CellPosition, PageId, Store};
use crate::model::{BlockId, EngineModel};

pub fn update_table(model: &mut EngineModel, msg: TableMsg) -> Option<Cmd> {
    if !model.config.enable_editing {
        debug!("edit ignored, editing disabled in config");
        return None;
    }
    if model.session.is_in_flight() {
        debug!("edit dropped, session in flight");
        return None;
    }

    match msg {
        TableMsg::SetCellValue {
            block,
            page,
            position,
            value,
        } => edit_page(model, block, &page, |p| {
            match p.cell_at_mut(position) {
                Some(cell) => {
                    cell.value = value;
                    true
                }
                None => false,
            }
        }),
        TableMsg::InsertRowAfter {
            block,
            page,
            after_index,
        } => edit_page(model, block, &page, |p| {
            grid::insert_row(p, after_index);
            true
        }),
        TableMsg::RemoveRow { block, page, index } => edit_page(model, block, &page, |p| {
            if index >= p.row_count() {
                return false;
            }
            grid::remove_row(p, index);
            true
        }),
        TableMsg::InsertColumnAfter {
            block,
            page,
            after_index,
        } => edit_page(model, block, &page, |p| {
            grid::insert_column(p, after_index);
            true
        }),
        TableMsg::RemoveColumn { block, page, index } => edit_page(model, block, &page, |p| {
            grid::remove_column(p, index);
            true
        }),
        TableMsg::MergeSelection => merge_selection(model),
        TableMsg::SplitCell {
            block,
            page,
            position,
        } => edit_page(model, block, &page, |p| grid::split(p, position)),
        TableMsg::SetIndicesVisibility { block, visible } => {
            set_indices_visibility(model, block, visible)
        }
    }
}

/// Apply `mutate` to a working copy of the addressed page and stage it
///
/// Returns `None` (no command, nothing staged) when the block or page is
/// missing or the mutation reports that nothing changed.
fn edit_page(
    model: &mut EngineModel,
    block: BlockId,
    page: &PageId,
    mutate: impl FnOnce(&mut crate::model::store::Page) -> bool,
) -> Option<Cmd> {
    let source = model.block(block)?;
    let mut edited: Store = source.store.clone();

    let Some(page_ref) = edited.page_mut(page) else {
        debug!(%block, page = %page, "edit addressed a missing page");
        return None;
    };
    if !mutate(page_ref) {
        return None;
    }

    stage(model, block, edited)
}

/// Merge the current range selection into one spanning anchor
///
/// Consumes the selection: once the merge is staged the old positions
/// address covered placeholders and the host re-render rebuilds the tables
/// anyway.
fn merge_selection(model: &mut EngineModel) -> Option<Cmd> {
    if !model.selection.has_range() {
        return None;
    }
    let target = model.selection.target()?.clone();
    let positions = model.selection.positions().clone();

    let cmd = edit_page(model, target.block, &target.page, |p| {
        grid::merge(p, &positions)
    });
    if cmd.is_some() {
        model.selection.clear();
    }
    cmd
}

/// Flip the index-marker flag, persist it, and re-serialize the block so the
/// text picks up the change
fn set_indices_visibility(model: &mut EngineModel, block: BlockId, visible: bool) -> Option<Cmd> {
    if model.config.show_indices == visible {
        return None;
    }

    // The store itself is unchanged; staging it re-runs serialize with the
    // new flag. The flag only flips once staging succeeded, so a stale
    // block id leaves the config untouched.
    let edited = model.block(block)?.store.clone();
    let commit = stage(model, block, edited)?;
    model.config.show_indices = visible;
    Some(Cmd::batch(vec![Cmd::SaveConfig, commit]))
}

fn stage(model: &mut EngineModel, block: BlockId, edited: Store) -> Option<Cmd> {
    model
        .session
        .try_begin(block, edited)
        .then_some(Cmd::CommitBlock { block })
}

/// Convenience for adapters that only have the `"c;r"` addressing string
pub fn parse_position(index_string: &str) -> Option<CellPosition> {
    index_string.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_position_addressing_form() {
        assert_eq!(parse_position("2;5"), Some(CellPosition::new(2, 5)));
        assert_eq!(parse_position("2,5"), None);
        assert_eq!(parse_position(""), None);
    }
}
