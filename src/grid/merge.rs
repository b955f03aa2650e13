//! Merge and split - converting a range selection into a spanning anchor
//!
//! Merge acts on the *bounding box* of the selection: a ragged or disjoint
//! drag expands to its enclosing rectangle, absorbing unselected interior
//! cells. Covered content is cleared on merge and not restored on split;
//! merge is lossy for everything but the anchor value.

use std::collections::BTreeSet;

use crate::model::store::{CellPosition, Page, Span};

/// Merge the bounding rectangle of `selected` into one anchored span
///
/// Returns whether the page changed. Fewer than two selected positions that
/// actually exist in the page is a no-op, as is a missing anchor slot.
pub fn merge(page: &mut Page, selected: &BTreeSet<CellPosition>) -> bool {
    // Stale positions (e.g. a selection that outlived a structural edit) are
    // dropped before the rectangle is computed.
    let live: Vec<CellPosition> = selected
        .iter()
        .copied()
        .filter(|p| page.cell_at(*p).is_some())
        .collect();
    if live.len() < 2 {
        return false;
    }

    let min_col = live.iter().map(|p| p.column).min().unwrap_or(0);
    let max_col = live.iter().map(|p| p.column).max().unwrap_or(0);
    let min_row = live.iter().map(|p| p.row).min().unwrap_or(0);
    let max_row = live.iter().map(|p| p.row).max().unwrap_or(0);

    let anchor = CellPosition::new(min_col, min_row);
    let span = Span::new(
        (max_col - min_col + 1) as u32,
        (max_row - min_row + 1) as u32,
    );

    match page.cell_at_mut(anchor) {
        Some(cell) => cell.span = Some(span),
        None => return false,
    }

    // Every other member of the rectangle - selected or not - becomes a
    // covered placeholder with its content cleared.
    for row in min_row..=max_row {
        for column in min_col..=max_col {
            let position = CellPosition::new(column, row);
            if position == anchor {
                continue;
            }
            if let Some(cell) = page.cell_at_mut(position) {
                cell.value.clear();
                cell.span = Some(Span::COVERED);
            }
        }
    }

    true
}

/// Dissolve the merged rectangle anchored at `position`
///
/// The anchor keeps its value and drops its span; every other member of the
/// former rectangle becomes an independent empty cell. Cells that were merged
/// away stay empty - their pre-merge content is gone by design. Anything that
/// is not an anchor (ordinary cell, covered placeholder, missing slot) is a
/// no-op.
pub fn split(page: &mut Page, position: CellPosition) -> bool {
    let span = match page.cell_at(position) {
        Some(cell) if cell.is_anchor() => cell.effective_span(),
        _ => return false,
    };

    if let Some(cell) = page.cell_at_mut(position) {
        cell.span = None;
    }

    for row in position.row..position.row + span.height as usize {
        for column in position.column..position.column + span.width as usize {
            let member = CellPosition::new(column, row);
            if member == position {
                continue;
            }
            if let Some(cell) = page.cell_at_mut(member) {
                cell.span = None;
                cell.value.clear();
            }
        }
    }

    true
}
