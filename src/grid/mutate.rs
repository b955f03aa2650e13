//! Structural mutations - row and column insertion and deletion
//!
//! All four operations keep every row of a page the same length. None of them
//! rebalance merge rectangles that cross the edited boundary: a span keeps
//! claiming the same row/column *indices*, which after the edit point at
//! different cells. Restoring visual sanity there is the user's job via
//! split and merge.

use crate::model::store::{Cell, Page};

/// Insert an empty row immediately after `after_index` (`-1` inserts at the top)
///
/// The new row gets the first existing row's length (1 for an empty page),
/// every cell empty and unspanned.
pub fn insert_row(page: &mut Page, after_index: isize) {
    let width = page.rows.first().map(Vec::len).unwrap_or(1).max(1);
    let row: Vec<Cell> = (0..width).map(|_| Cell::empty(false)).collect();

    let insert_at = ((after_index + 1).max(0) as usize).min(page.rows.len());
    page.rows.insert(insert_at, row);
}

/// Delete the row at `index`; out of range is a no-op
pub fn remove_row(page: &mut Page, index: usize) {
    if index < page.rows.len() {
        page.rows.remove(index);
    }
}

/// Insert one empty cell into every row right after `after_index`
///
/// Rows shorter than `after_index + 1` are padded first, so the insertion
/// lands at the same column everywhere even if an external producer left a
/// row short. New and padded cells inherit `is_header` from the row's first
/// cell.
pub fn insert_column(page: &mut Page, after_index: isize) {
    let pad_to = (after_index + 1).max(0) as usize;

    for row_index in 0..page.rows.len() {
        page.ensure_row_width(row_index, pad_to);

        let row = &mut page.rows[row_index];
        let is_header = row.first().map(|c| c.is_header).unwrap_or(false);
        row.insert(pad_to, Cell::empty(is_header));
    }
}

/// Delete the cell at `index` from every row
///
/// Rows shorter than `index + 1` are padded first so deletion is uniform
/// across the page.
pub fn remove_column(page: &mut Page, index: usize) {
    for row_index in 0..page.rows.len() {
        page.ensure_row_width(row_index, index + 1);
        page.rows[row_index].remove(index);
    }
}
