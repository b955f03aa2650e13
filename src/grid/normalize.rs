//! Grid normalization - computing the visible cells of a page
//!
//! A page's storage grid is dense: every row has a slot for every column,
//! including slots swallowed by merged rectangles. Rendering and hit-testing
//! want the sparse view instead - only the cells that actually appear, each
//! tagged with its logical position. This module computes that view.

use std::collections::HashSet;

use crate::model::store::{CellPosition, Page, Span};

/// A cell as seen by the rendering adapter
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleCell {
    pub value: String,
    pub is_header: bool,
    /// Span with the `(1,1)` default applied; drives colspan/rowspan attributes
    pub span: Span,
    /// Logical identity; its `"c;r"` string is the addressing key for edits
    pub position: CellPosition,
}

/// Compute the visible rows of a page
///
/// One left-to-right, top-to-bottom pass with an ignore set. When an anchor
/// with span `(w,h)` is emitted, every other position of its `w x h`
/// rectangle is marked ignored; ignored positions are skipped entirely. A
/// single pass suffices because spans are axis-aligned rectangles anchored
/// at their top-left, so an anchor is always visited before any position it
/// covers.
///
/// The result is row-major and freshly computed per call; nothing is retained
/// across renders.
pub fn visible_rows(page: &Page) -> Vec<Vec<VisibleCell>> {
    let mut ignored: HashSet<CellPosition> = HashSet::new();
    let mut out = Vec::with_capacity(page.rows.len());

    for (row_index, row) in page.rows.iter().enumerate() {
        let mut visible = Vec::new();

        for (col_index, cell) in row.iter().enumerate() {
            let position = CellPosition::new(col_index, row_index);
            if ignored.contains(&position) {
                continue;
            }

            let span = cell.effective_span();
            if span.is_merged() {
                for dr in 0..span.height.max(1) as usize {
                    for dc in 0..span.width.max(1) as usize {
                        if (dc, dr) != (0, 0) {
                            ignored.insert(CellPosition::new(col_index + dc, row_index + dr));
                        }
                    }
                }
            }

            visible.push(VisibleCell {
                value: cell.value.clone(),
                is_header: cell.is_header,
                span,
                position,
            });
        }

        out.push(visible);
    }

    out
}

/// Total number of visible cells across a page
pub fn visible_cell_count(page: &Page) -> usize {
    visible_rows(page).iter().map(Vec::len).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::store::Cell;

    fn page_of(values: &[&[&str]]) -> Page {
        let mut page = Page::new("@p1");
        for row in values {
            page.rows
                .push(row.iter().map(|v| Cell::with_value(*v)).collect());
        }
        page
    }

    #[test]
    fn test_spanless_page_emits_every_cell_in_order() {
        let page = page_of(&[&["a", "b"], &["c", "d"]]);
        let rows = visible_rows(&page);

        assert_eq!(rows.len(), 2);
        let order: Vec<String> = rows
            .iter()
            .flatten()
            .map(|c| c.position.to_string())
            .collect();
        assert_eq!(order, vec!["0;0", "1;0", "0;1", "1;1"]);
        assert!(rows.iter().flatten().all(|c| c.span == Span::UNIT));
    }

    #[test]
    fn test_wide_anchor_suppresses_row_neighbours() {
        let mut page = page_of(&[&["a", "b", "c"], &["d", "e", "f"]]);
        page.cell_at_mut(CellPosition::new(0, 0)).unwrap().span = Some(Span::new(3, 1));

        let rows = visible_rows(&page);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0][0].span, Span::new(3, 1));
        assert_eq!(rows[1].len(), 3);
    }

    #[test]
    fn test_tall_anchor_suppresses_column_below() {
        let mut page = page_of(&[&["a", "b"], &["c", "d"], &["e", "f"]]);
        page.cell_at_mut(CellPosition::new(0, 0)).unwrap().span = Some(Span::new(1, 3));

        let rows = visible_rows(&page);
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[1][0].position, CellPosition::new(1, 1));
        assert_eq!(rows[2].len(), 1);
        assert_eq!(rows[2][0].position, CellPosition::new(1, 2));
    }

    #[test]
    fn test_rect_anchor_emits_single_cell_for_rectangle() {
        let mut page = page_of(&[&["a", "b", "c"], &["d", "e", "f"], &["g", "h", "i"]]);
        page.cell_at_mut(CellPosition::new(0, 0)).unwrap().span = Some(Span::new(2, 2));

        let rows = visible_rows(&page);
        // Row 0: anchor + "c"; row 1: only "f"; row 2 untouched.
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 1);
        assert_eq!(rows[1][0].position, CellPosition::new(2, 1));
        assert_eq!(rows[2].len(), 3);
        assert_eq!(visible_cell_count(&page), 6);
    }

    #[test]
    fn test_span_past_page_bounds_is_tolerated() {
        // A structural edit can leave a span claiming rows that no longer
        // exist; the extra ignore positions simply never get visited.
        let mut page = page_of(&[&["a", "b"]]);
        page.cell_at_mut(CellPosition::new(0, 0)).unwrap().span = Some(Span::new(1, 4));

        let rows = visible_rows(&page);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 2);
    }

    #[test]
    fn test_empty_page() {
        let page = Page::new("@p1");
        assert!(visible_rows(&page).is_empty());
        assert_eq!(visible_cell_count(&page), 0);
    }
}
