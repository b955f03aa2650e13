//! Drag-selection tracking across rendered tables
//!
//! One tracker instance serves every table block rendered in a document; it
//! is owned by the [`EngineModel`](crate::model::EngineModel) and passed to
//! whatever needs it rather than living in ambient global state. Only one
//! (block, page) target can hold a selection at a time - starting a drag
//! anywhere else clears the previous one.

use std::collections::BTreeSet;

use tracing::debug;

use crate::model::BlockId;
use crate::model::store::{CellPosition, PageId};

/// The page a selection currently belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTarget {
    pub block: BlockId,
    pub page: PageId,
}

/// Pointer-drag selection state machine
///
/// Idle until a pointer-down seeds a one-cell selection; pointer-moves grow
/// it; pointer-up either keeps it (two or more cells) or drops it entirely.
/// Pointer-up is observed document-wide, so a drag released outside any
/// table still terminates cleanly.
#[derive(Debug, Default)]
pub struct SelectionTracker {
    selecting: bool,
    target: Option<SelectionTarget>,
    cells: BTreeSet<CellPosition>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag is in progress
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The page holding the current selection, if any
    pub fn target(&self) -> Option<&SelectionTarget> {
        self.target.as_ref()
    }

    /// Selected logical positions, in position order
    pub fn positions(&self) -> &BTreeSet<CellPosition> {
        &self.cells
    }

    /// A selection only counts as a range with at least two members
    pub fn has_range(&self) -> bool {
        self.cells.len() >= 2
    }

    /// True once member cells should be marked as visually selected
    pub fn highlight_active(&self) -> bool {
        self.cells.len() > 1
    }

    pub fn contains(&self, position: CellPosition) -> bool {
        self.cells.contains(&position)
    }

    /// Pointer-down on a cell: drop any prior selection (whatever page it
    /// belonged to), retarget, and seed with this one cell
    pub fn begin(&mut self, target: SelectionTarget, position: CellPosition) {
        if let Some(previous) = &self.target {
            if previous != &target {
                debug!(
                    from = %previous.page,
                    to = %target.page,
                    "selection retargeted, clearing previous"
                );
            }
        }
        self.cells.clear();
        self.cells.insert(position);
        self.target = Some(target);
        self.selecting = true;
    }

    /// Pointer-move over a cell while dragging
    ///
    /// Cells from a different target are ignored mid-drag; a drag stays on
    /// the page it started on.
    pub fn extend(&mut self, target: &SelectionTarget, position: CellPosition) {
        if !self.selecting {
            return;
        }
        if self.target.as_ref() != Some(target) {
            return;
        }
        self.cells.insert(position);
    }

    /// Pointer-up anywhere in the document
    ///
    /// A final selection of fewer than two cells reverts to the no-selection
    /// state; a true range survives for merge to consume.
    pub fn finish(&mut self) {
        self.selecting = false;
        if self.cells.len() < 2 {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.selecting = false;
        self.target = None;
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(block: usize, page: &str) -> SelectionTarget {
        SelectionTarget {
            block: BlockId(block),
            page: PageId::from(page),
        }
    }

    #[test]
    fn test_single_cell_release_reverts_to_idle() {
        let mut tracker = SelectionTracker::new();
        tracker.begin(target(0, "@p1"), CellPosition::new(1, 1));
        assert!(tracker.is_selecting());
        assert!(!tracker.has_range());

        tracker.finish();
        assert!(!tracker.is_selecting());
        assert!(tracker.target().is_none());
        assert!(tracker.positions().is_empty());
    }

    #[test]
    fn test_drag_accumulates_range() {
        let mut tracker = SelectionTracker::new();
        tracker.begin(target(0, "@p1"), CellPosition::new(0, 0));
        tracker.extend(&target(0, "@p1"), CellPosition::new(1, 0));
        tracker.extend(&target(0, "@p1"), CellPosition::new(1, 1));
        assert!(tracker.highlight_active());

        tracker.finish();
        assert!(tracker.has_range());
        assert_eq!(tracker.positions().len(), 3);
        assert_eq!(tracker.target(), Some(&target(0, "@p1")));
    }

    #[test]
    fn test_revisiting_a_cell_does_not_duplicate() {
        let mut tracker = SelectionTracker::new();
        tracker.begin(target(0, "@p1"), CellPosition::new(0, 0));
        tracker.extend(&target(0, "@p1"), CellPosition::new(1, 0));
        tracker.extend(&target(0, "@p1"), CellPosition::new(0, 0));

        assert_eq!(tracker.positions().len(), 2);
    }

    #[test]
    fn test_new_drag_on_other_page_clears_previous() {
        let mut tracker = SelectionTracker::new();
        tracker.begin(target(0, "@a"), CellPosition::new(0, 0));
        tracker.extend(&target(0, "@a"), CellPosition::new(1, 1));
        tracker.finish();
        assert!(tracker.has_range());

        tracker.begin(target(0, "@b"), CellPosition::new(2, 2));
        assert_eq!(tracker.target(), Some(&target(0, "@b")));
        assert_eq!(tracker.positions().len(), 1);
        assert!(tracker.contains(CellPosition::new(2, 2)));
        assert!(!tracker.contains(CellPosition::new(0, 0)));
    }

    #[test]
    fn test_moves_from_other_target_are_ignored_mid_drag() {
        let mut tracker = SelectionTracker::new();
        tracker.begin(target(0, "@a"), CellPosition::new(0, 0));
        tracker.extend(&target(1, "@a"), CellPosition::new(5, 5));
        tracker.extend(&target(0, "@b"), CellPosition::new(6, 6));

        assert_eq!(tracker.positions().len(), 1);
    }

    #[test]
    fn test_moves_without_active_drag_are_ignored() {
        let mut tracker = SelectionTracker::new();
        tracker.extend(&target(0, "@a"), CellPosition::new(0, 0));
        assert!(tracker.positions().is_empty());
    }
}
