//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The rendering adapter
//! translates its pointer listeners and context-menu callbacks into `Msg`
//! values and feeds them to [`update`](crate::update::update).

use crate::model::store::{CellPosition, PageId};
use crate::model::BlockId;

/// Pointer events from the rendering adapter's cell listeners
#[derive(Debug, Clone, PartialEq)]
pub enum PointerMsg {
    /// Pointer-down inside a rendered cell
    Down {
        block: BlockId,
        page: PageId,
        position: CellPosition,
    },
    /// Pointer-move over a cell during a drag
    Move {
        block: BlockId,
        page: PageId,
        position: CellPosition,
    },
    /// Pointer-up anywhere in the document, inside a table or not
    Up,
}

/// Table edit requests - cell commits and context-menu actions
///
/// Row and column positions follow the context menu's shape: "add after this
/// row" carries the clicked row's index, "add before" carries `index - 1`,
/// and `-1` means the top/left edge.
#[derive(Debug, Clone, PartialEq)]
pub enum TableMsg {
    /// Commit a new cell value after a double-click edit
    SetCellValue {
        block: BlockId,
        page: PageId,
        position: CellPosition,
        value: String,
    },
    InsertRowAfter {
        block: BlockId,
        page: PageId,
        after_index: isize,
    },
    RemoveRow {
        block: BlockId,
        page: PageId,
        index: usize,
    },
    InsertColumnAfter {
        block: BlockId,
        page: PageId,
        after_index: isize,
    },
    RemoveColumn {
        block: BlockId,
        page: PageId,
        index: usize,
    },
    /// Merge the tracker's current range selection into one spanning cell
    MergeSelection,
    /// Dissolve the merged rectangle anchored at `position`
    SplitCell {
        block: BlockId,
        page: PageId,
        position: CellPosition,
    },
    /// Toggle index markers; persists the config and re-serializes the block
    /// so the text reflects the flag
    SetIndicesVisibility { block: BlockId, visible: bool },
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Table(TableMsg),
}
