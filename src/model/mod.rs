//! Engine model - the complete state of the table editing engine
//!
//! One [`EngineModel`] serves one host document. It owns a `TableBlock` per
//! rendered table block, the document-wide selection tracker, the edit
//! session guard, and the persisted configuration. Following the Elm
//! pattern, all state transitions flow through [`update`](crate::update::update).

pub mod store;

use std::fmt;

use crate::config::EngineConfig;
use crate::host::BlockHandle;
use crate::selection::SelectionTracker;
use crate::session::EditSession;

pub use store::{Cell, CellPosition, Page, PageId, Row, Span, Store, StoreScripts};

/// Identifies one rendered table block within the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId(pub usize);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "block#{}", self.0)
    }
}

/// One rendered table block: its parsed store plus the handle the host uses
/// to locate its text
#[derive(Debug)]
pub struct TableBlock {
    pub id: BlockId,
    pub handle: BlockHandle,
    pub store: Store,
}

/// Complete engine state for one host document
#[derive(Debug)]
pub struct EngineModel {
    blocks: Vec<TableBlock>,
    pub selection: SelectionTracker,
    pub session: EditSession,
    pub config: EngineConfig,
    next_block_id: usize,
}

impl EngineModel {
    pub fn new(config: EngineConfig) -> Self {
        EngineModel {
            blocks: Vec::new(),
            selection: SelectionTracker::new(),
            session: EditSession::new(),
            config,
            next_block_id: 0,
        }
    }

    /// Register a freshly parsed block and return its id
    pub fn open_block(&mut self, handle: BlockHandle, store: Store) -> BlockId {
        let id = BlockId(self.next_block_id);
        self.next_block_id += 1;
        self.blocks.push(TableBlock { id, handle, store });
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&TableBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut TableBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &TableBlock> {
        self.blocks.iter()
    }

    /// Replace a block's store wholesale after the host re-parsed its text
    ///
    /// The old store is discarded; any selection that referenced it keeps its
    /// logical positions and simply misses on lookups that no longer exist.
    pub fn resync_block(&mut self, id: BlockId, store: Store) {
        if let Some(block) = self.block_mut(id) {
            block.store = store;
        }
    }

    /// Forget a block that is no longer rendered
    pub fn close_block(&mut self, id: BlockId) {
        self.blocks.retain(|b| b.id != id);
        if self.selection.target().map(|t| t.block) == Some(id) {
            self.selection.clear();
        }
    }
}
