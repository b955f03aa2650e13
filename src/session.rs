//! Edit session controller - one mutation, one text replace
//!
//! Every user-triggered edit runs the same protocol: mutate a working copy of
//! the block's store, serialize it, ask the host to replace the block's inner
//! lines, then restore the scroll position on a follow-up tick once the host
//! has re-rendered. A single in-flight guard keeps sessions from overlapping;
//! an edit issued while one is in flight is dropped outright (never queued),
//! because any concurrent replace invalidates the line-range bookkeeping.
//!
//! The update layer stages the edited store ([`EditSession::try_begin`]), the
//! embedder's runtime drives [`run_commit`] with its codec and host, and then
//! calls [`run_scroll_restore`] on the next tick. The guard is released
//! exactly once per session: after the scroll restore on success, immediately
//! on any failure.

use std::fmt;

use tracing::{debug, info, warn};

use crate::host::{HostDocument, LineRange, ScrollPosition, TableCodec};
use crate::model::store::Store;
use crate::model::{BlockId, EngineModel, TableBlock};

/// Why a session failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The codec refused the store - the model went internally inconsistent
    Serialize(String),
    /// The host could no longer locate the block's line range
    BlockRangeLost,
    /// The host accepted the range but the replace itself failed
    ReplaceFailed(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Serialize(msg) => write!(f, "failed to serialize table: {}", msg),
            SessionError::BlockRangeLost => write!(f, "table block not found in document"),
            SessionError::ReplaceFailed(msg) => write!(f, "failed to update document: {}", msg),
        }
    }
}

impl std::error::Error for SessionError {}

/// How a session resolved
///
/// Every session ends in one of these; nothing propagates past the session
/// boundary as a raw error. The embedder turns a `Failed` outcome into a
/// user-visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Replace succeeded; the scroll restore tick is still pending
    Committed,
    Failed(SessionError),
}

#[derive(Debug)]
enum Phase {
    Idle,
    /// An edited store is staged, waiting for the runtime to run the commit
    Staged { block: BlockId, edited: Store },
    /// Replace done; guard stays held until the deferred scroll restore runs
    AwaitingScrollRestore { scroll: ScrollPosition },
}

/// The single-session guard and its staged work
#[derive(Debug)]
pub struct EditSession {
    phase: Phase,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    pub fn new() -> Self {
        EditSession { phase: Phase::Idle }
    }

    /// True from the moment an edit is staged until the guard is released
    pub fn is_in_flight(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Stage an edited store for commit
    ///
    /// Returns false - and drops the edit - when a session is already in
    /// flight. The caller mutated a *copy* of the block's store, so a dropped
    /// or failed edit leaves the model untouched.
    pub fn try_begin(&mut self, block: BlockId, edited: Store) -> bool {
        if self.is_in_flight() {
            debug!(%block, "edit dropped, session already in flight");
            return false;
        }
        self.phase = Phase::Staged { block, edited };
        true
    }

    fn take_staged(&mut self) -> Option<(BlockId, Store)> {
        match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Staged { block, edited } => Some((block, edited)),
            other => {
                self.phase = other;
                None
            }
        }
    }

    fn release(&mut self) {
        self.phase = Phase::Idle;
    }
}

/// Run the staged session: serialize, replace the block's inner lines,
/// install the edited store on success
///
/// On success the session moves to the scroll-restore phase with the guard
/// still held; the runtime must call [`run_scroll_restore`] on its next tick.
/// On failure the guard is released here and the outcome carries the error.
/// Returns `None` when no edit is staged.
pub fn run_commit(
    model: &mut EngineModel,
    codec: &dyn TableCodec,
    host: &mut dyn HostDocument,
) -> Option<SessionOutcome> {
    let Some((block_id, edited)) = model.session.take_staged() else {
        warn!("run_commit called with no staged session");
        return None;
    };

    let show_indices = model.config.show_indices;
    let Some(block) = model.block(block_id) else {
        model.session.release();
        return Some(SessionOutcome::Failed(SessionError::BlockRangeLost));
    };

    let text = match codec.serialize(&edited, show_indices) {
        Ok(text) => text,
        Err(e) => {
            warn!(%block_id, error = %e, "serialize failed, model left in place");
            model.session.release();
            return Some(SessionOutcome::Failed(SessionError::Serialize(e.to_string())));
        }
    };

    let Some(inner) = inner_range(block, host) else {
        warn!(%block_id, "host lost the block's line range");
        model.session.release();
        return Some(SessionOutcome::Failed(SessionError::BlockRangeLost));
    };

    // Captured before the replace so the follow-up tick can undo the host's
    // post-replace scroll jump.
    let scroll = host.scroll_position();
    let file_path = block.handle.file_path.clone();

    if let Err(e) = host.replace_range(&file_path, inner.start_line, inner.end_line, &text) {
        warn!(%block_id, error = %e, "host replace failed");
        model.session.release();
        return Some(SessionOutcome::Failed(SessionError::ReplaceFailed(e.to_string())));
    }

    // The working copy becomes the block's store until the host's re-parse
    // delivers a fresh one.
    model.resync_block(block_id, edited);
    model.session.phase = Phase::AwaitingScrollRestore { scroll };

    info!(%block_id, lines = inner.end_line - inner.start_line + 1, "block text replaced");
    Some(SessionOutcome::Committed)
}

/// The deferred follow-up tick: restore the scroll position and release the
/// guard
///
/// Must run after the host has re-rendered the replaced block, hence on a
/// tick of its own rather than inline in [`run_commit`]. A call without a
/// pending restore is a no-op.
pub fn run_scroll_restore(model: &mut EngineModel, host: &mut dyn HostDocument) {
    match std::mem::replace(&mut model.session.phase, Phase::Idle) {
        Phase::AwaitingScrollRestore { scroll } => {
            host.set_scroll_position(scroll);
            debug!("scroll restored, session complete");
        }
        other => model.session.phase = other,
    }
}

/// Resolve a block's replaceable inner line range through the host
fn inner_range(block: &TableBlock, host: &dyn HostDocument) -> Option<LineRange> {
    host.block_range(&block.handle)?.inner()
}
