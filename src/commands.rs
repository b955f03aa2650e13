//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the embedder's runtime performs after an
//! update: driving a staged edit session against its codec and host, saving
//! configuration, redrawing. The update layer itself stays pure apart from
//! model mutation.

use crate::model::BlockId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the tables whose selection highlight changed
    Redraw,
    /// A session is staged for this block: call
    /// [`run_commit`](crate::session::run_commit), then
    /// [`run_scroll_restore`](crate::session::run_scroll_restore) on the
    /// next tick
    CommitBlock { block: BlockId },
    /// Persist the engine configuration
    SaveConfig,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }
}
