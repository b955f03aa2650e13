//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through [`update`]. Pointer messages drive
//! the selection tracker; table messages mutate a working copy of a block's
//! store and stage it for an edit session.

mod pointer;
mod table;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EngineModel;

pub use pointer::update_pointer;
pub use table::{parse_position, update_table};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut EngineModel, msg: Msg) -> Option<Cmd> {
    let _span = span!(Level::DEBUG, "update", msg = ?msg_type_name(&msg)).entered();
    debug!(target: "message", msg = %msg_type_name(&msg), "processing");

    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Table(m) => table::update_table(model, m),
    }
}

/// Display name for a message, variant and arguments included
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Pointer(m) => format!("Pointer::{:?}", m),
        Msg::Table(m) => format!("Table::{:?}", m),
    }
}
