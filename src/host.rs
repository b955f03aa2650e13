//! External collaborator seams - the text codec and the host document
//!
//! The engine never reads or writes text itself. Parsing and serializing the
//! table format, locating a block's line range inside the host file, and the
//! actual text replacement all happen behind these traits; the embedder
//! supplies the implementations.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::store::Store;

/// Error type for table-source parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "table parse error at line {}: {}", line, self.message),
            None => write!(f, "table parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// The textual-format codec, supplied as a black box
///
/// `parse` failures are surfaced by the rendering adapter as an inline error
/// in place of the table; the engine never mutates anything for a block that
/// failed to parse. `serialize` is expected to succeed for any store this
/// engine produces; a failure means the model went internally inconsistent
/// (e.g. a covered-cell/anchor mismatch) and is reported to the user.
pub trait TableCodec {
    fn parse(&self, source: &str) -> Result<Store, ParseError>;

    /// Serialize a store back to block text; `show_indices` asks the codec
    /// to emit logical-position index markers
    fn serialize(&self, store: &Store, show_indices: bool) -> Result<String>;
}

/// Identifies one table block inside a host file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHandle {
    pub file_path: PathBuf,
    /// Host-side section marker (e.g. the block's index within the file)
    pub section: usize,
}

/// Line range of a block, delimiter lines included, both ends inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start_line: usize,
    pub end_line: usize,
}

impl LineRange {
    /// The replaceable interior of the block - everything between the
    /// delimiter lines. `None` when the block has no interior.
    pub fn inner(self) -> Option<LineRange> {
        if self.end_line <= self.start_line + 1 {
            return None;
        }
        Some(LineRange {
            start_line: self.start_line + 1,
            end_line: self.end_line - 1,
        })
    }
}

/// Vertical scroll offset of the host view
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition(pub f64);

/// The host document/editor
///
/// `replace_range` is called exactly once per edit session and only ever
/// covers a block's inner lines, never its delimiters. The scroll accessors
/// exist for visual continuity: the host re-renders after a replace, and the
/// engine restores the previous offset on a follow-up tick.
pub trait HostDocument {
    /// Resolve a block's current line range; `None` if the host can no
    /// longer locate it
    fn block_range(&self, handle: &BlockHandle) -> Option<LineRange>;

    fn replace_range(
        &mut self,
        file_path: &Path,
        start_line: usize,
        end_line: usize,
        text: &str,
    ) -> Result<()>;

    fn scroll_position(&self) -> ScrollPosition;

    fn set_scroll_position(&mut self, position: ScrollPosition);
}
