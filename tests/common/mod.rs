//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use spangrid::config::EngineConfig;
use spangrid::host::{
    BlockHandle, HostDocument, LineRange, ParseError, ScrollPosition, TableCodec,
};
use spangrid::model::{BlockId, Cell, CellPosition, EngineModel, Page, PageId, Store};

/// Build a page of plain cells from literal rows
pub fn page_from(id: &str, rows: &[&[&str]]) -> Page {
    let mut page = Page::new(id);
    for row in rows {
        page.rows
            .push(row.iter().map(|v| Cell::with_value(*v)).collect());
    }
    page
}

/// A single-page store, page id `@p1`
pub fn store_from(rows: &[&[&str]]) -> Store {
    Store::from_pages(vec![page_from("@p1", rows)])
}

pub fn p1() -> PageId {
    PageId::from("@p1")
}

pub fn pos(column: usize, row: usize) -> CellPosition {
    CellPosition::new(column, row)
}

pub fn test_handle() -> BlockHandle {
    BlockHandle {
        file_path: PathBuf::from("notes.md"),
        section: 0,
    }
}

/// Model with one open block holding `store`; returns the model and block id
pub fn test_model(store: Store) -> (EngineModel, BlockId) {
    let mut model = EngineModel::new(EngineConfig::default());
    let block = model.open_block(test_handle(), store);
    (model, block)
}

/// Codec stand-in: serializes a store to one line per row, cells joined with
/// `|`, covered cells rendered as `.`
pub struct MockCodec {
    pub fail_serialize: bool,
    /// `show_indices` value seen by the last serialize call
    pub last_show_indices: RefCell<Option<bool>>,
}

impl MockCodec {
    pub fn new() -> Self {
        MockCodec {
            fail_serialize: false,
            last_show_indices: RefCell::new(None),
        }
    }

    pub fn failing() -> Self {
        MockCodec {
            fail_serialize: true,
            last_show_indices: RefCell::new(None),
        }
    }
}

impl TableCodec for MockCodec {
    fn parse(&self, source: &str) -> Result<Store, ParseError> {
        if source.trim().is_empty() {
            return Err(ParseError {
                message: "empty input".to_string(),
                line: None,
            });
        }
        let rows: Vec<Vec<&str>> = source
            .lines()
            .map(|line| line.split('|').collect())
            .collect();
        let slices: Vec<&[&str]> = rows.iter().map(|r| r.as_slice()).collect();
        Ok(store_from(&slices))
    }

    fn serialize(&self, store: &Store, show_indices: bool) -> anyhow::Result<String> {
        *self.last_show_indices.borrow_mut() = Some(show_indices);
        if self.fail_serialize {
            anyhow::bail!("codec rejected store");
        }
        let mut out = String::new();
        for page in store.pages() {
            for row in &page.rows {
                let line: Vec<&str> = row
                    .iter()
                    .map(|c| if c.is_covered() { "." } else { c.value.as_str() })
                    .collect();
                out.push_str(&line.join("|"));
                out.push('\n');
            }
        }
        Ok(out)
    }
}

/// Recorded `replace_range` call
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaceCall {
    pub file_path: PathBuf,
    pub start_line: usize,
    pub end_line: usize,
    pub text: String,
}

/// Host stand-in with togglable failure modes and full call recording
pub struct MockHost {
    /// Full block range (delimiters included) returned for every handle;
    /// `None` simulates a block the host lost track of
    pub range: Option<LineRange>,
    pub fail_replace: bool,
    pub scroll: ScrollPosition,
    pub replaces: Vec<ReplaceCall>,
    pub scroll_sets: Vec<ScrollPosition>,
}

impl MockHost {
    /// Host with a block spanning lines 10..=15 (inner 11..=14)
    pub fn new() -> Self {
        MockHost {
            range: Some(LineRange {
                start_line: 10,
                end_line: 15,
            }),
            fail_replace: false,
            scroll: ScrollPosition(240.0),
            replaces: Vec::new(),
            scroll_sets: Vec::new(),
        }
    }
}

impl HostDocument for MockHost {
    fn block_range(&self, _handle: &BlockHandle) -> Option<LineRange> {
        self.range
    }

    fn replace_range(
        &mut self,
        file_path: &Path,
        start_line: usize,
        end_line: usize,
        text: &str,
    ) -> anyhow::Result<()> {
        if self.fail_replace {
            anyhow::bail!("file is read-only");
        }
        self.replaces.push(ReplaceCall {
            file_path: file_path.to_path_buf(),
            start_line,
            end_line,
            text: text.to_string(),
        });
        Ok(())
    }

    fn scroll_position(&self) -> ScrollPosition {
        self.scroll
    }

    fn set_scroll_position(&mut self, position: ScrollPosition) {
        self.scroll_sets.push(position);
    }
}
