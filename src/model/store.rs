//! Grid store types - pages, rows, cells, spans
//!
//! The store is the parsed form of one table block: an ordered set of pages,
//! each a rectangular grid of cells. Cells may carry a span that makes them
//! the anchor of a merged rectangle; the other member cells stay in storage
//! as covered placeholders so every row keeps its full length.

use std::fmt;
use std::str::FromStr;

/// Identifier of a page within a store (e.g. `"@page1"`)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageId(pub String);

impl PageId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PageId {
    fn from(s: &str) -> Self {
        PageId(s.to_string())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical position of a cell in a page's storage grid
///
/// This names a storage slot, not a visible cell: a position inside a merged
/// rectangle addresses a covered placeholder. The textual form `"<col>;<row>"`
/// is what rendering adapters stamp on each cell for addressing callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPosition {
    pub column: usize,
    pub row: usize,
}

impl CellPosition {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{};{}", self.column, self.row)
    }
}

impl FromStr for CellPosition {
    type Err = ();

    /// Parse the `"<col>;<row>"` addressing form
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (col, row) = s.split_once(';').ok_or(())?;
        Ok(CellPosition {
            column: col.parse().map_err(|_| ())?,
            row: row.parse().map_err(|_| ())?,
        })
    }
}

/// How many grid cells a cell's rectangle occupies, itself included
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub width: u32,
    pub height: u32,
}

impl Span {
    /// An ordinary single cell
    pub const UNIT: Span = Span {
        width: 1,
        height: 1,
    };

    /// Sentinel for a cell inside someone else's merged rectangle
    pub const COVERED: Span = Span {
        width: 0,
        height: 0,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if this span makes its cell the anchor of a merged rectangle
    pub fn is_merged(self) -> bool {
        self.width > 1 || self.height > 1
    }

    pub fn is_covered(self) -> bool {
        self == Span::COVERED
    }
}

/// A single cell of the grid
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cell {
    /// Optional element id carried through from the source text
    pub id: Option<String>,
    pub value: String,
    pub is_header: bool,
    /// `None` means an ordinary `(1,1)` cell
    pub span: Option<Span>,
}

impl Cell {
    /// An empty, unspanned cell
    pub fn empty(is_header: bool) -> Self {
        Cell {
            id: None,
            value: String::new(),
            is_header,
            span: None,
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Cell {
            value: value.into(),
            ..Cell::default()
        }
    }

    /// The span with the `(1,1)` default applied
    pub fn effective_span(&self) -> Span {
        self.span.unwrap_or(Span::UNIT)
    }

    /// True if this cell anchors a merged rectangle
    pub fn is_anchor(&self) -> bool {
        self.effective_span().is_merged()
    }

    /// True if this cell is a covered placeholder inside a merged rectangle
    pub fn is_covered(&self) -> bool {
        self.span.map(Span::is_covered).unwrap_or(false)
    }
}

pub type Row = Vec<Cell>;

/// One page (sheet) of a table block
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: PageId,
    pub title: Option<String>,
    pub rows: Vec<Row>,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Page {
            id: PageId(id.into()),
            title: None,
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the page, taken from the first row
    ///
    /// An external producer may leave later rows short; `ensure_row_width`
    /// repairs that before any column mutation.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Bounds-checked cell lookup; `None` is an addressing miss, not an error
    pub fn cell_at(&self, position: CellPosition) -> Option<&Cell> {
        self.rows.get(position.row)?.get(position.column)
    }

    pub fn cell_at_mut(&mut self, position: CellPosition) -> Option<&mut Cell> {
        self.rows.get_mut(position.row)?.get_mut(position.column)
    }

    /// Pad a row with empty, unspanned cells up to `min_len`
    ///
    /// Padded cells inherit `is_header` from the row's first cell (false for
    /// an empty row), so padding a header row keeps it a header row.
    pub fn ensure_row_width(&mut self, row_index: usize, min_len: usize) {
        let Some(row) = self.rows.get_mut(row_index) else {
            return;
        };
        let is_header = row.first().map(|c| c.is_header).unwrap_or(false);
        while row.len() < min_len {
            row.push(Cell::empty(is_header));
        }
    }

    /// True if every row has the same length
    pub fn is_rectangular(&self) -> bool {
        let width = self.column_count();
        self.rows.iter().all(|r| r.len() == width)
    }
}

/// Opaque script payloads attached to a store
///
/// Typing, expression and styling scripts are carried through parse and
/// serialize untouched; the editing engine never interprets them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreScripts {
    pub typings: Vec<String>,
    pub expressions: Vec<String>,
    pub styles: Vec<String>,
}

/// Parsed form of one table block: ordered pages plus opaque scripts
///
/// Page order is preserved for stable rendering. A store lives exactly one
/// interaction cycle: parsed from the block's text, mutated, serialized back,
/// then discarded when the host re-parses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    pages: Vec<Page>,
    pub scripts: StoreScripts,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pages(pages: Vec<Page>) -> Self {
        Store {
            pages,
            scripts: StoreScripts::default(),
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages in insertion order
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn page(&self, id: &PageId) -> Option<&Page> {
        self.pages.iter().find(|p| &p.id == id)
    }

    pub fn page_mut(&mut self, id: &PageId) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| &p.id == id)
    }

    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }
}
