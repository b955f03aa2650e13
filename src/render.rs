//! Render plan - what the external adapter draws
//!
//! The engine does no drawing. [`render_store`] folds the normalizer output
//! and the configuration flags into plain data: per page, whether its title
//! shows, and per visible cell the value, header flag, span attributes and
//! addressing label. The rendering adapter walks this and attaches its own
//! listeners, feeding pointer and context events back as messages.

use crate::config::EngineConfig;
use crate::grid::normalize::visible_rows;
use crate::model::store::{CellPosition, PageId, Store};

/// One visible cell, render-ready
#[derive(Debug, Clone, PartialEq)]
pub struct CellRender {
    pub value: String,
    pub is_header: bool,
    /// Colspan display attribute; 1 for an ordinary cell
    pub col_span: u32,
    /// Rowspan display attribute; 1 for an ordinary cell
    pub row_span: u32,
    /// Logical identity the adapter stamps on the cell (`"c;r"`)
    pub position: CellPosition,
    /// Index marker to display inside the cell, when enabled
    pub index_label: Option<String>,
}

/// One page of rendered rows
#[derive(Debug, Clone, PartialEq)]
pub struct PageRender {
    pub id: PageId,
    /// Title to draw above the table, already gated on the config
    pub title: Option<String>,
    pub rows: Vec<Vec<CellRender>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    pub pages: Vec<PageRender>,
}

/// Build the render plan for a store
///
/// Page titles show when titles are enabled in the config, or always when
/// the store has several pages - a multi-sheet table is unreadable without
/// them.
pub fn render_store(store: &Store, config: &EngineConfig) -> RenderPlan {
    let multi_page = store.page_count() > 1;

    let pages = store
        .pages()
        .map(|page| {
            let title = page
                .title
                .clone()
                .filter(|_| config.show_titles || multi_page);

            let rows = visible_rows(page)
                .into_iter()
                .map(|row| {
                    row.into_iter()
                        .map(|cell| CellRender {
                            index_label: config
                                .show_indices
                                .then(|| cell.position.to_string()),
                            value: cell.value,
                            is_header: cell.is_header,
                            col_span: cell.span.width.max(1),
                            row_span: cell.span.height.max(1),
                            position: cell.position,
                        })
                        .collect()
                })
                .collect();

            PageRender {
                id: page.id.clone(),
                title,
                rows,
            }
        })
        .collect();

    RenderPlan { pages }
}
