//! Grid algorithms over the store
//!
//! Three concerns, all operating on a single [`Page`](crate::model::store::Page):
//!
//! - `normalize` turns the dense storage grid into the sparse sequence of
//!   visible cells a renderer draws
//! - `mutate` inserts and deletes rows and columns while keeping every row
//!   the same length
//! - `merge` collapses a range selection into one spanning anchor and
//!   dissolves it again

pub mod merge;
pub mod mutate;
pub mod normalize;

pub use merge::{merge, split};
pub use mutate::{insert_column, insert_row, remove_column, remove_row};
pub use normalize::{visible_cell_count, visible_rows, VisibleCell};
