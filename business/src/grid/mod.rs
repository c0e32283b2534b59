//! Generic data grid engine.
//!
//! This module turns `(rows: &[T], columns: ColumnSet<T>)` plus a
//! [`TableState`] into the visible page of a table:
//! - `column`: column definitions and validated column sets
//! - `value`: cell values, their search text and sort order
//! - `state`: search/sort/pagination state and its transitions
//! - `pipeline`: the filter → sort → page projection
//! - `memo`: projection cache for immediate-mode redraws
//!
//! Nothing here draws. UI code renders a [`TableView`] and feeds user input
//! back as [`TableEvent`]s.

mod column;
mod config;
mod error;
mod memo;
mod pipeline;
mod state;
mod value;

pub use column::{
    Column, ColumnHeader, ColumnSet, ColumnSetRevision, SERIAL_COLUMN_HEADER, SERIAL_COLUMN_ID,
};
pub use config::TableConfig;
pub use error::GridError;
pub use memo::ViewMemo;
pub use pipeline::{TableView, VisibleRow, filter_indices, page_bounds, project, sort_indices};
pub use state::{PaginationState, SortDirection, SortState, TableEvent, TableState};
pub use value::{CellValue, DATE_FORMAT, DATE_TIME_FORMAT};
