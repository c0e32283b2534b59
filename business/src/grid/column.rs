//! Column definitions for the data grid.
//!
//! A column maps a row of any type `T` to a [`CellValue`] and carries the
//! display/sort metadata the table needs: header, optional cell renderer and
//! the `sortable`/`searchable` flags.
//!
//! # Examples
//!
//! ```ignore
//! let columns = ColumnSet::new(vec![
//!     Column::new("owner_name", "Owner Name", |p: &PropertyRecord| p.owner_name.as_str().into()),
//!     Column::new("property_size", "Size (sqm)", |p: &PropertyRecord| p.property_size.into()),
//!     Column::new("lat", "Latitude", |p: &PropertyRecord| p.lat.into()).searchable(false),
//! ])?;
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use egui::Ui;

use super::error::GridError;
use super::value::CellValue;

/// Id of the synthetic serial number column the table prepends.
///
/// Caller columns may not use it.
pub const SERIAL_COLUMN_ID: &str = "serial_number";

/// Header label of the serial number column.
pub const SERIAL_COLUMN_HEADER: &str = "S/N";

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;
type CellRenderer<T> = Arc<dyn Fn(&mut Ui, &CellValue, &T) + Send + Sync>;
type HeaderRenderer = Arc<dyn Fn(&mut Ui) + Send + Sync>;

/// Column header: plain text or a custom renderer.
#[derive(Clone)]
pub enum ColumnHeader {
    Text(String),
    /// Custom header. `label` is still used for accessibility and logs.
    Custom { label: String, render: HeaderRenderer },
}

impl ColumnHeader {
    pub fn label(&self) -> &str {
        match self {
            Self::Text(label) | Self::Custom { label, .. } => label,
        }
    }
}

impl fmt::Debug for ColumnHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(label) => f.debug_tuple("Text").field(label).finish(),
            Self::Custom { label, .. } => f.debug_struct("Custom").field("label", label).finish(),
        }
    }
}

impl From<&str> for ColumnHeader {
    fn from(label: &str) -> Self {
        Self::Text(label.to_owned())
    }
}

impl From<String> for ColumnHeader {
    fn from(label: String) -> Self {
        Self::Text(label)
    }
}

/// A single column definition.
pub struct Column<T> {
    /// Unique id within the column set.
    pub id: String,
    pub header: ColumnHeader,
    /// Whether clicking the header cycles the sort (default `true`).
    pub sortable: bool,
    /// Whether the global filter looks at this column (default `true`).
    pub searchable: bool,
    accessor: Accessor<T>,
    cell: Option<CellRenderer<T>>,
}

impl<T> Column<T> {
    /// Create a sortable, searchable column.
    ///
    /// The accessor must be pure; it runs on every projection.
    pub fn new<F>(id: impl Into<String>, header: impl Into<ColumnHeader>, accessor: F) -> Self
    where
        F: Fn(&T) -> CellValue + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            header: header.into(),
            sortable: true,
            searchable: true,
            accessor: Arc::new(accessor),
            cell: None,
        }
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Replace the default label rendering of this column's cells.
    pub fn cell<F>(mut self, render: F) -> Self
    where
        F: Fn(&mut Ui, &CellValue, &T) + Send + Sync + 'static,
    {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Render the header with a custom closure, keeping `label` for queries.
    pub fn header_with<F>(mut self, label: impl Into<String>, render: F) -> Self
    where
        F: Fn(&mut Ui) + Send + Sync + 'static,
    {
        self.header = ColumnHeader::Custom {
            label: label.into(),
            render: Arc::new(render),
        };
        self
    }

    /// Derive this column's value for `row`.
    #[inline]
    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }

    /// Custom cell renderer, if any.
    pub fn cell_renderer(&self) -> Option<&(dyn Fn(&mut Ui, &CellValue, &T) + Send + Sync)> {
        self.cell.as_deref()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            searchable: self.searchable,
            accessor: Arc::clone(&self.accessor),
            cell: self.cell.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("searchable", &self.searchable)
            .field("cell", &self.cell.is_some())
            .finish()
    }
}

/// Identity of a column set, used as part of the projection cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnSetRevision(u64);

impl ColumnSetRevision {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// An ordered, validated list of columns.
pub struct ColumnSet<T> {
    columns: Vec<Column<T>>,
    revision: ColumnSetRevision,
}

impl<T> ColumnSet<T> {
    /// Validate and wrap `columns`.
    ///
    /// Fails on an empty id, a duplicate id, or the reserved
    /// [`SERIAL_COLUMN_ID`].
    pub fn new(columns: Vec<Column<T>>) -> Result<Self, GridError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.id.is_empty() {
                return Err(GridError::empty_column_id(column.header.label()));
            }
            if column.id == SERIAL_COLUMN_ID {
                return Err(GridError::reserved_column_id(&column.id));
            }
            if !seen.insert(column.id.as_str()) {
                return Err(GridError::duplicate_column_id(&column.id));
            }
        }

        Ok(Self {
            columns,
            revision: ColumnSetRevision::next(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column<T>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|column| column.id == id)
    }

    pub fn revision(&self) -> ColumnSetRevision {
        self.revision
    }
}

impl<'a, T> IntoIterator for &'a ColumnSet<T> {
    type Item = &'a Column<T>;
    type IntoIter = std::slice::Iter<'a, Column<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSet")
            .field("columns", &self.columns)
            .field("revision", &self.revision)
            .finish()
    }
}
