use thiserror::Error;

/// Configuration errors raised while building a grid.
///
/// These are caller defects (bad column definitions, zero page size) and are
/// reported at construction time instead of rendering a broken table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Column id must not be empty (header: {header:?})")]
    EmptyColumnId { header: String },

    #[error("Duplicate column id: {id}")]
    DuplicateColumnId { id: String },

    #[error("Column id {id} is reserved for the serial number column")]
    ReservedColumnId { id: String },

    #[error("Page size must be positive, got {size}")]
    InvalidPageSize { size: usize },
}

impl GridError {
    pub fn empty_column_id(header: impl Into<String>) -> Self {
        Self::EmptyColumnId {
            header: header.into(),
        }
    }

    pub fn duplicate_column_id(id: impl Into<String>) -> Self {
        Self::DuplicateColumnId { id: id.into() }
    }

    pub fn reserved_column_id(id: impl Into<String>) -> Self {
        Self::ReservedColumnId { id: id.into() }
    }
}
