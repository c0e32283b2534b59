//! Table interaction state.
//!
//! `TableState` is everything the user can change on a mounted table: the
//! global search text, the single active sort and the current page. All
//! operations are plain transitions; rendering never mutates it except to
//! write back a clamped page index.

use std::num::NonZeroUsize;

use log::{debug, warn};

use super::column::ColumnSet;
use super::config::TableConfig;
use super::error::GridError;

/// Sort direction of the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Header indicator for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// At most one sorted column. `None` keeps the filtered insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SortState {
    active: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn ascending(column_id: impl Into<String>) -> Self {
        Self {
            active: Some((column_id.into(), SortDirection::Ascending)),
        }
    }

    pub fn descending(column_id: impl Into<String>) -> Self {
        Self {
            active: Some((column_id.into(), SortDirection::Descending)),
        }
    }

    pub fn column_id(&self) -> Option<&str> {
        self.active.as_ref().map(|(id, _)| id.as_str())
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.active.as_ref().map(|(_, direction)| *direction)
    }

    /// Direction for `column_id`, if it is the sorted column.
    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        match &self.active {
            Some((id, direction)) if id == column_id => Some(*direction),
            _ => None,
        }
    }

    pub fn is_unsorted(&self) -> bool {
        self.active.is_none()
    }

    /// Advance the sort for `column_id`: none → ascending → descending → none.
    ///
    /// A different column always starts at ascending and replaces the
    /// current one.
    pub fn cycle(&self, column_id: &str) -> Self {
        match self.direction_of(column_id) {
            None => Self::ascending(column_id),
            Some(SortDirection::Ascending) => Self::descending(column_id),
            Some(SortDirection::Descending) => Self::default(),
        }
    }
}

/// Current page and rows per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: NonZeroUsize,
}

impl PaginationState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            page_index: 0,
            page_size,
        }
    }

    /// Number of pages for `row_count` rows. Always at least one.
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.get()).max(1)
    }

    /// Largest valid page index for `row_count` rows.
    pub fn last_page_index(&self, row_count: usize) -> usize {
        self.page_count(row_count) - 1
    }
}

/// A user interaction against a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    SetSearchQuery(String),
    ToggleSort(String),
    SetPage(usize),
    SetPageSize(usize),
}

/// Search, sort and pagination state of one mounted table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableState {
    search: String,
    sort: SortState,
    pagination: PaginationState,
    paginated: bool,
}

impl TableState {
    /// Mount-time defaults: empty search, no sort, first page.
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search: String::new(),
            sort: SortState::default(),
            pagination: PaginationState::new(page_size),
            paginated: true,
        }
    }

    /// Defaults taken from a table configuration.
    pub fn from_config(config: &TableConfig) -> Result<Self, GridError> {
        let page_size = NonZeroUsize::new(config.default_page_size).ok_or(
            GridError::InvalidPageSize {
                size: config.default_page_size,
            },
        )?;
        let mut state = Self::new(page_size);
        state.paginated = config.enable_pagination;
        Ok(state)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn pagination(&self) -> PaginationState {
        self.pagination
    }

    pub fn page_index(&self) -> usize {
        self.pagination.page_index
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size.get()
    }

    /// Whether rows are split into pages at all.
    pub fn is_paginated(&self) -> bool {
        self.paginated
    }

    /// Replace the global filter and go back to the first page.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.pagination.page_index = 0;
        debug!("Table search set to {:?}", self.search);
    }

    /// Cycle the sort of `column_id`.
    ///
    /// Unknown and non-sortable columns leave the state untouched.
    pub fn toggle_sort<T>(&mut self, columns: &ColumnSet<T>, column_id: &str) {
        match columns.get(column_id) {
            Some(column) if column.sortable => {
                self.sort = self.sort.cycle(column_id);
                debug!(
                    "Table sort on {column_id} is now {:?}",
                    self.sort.direction_of(column_id)
                );
            }
            Some(_) => debug!("Ignoring sort toggle on non-sortable column {column_id}"),
            None => warn!("Ignoring sort toggle on unknown column {column_id}"),
        }
    }

    /// Request page `index`. Out-of-range requests are clamped when the
    /// table is projected.
    pub fn set_page(&mut self, index: usize) {
        self.pagination.page_index = index;
    }

    /// Change the rows per page and go back to the first page.
    pub fn set_page_size(&mut self, size: usize) -> Result<(), GridError> {
        let page_size = NonZeroUsize::new(size).ok_or(GridError::InvalidPageSize { size })?;
        self.pagination = PaginationState::new(page_size);
        Ok(())
    }

    /// Clamp the page index into `[0, last page]` for `filtered_count` rows.
    ///
    /// Returns `true` if the index changed.
    pub fn clamp_page_index(&mut self, filtered_count: usize) -> bool {
        let last = if self.paginated {
            self.pagination.last_page_index(filtered_count)
        } else {
            0
        };
        if self.pagination.page_index > last {
            debug!(
                "Clamping page index {} to {last} for {filtered_count} rows",
                self.pagination.page_index
            );
            self.pagination.page_index = last;
            return true;
        }
        false
    }

    /// Pure transition: the state after `event`.
    pub fn apply<T>(&self, event: TableEvent, columns: &ColumnSet<T>) -> Result<Self, GridError> {
        let mut next = self.clone();
        match event {
            TableEvent::SetSearchQuery(text) => next.set_search_query(text),
            TableEvent::ToggleSort(column_id) => next.toggle_sort(columns, &column_id),
            TableEvent::SetPage(index) => next.set_page(index),
            TableEvent::SetPageSize(size) => next.set_page_size(size)?,
        }
        Ok(next)
    }
}

const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(TableConfig::DEFAULT_PAGE_SIZE) {
    Some(size) => size,
    None => panic!("default page size must be positive"),
};

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::column::Column;

    struct Row {
        name: &'static str,
    }

    fn columns() -> ColumnSet<Row> {
        ColumnSet::new(vec![
            Column::new("name", "Name", |row: &Row| row.name.into()),
            Column::new("fixed", "Fixed", |row: &Row| row.name.into()).sortable(false),
        ])
        .expect("valid columns")
    }

    fn page_size(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).expect("non-zero page size")
    }

    #[test]
    fn test_default_state() {
        let state = TableState::default();
        assert_eq!(state.search(), "");
        assert!(state.sort().is_unsorted(), "no sort on mount");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), TableConfig::DEFAULT_PAGE_SIZE);
        assert!(state.is_paginated(), "paginated by default");
    }

    #[test]
    fn test_sort_cycles_through_three_states() {
        let columns = columns();
        let mut state = TableState::default();

        state.toggle_sort(&columns, "name");
        assert_eq!(state.sort().direction_of("name"), Some(SortDirection::Ascending));

        state.toggle_sort(&columns, "name");
        assert_eq!(state.sort().direction_of("name"), Some(SortDirection::Descending));

        state.toggle_sort(&columns, "name");
        assert!(state.sort().is_unsorted(), "third toggle clears the sort");
    }

    #[test]
    fn test_sort_ignores_non_sortable_and_unknown_columns() {
        let columns = columns();
        let mut state = TableState::default();
        state.toggle_sort(&columns, "name");

        state.toggle_sort(&columns, "fixed");
        state.toggle_sort(&columns, "missing");

        assert_eq!(state.sort(), &SortState::ascending("name"));
    }

    #[test]
    fn test_search_resets_page() {
        let mut state = TableState::default();
        state.set_page(4);
        state.set_search_query("jos");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.search(), "jos");
    }

    #[test]
    fn test_page_size_resets_page_and_rejects_zero() {
        let mut state = TableState::new(page_size(10));
        state.set_page(3);

        state.set_page_size(25).expect("positive page size");
        assert_eq!(state.page_index(), 0);
        assert_eq!(state.page_size(), 25);

        assert_eq!(
            state.set_page_size(0),
            Err(GridError::InvalidPageSize { size: 0 })
        );
        assert_eq!(state.page_size(), 25, "rejected size keeps the old one");
    }

    #[test]
    fn test_clamp_page_index() {
        let mut state = TableState::new(page_size(10));
        state.set_page(5);

        assert!(state.clamp_page_index(25), "page 5 of 3 pages is clamped");
        assert_eq!(state.page_index(), 2);

        assert!(!state.clamp_page_index(25), "already in range");
        assert!(state.clamp_page_index(0), "empty set clamps to page 0");
        assert_eq!(state.page_index(), 0);
    }

    #[test]
    fn test_page_count() {
        let pagination = PaginationState::new(page_size(10));
        assert_eq!(pagination.page_count(0), 1);
        assert_eq!(pagination.page_count(10), 1);
        assert_eq!(pagination.page_count(11), 2);
        assert_eq!(pagination.last_page_index(25), 2);
    }

    #[test]
    fn test_apply_is_pure() {
        let columns = columns();
        let state = TableState::default();

        let next = state
            .apply(TableEvent::ToggleSort("name".to_owned()), &columns)
            .expect("toggle never fails");

        assert!(state.sort().is_unsorted(), "original state is untouched");
        assert_eq!(next.sort(), &SortState::ascending("name"));
    }

    #[test]
    fn test_apply_page_size_error() {
        let columns = columns();
        let result = TableState::default().apply(TableEvent::SetPageSize(0), &columns);
        assert_eq!(result, Err(GridError::InvalidPageSize { size: 0 }));
    }

    #[test]
    fn test_from_config() {
        let config = TableConfig {
            default_page_size: 5,
            enable_pagination: false,
            ..TableConfig::default()
        };
        let state = TableState::from_config(&config).expect("valid config");
        assert_eq!(state.page_size(), 5);
        assert!(!state.is_paginated(), "pagination follows config");

        let config = TableConfig {
            default_page_size: 0,
            ..TableConfig::default()
        };
        assert_eq!(
            TableState::from_config(&config),
            Err(GridError::InvalidPageSize { size: 0 })
        );
    }
}
