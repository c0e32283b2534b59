//! Filter → sort → page projection.
//!
//! Every step works on row indices into the caller's slice; the rows
//! themselves are never copied or reordered.

use std::ops::Range;

use super::column::ColumnSet;
use super::state::{SortDirection, TableState};

/// One row of the visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    /// 1-based sequence number: `page_index * page_size + local index + 1`.
    pub serial: usize,
    /// Index into the source rows.
    pub source_index: usize,
}

/// The projected page of a table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableView {
    pub rows: Vec<VisibleRow>,
    /// Rows left after the global filter.
    pub filtered_count: usize,
    /// Page actually shown, after clamping.
    pub page_index: usize,
    pub page_count: usize,
    pub page_size: usize,
}

impl TableView {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_first_page(&self) -> bool {
        self.page_index == 0
    }

    pub fn is_last_page(&self) -> bool {
        self.page_index + 1 >= self.page_count
    }
}

/// Indices of rows with at least one searchable column containing `query`,
/// case-insensitively. An empty query keeps every row.
pub fn filter_indices<T>(rows: &[T], columns: &ColumnSet<T>, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..rows.len()).collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            columns
                .iter()
                .filter(|column| column.searchable)
                .any(|column| column.value(row).matches(&needle))
        })
        .map(|(index, _)| index)
        .collect()
}

/// Stable sort of `indices` by the values of column `column_id`.
///
/// Equal keys keep their order from `indices` in both directions. An unknown
/// column leaves the order untouched.
pub fn sort_indices<T>(
    rows: &[T],
    columns: &ColumnSet<T>,
    indices: &mut [usize],
    column_id: &str,
    direction: SortDirection,
) {
    let Some(column) = columns.get(column_id) else {
        return;
    };

    // Derive each key once; accessors may be arbitrarily expensive.
    let mut keyed: Vec<_> = indices
        .iter()
        .map(|&index| (column.value(&rows[index]), index))
        .collect();

    // `sort_by` is a stable merge sort.
    keyed.sort_by(|(a, _), (b, _)| match direction {
        SortDirection::Ascending => a.compare(b),
        SortDirection::Descending => b.compare(a),
    });

    for (slot, (_, index)) in indices.iter_mut().zip(keyed) {
        *slot = index;
    }
}

/// Slice bounds of page `page_index` within `len` rows.
///
/// Out-of-range pages yield an empty range rather than an error.
pub fn page_bounds(len: usize, page_index: usize, page_size: usize) -> Range<usize> {
    let start = page_index.saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// Project `rows` through the search, sort and pagination in `state`.
///
/// `None` rows are treated as an empty collection. The requested page index
/// is clamped into the valid range for the filtered rows.
pub fn project<T>(state: &TableState, rows: Option<&[T]>, columns: &ColumnSet<T>) -> TableView {
    let rows = rows.unwrap_or_default();

    let mut indices = filter_indices(rows, columns, state.search());
    if let (Some(column_id), Some(direction)) = (state.sort().column_id(), state.sort().direction())
    {
        sort_indices(rows, columns, &mut indices, column_id, direction);
    }

    let filtered_count = indices.len();
    let (page_size, page_index, page_count) = if state.is_paginated() {
        let pagination = state.pagination();
        let last = pagination.last_page_index(filtered_count);
        (
            pagination.page_size.get(),
            state.page_index().min(last),
            pagination.page_count(filtered_count),
        )
    } else {
        (filtered_count.max(1), 0, 1)
    };

    let bounds = page_bounds(filtered_count, page_index, page_size);
    let first_serial = page_index * page_size + 1;
    let visible = indices[bounds]
        .iter()
        .enumerate()
        .map(|(offset, &source_index)| VisibleRow {
            serial: first_serial + offset,
            source_index,
        })
        .collect();

    TableView {
        rows: visible,
        filtered_count,
        page_index,
        page_count,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::grid::column::Column;

    #[derive(Debug)]
    struct Row {
        name: &'static str,
        group: u32,
        note: &'static str,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Charlie", group: 2, note: "x" },
            Row { name: "alice", group: 1, note: "secret a" },
            Row { name: "Bob", group: 2, note: "y" },
            Row { name: "Dave", group: 1, note: "z" },
        ]
    }

    fn columns() -> ColumnSet<Row> {
        ColumnSet::new(vec![
            Column::new("name", "Name", |row: &Row| row.name.into()),
            Column::new("group", "Group", |row: &Row| row.group.into()),
            Column::new("note", "Note", |row: &Row| row.note.into()).searchable(false),
        ])
        .expect("valid columns")
    }

    fn names(rows: &[Row], view: &TableView) -> Vec<&'static str> {
        view.rows.iter().map(|r| rows[r.source_index].name).collect()
    }

    #[test]
    fn test_filter_skips_non_searchable_columns() {
        let rows = rows();
        // "secret" only appears in the non-searchable note column
        assert!(filter_indices(&rows, &columns(), "secret").is_empty(), "note is not searched");
        assert_eq!(filter_indices(&rows, &columns(), "A"), vec![0, 1, 3]);
    }

    #[test]
    fn test_filter_matches_numbers_by_text() {
        let rows = rows();
        assert_eq!(filter_indices(&rows, &columns(), "2"), vec![0, 2]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let rows = rows();
        let columns = columns();

        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&rows, &columns, &mut indices, "group", SortDirection::Ascending);
        assert_eq!(indices, vec![1, 3, 0, 2]);

        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&rows, &columns, &mut indices, "group", SortDirection::Descending);
        assert_eq!(indices, vec![0, 2, 1, 3]);
    }

    #[test]
    fn test_sort_text_ignores_case() {
        let rows = rows();
        let mut indices = vec![0, 1, 2, 3];
        sort_indices(&rows, &columns(), &mut indices, "name", SortDirection::Ascending);
        assert_eq!(indices, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_page_bounds() {
        assert_eq!(page_bounds(25, 0, 10), 0..10);
        assert_eq!(page_bounds(25, 2, 10), 20..25);
        assert_eq!(page_bounds(25, 5, 10), 25..25);
        assert_eq!(page_bounds(0, 0, 10), 0..0);
        assert_eq!(page_bounds(3, usize::MAX, 10), 3..3);
    }

    #[test]
    fn test_project_none_rows_is_empty() {
        let view = project::<Row>(&TableState::default(), None, &columns());
        assert!(view.is_empty(), "no rows to show");
        assert_eq!(view.filtered_count, 0);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.page_index, 0);
    }

    #[test]
    fn test_project_sorted_page_with_serials() {
        let rows = rows();
        let columns = columns();
        let mut state = TableState::new(NonZeroUsize::new(2).expect("non-zero"));
        state.toggle_sort(&columns, "name");
        state.set_page(1);

        let view = project(&state, Some(rows.as_slice()), &columns);
        assert_eq!(names(&rows, &view), vec!["Charlie", "Dave"]);
        let serials: Vec<_> = view.rows.iter().map(|r| r.serial).collect();
        assert_eq!(serials, vec![3, 4]);
        assert!(view.is_last_page(), "second of two pages");
    }

    #[test]
    fn test_project_clamps_page() {
        let rows = rows();
        let mut state = TableState::new(NonZeroUsize::new(3).expect("non-zero"));
        state.set_page(99);

        let view = project(&state, Some(rows.as_slice()), &columns());
        assert_eq!(view.page_index, 1);
        assert_eq!(names(&rows, &view), vec!["Dave"]);
    }

    #[test]
    fn test_project_without_pagination_shows_everything() {
        let rows = rows();
        let config = crate::grid::TableConfig {
            enable_pagination: false,
            default_page_size: 2,
            ..Default::default()
        };
        let state = TableState::from_config(&config).expect("valid config");

        let view = project(&state, Some(rows.as_slice()), &columns());
        assert_eq!(view.rows.len(), 4);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.rows.last().map(|r| r.serial), Some(4));
    }
}
