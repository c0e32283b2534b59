//! Projection cache.
//!
//! egui redraws every frame, but a table's projection only changes when its
//! rows, columns or state change. `ViewMemo` keeps the last projection and
//! hands it back while the key is unchanged.

use super::column::{ColumnSet, ColumnSetRevision};
use super::pipeline::{TableView, project};
use super::state::TableState;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ProjectionKey {
    rows_addr: usize,
    rows_len: usize,
    columns: ColumnSetRevision,
    state: TableState,
}

/// Last projection of one table, keyed by rows identity, column set
/// revision and table state.
///
/// Rows are identified by slice address and length. Hosts that edit rows in
/// place must call [`ViewMemo::invalidate`].
#[derive(Debug, Default)]
pub struct ViewMemo {
    cached: Option<(ProjectionKey, TableView)>,
}

impl ViewMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// The projection for the given inputs, recomputed only on a key change.
    pub fn view<T>(
        &mut self,
        state: &TableState,
        rows: Option<&[T]>,
        columns: &ColumnSet<T>,
    ) -> &TableView {
        let rows_slice = rows.unwrap_or_default();
        let key = ProjectionKey {
            rows_addr: rows_slice.as_ptr() as usize,
            rows_len: rows_slice.len(),
            columns: columns.revision(),
            state: state.clone(),
        };

        let stale = self
            .cached
            .as_ref()
            .is_none_or(|(cached_key, _)| *cached_key != key);
        if stale {
            self.cached = None;
        }

        let (_, view) = self
            .cached
            .get_or_insert_with(|| (key, project(state, rows, columns)));
        view
    }

    /// Whether a projection is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }

    /// Drop the cached projection.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::grid::column::Column;

    fn counting_columns(calls: &Arc<AtomicUsize>) -> ColumnSet<u32> {
        let calls = Arc::clone(calls);
        ColumnSet::new(vec![Column::new("value", "Value", move |row: &u32| {
            calls.fetch_add(1, Ordering::Relaxed);
            (*row).into()
        })])
        .expect("valid columns")
    }

    #[test]
    fn test_view_is_reused_for_same_inputs() {
        let calls = Arc::new(AtomicUsize::new(0));
        let columns = counting_columns(&calls);
        let rows = vec![3_u32, 1, 2];
        let mut state = TableState::default();
        state.set_search_query("1");
        let mut memo = ViewMemo::new();

        let first = memo.view(&state, Some(rows.as_slice()), &columns).clone();
        let after_first = calls.load(Ordering::Relaxed);
        let second = memo.view(&state, Some(rows.as_slice()), &columns).clone();

        assert_eq!(first, second);
        assert_eq!(
            calls.load(Ordering::Relaxed),
            after_first,
            "cached view must not call accessors again"
        );
    }

    #[test]
    fn test_view_recomputes_on_state_change() {
        let calls = Arc::new(AtomicUsize::new(0));
        let columns = counting_columns(&calls);
        let rows = vec![3_u32, 1, 2];
        let mut state = TableState::default();
        let mut memo = ViewMemo::new();

        assert_eq!(memo.view(&state, Some(rows.as_slice()), &columns).filtered_count, 3);

        state.set_search_query("3");
        assert_eq!(memo.view(&state, Some(rows.as_slice()), &columns).filtered_count, 1);
    }

    #[test]
    fn test_invalidate_drops_cache() {
        let calls = Arc::new(AtomicUsize::new(0));
        let columns = counting_columns(&calls);
        let rows = vec![1_u32];
        let mut memo = ViewMemo::new();

        memo.view(&TableState::default(), Some(rows.as_slice()), &columns);
        assert!(memo.is_cached(), "view cached after first projection");

        memo.invalidate();
        assert!(!memo.is_cached(), "invalidate clears the cache");
    }
}
