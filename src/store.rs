//! Row store and selection set.
//!
//! Rows carry a stable identity that survives sorting and removals; the
//! selection set is keyed by that identity and pruned in lockstep with it.

use std::collections::HashMap;

use tracing::debug;

/// Stable row identity. Assigned monotonically at insertion, never reused.
pub type RowId = u64;

/// A stored row: stable ID plus its cell values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Row {
    pub id: RowId,
    pub cells: Vec<String>,
}

/// Owned copy of a row handed out by the reader methods.
///
/// Snapshots share no storage with the store; mutating one has no effect on
/// subsequent reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    pub id: RowId,
    pub cells: Vec<String>,
}

/// Ordered row collection plus the parallel selection set.
///
/// Display order is insertion order until a sort reorders it. Every ID
/// present in `rows` has an entry in `selected`; absence is never used to
/// mean "unchecked".
#[derive(Debug, Clone)]
pub struct RowStore {
    columns: usize,
    rows: Vec<Row>,
    selected: HashMap<RowId, bool>,
    next_id: RowId,
}

impl RowStore {
    /// Creates an empty store for the given column count.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            selected: HashMap::new(),
            next_id: 0,
        }
    }

    /// Number of rows in display order.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Appends a row, padding short cell vectors with empty strings up to
    /// the column count. Over-long vectors are stored as-is; the excess is
    /// simply never displayed. Returns the assigned ID.
    pub fn add_row(&mut self, mut cells: Vec<String>) -> RowId {
        while cells.len() < self.columns {
            cells.push(String::new());
        }
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push(Row { id, cells });
        self.selected.insert(id, false);
        debug!(id, rows = self.rows.len(), "row added");
        id
    }

    /// Replaces the cell vector of the row at `row_index` wholesale.
    /// Out-of-bounds indices are a silent no-op. Does not re-pad.
    pub fn update_item(&mut self, row_index: usize, cells: Vec<String>) {
        if let Some(row) = self.rows.get_mut(row_index) {
            row.cells = cells;
        }
    }

    /// Replaces a single cell. A silent no-op when either index is out of
    /// bounds.
    pub fn update_column_item(&mut self, row_index: usize, col_index: usize, value: String) {
        if let Some(cell) = self
            .rows
            .get_mut(row_index)
            .and_then(|row| row.cells.get_mut(col_index))
        {
            *cell = value;
        }
    }

    /// Removes every checked row. The selection set is rebuilt to contain
    /// exactly the surviving IDs, all unchecked.
    pub fn remove_selected(&mut self) {
        let before = self.rows.len();
        let selected = std::mem::take(&mut self.selected);
        self.rows
            .retain(|row| !selected.get(&row.id).copied().unwrap_or(false));
        for row in &self.rows {
            self.selected.insert(row.id, false);
        }
        debug!(removed = before - self.rows.len(), "selected rows removed");
    }

    /// Clears all rows and selection state and resets the ID counter, so the
    /// next inserted row gets ID 0 again.
    pub fn remove_all(&mut self) {
        self.rows.clear();
        self.selected.clear();
        self.next_id = 0;
        debug!("store cleared");
    }

    /// Stable ascending sort by the string value of the cell at `col`.
    /// Rows shorter than `col` compare as the empty string. Rows comparing
    /// equal keep their relative order, so repeated sorts never shuffle.
    pub fn sort_by_column(&mut self, col: usize) {
        self.rows.sort_by(|a, b| {
            let a = a.cells.get(col).map(String::as_str).unwrap_or("");
            let b = b.cells.get(col).map(String::as_str).unwrap_or("");
            a.cmp(b)
        });
        debug!(col, "sorted");
    }

    /// Checked state for a row ID. IDs not present report unchecked.
    pub fn checked(&self, id: RowId) -> bool {
        self.selected.get(&id).copied().unwrap_or(false)
    }

    /// Sets the checked state for a single row ID. IDs not present in the
    /// store are ignored.
    pub fn set_checked(&mut self, id: RowId, checked: bool) {
        if let Some(entry) = self.selected.get_mut(&id) {
            *entry = checked;
        }
    }

    /// Sets the checked state of every currently-present row at once.
    pub fn set_all_checked(&mut self, checked: bool) {
        for entry in self.selected.values_mut() {
            *entry = checked;
        }
    }

    /// Snapshots of all checked rows, in current display order.
    pub fn list_selected(&self) -> Vec<RowSnapshot> {
        self.rows
            .iter()
            .filter(|row| self.checked(row.id))
            .map(|row| RowSnapshot {
                id: row.id,
                cells: row.cells.clone(),
            })
            .collect()
    }

    /// Snapshots of every row, in current display order.
    pub fn list_all(&self) -> Vec<RowSnapshot> {
        self.rows
            .iter()
            .map(|row| RowSnapshot {
                id: row.id,
                cells: row.cells.clone(),
            })
            .collect()
    }
}
