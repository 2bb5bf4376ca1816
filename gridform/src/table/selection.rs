//! Row selection set.

use std::collections::HashSet;

use log::debug;

use crate::value::{RowKey, TableRow};

/// What to do with selected keys whose rows left the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleSelection {
    /// Keep them selected; they come back selected if the row reappears.
    #[default]
    Keep,
    /// Drop them whenever the table reconciles against new data.
    Prune,
}

/// Visual state of the select-all checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderCheckbox {
    /// Data is non-empty and every row is selected.
    pub checked: bool,
    /// Some, but not all, rows are selected.
    pub indeterminate: bool,
}

/// Tracks selected rows by their keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: HashSet<RowKey>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected keys.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &RowKey) -> bool {
        self.selected.contains(key)
    }

    /// Get all selected keys.
    pub fn keys(&self) -> impl Iterator<Item = &RowKey> {
        self.selected.iter()
    }

    /// Flip membership of one key.
    pub fn toggle(&mut self, key: RowKey) {
        if !self.selected.remove(&key) {
            self.selected.insert(key);
        }
    }

    /// Clear when every row is selected, otherwise select every row.
    ///
    /// "Every row" is judged by count: the selection is full when its size
    /// equals `keys.len()`.
    pub fn toggle_all(&mut self, keys: Vec<RowKey>) {
        if self.selected.len() == keys.len() {
            debug!("[selection] clearing {} keys", self.selected.len());
            self.selected.clear();
        } else {
            debug!("[selection] selecting all {} keys", keys.len());
            self.selected = keys.into_iter().collect();
        }
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Keep only keys present in `keys`. Returns the number removed.
    pub fn retain_present<'a>(&mut self, keys: impl IntoIterator<Item = &'a RowKey>) -> usize {
        let present: HashSet<&RowKey> = keys.into_iter().collect();
        let before = self.selected.len();
        self.selected.retain(|key| present.contains(key));
        before - self.selected.len()
    }

    /// Rows of `data` whose key is selected, in data order.
    pub fn selected_rows<T: TableRow>(&self, data: &[T], row_key: &str) -> Vec<T> {
        data.iter()
            .filter(|row| self.selected.contains(&row.key(row_key)))
            .cloned()
            .collect()
    }

    /// Select-all checkbox state for a table of `total` rows.
    pub fn header_state(&self, total: usize) -> HeaderCheckbox {
        let count = self.selected.len();
        HeaderCheckbox {
            checked: total > 0 && count == total,
            indeterminate: count > 0 && count < total,
        }
    }
}

impl FromIterator<RowKey> for Selection {
    fn from_iter<I: IntoIterator<Item = RowKey>>(iter: I) -> Self {
        Self {
            selected: iter.into_iter().collect(),
        }
    }
}
