//! Sort state and the row comparator.

use std::cmp::Ordering;

use log::debug;

use crate::collate::locale_compare;
use crate::value::{CellValue, TableRow};

use super::column::Column;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Rows keep their input order.
    #[default]
    None,
    Ascending,
    Descending,
}

/// The (column, order) pair applied to the displayed rows.
///
/// `column` holds the `data_index` of the sorted column. A sort only takes
/// effect when both the column and a direction are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<String>,
    pub order: SortOrder,
}

impl SortState {
    /// Sort ascending by a field.
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            order: SortOrder::Ascending,
        }
    }

    /// Sort descending by a field.
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: Some(column.into()),
            order: SortOrder::Descending,
        }
    }

    /// The sort actually applied, if any.
    pub fn effective(&self) -> Option<(&str, SortOrder)> {
        match (&self.column, self.order) {
            (Some(column), SortOrder::Ascending | SortOrder::Descending) => {
                Some((column.as_str(), self.order))
            }
            _ => None,
        }
    }

    /// Order shown for a column's header indicator.
    pub fn order_for(&self, data_index: &str) -> SortOrder {
        match self.effective() {
            Some((column, order)) if column == data_index => order,
            _ => SortOrder::None,
        }
    }

    /// State after clicking a column header.
    ///
    /// The clicked column cycles `none → ascending → descending → none`;
    /// a different sortable column starts at ascending. Non-sortable
    /// columns leave the state unchanged.
    pub fn cycle<T: TableRow>(&self, column: &Column<T>) -> SortState {
        if !column.sortable {
            return self.clone();
        }

        let next = if self.column.as_deref() == Some(column.data_index.as_str()) {
            match self.order {
                SortOrder::None => SortState::ascending(&column.data_index),
                SortOrder::Ascending => SortState::descending(&column.data_index),
                SortOrder::Descending => SortState::default(),
            }
        } else {
            SortState::ascending(&column.data_index)
        };

        debug!(
            "[table] sort {:?}/{:?} -> {:?}/{:?}",
            self.column, self.order, next.column, next.order
        );
        next
    }
}

/// Compare two cell values for an ascending sort.
///
/// 1. Value-equal ⇒ `Equal`.
/// 2. Both text ⇒ locale-aware comparison.
/// 3. Both numbers ⇒ numeric difference; unorderable (NaN) ⇒ `Equal`.
/// 4. Otherwise both are coerced to strings and compared locale-aware.
pub fn compare_values(a: &CellValue, b: &CellValue) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => locale_compare(a, b),
        (CellValue::Number(a), CellValue::Number(b)) => {
            (a - b).partial_cmp(&0.0).unwrap_or(Ordering::Equal)
        }
        // Mixed or non-text, non-number values: compare string forms.
        _ => locale_compare(&a.coerce_string(), &b.coerce_string()),
    }
}

/// Derive the display order of `rows` under `sort`.
///
/// Never reorders the caller's slice; the returned references are sorted
/// with a stable sort, so value-equal rows keep their input order. With no
/// effective sort the input order is returned as is.
pub fn sort_rows<'a, T: TableRow>(rows: &'a [T], sort: &SortState) -> Vec<&'a T> {
    let mut view: Vec<&T> = rows.iter().collect();

    let Some((column, order)) = sort.effective() else {
        return view;
    };

    let keyed: Vec<(CellValue, &T)> = view.drain(..).map(|row| (row.field(column), row)).collect();
    let sorted = merge_sort(keyed, &|a: &CellValue, b: &CellValue| {
        let ordering = compare_values(a, b);
        match order {
            SortOrder::Descending => ordering.reverse(),
            _ => ordering,
        }
    });
    view.extend(sorted.into_iter().map(|(_, row)| row));
    view
}

/// Stable top-down merge sort.
///
/// Must not panic on non-transitive comparators (mixed-type columns, NaN).
fn merge_sort<V, R>(mut items: Vec<(V, R)>, cmp: &dyn Fn(&V, &V) -> Ordering) -> Vec<(V, R)> {
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(&r.0, &l.0) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}
