//! Table - a sortable, selectable data table.
//!
//! The table provides:
//! - Column descriptors with optional custom cell renderers
//! - A three-state sort cycle per column (none, ascending, descending)
//! - Row selection with a select-all checkbox and indeterminate state
//! - A selection observer called synchronously after every change
//!
//! State lives in [`TableState`] and changes only through
//! [`TableState::transition`]; [`TableView`] is derived from it.
//!
//! # Example
//!
//! ```
//! use gridform::prelude::*;
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! impl TableRow for User {
//!     fn field(&self, name: &str) -> CellValue {
//!         match name {
//!             "id" => self.id.into(),
//!             "name" => self.name.into(),
//!             _ => CellValue::Absent,
//!         }
//!     }
//! }
//!
//! let users = vec![
//!     User { id: 1, name: "Bob" },
//!     User { id: 2, name: "Amy" },
//! ];
//! let mut table = DataTable::new(
//!     TableConfig::new(vec![Column::new("name", "Name").sortable()]).selectable(true),
//! );
//!
//! table.dispatch(TableEvent::HeaderClick("name".into()), &users);
//! let view = table.view(&users);
//! assert_eq!(view.rows()[0].cells, vec!["Amy".to_string()]);
//! ```

mod column;
mod selection;
mod sort;
mod state;
mod view;

pub use column::{Alignment, CellRenderer, Column};
pub use selection::{HeaderCheckbox, Selection, StaleSelection};
pub use sort::{SortOrder, SortState, compare_values, sort_rows};
pub use state::{
    DEFAULT_EMPTY_MESSAGE, DEFAULT_ROW_KEY, DataTable, SelectionObserver, TableConfig, TableEvent,
    TableState,
};
pub use view::{BodyView, CheckboxView, HeaderCell, HeaderView, LOADING_MESSAGE, RowView, TableView};
