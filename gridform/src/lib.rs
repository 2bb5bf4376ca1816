//! Presentational widgets: a sortable, selectable data table and a
//! controlled text input field.
//!
//! Each widget is split into a state machine (`transition`), a stateful
//! component that wraps it and notifies observers, and a pure view that a
//! renderer draws. The [`render`] module draws views as plain text.

pub mod collate;
pub mod error;
pub mod events;
pub mod field;
pub mod render;
pub mod table;
pub mod text;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use events::EventResult;
pub use value::{CellValue, RowKey, TableRow};

pub mod prelude {
    pub use crate::events::EventResult;
    pub use crate::field::{
        FieldEvent, FieldKind, FieldProps, FieldSize, FieldVariant, FieldView, InputField,
    };
    pub use crate::table::{
        Alignment, Column, DataTable, SortOrder, SortState, StaleSelection, TableConfig,
        TableEvent, TableView,
    };
    pub use crate::validation::{Rules, ValidationResult, Validator};
    pub use crate::value::{CellValue, RowKey, TableRow};
}
