//! Column descriptors.

use std::fmt;
use std::rc::Rc;

use crate::value::{CellValue, TableRow};

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Custom cell renderer: `(value, row, display index) -> text`.
pub type CellRenderer<T> = Rc<dyn Fn(&CellValue, &T, usize) -> String>;

/// Column configuration.
///
/// Columns define how one field of the row is displayed and whether the
/// column takes part in sorting.
///
/// # Examples
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("joined", "Join Date").data_index("join_date").sortable(),
///     Column::new("status", "Status").render(|value, _, _| format!("● {value}")),
/// ];
/// ```
pub struct Column<T> {
    /// Identifies the column in the UI. Unique per column set.
    pub key: String,
    /// Header text.
    pub title: String,
    /// Name of the row field that supplies this column's values.
    pub data_index: String,
    /// Whether clicking the header sorts by this column.
    pub sortable: bool,
    /// Horizontal alignment of header and cells.
    pub align: Alignment,
    /// Fixed width in terminal columns, or `None` to size to content.
    pub width: Option<u16>,
    render: Option<CellRenderer<T>>,
}

impl<T: TableRow> Column<T> {
    /// Create a column whose data field has the same name as its key.
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            data_index: key.clone(),
            key,
            title: title.into(),
            sortable: false,
            align: Alignment::Left,
            width: None,
            render: None,
        }
    }

    /// Read values from a differently-named field.
    pub fn data_index(mut self, field: impl Into<String>) -> Self {
        self.data_index = field.into();
        self
    }

    /// Make the column sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the column alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Set a fixed width.
    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Display cells through a custom renderer.
    pub fn render<F>(mut self, f: F) -> Self
    where
        F: Fn(&CellValue, &T, usize) -> String + 'static,
    {
        self.render = Some(Rc::new(f));
        self
    }

    /// Check if the column has a custom renderer.
    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Read this column's value from a row.
    pub fn value(&self, row: &T) -> CellValue {
        row.field(&self.data_index)
    }

    /// Text shown in this column for `row` at display position `index`.
    pub fn cell_text(&self, row: &T, index: usize) -> String {
        let value = self.value(row);
        match &self.render {
            Some(render) => render(&value, row, index),
            None => value.display_string().into_owned(),
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            title: self.title.clone(),
            data_index: self.data_index.clone(),
            sortable: self.sortable,
            align: self.align,
            width: self.width,
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("data_index", &self.data_index)
            .field("sortable", &self.sortable)
            .field("align", &self.align)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}
