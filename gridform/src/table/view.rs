//! Pure view derivation for the table.
//!
//! A [`TableView`] is everything a renderer needs to draw the table; it is
//! computed from configuration, state and data and never fed back.

use log::trace;

use crate::value::{RowKey, TableRow};

use super::column::Alignment;
use super::sort::SortOrder;
use super::state::{DataTable, TableConfig, TableState};

/// Text shown in the body while data is loading.
pub const LOADING_MESSAGE: &str = "Loading data...";

/// A checkbox as displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxView {
    pub checked: bool,
    pub indeterminate: bool,
    pub disabled: bool,
    /// Accessible label.
    pub label: String,
}

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub key: String,
    pub title: String,
    pub align: Alignment,
    pub width: Option<u16>,
    /// Sort indicator; `None` for non-sortable columns.
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Select-all checkbox, present when the table is selectable.
    pub select_all: Option<CheckboxView>,
    pub cells: Vec<HeaderCell>,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub key: RowKey,
    pub selected: bool,
    pub checkbox: Option<CheckboxView>,
    pub cells: Vec<String>,
}

/// What the body shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    /// Data is loading; rows are hidden, not discarded.
    Loading { message: String, span: usize },
    /// There are no rows.
    Empty { message: String, span: usize },
    Rows(Vec<RowView>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: HeaderView,
    pub body: BodyView,
    /// "N rows selected" summary, when there is a selection to report.
    pub summary: Option<String>,
}

impl TableView {
    /// Derive the view of `data` under `state`.
    pub fn derive<T: TableRow>(config: &TableConfig<T>, state: &TableState, data: &[T]) -> Self {
        let header_state = state.header_checkbox(data);
        let select_all = config.selectable.then(|| CheckboxView {
            checked: header_state.checked,
            indeterminate: header_state.indeterminate,
            disabled: config.loading || data.is_empty(),
            label: "Select all rows".to_string(),
        });

        let cells = config
            .columns
            .iter()
            .map(|column| HeaderCell {
                key: column.key.clone(),
                title: column.title.clone(),
                align: column.align,
                width: column.width,
                sort: column
                    .sortable
                    .then(|| state.sort.order_for(&column.data_index)),
            })
            .collect();

        let span = config.span();
        let body = if config.loading {
            BodyView::Loading {
                message: LOADING_MESSAGE.to_string(),
                span,
            }
        } else if data.is_empty() {
            BodyView::Empty {
                message: config.empty_message.clone(),
                span,
            }
        } else {
            let rows = super::sort::sort_rows(data, &state.sort)
                .into_iter()
                .enumerate()
                .map(|(index, row)| {
                    let key = row.key(&config.row_key);
                    let selected = state.selection.is_selected(&key);
                    RowView {
                        checkbox: config.selectable.then(|| CheckboxView {
                            checked: selected,
                            indeterminate: false,
                            disabled: false,
                            label: format!("Select row {}", index + 1),
                        }),
                        cells: config
                            .columns
                            .iter()
                            .map(|column| column.cell_text(row, index))
                            .collect(),
                        key,
                        selected,
                    }
                })
                .collect();
            BodyView::Rows(rows)
        };

        let count = state.selection.len();
        let summary = (config.selectable && count > 0 && !config.loading).then(|| {
            if count == 1 {
                "1 row selected".to_string()
            } else {
                format!("{count} rows selected")
            }
        });

        trace!("[table] derived view: {} columns, span {}", config.columns.len(), span);

        TableView {
            header: HeaderView { select_all, cells },
            body,
            summary,
        }
    }

    /// Displayed rows, empty while loading or when there is no data.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            BodyView::Rows(rows) => rows,
            _ => &[],
        }
    }
}

impl<T: TableRow> DataTable<T> {
    /// Derive the current view of `data`.
    pub fn view(&self, data: &[T]) -> TableView {
        TableView::derive(self.config(), self.state(), data)
    }
}
