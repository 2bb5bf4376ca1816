//! Table configuration, state machine, and the stateful component.

use std::fmt;

use log::{debug, warn};

use crate::events::EventResult;
use crate::value::{RowKey, TableRow};

use super::column::Column;
use super::selection::{HeaderCheckbox, Selection, StaleSelection};
use super::sort::{SortState, sort_rows};

/// Message shown in the body when there are no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Default name of the row field that identifies a row.
pub const DEFAULT_ROW_KEY: &str = "id";

/// Table configuration supplied by the host.
#[derive(Debug, Clone)]
pub struct TableConfig<T> {
    pub columns: Vec<Column<T>>,
    /// Hide the body and disable select-all while data is loading.
    pub loading: bool,
    /// Show per-row and select-all checkboxes.
    pub selectable: bool,
    pub empty_message: String,
    /// Name of the row field whose value identifies a row.
    pub row_key: String,
    pub stale_selection: StaleSelection,
}

impl<T: TableRow> TableConfig<T> {
    /// Create a config with the given columns and defaults elsewhere.
    pub fn new(columns: Vec<Column<T>>) -> Self {
        Self {
            columns,
            loading: false,
            selectable: false,
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            row_key: DEFAULT_ROW_KEY.to_string(),
            stale_selection: StaleSelection::default(),
        }
    }

    /// Set the loading flag.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Enable or disable row selection.
    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Set the message shown when there is no data.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Identify rows by a different field.
    pub fn row_key(mut self, field: impl Into<String>) -> Self {
        self.row_key = field.into();
        self
    }

    /// Set the policy for selected keys whose rows disappeared.
    pub fn stale_selection(mut self, policy: StaleSelection) -> Self {
        self.stale_selection = policy;
        self
    }

    /// Find a column by its key.
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Number of body columns including the checkbox column.
    pub fn span(&self) -> usize {
        self.columns.len() + usize::from(self.selectable)
    }
}

/// User interactions with the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// Header of the column with this key was clicked.
    HeaderClick(String),
    /// A row's checkbox was clicked.
    ToggleRow(RowKey),
    /// The select-all checkbox was clicked.
    ToggleAll,
}

/// Sort and selection state of one table instance.
///
/// The two halves are independent: sorting never changes the selection
/// and the selection never changes the order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub sort: SortState,
    pub selection: Selection,
}

impl TableState {
    /// State after applying `event` against `data`.
    ///
    /// Events that target a disabled or missing control leave the state
    /// unchanged.
    pub fn transition<T: TableRow>(
        &self,
        config: &TableConfig<T>,
        data: &[T],
        event: &TableEvent,
    ) -> TableState {
        let mut next = self.clone();
        match event {
            TableEvent::HeaderClick(key) => match config.column(key) {
                Some(column) => next.sort = self.sort.cycle(column),
                None => warn!("[table] header click on unknown column '{}'", key),
            },
            TableEvent::ToggleRow(key) => {
                if config.selectable && !config.loading {
                    next.selection.toggle(key.clone());
                }
            }
            TableEvent::ToggleAll => {
                if Self::select_all_enabled(config, data) {
                    let keys = data.iter().map(|row| row.key(&config.row_key)).collect();
                    next.selection.toggle_all(keys);
                }
            }
        }
        next
    }

    /// Whether the select-all checkbox accepts clicks.
    pub fn select_all_enabled<T: TableRow>(config: &TableConfig<T>, data: &[T]) -> bool {
        config.selectable && !config.loading && !data.is_empty()
    }

    /// Select-all checkbox state for `data`.
    pub fn header_checkbox<T>(&self, data: &[T]) -> HeaderCheckbox {
        self.selection.header_state(data.len())
    }
}

/// Observer called with the selected rows after every selection change.
pub type SelectionObserver<T> = Box<dyn FnMut(&[T])>;

/// A sortable, selectable table.
///
/// `DataTable<T>` owns the configuration and the UI state; the rows stay
/// with the host and are passed in on every call, so the table always
/// reflects the host's current data.
///
/// # Example
///
/// ```ignore
/// let mut table = DataTable::new(TableConfig::new(columns).selectable(true))
///     .on_selection_change(|rows: &[User]| println!("{} selected", rows.len()));
///
/// table.dispatch(TableEvent::HeaderClick("name".into()), &users);
/// table.dispatch(TableEvent::ToggleAll, &users);
/// let view = table.view(&users);
/// ```
pub struct DataTable<T> {
    config: TableConfig<T>,
    state: TableState,
    on_selection_change: Option<SelectionObserver<T>>,
}

impl<T: TableRow> DataTable<T> {
    /// Create a table with the given configuration.
    pub fn new(config: TableConfig<T>) -> Self {
        Self {
            config,
            state: TableState::default(),
            on_selection_change: None,
        }
    }

    /// Register the selection observer.
    pub fn on_selection_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&[T]) + 'static,
    {
        self.on_selection_change = Some(Box::new(f));
        self
    }

    pub fn config(&self) -> &TableConfig<T> {
        &self.config
    }

    /// Mutable access for props that change between renders (loading, ...).
    pub fn config_mut(&mut self) -> &mut TableConfig<T> {
        &mut self.config
    }

    pub fn state(&self) -> &TableState {
        &self.state
    }

    pub fn sort(&self) -> &SortState {
        &self.state.sort
    }

    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// Rows of `data` that are currently selected, in data order.
    pub fn selected_rows(&self, data: &[T]) -> Vec<T> {
        self.state.selection.selected_rows(data, &self.config.row_key)
    }

    /// Rows of `data` in display order.
    pub fn sorted<'a>(&self, data: &'a [T]) -> Vec<&'a T> {
        sort_rows(data, &self.state.sort)
    }

    /// Apply a user interaction.
    ///
    /// When the selection changes, the observer is called before this
    /// returns. `Ignored` means the state is unchanged; under
    /// [`StaleSelection::Prune`] an event that only prunes stale keys is
    /// `Consumed`.
    pub fn dispatch(&mut self, event: TableEvent, data: &[T]) -> EventResult {
        let pruned =
            self.config.stale_selection == StaleSelection::Prune && self.reconcile(data) > 0;

        let selection_event = match &event {
            TableEvent::HeaderClick(_) => false,
            TableEvent::ToggleRow(_) => self.config.selectable && !self.config.loading,
            TableEvent::ToggleAll => TableState::select_all_enabled(&self.config, data),
        };

        let next = self.state.transition(&self.config, data, &event);
        if next == self.state && !selection_event {
            if pruned {
                debug!("[table] {:?} only pruned stale keys", event);
                return EventResult::Consumed;
            }
            debug!("[table] ignored {:?}", event);
            return EventResult::Ignored;
        }

        debug!("[table] applied {:?}", event);
        self.state = next;
        if selection_event {
            self.notify(data);
        }
        EventResult::Consumed
    }

    /// Drop selected keys whose rows are not in `data`.
    ///
    /// Returns the number of keys removed. A change notifies the observer.
    pub fn reconcile(&mut self, data: &[T]) -> usize {
        let keys: Vec<RowKey> = data.iter().map(|row| row.key(&self.config.row_key)).collect();
        let removed = self.state.selection.retain_present(&keys);
        if removed > 0 {
            debug!("[table] pruned {} stale selected keys", removed);
            self.notify(data);
        }
        removed
    }

    /// Reset sort and selection.
    pub fn reset(&mut self) {
        self.state = TableState::default();
    }

    fn notify(&mut self, data: &[T]) {
        if let Some(observer) = self.on_selection_change.as_mut() {
            let rows = self.state.selection.selected_rows(data, &self.config.row_key);
            observer(&rows);
        }
    }
}

impl<T> fmt::Debug for DataTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.config.columns.len())
            .field("state", &self.state)
            .field("observer", &self.on_selection_change.is_some())
            .finish()
    }
}
