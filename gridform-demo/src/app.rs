//! The demo page: three live fields, the user table and option samples.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gridform::field::{Emphasis, MessageKind};
use gridform::prelude::*;
use gridform::render::{render_field, render_table};
use gridform::table::BodyView;
use log::{debug, info};

use crate::terminal::Line;
use crate::theme::{Theme, Tone};
use crate::users::{User, sample_users};

const FIELD_WIDTH: usize = 48;

type Shared<T> = Rc<RefCell<T>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Email,
    Password,
    Table,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Search => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::Table,
            Self::Table => Self::Search,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Search => Self::Table,
            Self::Email => Self::Search,
            Self::Password => Self::Email,
            Self::Table => Self::Password,
        }
    }
}

/// What the main loop does after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// A field whose value lives with the page and is written by its observer.
struct HostedField {
    field: InputField,
    value: Shared<String>,
}

impl HostedField {
    fn new(id: &str) -> Self {
        let value: Shared<String> = Rc::default();
        let sink = Rc::clone(&value);
        let field = InputField::with_id(id).on_change(move |v| *sink.borrow_mut() = v.to_string());
        Self { field, value }
    }

    fn value(&self) -> String {
        self.value.borrow().clone()
    }
}

fn columns() -> Vec<Column<User>> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("email", "Email").sortable(),
        Column::new("role", "Role").sortable(),
        Column::<User>::new("status", "Status")
            .sortable()
            .render(|value, _, _| format!("● {value}")),
        Column::new("joinDate", "Join Date")
            .data_index("join_date")
            .sortable(),
    ]
}

fn size_sample(size: &str, placeholder: &str) -> (FieldProps, InputField) {
    let props = FieldProps::new()
        .placeholder(placeholder)
        .size(size.parse().unwrap_or_default());
    (props, InputField::new())
}

fn variant_sample(variant: &str, label: &str, placeholder: &str) -> (FieldProps, InputField) {
    let props = FieldProps::new()
        .label(label)
        .placeholder(placeholder)
        .variant(variant.parse().unwrap_or_default());
    (props, InputField::new())
}

pub struct App {
    dark: bool,
    focus: Focus,
    search: HostedField,
    email: HostedField,
    password: HostedField,
    email_rules: Rules,
    samples: Vec<(FieldProps, InputField)>,
    users: Vec<User>,
    table: DataTable<User>,
    selected: Shared<Vec<User>>,
    cursor: usize,
}

impl App {
    pub fn new() -> Self {
        let selected: Shared<Vec<User>> = Rc::default();
        let sink = Rc::clone(&selected);
        let table = DataTable::new(TableConfig::new(columns()).selectable(true))
            .on_selection_change(move |rows: &[User]| *sink.borrow_mut() = rows.to_vec());

        let mut app = Self {
            dark: false,
            focus: Focus::Search,
            search: HostedField::new("search"),
            email: HostedField::new("email"),
            password: HostedField::new("password"),
            email_rules: Rules::new().contains("@", "Please enter a valid email address"),
            samples: vec![
                size_sample("sm", "Small size"),
                size_sample("md", "Medium size (default)"),
                size_sample("lg", "Large size"),
                variant_sample("outlined", "Outlined (Default)", "Outlined variant"),
                variant_sample("filled", "Filled", "Filled variant"),
                variant_sample("ghost", "Ghost", "Ghost variant"),
            ],
            users: sample_users(),
            table,
            selected,
            cursor: 0,
        };
        app.set_focus(Focus::Search);
        app
    }

    pub fn theme(&self) -> Theme {
        if self.dark { Theme::dark() } else { Theme::light() }
    }

    /// Users matching the search term, in sample order.
    fn filtered(&self) -> Vec<User> {
        let term = self.search.value();
        self.users
            .iter()
            .filter(|user| user.matches(&term))
            .cloned()
            .collect()
    }

    fn props_for(&self, focus: Focus) -> Option<FieldProps> {
        match focus {
            Focus::Search => Some(
                FieldProps::new()
                    .label("Search Users")
                    .placeholder("Search by name or email...")
                    .value(self.search.value())
                    .show_clear_button(true)
                    .helper_text("Start typing to filter the table below"),
            ),
            Focus::Email => Some(
                FieldProps::new()
                    .label("Email Address")
                    .kind(FieldKind::Email)
                    .placeholder("user@example.com")
                    .value(self.email.value())
                    .required(true)
                    .validated(&self.email_rules),
            ),
            Focus::Password => Some(
                FieldProps::new()
                    .label("Password")
                    .kind(FieldKind::Password)
                    .placeholder("Enter your password")
                    .value(self.password.value())
                    .helper_text("Must be at least 8 characters"),
            ),
            Focus::Table => None,
        }
    }

    fn hosted_mut(&mut self, focus: Focus) -> Option<&mut HostedField> {
        match focus {
            Focus::Search => Some(&mut self.search),
            Focus::Email => Some(&mut self.email),
            Focus::Password => Some(&mut self.password),
            Focus::Table => None,
        }
    }

    fn dispatch_field(&mut self, focus: Focus, event: FieldEvent) -> EventResult {
        let Some(props) = self.props_for(focus) else {
            return EventResult::Ignored;
        };
        match self.hosted_mut(focus) {
            Some(hosted) => hosted.field.dispatch(&props, event),
            None => EventResult::Ignored,
        }
    }

    fn set_focus(&mut self, next: Focus) {
        self.dispatch_field(self.focus, FieldEvent::Blur);
        self.focus = next;
        self.dispatch_field(next, FieldEvent::Focus);
        debug!("[demo] focus {:?}", next);
    }

    pub fn handle_event(&mut self, event: &Event) -> Control {
        let Event::Key(key) = event else {
            return Control::Continue;
        };
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }

        match key.code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab => self.set_focus(self.focus.next()),
            KeyCode::BackTab => self.set_focus(self.focus.prev()),
            KeyCode::F(2) => {
                self.dark = !self.dark;
                info!("[demo] dark mode {}", self.dark);
            }
            KeyCode::F(5) => {
                let loading = &mut self.table.config_mut().loading;
                *loading = !*loading;
                info!("[demo] loading {}", *loading);
            }
            _ if self.focus == Focus::Table => self.table_key(key),
            _ => self.field_key(key),
        }
        Control::Continue
    }

    fn field_key(&mut self, key: &KeyEvent) {
        let Some(props) = self.props_for(self.focus) else {
            return;
        };
        let event = match key.code {
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => FieldEvent::Clear,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                FieldEvent::ToggleReveal
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = props.value.clone();
                value.push(c);
                FieldEvent::Input(value)
            }
            KeyCode::Backspace => {
                let mut value = props.value.clone();
                if value.pop().is_none() {
                    return;
                }
                FieldEvent::Input(value)
            }
            _ => return,
        };
        self.dispatch_field(self.focus, event);
    }

    fn table_key(&mut self, key: &KeyEvent) {
        let data = self.filtered();
        let event = match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                return;
            }
            KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(data.len().saturating_sub(1));
                return;
            }
            KeyCode::Char(' ') => {
                let row_key = &self.table.config().row_key;
                match self.table.sorted(&data).get(self.cursor) {
                    Some(row) => TableEvent::ToggleRow(row.key(row_key)),
                    None => return,
                }
            }
            KeyCode::Char('a') => TableEvent::ToggleAll,
            KeyCode::Char('p') => {
                let removed = self.table.reconcile(&data);
                info!("[demo] pruned {} hidden selections", removed);
                return;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                match self.table.config().columns.get(index) {
                    Some(column) => TableEvent::HeaderClick(column.key.clone()),
                    None => return,
                }
            }
            _ => return,
        };
        self.table.dispatch(event, &data);
    }

    /// Lay out the page as lines no wider than `width` where it matters.
    pub fn render(&mut self, width: usize) -> Vec<Line> {
        let field_width = FIELD_WIDTH.min(width);
        let data = self.filtered();
        self.cursor = self.cursor.min(data.len().saturating_sub(1));

        let mut lines = vec![
            Line::new("Component Library", Tone::Heading),
            Line::new(
                "Tab focus · Ctrl+L clear · Ctrl+R reveal · 1-5 sort · Space select · a all · p prune · F2 theme · F5 loading · Esc quit",
                Tone::Muted,
            ),
            Line::blank(),
            Line::new("InputField", Tone::Heading),
        ];

        for (focus, hosted) in [
            (Focus::Search, &self.search),
            (Focus::Email, &self.email),
            (Focus::Password, &self.password),
        ] {
            if let Some(props) = self.props_for(focus) {
                lines.extend(field_lines(&hosted.field.view(&props), field_width));
                lines.push(Line::blank());
            }
        }

        lines.push(Line::new("DataTable", Tone::Heading));
        let view = self.table.view(&data);
        let table_lines = render_table(&view);
        let rows = match &view.body {
            BodyView::Rows(rows) => rows.len(),
            _ => 0,
        };
        for (i, text) in table_lines.into_iter().enumerate() {
            let tone = match i {
                0 => Tone::Heading,
                1 => Tone::Muted,
                i if i - 2 < rows => {
                    if self.focus == Focus::Table && i - 2 == self.cursor {
                        Tone::Highlight
                    } else {
                        Tone::Normal
                    }
                }
                2 => Tone::Muted,
                _ => Tone::Accent,
            };
            lines.push(Line::new(text, tone));
        }

        let selected = self.selected.borrow();
        if !selected.is_empty() {
            let names: Vec<&str> = selected.iter().map(|user| user.name.as_str()).collect();
            lines.push(Line::new(
                format!("Selected Users: {}", names.join(", ")),
                Tone::Accent,
            ));
        }
        lines.push(Line::blank());

        lines.push(Line::new("Sizes and variants", Tone::Heading));
        for (props, field) in &self.samples {
            lines.extend(field_lines(&field.view(props), field_width));
        }

        lines
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn field_lines(view: &FieldView, width: usize) -> Vec<Line> {
    let mut tones = Vec::new();
    if let Some(label) = &view.label {
        tones.push(if label.dimmed { Tone::Muted } else { Tone::Normal });
    }
    let input = match view.emphasis {
        Emphasis::Error => Tone::Error,
        Emphasis::Focused => Tone::Accent,
        Emphasis::Normal if view.disabled => Tone::Muted,
        Emphasis::Normal => Tone::Normal,
    };
    tones.push(input);
    if view.variant != FieldVariant::Outlined {
        tones.push(input);
    }
    if let Some(message) = &view.message {
        tones.push(match message.kind {
            MessageKind::Error => Tone::Error,
            MessageKind::Helper => Tone::Muted,
        });
    }

    render_field(view, width)
        .into_iter()
        .zip(tones)
        .map(|(text, tone)| Line::new(text, tone))
        .collect()
}
