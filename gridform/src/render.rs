//! Plain-text rendering of widget views.
//!
//! The renderers only read views; colors and emphasis are left to the
//! host, which has the same view at hand.

use crate::field::{Adornment, FieldVariant, FieldView};
use crate::table::{Alignment, BodyView, CheckboxView, SortOrder, TableView};
use crate::text::{display_width, fit};

/// Separator between table columns.
const COLUMN_SEPARATOR: &str = " │ ";

/// Options for [`render_table_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRenderOptions {
    /// Upper bound for content-sized columns.
    pub max_column_width: usize,
    /// Lower bound for the body width used by loading/empty messages.
    pub min_width: usize,
}

impl Default for TableRenderOptions {
    fn default() -> Self {
        Self {
            max_column_width: 32,
            min_width: 24,
        }
    }
}

pub fn checkbox_glyph(checkbox: &CheckboxView) -> &'static str {
    if checkbox.indeterminate {
        "▣"
    } else if checkbox.checked {
        "■"
    } else {
        "□"
    }
}

pub fn sort_glyph(order: SortOrder) -> &'static str {
    match order {
        SortOrder::None => "↕",
        SortOrder::Ascending => "▲",
        SortOrder::Descending => "▼",
    }
}

/// Render a table with default options.
///
/// The first two lines are the header and its rule; body lines follow,
/// then the selection summary if there is one.
pub fn render_table(view: &TableView) -> Vec<String> {
    render_table_with(view, &TableRenderOptions::default())
}

pub fn render_table_with(view: &TableView, options: &TableRenderOptions) -> Vec<String> {
    let titles: Vec<String> = view
        .header
        .cells
        .iter()
        .map(|cell| match cell.sort {
            Some(order) => format!("{} {}", cell.title, sort_glyph(order)),
            None => cell.title.clone(),
        })
        .collect();

    let widths: Vec<usize> = view
        .header
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.width {
            Some(width) => width as usize,
            None => view
                .rows()
                .iter()
                .filter_map(|row| row.cells.get(i))
                .map(|text| display_width(text))
                .chain(std::iter::once(display_width(&titles[i])))
                .max()
                .unwrap_or(0)
                .min(options.max_column_width),
        })
        .collect();

    let join = |checkbox: Option<&CheckboxView>, cells: Vec<String>| -> String {
        let mut parts = Vec::with_capacity(cells.len() + 1);
        if let Some(checkbox) = checkbox {
            parts.push(checkbox_glyph(checkbox).to_string());
        }
        parts.extend(cells);
        parts.join(COLUMN_SEPARATOR).trim_end().to_string()
    };

    let mut lines = Vec::new();

    let header_cells = view
        .header
        .cells
        .iter()
        .zip(&titles)
        .zip(&widths)
        .map(|((cell, title), width)| fit(title, *width, cell.align))
        .collect();
    lines.push(join(view.header.select_all.as_ref(), header_cells));

    let mut rule_parts: Vec<String> = Vec::new();
    if view.header.select_all.is_some() {
        rule_parts.push("─".to_string());
    }
    rule_parts.extend(widths.iter().map(|w| "─".repeat(*w)));
    let rule = rule_parts.join("─┼─");
    let total_width = display_width(&rule).max(options.min_width);
    lines.push(rule);

    match &view.body {
        BodyView::Loading { message, .. } => {
            lines.push(fit(&format!("◌ {message}"), total_width, Alignment::Center));
        }
        BodyView::Empty { message, .. } => {
            lines.push(fit(message, total_width, Alignment::Center));
        }
        BodyView::Rows(rows) => {
            for row in rows {
                let cells = row
                    .cells
                    .iter()
                    .zip(&widths)
                    .zip(&view.header.cells)
                    .map(|((text, width), cell)| fit(text, *width, cell.align))
                    .collect();
                lines.push(join(row.checkbox.as_ref(), cells));
            }
        }
    }

    if let Some(summary) = &view.summary {
        lines.push(summary.clone());
    }

    lines
}

fn adornment_glyph(adornment: &Adornment) -> &'static str {
    match adornment {
        Adornment::Spinner => "◌",
        Adornment::ClearButton { .. } => "×",
        Adornment::RevealToggle { revealed: true, .. } => "◉",
        Adornment::RevealToggle { revealed: false, .. } => "◎",
    }
}

/// Render a field into lines at most `width` cells wide.
///
/// Lines are: the label (if any), the input, an underline for filled and
/// ghost variants, and the message (if any).
pub fn render_field(view: &FieldView, width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(label) = &view.label {
        let text = if label.required {
            format!("{} *", label.text)
        } else {
            label.text.clone()
        };
        lines.push(text);
    }

    let content = match (&view.placeholder, view.text.is_empty()) {
        (Some(placeholder), true) => placeholder.as_str(),
        _ => view.text.as_str(),
    };
    let adornments: Vec<&str> = view.adornments.iter().map(adornment_glyph).collect();
    let trailing = if adornments.is_empty() {
        String::new()
    } else {
        format!(" {}", adornments.join(" "))
    };

    let padding = " ".repeat(view.size.padding());
    let (open, close) = match view.variant {
        FieldVariant::Outlined => ("[", "]"),
        FieldVariant::Filled | FieldVariant::Ghost => (" ", " "),
    };
    let frame_width =
        display_width(open) + display_width(close) + 2 * padding.len() + display_width(&trailing);
    let inner = width.saturating_sub(frame_width);
    lines.push(format!(
        "{open}{padding}{}{trailing}{padding}{close}",
        fit(content, inner, Alignment::Left)
    ));

    match view.variant {
        FieldVariant::Filled => lines.push("━".repeat(width)),
        FieldVariant::Ghost => lines.push("─".repeat(width)),
        FieldVariant::Outlined => {}
    }

    if let Some(message) = &view.message {
        lines.push(crate::text::truncate_to_width(&message.text, width));
    }

    lines
}
