//! Shared event plumbing for the widgets.

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event did not apply (disabled control, unknown target, ...).
    Ignored,
    /// Event was applied to the widget state.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}
