//! Field state machine and the stateful component.

use std::fmt;

use log::debug;

use crate::events::EventResult;

use super::props::FieldProps;

/// User interactions with a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Focus,
    Blur,
    /// The user edited the text; carries the whole new value.
    Input(String),
    /// The clear button was clicked.
    Clear,
    /// The show/hide password button was clicked.
    ToggleReveal,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEffect {
    /// The host should adopt this value.
    ValueChanged(String),
}

/// Transient UI state of one field.
///
/// Neither flag touches the value: focus only changes emphasis and
/// `revealed` only changes how a password is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldState {
    pub focused: bool,
    pub revealed: bool,
}

impl FieldState {
    /// State (and effect) after applying `event` under `props`.
    pub fn transition(
        &self,
        props: &FieldProps,
        event: &FieldEvent,
    ) -> (FieldState, Option<FieldEffect>) {
        let mut next = *self;
        let effect = match event {
            FieldEvent::Focus => {
                if props.interactive() {
                    next.focused = true;
                }
                None
            }
            FieldEvent::Blur => {
                next.focused = false;
                None
            }
            FieldEvent::Input(value) => props
                .interactive()
                .then(|| FieldEffect::ValueChanged(value.clone())),
            FieldEvent::Clear => (props.interactive()
                && props.show_clear_button
                && !props.value.is_empty())
            .then(|| FieldEffect::ValueChanged(String::new())),
            FieldEvent::ToggleReveal => {
                if props.interactive() && props.is_password() {
                    next.revealed = !next.revealed;
                }
                None
            }
        };
        (next, effect)
    }
}

/// Observer called with the new value on every change notification.
pub type ChangeObserver = Box<dyn FnMut(&str)>;

/// A controlled text input field.
///
/// `InputField` never owns the value. It keeps focus and reveal state,
/// and turns edits and clicks on the clear button into change
/// notifications for the host, which then passes the new value back in
/// through [`FieldProps`].
///
/// # Example
///
/// ```ignore
/// let mut email = String::new();
/// let mut field = InputField::new().on_change(|v| log::info!("email = {v}"));
///
/// let props = FieldProps::new().label("Email").value(&email);
/// field.dispatch(&props, FieldEvent::Input("a@b.c".into()));
/// ```
pub struct InputField {
    id: String,
    state: FieldState,
    on_change: Option<ChangeObserver>,
}

impl InputField {
    /// Create a field with a generated id.
    pub fn new() -> Self {
        Self::with_id(generate_id())
    }

    /// Create a field with a fixed id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            state: FieldState::default(),
            on_change: None,
        }
    }

    /// Register the change observer.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: FnMut(&str) + 'static,
    {
        self.on_change = Some(Box::new(f));
        self
    }

    /// Id used when the props do not supply one.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Effective element id for `props`.
    pub fn element_id<'a>(&'a self, props: &'a FieldProps) -> &'a str {
        props.id.as_deref().unwrap_or(&self.id)
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_focused(&self) -> bool {
        self.state.focused
    }

    pub fn is_revealed(&self) -> bool {
        self.state.revealed
    }

    /// Apply a user interaction.
    ///
    /// A change notification is delivered to the observer before this
    /// returns; `Consumed` means the state changed or a notification went
    /// out.
    pub fn dispatch(&mut self, props: &FieldProps, event: FieldEvent) -> EventResult {
        let (next, effect) = self.state.transition(props, &event);
        if next == self.state && effect.is_none() {
            return EventResult::Ignored;
        }

        debug!("[field {}] applied {:?}", self.id, event);
        self.state = next;
        if let Some(FieldEffect::ValueChanged(value)) = effect
            && let Some(observer) = self.on_change.as_mut()
        {
            observer(&value);
        }
        EventResult::Consumed
    }
}

impl Default for InputField {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("observer", &self.on_change.is_some())
            .finish()
    }
}

/// Generate an element id of the form `input-xxxxxxxxx`.
fn generate_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("input-{}", &uuid[..9])
}
