//! Pure view derivation for the field.

use log::trace;

use super::props::{FieldKind, FieldProps, FieldSize, FieldVariant};
use super::state::{FieldState, InputField};

/// Character shown for each character of a masked password.
pub const MASK_CHAR: char = '•';

/// Border/underline emphasis, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Error,
    Focused,
    Normal,
}

/// Controls drawn at the trailing edge of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Adornment {
    /// Busy indicator while loading.
    Spinner,
    ClearButton { label: String, disabled: bool },
    RevealToggle {
        revealed: bool,
        label: String,
        disabled: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelView {
    pub text: String,
    pub required: bool,
    /// Drawn faded because the field is disabled.
    pub dimmed: bool,
    /// Id of the input this label is for.
    pub for_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Error,
    Helper,
}

/// Line of text under the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageView {
    pub kind: MessageKind,
    pub text: String,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub name: Option<String>,
    pub label: Option<LabelView>,
    /// Text drawn in the input: the value, masked for hidden passwords.
    pub text: String,
    /// Placeholder drawn when the value is empty.
    pub placeholder: Option<String>,
    /// Kind the input presents as (a revealed password shows as text).
    pub input_kind: FieldKind,
    pub disabled: bool,
    pub required: bool,
    pub invalid: bool,
    pub emphasis: Emphasis,
    pub variant: FieldVariant,
    pub size: FieldSize,
    pub adornments: Vec<Adornment>,
    pub message: Option<MessageView>,
    /// Id of the message describing the input, if any.
    pub described_by: Option<String>,
}

impl FieldView {
    /// Derive the view of a field with the given id.
    pub fn derive(id: &str, props: &FieldProps, state: &FieldState) -> Self {
        let has_error = props.has_error();
        let password = props.is_password();

        let text = if password && !state.revealed {
            props.value.chars().map(|_| MASK_CHAR).collect()
        } else {
            props.value.clone()
        };

        let input_kind = if password && state.revealed {
            FieldKind::Text
        } else {
            props.kind
        };

        let emphasis = if has_error {
            Emphasis::Error
        } else if state.focused {
            Emphasis::Focused
        } else {
            Emphasis::Normal
        };

        let mut adornments = Vec::new();
        if props.loading {
            adornments.push(Adornment::Spinner);
        } else {
            if props.show_clear_button && !props.value.is_empty() {
                adornments.push(Adornment::ClearButton {
                    label: "Clear input".to_string(),
                    disabled: props.disabled,
                });
            }
            if password {
                adornments.push(Adornment::RevealToggle {
                    revealed: state.revealed,
                    label: if state.revealed {
                        "Hide password".to_string()
                    } else {
                        "Show password".to_string()
                    },
                    disabled: props.disabled,
                });
            }
        }

        let message = if has_error {
            props.error_message.clone().map(|text| MessageView {
                kind: MessageKind::Error,
                text,
                id: format!("{id}-error"),
            })
        } else {
            props.helper_text.clone().map(|text| MessageView {
                kind: MessageKind::Helper,
                text,
                id: format!("{id}-helper"),
            })
        };
        let described_by = message.as_ref().map(|m| m.id.clone());

        let label = props.label.clone().map(|text| LabelView {
            text,
            required: props.required,
            dimmed: props.disabled,
            for_id: id.to_string(),
        });

        trace!("[field {}] derived view, emphasis {:?}", id, emphasis);

        FieldView {
            id: id.to_string(),
            name: props.name.clone(),
            label,
            text,
            placeholder: props
                .value
                .is_empty()
                .then(|| props.placeholder.clone())
                .flatten(),
            input_kind,
            disabled: !props.interactive(),
            required: props.required,
            invalid: has_error,
            emphasis,
            variant: props.variant,
            size: props.size,
            adornments,
            message,
            described_by,
        }
    }
}

impl InputField {
    /// Derive the current view for `props`.
    pub fn view(&self, props: &FieldProps) -> FieldView {
        FieldView::derive(self.element_id(props), props, &self.state())
    }
}
