//! Field input configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Visual style of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    Filled,
    #[default]
    Outlined,
    Ghost,
}

impl FieldVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outlined => "outlined",
            Self::Ghost => "ghost",
        }
    }
}

impl FromStr for FieldVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "filled" => Ok(Self::Filled),
            "outlined" => Ok(Self::Outlined),
            "ghost" => Ok(Self::Ghost),
            _ => Err(Error::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for FieldVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FieldSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Horizontal padding inside the input box, in terminal columns.
    pub fn padding(&self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
        }
    }

    /// Icon size in pixels for hosts that draw graphical adornments.
    pub fn icon_size(&self) -> u16 {
        match self {
            Self::Small => 16,
            Self::Medium => 18,
            Self::Large => 20,
        }
    }
}

impl FromStr for FieldSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "sm" => Ok(Self::Small),
            "medium" | "md" => Ok(Self::Medium),
            "large" | "lg" => Ok(Self::Large),
            _ => Err(Error::UnknownSize(s.to_string())),
        }
    }
}

impl fmt::Display for FieldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of value the field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
        }
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "number" => Ok(Self::Number),
            _ => Err(Error::UnknownKind(s.to_string())),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props of a controlled text field.
///
/// The host owns the value and passes the current props on every call.
/// Validation results arrive through `invalid` and `error_message`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldProps {
    pub value: String,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error_message: Option<String>,
    /// Element id; generated when not supplied.
    pub id: Option<String>,
    pub name: Option<String>,
    pub disabled: bool,
    pub invalid: bool,
    pub loading: bool,
    pub required: bool,
    pub show_clear_button: bool,
    pub variant: FieldVariant,
    pub size: FieldSize,
    pub kind: FieldKind,
}

impl FieldProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    /// Set the error message. An empty message counts as no message.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.error_message = (!message.is_empty()).then_some(message);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn show_clear_button(mut self, show: bool) -> Self {
        self.show_clear_button = show;
        self
    }

    pub fn variant(mut self, variant: FieldVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// The field shows error styling.
    pub fn has_error(&self) -> bool {
        self.invalid || self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }

    /// The field accepts focus and edits.
    pub fn interactive(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn is_password(&self) -> bool {
        self.kind == FieldKind::Password
    }
}
