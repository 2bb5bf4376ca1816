//! Outcome of a [`Validator`](super::Validator) run.

use crate::field::FieldProps;

/// A field that failed, with the message of its first failing rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationResult {
    #[default]
    Valid,
    /// Failures in the order the fields were added.
    Invalid(Vec<FieldError>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Message for `field_name`, if that field failed.
    pub fn message_for(&self, field_name: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field_name == field_name)
            .map(|e| e.message.as_str())
    }

    /// Mark `props` with the outcome for `field_name`.
    pub fn apply(&self, field_name: &str, props: FieldProps) -> FieldProps {
        props.with_validation(self.message_for(field_name).map(str::to_string))
    }
}

impl FieldProps {
    /// A message sets `invalid` and the error text; `None` clears both.
    pub(super) fn with_validation(mut self, message: Option<String>) -> Self {
        self.invalid = message.is_some();
        self.error_message = message;
        self
    }
}
