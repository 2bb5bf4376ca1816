//! Validator builder for checking several fields at once.

use super::result::{FieldError, ValidationResult};
use super::rules::Rules;

/// Builder for validating multiple form fields.
///
/// # Example
///
/// ```ignore
/// let result = Validator::new()
///     .field("email", &email, &email_rules)
///     .field("password", &password, &password_rules)
///     .validate();
///
/// if result.is_valid() {
///     // Submit form
/// }
/// ```
#[derive(Debug, Default)]
pub struct Validator<'a> {
    fields: Vec<(String, &'a str, &'a Rules)>,
}

impl<'a> Validator<'a> {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field(mut self, name: impl Into<String>, value: &'a str, rules: &'a Rules) -> Self {
        self.fields.push((name.into(), value, rules));
        self
    }

    /// Run all validations. Each field reports at most its first failure.
    pub fn validate(&self) -> ValidationResult {
        let errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter_map(|(name, value, rules)| {
                rules.check(value).err().map(|message| FieldError {
                    field_name: name.clone(),
                    message,
                })
            })
            .collect();

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}
