//! Rule builder for a single string value.

use std::fmt;

use crate::error::Result;
use crate::field::FieldProps;

/// Type alias for validation rule closures.
type Rule = Box<dyn Fn(&str) -> bool>;

/// Ordered list of rules for one value; the first failure wins.
///
/// # Example
///
/// ```
/// use gridform::validation::Rules;
///
/// let rules = Rules::new().contains("@", "Please enter a valid email address");
/// assert!(rules.check("").is_ok());
/// assert!(rules.check("user@example.com").is_ok());
/// assert_eq!(
///     rules.check("user").unwrap_err(),
///     "Please enter a valid email address"
/// );
/// ```
#[derive(Default)]
pub struct Rules {
    rules: Vec<(Rule, String)>,
}

impl Rules {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&str) -> bool + 'static,
    {
        self.rules.push((Box::new(f), msg.into()));
        self
    }

    /// Require the value to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require a non-empty value to contain a substring.
    ///
    /// Empty is valid; use [`required`](Self::required) for non-empty.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let substr = substr.into();
        self.rule(move |v| v.is_empty() || v.contains(&substr), msg)
    }

    /// Require a non-empty value to be a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        self.rule(
            |v| v.is_empty() || email_address::EmailAddress::is_valid(v),
            msg,
        )
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Result<Self> {
        let re = regex::Regex::new(pattern)?;
        Ok(self.rule(move |v| re.is_match(v), msg))
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check a value, returning the first failing rule's message.
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        match self.rules.iter().find(|(rule, _)| !rule(value)) {
            Some((_, msg)) => Err(msg.clone()),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rules")
            .field("messages", &self.rules.iter().map(|(_, m)| m).collect::<Vec<_>>())
            .finish()
    }
}

impl FieldProps {
    /// Apply the outcome of checking this field's value against `rules`.
    ///
    /// A failure sets `invalid` and the error message; a pass clears both.
    pub fn validated(self, rules: &Rules) -> Self {
        let message = rules.check(&self.value).err();
        self.with_validation(message)
    }
}
