//! Form validation helpers.
//!
//! Fields display validation state but never compute it. This module is
//! the host-side collaborator that does: build [`Rules`] for a value, then
//! feed the outcome back through [`FieldProps::validated`](crate::field::FieldProps::validated).
//!
//! # Example
//!
//! ```
//! use gridform::field::FieldProps;
//! use gridform::validation::{Rules, Validator};
//!
//! let email_rules = Rules::new().contains("@", "Please enter a valid email address");
//! let password_rules = Rules::new().min_length(8, "Must be at least 8 characters");
//!
//! let result = Validator::new()
//!     .field("email", "user", &email_rules)
//!     .field("password", "hunter22", &password_rules)
//!     .validate();
//! assert_eq!(result.errors().len(), 1);
//!
//! let props = FieldProps::new().value("user").validated(&email_rules);
//! assert!(props.has_error());
//! ```

mod result;
mod rules;
mod validator;

pub use result::{FieldError, ValidationResult};
pub use rules::Rules;
pub use validator::Validator;
