//! Field - a controlled text input with focus, password reveal, and
//! validation display.
//!
//! The host owns the value and any validation policy. The field keeps
//! only transient UI state ([`FieldState`]) and reports edits through its
//! change observer.

mod props;
mod state;
mod view;

pub use props::{FieldKind, FieldProps, FieldSize, FieldVariant};
pub use state::{ChangeObserver, FieldEffect, FieldEvent, FieldState, InputField};
pub use view::{
    Adornment, Emphasis, FieldView, LabelView, MASK_CHAR, MessageKind, MessageView,
};
