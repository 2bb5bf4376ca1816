use std::cell::RefCell;
use std::rc::Rc;

use gridform::EventResult;
use gridform::field::{
    Adornment, Emphasis, FieldEffect, FieldEvent, FieldKind, FieldProps, FieldSize, FieldState,
    FieldVariant, InputField, MessageKind,
};
use gridform::render::render_field;

fn recording_field() -> (InputField, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let field = InputField::with_id("email").on_change(move |v| sink.borrow_mut().push(v.to_string()));
    (field, log)
}

#[test]
fn test_error_message_replaces_helper_text() {
    let props = FieldProps::new()
        .label("Email")
        .value("user")
        .helper_text("We never share it")
        .invalid(true)
        .error_message("Please enter a valid email address");
    let view = InputField::with_id("email").view(&props);

    let message = view.message.expect("message");
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, "Please enter a valid email address");
    assert_eq!(message.id, "email-error");
    assert_eq!(view.described_by.as_deref(), Some("email-error"));
    assert_eq!(view.emphasis, Emphasis::Error);
    assert!(view.invalid);
}

#[test]
fn test_helper_text_when_valid() {
    let props = FieldProps::new().helper_text("Must be at least 8 characters");
    let view = InputField::with_id("pw").view(&props);
    let message = view.message.expect("message");
    assert_eq!(message.kind, MessageKind::Helper);
    assert_eq!(message.id, "pw-helper");
}

#[test]
fn test_error_message_alone_marks_error() {
    let props = FieldProps::new().error_message("Required");
    assert!(props.has_error());
    assert!(!FieldProps::new().error_message("").has_error());
    assert!(FieldProps::new().invalid(true).has_error());
}

#[test]
fn test_invalid_without_message_hides_helper() {
    let props = FieldProps::new().invalid(true).helper_text("hint");
    let view = InputField::with_id("x").view(&props);
    assert_eq!(view.emphasis, Emphasis::Error);
    assert!(view.message.is_none());
}

#[test]
fn test_input_notifies_with_new_value() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new().value("a");
    assert_eq!(
        field.dispatch(&props, FieldEvent::Input("ab".into())),
        EventResult::Consumed
    );
    assert_eq!(*log.borrow(), vec!["ab"]);
}

#[test]
fn test_clear_emits_empty_value() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new().value("abc").show_clear_button(true);
    let adornments = view_adornments(&field, &props);
    assert!(matches!(
        adornments.as_slice(),
        [Adornment::ClearButton { disabled: false, .. }]
    ));
    assert_eq!(field.dispatch(&props, FieldEvent::Clear), EventResult::Consumed);
    assert_eq!(*log.borrow(), vec![""]);
}

fn view_adornments(field: &InputField, props: &FieldProps) -> Vec<Adornment> {
    field.view(props).adornments
}

#[test]
fn test_clear_button_hidden_for_empty_value() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new().show_clear_button(true);
    assert!(view_adornments(&field, &props).is_empty());
    assert_eq!(field.dispatch(&props, FieldEvent::Clear), EventResult::Ignored);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_clear_without_button_is_ignored() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new().value("abc");
    assert_eq!(field.dispatch(&props, FieldEvent::Clear), EventResult::Ignored);
    assert!(log.borrow().is_empty());
}

#[test]
fn test_disabled_field_ignores_edits_and_focus() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new()
        .value("abc")
        .disabled(true)
        .show_clear_button(true)
        .kind(FieldKind::Password);

    assert_eq!(field.dispatch(&props, FieldEvent::Focus), EventResult::Ignored);
    assert_eq!(
        field.dispatch(&props, FieldEvent::Input("x".into())),
        EventResult::Ignored
    );
    assert_eq!(field.dispatch(&props, FieldEvent::Clear), EventResult::Ignored);
    assert_eq!(
        field.dispatch(&props, FieldEvent::ToggleReveal),
        EventResult::Ignored
    );
    assert!(log.borrow().is_empty());

    let view = field.view(&props);
    assert!(view.disabled);
    assert!(view.adornments.iter().all(|a| match a {
        Adornment::ClearButton { disabled, .. } | Adornment::RevealToggle { disabled, .. } =>
            *disabled,
        Adornment::Spinner => false,
    }));
}

#[test]
fn test_loading_shows_only_spinner() {
    let props = FieldProps::new()
        .value("abc")
        .loading(true)
        .show_clear_button(true)
        .kind(FieldKind::Password);
    let mut field = InputField::with_id("x");
    let view = field.view(&props);
    assert_eq!(view.adornments, vec![Adornment::Spinner]);
    assert!(view.disabled);
    assert_eq!(
        field.dispatch(&props, FieldEvent::Input("y".into())),
        EventResult::Ignored
    );
}

#[test]
fn test_password_masked_until_revealed() {
    let props = FieldProps::new().value("secret").kind(FieldKind::Password);
    let mut field = InputField::with_id("pw");

    let view = field.view(&props);
    assert_eq!(view.text, "••••••");
    assert_eq!(view.input_kind, FieldKind::Password);
    assert!(matches!(
        &view.adornments[..],
        [Adornment::RevealToggle { revealed: false, label, .. }] if label == "Show password"
    ));

    assert_eq!(
        field.dispatch(&props, FieldEvent::ToggleReveal),
        EventResult::Consumed
    );
    let view = field.view(&props);
    assert_eq!(view.text, "secret");
    assert_eq!(view.input_kind, FieldKind::Text);
    assert!(matches!(
        &view.adornments[..],
        [Adornment::RevealToggle { revealed: true, label, .. }] if label == "Hide password"
    ));
}

#[test]
fn test_reveal_never_changes_value() {
    let (mut field, log) = recording_field();
    let props = FieldProps::new().value("secret").kind(FieldKind::Password);
    field.dispatch(&props, FieldEvent::ToggleReveal);
    field.dispatch(&props, FieldEvent::ToggleReveal);
    assert!(log.borrow().is_empty());
    assert!(!field.is_revealed());
}

#[test]
fn test_reveal_ignored_for_text_field() {
    let mut field = InputField::with_id("x");
    let props = FieldProps::new().value("abc");
    assert_eq!(
        field.dispatch(&props, FieldEvent::ToggleReveal),
        EventResult::Ignored
    );
}

#[test]
fn test_focus_and_blur() {
    let mut field = InputField::with_id("x");
    let props = FieldProps::new();
    assert_eq!(field.dispatch(&props, FieldEvent::Focus), EventResult::Consumed);
    assert!(field.is_focused());
    assert_eq!(field.view(&props).emphasis, Emphasis::Focused);

    assert_eq!(field.dispatch(&props, FieldEvent::Focus), EventResult::Ignored);
    assert_eq!(field.dispatch(&props, FieldEvent::Blur), EventResult::Consumed);
    assert!(!field.is_focused());
}

#[test]
fn test_blur_allowed_when_disabled() {
    let mut field = InputField::with_id("x");
    field.dispatch(&FieldProps::new(), FieldEvent::Focus);
    let disabled = FieldProps::new().disabled(true);
    assert_eq!(field.dispatch(&disabled, FieldEvent::Blur), EventResult::Consumed);
    assert!(!field.is_focused());
}

#[test]
fn test_transition_is_pure() {
    let props = FieldProps::new().value("abc").show_clear_button(true);
    let state = FieldState::default();
    let (next, effect) = state.transition(&props, &FieldEvent::Clear);
    assert_eq!(next, state);
    assert_eq!(effect, Some(FieldEffect::ValueChanged(String::new())));
}

#[test]
fn test_generated_ids_are_unique() {
    let a = InputField::new();
    let b = InputField::new();
    assert!(a.id().starts_with("input-"));
    assert_eq!(a.id().len(), "input-".len() + 9);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_props_id_overrides_generated_id() {
    let field = InputField::new();
    let props = FieldProps::new().id("email").label("Email");
    let view = field.view(&props);
    assert_eq!(view.id, "email");
    assert_eq!(view.label.map(|l| l.for_id), Some("email".to_string()));
}

#[test]
fn test_placeholder_only_when_empty() {
    let field = InputField::with_id("x");
    let empty = FieldProps::new().placeholder("Search users...");
    assert_eq!(
        field.view(&empty).placeholder.as_deref(),
        Some("Search users...")
    );
    let filled = empty.clone().value("jo");
    assert!(field.view(&filled).placeholder.is_none());
}

#[test]
fn test_label_marks() {
    let field = InputField::with_id("x");
    let props = FieldProps::new().label("Name").required(true).disabled(true);
    let label = field.view(&props).label.expect("label");
    assert!(label.required);
    assert!(label.dimmed);
}

#[test]
fn test_parse_options() {
    assert_eq!("filled".parse::<FieldVariant>().ok(), Some(FieldVariant::Filled));
    assert_eq!("Ghost".parse::<FieldVariant>().ok(), Some(FieldVariant::Ghost));
    assert_eq!("sm".parse::<FieldSize>().ok(), Some(FieldSize::Small));
    assert_eq!("large".parse::<FieldSize>().ok(), Some(FieldSize::Large));
    assert_eq!("password".parse::<FieldKind>().ok(), Some(FieldKind::Password));

    let err = "huge".parse::<FieldSize>().unwrap_err();
    assert!(err.to_string().contains("huge"));
    assert!("bordered".parse::<FieldVariant>().is_err());
    assert!("date".parse::<FieldKind>().is_err());
}

#[test]
fn test_defaults() {
    let props = FieldProps::default();
    assert_eq!(props.variant, FieldVariant::Outlined);
    assert_eq!(props.size, FieldSize::Medium);
    assert_eq!(props.kind, FieldKind::Text);
    assert!(props.interactive());
    assert_eq!(FieldSize::Large.icon_size(), 20);
}

#[test]
fn test_render_outlined_field() {
    let field = InputField::with_id("x");
    let props = FieldProps::new()
        .label("Email")
        .required(true)
        .value("ann")
        .error_message("Please enter a valid email address");
    let lines = render_field(&field.view(&props), 20);
    assert_eq!(lines[0], "Email *");
    assert_eq!(lines[1], "[ ann              ]");
    assert_eq!(lines[2], "Please enter a vali…");
}

#[test]
fn test_render_filled_field_has_underline() {
    let field = InputField::with_id("x");
    let props = FieldProps::new()
        .variant(FieldVariant::Filled)
        .size(FieldSize::Small)
        .placeholder("Type");
    let lines = render_field(&field.view(&props), 10);
    assert_eq!(lines[0], " Type     ");
    assert_eq!(lines[1], "━".repeat(10));
}
