//! End-to-end scenarios for the form engine.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use samf_form_core::{FieldError, ValidationMode};
use samf_forms::{FieldDescriptor, SamfForm, SubmitOutcome};
use serde_json::{Value, json};

fn submit_probe() -> (Rc<RefCell<usize>>, impl FnMut(&HashMap<String, Value>)) {
    let count = Rc::new(RefCell::new(0));
    let probe = Rc::clone(&count);
    (count, move |_values: &HashMap<String, Value>| {
        *probe.borrow_mut() += 1;
    })
}

#[test]
fn seeded_values_round_trip_before_any_edit() {
    let form = SamfForm::builder()
        .initial("a", json!(1))
        .initial("b", json!("x"))
        .field(FieldDescriptor::new("a", "number"))
        .field(FieldDescriptor::new("b", "text"))
        .build();

    assert_eq!(form.value("a"), Some(&json!(1)));
    assert_eq!(form.value("b"), Some(&json!("x")));
    assert!(form.state().error("a").is_valid());
    assert!(form.state().error("b").is_valid());
    assert!(form.is_valid());
}

#[test]
fn required_empty_field_blocks_submit_in_on_submit_mode() {
    let (submits, handler) = submit_probe();
    let mut form = SamfForm::builder()
        .mode(ValidationMode::OnSubmit)
        .field(FieldDescriptor::new("name", "text"))
        .on_submit(handler)
        .build();

    // The control stays enabled in on-submit mode and the error stays
    // hidden until the attempt.
    assert!(form.submit_enabled());
    assert!(!form.error_visible("name").unwrap());

    assert_eq!(form.submit(), SubmitOutcome::Rejected);
    assert_eq!(*submits.borrow(), 0);
    assert!(form.error_visible("name").unwrap());
    assert_eq!(form.state().error("name"), &FieldError::Invalid);
}

#[test]
fn validator_message_surfaces_verbatim() {
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("code", "text").validator(|value: &Value| {
            if value == &json!("OK") {
                FieldError::Valid
            } else {
                FieldError::message("must be OK")
            }
        }))
        .build();

    form.set_input("code", "no").unwrap();
    assert_eq!(form.state().error("code"), &FieldError::message("must be OK"));

    form.set_input("code", "OK").unwrap();
    assert_eq!(form.state().error("code"), &FieldError::Valid);
}

#[test]
fn on_change_mode_gates_submit_live() {
    let mut form = SamfForm::builder()
        .mode(ValidationMode::OnChange)
        .field(FieldDescriptor::new("name", "text"))
        .build();

    assert!(!form.submit_enabled());
    form.set_input("name", "Ada").unwrap();
    assert!(form.submit_enabled());
    form.set_input("name", "").unwrap();
    assert!(!form.submit_enabled());
}

#[test]
fn unknown_type_tag_degrades_gracefully() {
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("mystery", "does-not-exist"))
        .field(FieldDescriptor::new("name", "text"))
        .build();

    // The field registers, validates and renders without a crash; only
    // its control goes missing.
    assert!(form.state().is_registered("mystery"));
    assert_eq!(form.state().error("mystery"), &FieldError::Invalid);

    let html = form.render("/x", "POST");
    assert!(html.contains(r#"name="name""#));
    assert!(!html.contains(r#"name="mystery""#));

    // Identity coercion still routes values into the store.
    form.set_input("mystery", "filled").unwrap();
    assert_eq!(form.value("mystery"), Some(&json!("filled")));
    assert!(form.state().error("mystery").is_valid());
}

#[test]
fn external_error_injection_keeps_values() {
    let (submits, handler) = submit_probe();
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("email", "email"))
        .on_submit(handler)
        .build();

    form.set_input("email", "ada@samfundet.no").unwrap();
    assert_eq!(form.submit(), SubmitOutcome::Submitted);
    assert_eq!(*submits.borrow(), 1);

    let mut backend = HashMap::new();
    backend.insert("email".to_string(), "already taken".to_string());
    form.inject_errors(&backend);

    assert_eq!(form.state().error("email"), &FieldError::message("already taken"));
    assert_eq!(form.value("email"), Some(&json!("ada@samfundet.no")));
    assert!(form.error_visible("email").unwrap());
    assert!(!form.is_valid());
}

#[test]
fn hidden_field_still_registers_and_validates() {
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("name", "text"))
        .field(FieldDescriptor::new("token", "text").hidden())
        .build();

    form.set_input("name", "Ada").unwrap();

    // The hidden field is empty and required, so it holds the form back.
    assert!(form.state().is_registered("token"));
    assert!(!form.is_valid());

    form.set_input("token", "abc123").unwrap();
    assert!(form.is_valid());

    let html = form.render("/x", "POST");
    assert!(html.contains("d-none"));
}

#[test]
fn dotted_keys_nest_in_submitted_values() {
    let captured = Rc::new(RefCell::new(Value::Null));
    let sink = Rc::clone(&captured);
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("tickets.vip", "number").optional())
        .field(FieldDescriptor::new("tickets.standard", "number").optional())
        .on_submit(move |values| {
            *sink.borrow_mut() = samf_form_core::nest(values);
        })
        .build();

    form.set_input("tickets.vip", "2").unwrap();
    form.set_input("tickets.standard", "0").unwrap();
    assert_eq!(form.submit(), SubmitOutcome::Submitted);

    assert_eq!(
        *captured.borrow(),
        json!({"tickets": {"vip": 2, "standard": 0}})
    );
    assert_eq!(form.nested_values(), *captured.borrow());
}

#[test]
fn numeric_zero_satisfies_a_required_field() {
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("count", "number"))
        .build();

    form.set_input("count", "0").unwrap();
    assert!(form.is_valid());

    // An unparsable entry reads as unset, which required rejects.
    form.set_input("count", "zero").unwrap();
    assert!(!form.is_valid());
    assert_eq!(form.value("count"), Some(&Value::Null));
}

#[test]
fn submit_attempt_reveals_every_field() {
    let mut form = SamfForm::builder()
        .mode(ValidationMode::OnSubmit)
        .field(FieldDescriptor::new("name", "text"))
        .field(FieldDescriptor::new("email", "email"))
        .build();

    assert!(!form.error_visible("name").unwrap());
    assert!(!form.error_visible("email").unwrap());

    assert_eq!(form.submit(), SubmitOutcome::Rejected);

    assert!(form.error_visible("name").unwrap());
    assert!(form.error_visible("email").unwrap());

    // Fixing one field clears its presentation while the other stays.
    form.set_input("name", "Ada").unwrap();
    assert!(!form.error_visible("name").unwrap());
    assert!(form.error_visible("email").unwrap());
}

#[test]
fn whole_form_data_absorbed_through_coercion() {
    let mut form = SamfForm::builder()
        .field(FieldDescriptor::new("name", "text"))
        .field(FieldDescriptor::new("age", "number"))
        .field(FieldDescriptor::new("subscribed", "checkbox").optional())
        .build();

    let mut data = HashMap::new();
    data.insert("name".to_string(), "Ada".to_string());
    data.insert("age".to_string(), "21".to_string());
    data.insert("subscribed".to_string(), "on".to_string());
    form.apply_data(&data);

    assert_eq!(form.value("age"), Some(&json!(21)));
    assert_eq!(form.value("subscribed"), Some(&json!(true)));
    assert!(form.is_valid());
}
