//! Recruitment Application Example
//!
//! This example builds the volunteer recruitment application form and
//! drives it the way a host page would: edits come in as raw input, the
//! submit control follows aggregate validity, and a simulated backend
//! rejection is injected back into the same display pipeline.
//!
//! Run with: cargo run --example recruitment_form

use std::collections::HashMap;

use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use samf_form_core::{FieldError, ValidationMode};
use samf_forms::fields::{checkbox_field, choice_field, email_field, number_field, text_field, textarea_field};
use samf_forms::{SamfForm, SubmitOutcome};
use serde_json::Value;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut form = SamfForm::builder()
        .mode(ValidationMode::OnChange)
        .field(text_field("name", "Full name", 150, true))
        .field(email_field("email", "Email", true))
        .field(number_field("age", "Age", true).validator(|value: &Value| {
            if value.as_i64().is_some_and(|age| age >= 16) {
                FieldError::Valid
            } else {
                FieldError::message("Applicants must be at least 16 years old.")
            }
        }))
        .field(choice_field(
            "position",
            "Position",
            vec![
                ("stage", "Stage crew"),
                ("bar", "Bar"),
                ("photo", "Photo and video"),
            ],
            true,
        ))
        .field(textarea_field("motivation", "Motivation", false))
        .field(checkbox_field("consent", "I consent to the processing of my application"))
        .on_validity_changed(|valid| info!(valid = valid, "Form validity changed"))
        .on_submit(|values| info!(fields = values.len(), "Application submitted"))
        .debug()
        .build();

    info!(enabled = form.submit_enabled(), "Form mounted");

    // The applicant fills the form field by field; the submit control
    // unlocks only once every required field holds an acceptable value.
    form.set_input("name", "Ada Lovelace")?;
    form.set_input("email", "ada@samfundet.no")?;
    form.set_input("age", "21")?;
    form.set_input("position", "photo")?;
    form.set_input("motivation", "I have run the photo pit at two festivals.")?;
    form.set_input("consent", "on")?;

    info!(enabled = form.submit_enabled(), "Form filled");
    assert_eq!(form.submit(), SubmitOutcome::Submitted);

    // The backend rejects the email; surface its message on the field.
    let mut backend_errors = HashMap::new();
    backend_errors.insert(
        "email".to_string(),
        "An application with this email already exists.".to_string(),
    );
    form.inject_errors(&backend_errors);
    info!(visible = form.error_visible("email")?, "Backend error surfaced");

    println!("{}", form.render("/recruitment/apply", "POST"));
    Ok(())
}
