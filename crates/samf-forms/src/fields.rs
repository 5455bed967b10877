//! Field helper constructors.

use crate::descriptor::{Choice, FieldDescriptor};
use crate::validation::{EmailValidator, MaxLengthValidator, MinLengthValidator};

/// Creates a single-line text field with a maximum length.
pub fn text_field(key: &str, label: &str, max_length: usize, required: bool) -> FieldDescriptor {
    let field = FieldDescriptor::new(key, "text")
        .label(label)
        .validator(MaxLengthValidator::new(max_length));
    if required { field } else { field.optional() }
}

/// Creates an email field.
pub fn email_field(key: &str, label: &str, required: bool) -> FieldDescriptor {
    let field = FieldDescriptor::new(key, "email")
        .label(label)
        .validator(EmailValidator::new());
    if required { field } else { field.optional() }
}

/// Creates a required password field.
pub fn password_field(key: &str, label: &str, min_length: Option<usize>) -> FieldDescriptor {
    let field = FieldDescriptor::new(key, "password").label(label);
    match min_length {
        Some(min) => field.validator(MinLengthValidator::new(min)),
        None => field,
    }
}

/// Creates a numeric field.
pub fn number_field(key: &str, label: &str, required: bool) -> FieldDescriptor {
    let field = FieldDescriptor::new(key, "number").label(label);
    if required { field } else { field.optional() }
}

/// Creates a multi-line text field.
pub fn textarea_field(key: &str, label: &str, required: bool) -> FieldDescriptor {
    let field = FieldDescriptor::new(key, "textarea").label(label);
    if required { field } else { field.optional() }
}

/// Creates a dropdown choice field from (value, label) pairs.
pub fn choice_field(
    key: &str,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldDescriptor {
    let options = choices
        .into_iter()
        .map(|(value, text)| Choice::new(value, text))
        .collect();
    let field = FieldDescriptor::new(key, "options").label(label).options(options);
    if required { field } else { field.optional() }
}

/// Creates a checkbox field.
///
/// Checkboxes are optional by construction: an unchecked box coerces to
/// `false`, which is a provided value.
pub fn checkbox_field(key: &str, label: &str) -> FieldDescriptor {
    FieldDescriptor::new(key, "checkbox").label(label).optional()
}

/// Creates a hidden field.
pub fn hidden_field(key: &str) -> FieldDescriptor {
    FieldDescriptor::new(key, "hidden").optional()
}
