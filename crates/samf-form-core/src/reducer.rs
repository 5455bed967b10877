//! The form reducer: a pure, two-action state transition function.

use serde_json::Value;

use crate::error::FieldError;
use crate::state::FormState;

/// An action accepted by [`reduce`].
///
/// These are the only two transitions a form state can make. Deciding what
/// a field's new error should be happens before the action is dispatched;
/// the reducer itself only records, which keeps it total and trivially
/// testable.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// A field registered or changed.
    FieldChanged {
        /// The field's dotted key.
        key: String,
        /// The new value; `None` leaves the stored value untouched
        /// (error-only update).
        value: Option<Value>,
        /// The freshly computed error for the field.
        error: FieldError,
    },
    /// The user attempted to submit the form.
    SubmitAttempted,
}

impl FormAction {
    /// Creates a `FieldChanged` carrying both a value and an error.
    pub fn changed(key: impl Into<String>, value: Value, error: FieldError) -> Self {
        Self::FieldChanged {
            key: key.into(),
            value: Some(value),
            error,
        }
    }

    /// Creates an error-only `FieldChanged` that leaves the value alone.
    pub fn error_only(key: impl Into<String>, error: FieldError) -> Self {
        Self::FieldChanged {
            key: key.into(),
            value: None,
            error,
        }
    }
}

/// Applies an action to a snapshot and returns the next snapshot.
///
/// `FieldChanged` adds the key to the registered set, overwrites the value
/// when one is supplied and always overwrites the error. `SubmitAttempted`
/// sets the submit flag and touches nothing else. The function reads no
/// external state and performs no side effects.
#[must_use]
pub fn reduce(state: &FormState, action: FormAction) -> FormState {
    let mut next = state.clone();
    match action {
        FormAction::FieldChanged { key, value, error } => {
            next.record_field_change(key, value, error);
        }
        FormAction::SubmitAttempted => next.record_submit_attempt(),
    }
    next
}
