//! The form state snapshot.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value, json};

use crate::error::FieldError;
use crate::value::nest;

/// Immutable snapshot of one form's state.
///
/// Holds the current value and error for every registered field, the set
/// of keys that have registered, and whether a submit attempt occurred.
/// Registered keys only ever accumulate for the lifetime of the snapshot
/// chain; values and errors are keyed by the same dotted paths the fields
/// registered with.
///
/// Snapshots are only advanced through [`reduce`](crate::reduce); nothing
/// else mutates them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: HashMap<String, Value>,
    errors: HashMap<String, FieldError>,
    all_fields: BTreeSet<String>,
    did_submit: bool,
}

impl FormState {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot seeded from caller-supplied initial values.
    ///
    /// Seeding records values only; keys are registered (and their errors
    /// computed) when each field's first change is dispatched.
    #[must_use]
    pub fn with_values(values: HashMap<String, Value>) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Returns the current value for a key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Returns the current error for a key.
    ///
    /// A key with no recorded error reads as `Valid`; every registered
    /// field gets an error recorded with its registering change.
    #[must_use]
    pub fn error(&self, key: &str) -> &FieldError {
        self.errors.get(key).unwrap_or(&FieldError::Valid)
    }

    /// Returns the registered field keys in sorted order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.all_fields.iter().map(String::as_str)
    }

    /// Returns whether a key has registered.
    #[must_use]
    pub fn is_registered(&self, key: &str) -> bool {
        self.all_fields.contains(key)
    }

    /// Returns the number of registered fields.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.all_fields.len()
    }

    /// Returns whether a submit attempt has occurred.
    #[must_use]
    pub const fn did_submit(&self) -> bool {
        self.did_submit
    }

    /// Aggregate validity: true iff every registered field has a recorded
    /// `Valid` error.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.all_fields
            .iter()
            .all(|key| self.errors.get(key).is_some_and(FieldError::is_valid))
    }

    /// Returns the flat value map.
    #[must_use]
    pub const fn values(&self) -> &HashMap<String, Value> {
        &self.values
    }

    /// Returns the values as a nested JSON object, expanding dotted keys.
    #[must_use]
    pub fn nested_values(&self) -> Value {
        nest(&self.values)
    }

    /// Serializes the whole snapshot for debug inspection.
    ///
    /// Errors keep their wire shape: `false` valid, `true` invalid, a
    /// string for invalid-with-message. Maps are emitted in sorted key
    /// order.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut values = Map::new();
        let mut value_keys: Vec<&String> = self.values.keys().collect();
        value_keys.sort();
        for key in value_keys {
            if let Some(value) = self.values.get(key) {
                values.insert(key.clone(), value.clone());
            }
        }

        let mut errors = Map::new();
        let mut error_keys: Vec<&String> = self.errors.keys().collect();
        error_keys.sort();
        for key in error_keys {
            if let Some(error) = self.errors.get(key) {
                errors.insert(key.clone(), error.to_json());
            }
        }

        json!({
            "values": values,
            "errors": errors,
            "all_fields": self.all_fields.iter().collect::<Vec<_>>(),
            "did_submit": self.did_submit,
        })
    }

    pub(crate) fn record_field_change(
        &mut self,
        key: String,
        value: Option<Value>,
        error: FieldError,
    ) {
        self.all_fields.insert(key.clone());
        if let Some(value) = value {
            self.values.insert(key.clone(), value);
        }
        self.errors.insert(key, error);
    }

    pub(crate) fn record_submit_attempt(&mut self) {
        self.did_submit = true;
    }
}
