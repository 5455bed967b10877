//! Field validity taxonomy.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// Validity of a single form field.
///
/// `Valid` is the only value treated as "no error"; both other kinds block
/// aggregate validity. The distinction between `Invalid` and `Message`
/// controls presentation only: a generic invalid indicator versus a
/// user-facing explanation.
///
/// Field errors are data, not exceptions: they flow through the reducer
/// like any other part of the snapshot and are never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldError {
    /// The field is valid.
    #[default]
    Valid,
    /// The field is invalid, with no user-facing message.
    Invalid,
    /// The field is invalid, with a user-facing message.
    Message(String),
}

impl FieldError {
    /// Creates an invalid-with-message error.
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// Returns whether the field is valid.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the user-facing message, if any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Serializes to the wire shape: `false` valid, `true` invalid,
    /// a string for invalid-with-message.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Valid => Value::Bool(false),
            Self::Invalid => Value::Bool(true),
            Self::Message(message) => Value::String(message.clone()),
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid => serializer.serialize_bool(false),
            Self::Invalid => serializer.serialize_bool(true),
            Self::Message(message) => serializer.serialize_str(message),
        }
    }
}

impl From<&str> for FieldError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for FieldError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<bool> for FieldError {
    /// Maps a bare verdict onto the taxonomy: `true` is valid, `false` is
    /// invalid with no message.
    fn from(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }
}
