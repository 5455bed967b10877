//! Error types for the form engine.

use thiserror::Error;

/// Errors surfaced by form operations.
///
/// Field-level validity is not an error: it flows through the store as
/// [`FieldError`](samf_form_core::FieldError) data. These variants cover
/// integration mistakes made by the caller.
#[derive(Debug, Error)]
pub enum FormError {
    /// A key-addressed operation named a field that was never added to the
    /// form.
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// The supplied initial values were not a JSON object.
    #[error("initial values must be a JSON object, got {0}")]
    InvalidInitial(String),
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = FormError::UnknownField("email".to_string());
        assert_eq!(error.to_string(), "unknown form field: email");
    }
}
