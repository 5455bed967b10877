//! Field validators.

use regex::Regex;
use samf_form_core::{FieldError, is_blank};
use serde_json::Value;

/// Trait for field validators.
///
/// A validator inspects a candidate value and returns the field's new
/// [`FieldError`]: `Valid`, `Invalid` for a bare rejection, or `Message`
/// for a rejection carrying a user-facing explanation. Validators are
/// synchronous, side-effect free, and called on every change, so they must
/// be cheap.
///
/// Blank values (unset, empty string) pass every stock validator;
/// requiredness is checked by the field itself, before its validator runs.
pub trait Validator: Send + Sync {
    /// Validates a value.
    fn validate(&self, value: &Value) -> FieldError;
}

impl<F> Validator for F
where
    F: Fn(&Value) -> FieldError + Send + Sync,
{
    fn validate(&self, value: &Value) -> FieldError {
        self(value)
    }
}

/// Validator that enforces a maximum length on string values.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new `MaxLengthValidator`.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new `MaxLengthValidator` with a custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &Value) -> FieldError {
        match value.as_str() {
            Some(text) if text.chars().count() > self.max_length => {
                FieldError::Message(self.message.clone())
            }
            _ => FieldError::Valid,
        }
    }
}

/// Validator that enforces a minimum length on string values.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new `MinLengthValidator`.
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new `MinLengthValidator` with a custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &Value) -> FieldError {
        if is_blank(value) {
            return FieldError::Valid;
        }
        match value.as_str() {
            Some(text) if text.chars().count() < self.min_length => {
                FieldError::Message(self.message.clone())
            }
            _ => FieldError::Valid,
        }
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    pattern: Regex,
    message: String,
}

impl EmailValidator {
    /// Creates a new `EmailValidator` with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_message("Enter a valid email address.")
    }

    /// Creates a new `EmailValidator` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            pattern: Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap(),
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &Value) -> FieldError {
        if is_blank(value) {
            return FieldError::Valid;
        }
        match value.as_str() {
            Some(text) if self.pattern.is_match(text) => FieldError::Valid,
            _ => FieldError::Message(self.message.clone()),
        }
    }
}

/// Validator for URL values.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new `UrlValidator` with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Enter a valid URL.".to_string(),
        }
    }

    /// Creates a new `UrlValidator` with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &Value) -> FieldError {
        if is_blank(value) {
            return FieldError::Valid;
        }
        match value.as_str() {
            Some(text) if text.starts_with("http://") || text.starts_with("https://") => {
                FieldError::Valid
            }
            _ => FieldError::Message(self.message.clone()),
        }
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new `RegexValidator`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &Value) -> FieldError {
        if is_blank(value) {
            return FieldError::Valid;
        }
        match value.as_str() {
            Some(text) if self.pattern.is_match(text) => FieldError::Valid,
            _ => FieldError::Message(self.message.clone()),
        }
    }
}

/// Validator for a numeric range.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new `RangeValidator` with min and max bounds.
    #[must_use]
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new `RangeValidator` with a custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &Value) -> FieldError {
        if is_blank(value) {
            return FieldError::Valid;
        }
        let Some(number) = value.as_f64() else {
            return FieldError::message("Enter a valid number.");
        };

        if self.min.is_some_and(|min| number < min) || self.max.is_some_and(|max| number > max) {
            return FieldError::Message(self.message.clone());
        }
        FieldError::Valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_max_length_validator() {
        let v = MaxLengthValidator::new(5);
        assert!(v.validate(&json!("hello")).is_valid());
        assert!(v.validate(&json!("hi")).is_valid());
        assert!(!v.validate(&json!("hello world")).is_valid());
    }

    #[test]
    fn test_min_length_validator() {
        let v = MinLengthValidator::new(5);
        assert!(v.validate(&json!("hello")).is_valid());
        assert!(!v.validate(&json!("hi")).is_valid());
        // Blank values are the required-check's concern.
        assert!(v.validate(&json!("")).is_valid());
        assert!(v.validate(&Value::Null).is_valid());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate(&json!("user@example.com")).is_valid());
        assert!(v.validate(&json!("user.name@domain.co.uk")).is_valid());
        assert!(!v.validate(&json!("invalid")).is_valid());
        assert!(!v.validate(&json!("@example.com")).is_valid());
        assert!(v.validate(&Value::Null).is_valid());
    }

    #[test]
    fn test_url_validator() {
        let v = UrlValidator::new();
        assert!(v.validate(&json!("https://samfundet.no")).is_valid());
        assert!(v.validate(&json!("http://example.com/path")).is_valid());
        assert!(!v.validate(&json!("example.com")).is_valid());
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^\d{4}-\d{2}-\d{2}$", "Enter a valid date.").unwrap();
        assert!(v.validate(&json!("2024-01-15")).is_valid());
        assert_eq!(
            v.validate(&json!("not a date")),
            FieldError::message("Enter a valid date.")
        );
    }

    #[test]
    fn test_range_validator() {
        let v = RangeValidator::new(Some(0.0), Some(100.0));
        assert!(v.validate(&json!(50)).is_valid());
        assert!(v.validate(&json!(0)).is_valid());
        assert!(v.validate(&json!(100)).is_valid());
        assert!(!v.validate(&json!(-1)).is_valid());
        assert!(!v.validate(&json!(101)).is_valid());
        assert_eq!(
            v.validate(&json!("abc")),
            FieldError::message("Enter a valid number.")
        );
    }

    #[test]
    fn test_closure_validator() {
        let v = |value: &Value| {
            if value == &json!("OK") {
                FieldError::Valid
            } else {
                FieldError::message("must be OK")
            }
        };
        assert!(v.validate(&json!("OK")).is_valid());
        assert_eq!(v.validate(&json!("no")), FieldError::message("must be OK"));
    }

    #[test]
    fn test_bare_rejection_closure() {
        let v = |value: &Value| FieldError::from(value.as_i64().is_some_and(|n| n % 2 == 0));
        assert!(v.validate(&json!(4)).is_valid());
        assert_eq!(v.validate(&json!(3)), FieldError::Invalid);
    }
}
