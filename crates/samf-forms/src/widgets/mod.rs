//! Built-in field renderers and shared widget plumbing.

mod bootstrap;

pub use bootstrap::{
    CheckboxRenderer, HiddenInputRenderer, NumberInputRenderer, SelectRenderer, TextInputRenderer,
    TextareaRenderer,
};

use std::collections::HashMap;

use serde_json::Value;

/// Attributes that can be applied to a rendered control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    /// HTML attributes.
    pub attrs: HashMap<String, String>,
}

impl WidgetAttrs {
    /// Creates new empty widget attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders the attributes as an HTML attribute string, sorted by key
    /// and preceded by a space when non-empty.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut entries: Vec<(&str, &str)> = self
            .attrs
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        entries.sort_unstable();
        entries
            .iter()
            .map(|(key, value)| format!(r#" {key}="{}""#, html_escape(value)))
            .collect()
    }
}

/// Escapes HTML special characters.
#[must_use]
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Renders a value as input text: strings verbatim, numbers and booleans
/// through their display form, everything else (including unset) as none.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
