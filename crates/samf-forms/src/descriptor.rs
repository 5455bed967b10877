//! Field descriptors: the static definition of one form field.

use serde::Serialize;

use crate::validation::Validator;
use crate::widgets::WidgetAttrs;

/// One selectable option for a choice-style field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    /// Submitted value.
    pub value: String,
    /// User-facing label.
    pub label: String,
}

impl Choice {
    /// Creates a new choice.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Static definition of one form field.
///
/// The key is a dotted path into the form's value map; the type tag picks
/// the renderer (and its input coercion) out of the registry. Fields are
/// required unless explicitly made optional, and a hidden field still
/// registers and validates like any other.
pub struct FieldDescriptor {
    /// Unique dotted key into the form's value map.
    pub key: String,
    /// Renderer type tag.
    pub field_type: String,
    /// Whether a blank value is an error.
    pub required: bool,
    /// Custom validator, evaluated after the required check.
    pub validator: Option<Box<dyn Validator>>,
    /// Whether the field renders invisibly.
    pub hidden: bool,
    /// Field label.
    pub label: String,
    /// Help text rendered under the control.
    pub help_text: Option<String>,
    /// Options for choice-style renderers.
    pub options: Vec<Choice>,
    /// Option selected when the value is unset.
    pub default_option: Option<String>,
    /// Extra HTML attributes passed through to the renderer.
    pub attrs: WidgetAttrs,
}

impl std::fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("key", &self.key)
            .field("field_type", &self.field_type)
            .field("required", &self.required)
            .field("hidden", &self.hidden)
            .field("label", &self.label)
            .field("help_text", &self.help_text)
            .field("options", &self.options)
            .field("default_option", &self.default_option)
            .finish_non_exhaustive()
    }
}

impl FieldDescriptor {
    /// Creates a new descriptor for the given key and type tag.
    ///
    /// The label defaults to the key; use [`label`](Self::label) to set a
    /// user-facing one.
    pub fn new(key: impl Into<String>, field_type: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            label: key.clone(),
            key,
            field_type: field_type.into(),
            required: true,
            validator: None,
            hidden: false,
            help_text: None,
            options: Vec::new(),
            default_option: None,
            attrs: WidgetAttrs::new(),
        }
    }

    /// Makes the field optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Makes the field render invisibly; it still registers and validates.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Sets the custom validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Sets the options for choice-style renderers.
    #[must_use]
    pub fn options(mut self, options: Vec<Choice>) -> Self {
        self.options = options;
        self
    }

    /// Sets the option selected while the value is unset.
    #[must_use]
    pub fn default_option(mut self, value: impl Into<String>) -> Self {
        self.default_option = Some(value.into());
        self
    }

    /// Sets an extra HTML attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}
