//! The field renderer registry.

use std::collections::HashMap;
use std::sync::Arc;

use samf_form_core::FieldError;
use serde_json::Value;
use tracing::warn;

use crate::descriptor::Choice;
use crate::widgets::{
    CheckboxRenderer, HiddenInputRenderer, NumberInputRenderer, SelectRenderer, TextInputRenderer,
    TextareaRenderer, WidgetAttrs,
};

/// Normalized argument bundle handed to a renderer.
#[derive(Debug, Clone)]
pub struct RenderArgs<'a> {
    /// The field's dotted key, used for name and id attributes.
    pub key: &'a str,
    /// Current value, `Null` when unset.
    pub value: &'a Value,
    /// Current error.
    pub error: &'a FieldError,
    /// Whether the error may be presented right now.
    pub show_error: bool,
    /// Field label.
    pub label: &'a str,
    /// Whether a required marker applies.
    pub required: bool,
    /// Whether the control renders invisibly.
    pub hidden: bool,
    /// Options for choice-style renderers.
    pub options: &'a [Choice],
    /// Option selected while the value is unset.
    pub default_option: Option<&'a str>,
    /// Extra HTML attributes.
    pub attrs: &'a WidgetAttrs,
}

/// Trait for field renderers.
///
/// A renderer owns both the looks of a field type and the coercion of raw
/// user input into a typed value. The error in the args is opaque data:
/// `Valid` renders no error presentation, `Message` renders its text, and
/// `Invalid` renders generic invalid styling with no text — and nothing
/// renders unless `show_error` is set.
pub trait FieldRenderer: Send + Sync {
    /// Renders the control (and its error presentation) as HTML.
    fn render(&self, args: &RenderArgs<'_>) -> String;

    /// Coerces raw user input into a typed value.
    ///
    /// The default keeps the input as a string. Implementations must not
    /// fail: input that does not parse coerces to `Null` (unset).
    fn coerce(&self, raw: &str) -> Value {
        Value::String(raw.to_string())
    }
}

/// Renderer used when a type tag has no registration.
///
/// Renders nothing and keeps input as-is, so one misconfigured field
/// cannot take down the whole form. The field still registers and
/// validates; only its control goes missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl FieldRenderer for NoopRenderer {
    fn render(&self, _args: &RenderArgs<'_>) -> String {
        String::new()
    }
}

/// Registry mapping field type tags to renderers.
///
/// The tag set is open for extension: registering a new tag (or replacing
/// a built-in, last registration wins) requires no change to the store or
/// the field layer.
#[derive(Clone)]
pub struct RendererRegistry {
    renderers: HashMap<String, Arc<dyn FieldRenderer>>,
    fallback: Arc<dyn FieldRenderer>,
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("RendererRegistry")
            .field("tags", &tags)
            .finish_non_exhaustive()
    }
}

impl RendererRegistry {
    /// Creates an empty registry with the no-op fallback.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
            fallback: Arc::new(NoopRenderer),
        }
    }

    /// Registers a renderer for a type tag, replacing any previous one.
    pub fn register(&mut self, tag: impl Into<String>, renderer: Arc<dyn FieldRenderer>) {
        self.renderers.insert(tag.into(), renderer);
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, tag: impl Into<String>, renderer: Arc<dyn FieldRenderer>) -> Self {
        self.register(tag, renderer);
        self
    }

    /// Returns whether a tag has a registration.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    /// Resolves a type tag to its renderer.
    ///
    /// Lookup never fails: an unknown tag logs a warning and resolves to
    /// the no-op fallback.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> &dyn FieldRenderer {
        self.renderers.get(tag).map_or_else(
            || {
                warn!(tag = %tag, "No renderer registered for field type, using no-op fallback");
                self.fallback.as_ref()
            },
            Arc::as_ref,
        )
    }
}

impl Default for RendererRegistry {
    /// Registry with every built-in field type registered.
    fn default() -> Self {
        Self::empty()
            .with("text", Arc::new(TextInputRenderer::new()))
            .with("email", Arc::new(TextInputRenderer::email()))
            .with("password", Arc::new(TextInputRenderer::password()))
            .with("number", Arc::new(NumberInputRenderer::new()))
            .with("textarea", Arc::new(TextareaRenderer::default()))
            .with("options", Arc::new(SelectRenderer::default()))
            .with("checkbox", Arc::new(CheckboxRenderer::new()))
            .with("hidden", Arc::new(HiddenInputRenderer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args<'a>(attrs: &'a WidgetAttrs, value: &'a Value) -> RenderArgs<'a> {
        RenderArgs {
            key: "field",
            value,
            error: &FieldError::Valid,
            show_error: false,
            label: "Field",
            required: false,
            hidden: false,
            options: &[],
            default_option: None,
            attrs,
        }
    }

    #[test]
    fn test_default_registry_has_builtins() {
        let registry = RendererRegistry::default();
        for tag in [
            "text", "email", "password", "number", "textarea", "options", "checkbox", "hidden",
        ] {
            assert!(registry.contains(tag), "missing builtin: {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_resolves_to_noop() {
        let registry = RendererRegistry::default();
        let attrs = WidgetAttrs::new();
        let value = json!("anything");
        let rendered = registry.resolve("does-not-exist").render(&args(&attrs, &value));
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_unknown_tag_keeps_identity_coercion() {
        let registry = RendererRegistry::empty();
        assert_eq!(registry.resolve("nope").coerce("5"), json!("5"));
    }

    #[test]
    fn test_registration_wins_over_builtin() {
        struct Fixed;
        impl FieldRenderer for Fixed {
            fn render(&self, _args: &RenderArgs<'_>) -> String {
                "<span>fixed</span>".to_string()
            }
        }

        let registry = RendererRegistry::default().with("text", Arc::new(Fixed));
        let attrs = WidgetAttrs::new();
        let value = Value::Null;
        assert_eq!(
            registry.resolve("text").render(&args(&attrs, &value)),
            "<span>fixed</span>"
        );
    }
}
