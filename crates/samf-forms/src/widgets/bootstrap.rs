//! Bootstrap 5 renderers for the built-in field types.

use serde_json::Value;

use super::{WidgetAttrs, html_escape, value_text};
use crate::registry::{FieldRenderer, RenderArgs};

fn control_id(key: &str) -> String {
    format!("id_{}", key.replace('.', "_"))
}

fn control_class(base: &str, args: &RenderArgs<'_>) -> String {
    let mut class = base.to_string();
    if let Some(extra) = args.attrs.get("class") {
        class = format!("{class} {extra}");
    }
    if args.show_error && !args.error.is_valid() {
        class.push_str(" is-invalid");
    }
    class
}

/// Error feedback rendered after the control. `Invalid` carries no text;
/// the `is-invalid` class on the control is its entire presentation.
fn feedback(args: &RenderArgs<'_>) -> String {
    if !args.show_error {
        return String::new();
    }
    args.error.text().map_or_else(String::new, |message| {
        format!(
            r#"<div class="invalid-feedback">{}</div>"#,
            html_escape(message)
        )
    })
}

fn passthrough_attrs(attrs: &WidgetAttrs) -> String {
    let mut entries: Vec<(&str, &str)> = attrs
        .attrs
        .iter()
        .filter(|(key, _)| key.as_str() != "class")
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();
    entries.sort_unstable();
    entries
        .iter()
        .map(|(key, value)| format!(r#" {key}="{}""#, html_escape(value)))
        .collect()
}

fn value_attr(value: &Value) -> String {
    value_text(value)
        .map(|text| format!(r#" value="{}""#, html_escape(&text)))
        .unwrap_or_default()
}

/// Bootstrap 5 text input renderer.
#[derive(Debug, Clone)]
pub struct TextInputRenderer {
    /// The HTML input type (text, email, password).
    pub input_type: String,
}

impl Default for TextInputRenderer {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
        }
    }
}

impl TextInputRenderer {
    /// Creates a text input renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an email input renderer.
    #[must_use]
    pub fn email() -> Self {
        Self {
            input_type: "email".to_string(),
        }
    }

    /// Creates a password input renderer.
    #[must_use]
    pub fn password() -> Self {
        Self {
            input_type: "password".to_string(),
        }
    }
}

impl FieldRenderer for TextInputRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        let required_attr = if args.required { " required" } else { "" };
        format!(
            r#"<input type="{}" class="{}" id="{}" name="{}"{}{required_attr}{}>{}"#,
            self.input_type,
            control_class("form-control", args),
            control_id(args.key),
            args.key,
            value_attr(args.value),
            passthrough_attrs(args.attrs),
            feedback(args)
        )
    }
}

/// Bootstrap 5 number input renderer.
///
/// Coerces input to an integer when it parses as one, a float otherwise;
/// input that parses as neither coerces to unset rather than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInputRenderer;

impl NumberInputRenderer {
    /// Creates a number input renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FieldRenderer for NumberInputRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        let required_attr = if args.required { " required" } else { "" };
        format!(
            r#"<input type="number" class="{}" id="{}" name="{}"{}{required_attr}{}>{}"#,
            control_class("form-control", args),
            control_id(args.key),
            args.key,
            value_attr(args.value),
            passthrough_attrs(args.attrs),
            feedback(args)
        )
    }

    fn coerce(&self, raw: &str) -> Value {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Value::Null;
        }
        if let Ok(integer) = trimmed.parse::<i64>() {
            return Value::from(integer);
        }
        match trimmed.parse::<f64>() {
            Ok(float) => serde_json::Number::from_f64(float).map_or(Value::Null, Value::Number),
            Err(_) => Value::Null,
        }
    }
}

/// Bootstrap 5 textarea renderer.
#[derive(Debug, Clone)]
pub struct TextareaRenderer {
    /// Number of rows.
    pub rows: usize,
}

impl Default for TextareaRenderer {
    fn default() -> Self {
        Self { rows: 4 }
    }
}

impl TextareaRenderer {
    /// Creates a textarea renderer with the given number of rows.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl FieldRenderer for TextareaRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        let content = value_text(args.value)
            .map(|text| html_escape(&text))
            .unwrap_or_default();
        let required_attr = if args.required { " required" } else { "" };
        format!(
            r#"<textarea class="{}" id="{}" name="{}" rows="{}"{required_attr}{}>{content}</textarea>{}"#,
            control_class("form-control", args),
            control_id(args.key),
            args.key,
            self.rows,
            passthrough_attrs(args.attrs),
            feedback(args)
        )
    }
}

/// Bootstrap 5 select renderer.
///
/// Selects the option matching the current value, falling back to the
/// field's default option while the value is unset.
#[derive(Debug, Clone)]
pub struct SelectRenderer {
    /// Whether to include an empty option.
    pub include_blank: bool,
    /// Label for the blank option.
    pub blank_label: String,
}

impl Default for SelectRenderer {
    fn default() -> Self {
        Self {
            include_blank: true,
            blank_label: "---------".to_string(),
        }
    }
}

impl SelectRenderer {
    /// Creates a select renderer without the blank option.
    #[must_use]
    pub fn no_blank() -> Self {
        Self {
            include_blank: false,
            ..Self::default()
        }
    }

    /// Sets the blank label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank_label = label.into();
        self
    }
}

impl FieldRenderer for SelectRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        let selected_value =
            value_text(args.value).or_else(|| args.default_option.map(String::from));

        let mut options = String::new();
        if self.include_blank {
            options.push_str(&format!(
                r#"<option value="">{}</option>"#,
                html_escape(&self.blank_label)
            ));
        }
        for choice in args.options {
            let selected = selected_value.as_deref() == Some(choice.value.as_str());
            let selected_attr = if selected { " selected" } else { "" };
            options.push_str(&format!(
                r#"<option value="{}"{selected_attr}>{}</option>"#,
                html_escape(&choice.value),
                html_escape(&choice.label)
            ));
        }

        format!(
            r#"<select class="{}" id="{}" name="{}"{}>{options}</select>{}"#,
            control_class("form-select", args),
            control_id(args.key),
            args.key,
            passthrough_attrs(args.attrs),
            feedback(args)
        )
    }
}

/// Bootstrap 5 checkbox renderer.
///
/// Coerces the HTML truthy forms (`"true"`, `"on"`, `"1"`) to `true` and
/// everything else to `false`, so an unchecked box is a provided value,
/// not a missing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckboxRenderer {
    /// Whether to use switch styling.
    pub is_switch: bool,
}

impl CheckboxRenderer {
    /// Creates a checkbox renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a switch-style checkbox renderer.
    #[must_use]
    pub fn switch() -> Self {
        Self { is_switch: true }
    }
}

impl FieldRenderer for CheckboxRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        let wrapper_class = if self.is_switch {
            "form-check form-switch"
        } else {
            "form-check"
        };
        let checked_attr = if args.value.as_bool() == Some(true) {
            " checked"
        } else {
            ""
        };
        format!(
            r#"<div class="{wrapper_class}"><input class="{}" type="checkbox" id="{}" name="{}" value="true"{checked_attr}{}>{}</div>"#,
            control_class("form-check-input", args),
            control_id(args.key),
            args.key,
            passthrough_attrs(args.attrs),
            feedback(args)
        )
    }

    fn coerce(&self, raw: &str) -> Value {
        Value::Bool(matches!(raw, "true" | "on" | "1"))
    }
}

/// Hidden input renderer; no error presentation, the control is invisible.
#[derive(Debug, Clone, Copy, Default)]
pub struct HiddenInputRenderer;

impl FieldRenderer for HiddenInputRenderer {
    fn render(&self, args: &RenderArgs<'_>) -> String {
        format!(
            r#"<input type="hidden" id="{}" name="{}"{}{}>"#,
            control_id(args.key),
            args.key,
            value_attr(args.value),
            passthrough_attrs(args.attrs)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Choice;
    use samf_form_core::FieldError;
    use serde_json::json;

    struct Fixture {
        value: Value,
        error: FieldError,
        attrs: WidgetAttrs,
        options: Vec<Choice>,
    }

    impl Fixture {
        fn new(value: Value) -> Self {
            Self {
                value,
                error: FieldError::Valid,
                attrs: WidgetAttrs::new(),
                options: Vec::new(),
            }
        }

        fn args(&self) -> RenderArgs<'_> {
            RenderArgs {
                key: "field",
                value: &self.value,
                error: &self.error,
                show_error: false,
                label: "Field",
                required: false,
                hidden: false,
                options: &self.options,
                default_option: None,
                attrs: &self.attrs,
            }
        }
    }

    #[test]
    fn test_text_input_renders_value() {
        let fixture = Fixture::new(json!("Ada"));
        let html = TextInputRenderer::new().render(&fixture.args());
        assert!(html.contains(r#"type="text""#));
        assert!(html.contains(r#"class="form-control""#));
        assert!(html.contains(r#"name="field""#));
        assert!(html.contains(r#"value="Ada""#));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_error_presentation_gated_on_show_error() {
        let mut fixture = Fixture::new(json!(""));
        fixture.error = FieldError::message("This field is required.");

        let hidden = TextInputRenderer::new().render(&fixture.args());
        assert!(!hidden.contains("is-invalid"));

        let mut args = fixture.args();
        args.show_error = true;
        let shown = TextInputRenderer::new().render(&args);
        assert!(shown.contains("is-invalid"));
        assert!(shown.contains("This field is required."));
    }

    #[test]
    fn test_bare_invalid_has_no_message() {
        let mut fixture = Fixture::new(json!(""));
        fixture.error = FieldError::Invalid;
        let mut args = fixture.args();
        args.show_error = true;

        let html = TextInputRenderer::new().render(&args);
        assert!(html.contains("is-invalid"));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_number_coercion() {
        let renderer = NumberInputRenderer::new();
        assert_eq!(renderer.coerce("42"), json!(42));
        assert_eq!(renderer.coerce("2.5"), json!(2.5));
        assert_eq!(renderer.coerce("-7"), json!(-7));
        assert_eq!(renderer.coerce(""), Value::Null);
        assert_eq!(renderer.coerce("abc"), Value::Null);
    }

    #[test]
    fn test_textarea_escapes_content() {
        let fixture = Fixture::new(json!("<b>bold</b>"));
        let html = TextareaRenderer::new(6).render(&fixture.args());
        assert!(html.contains(r#"rows="6""#));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }

    #[test]
    fn test_select_marks_current_value() {
        let mut fixture = Fixture::new(json!("mg"));
        fixture.options = vec![Choice::new("kss", "KSS"), Choice::new("mg", "MG")];
        let html = SelectRenderer::default().render(&fixture.args());
        assert!(html.contains(r#"class="form-select""#));
        assert!(html.contains(r#"value="mg" selected"#));
        assert!(!html.contains(r#"value="kss" selected"#));
    }

    #[test]
    fn test_select_falls_back_to_default_option() {
        let mut fixture = Fixture::new(Value::Null);
        fixture.options = vec![Choice::new("kss", "KSS"), Choice::new("mg", "MG")];
        let mut args = fixture.args();
        args.default_option = Some("kss");
        let html = SelectRenderer::default().render(&args);
        assert!(html.contains(r#"value="kss" selected"#));
    }

    #[test]
    fn test_checkbox_checked_and_coercion() {
        let fixture = Fixture::new(json!(true));
        let html = CheckboxRenderer::new().render(&fixture.args());
        assert!(html.contains("form-check"));
        assert!(html.contains(" checked"));

        let renderer = CheckboxRenderer::new();
        assert_eq!(renderer.coerce("on"), json!(true));
        assert_eq!(renderer.coerce("1"), json!(true));
        assert_eq!(renderer.coerce(""), json!(false));
        assert_eq!(renderer.coerce("off"), json!(false));
    }

    #[test]
    fn test_switch_style() {
        let fixture = Fixture::new(Value::Null);
        let html = CheckboxRenderer::switch().render(&fixture.args());
        assert!(html.contains("form-switch"));
    }

    #[test]
    fn test_hidden_input() {
        let fixture = Fixture::new(json!("tok-123"));
        let html = HiddenInputRenderer.render(&fixture.args());
        assert!(html.contains(r#"type="hidden""#));
        assert!(html.contains(r#"value="tok-123""#));
        assert!(!html.contains("invalid-feedback"));
    }

    #[test]
    fn test_dotted_key_id() {
        let fixture = Fixture::new(Value::Null);
        let mut args = fixture.args();
        args.key = "tickets.vip";
        let html = NumberInputRenderer::new().render(&args);
        assert!(html.contains(r#"id="id_tickets_vip""#));
        assert!(html.contains(r#"name="tickets.vip""#));
    }
}
