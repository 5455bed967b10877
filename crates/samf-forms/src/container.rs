//! The form container: orchestration, submit gating and rendering.

use std::collections::HashMap;
use std::sync::Arc;

use ironhtml::html;
use ironhtml_elements::Div;
use samf_form_core::{FieldError, FormAction, FormState, FormStore, ValidationMode};
use serde_json::Value;
use tracing::debug;

use crate::controller::FieldController;
use crate::descriptor::FieldDescriptor;
use crate::error::{FormError, Result};
use crate::registry::RendererRegistry;
use crate::widgets::html_escape;

/// Callback invoked with the value map on an accepted submit.
pub type SubmitHandler = Box<dyn FnMut(&HashMap<String, Value>)>;
/// Callback invoked whenever the value map changes.
pub type ChangeHandler = Box<dyn FnMut(&HashMap<String, Value>)>;
/// Callback invoked whenever aggregate validity flips.
pub type ValidityHandler = Box<dyn FnMut(bool)>;

/// Outcome of a submit trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Gating passed and the submit handler ran.
    Submitted,
    /// Gating rejected the attempt; field errors are now revealed.
    Rejected,
}

/// A declarative form.
///
/// Owns its store (one per form instance, discarded with it), the renderer
/// registry, the field controllers in declaration order, and the active
/// validation mode. Fields stay mounted for the form's whole lifetime,
/// hidden ones included, so aggregate validity always covers every field.
pub struct SamfForm {
    store: FormStore,
    mode: ValidationMode,
    registry: Arc<RendererRegistry>,
    controllers: Vec<FieldController>,
    on_submit: Option<SubmitHandler>,
    on_change: Option<ChangeHandler>,
    on_validity_changed: Option<ValidityHandler>,
    last_validity: Option<bool>,
    debug: bool,
}

impl std::fmt::Debug for SamfForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamfForm")
            .field("mode", &self.mode)
            .field("fields", &self.controllers.iter().map(FieldController::key).collect::<Vec<_>>())
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl SamfForm {
    /// Starts building a form.
    #[must_use]
    pub fn builder() -> SamfFormBuilder {
        SamfFormBuilder::default()
    }

    /// Returns the active validation mode.
    #[must_use]
    pub const fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Returns the current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        self.store.state()
    }

    /// Aggregate validity over every mounted field.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.store.state().is_valid()
    }

    /// Returns the flat value map.
    #[must_use]
    pub fn values(&self) -> &HashMap<String, Value> {
        self.store.state().values()
    }

    /// Returns the values as a nested JSON object, expanding dotted keys.
    #[must_use]
    pub fn nested_values(&self) -> Value {
        self.store.state().nested_values()
    }

    /// Returns the current value for a key.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.store.state().value(key)
    }

    fn field_index(&self, key: &str) -> Result<usize> {
        self.controllers
            .iter()
            .position(|controller| controller.key() == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))
    }

    /// Applies raw user input to a field, through its type's coercion.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when no field has the key.
    pub fn set_input(&mut self, key: &str, raw: &str) -> Result<()> {
        let index = self.field_index(key)?;
        let registry = Arc::clone(&self.registry);
        let mode = self.mode;
        self.controllers[index].handle_input(&mut self.store, &registry, mode, raw);
        self.after_change();
        Ok(())
    }

    /// Applies an already-typed value to a field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when no field has the key.
    pub fn set_value(&mut self, key: &str, value: Value) -> Result<()> {
        let index = self.field_index(key)?;
        let mode = self.mode;
        self.controllers[index].apply_value(&mut self.store, mode, value);
        self.after_change();
        Ok(())
    }

    /// Absorbs a submitted form-data map through each field's input
    /// pipeline. Keys without a matching field are ignored.
    pub fn apply_data(&mut self, data: &HashMap<String, String>) {
        let registry = Arc::clone(&self.registry);
        let mode = self.mode;
        let mut touched = false;
        for controller in &mut self.controllers {
            if let Some(raw) = data.get(controller.key()) {
                controller.handle_input(&mut self.store, &registry, mode, raw);
                touched = true;
            }
        }
        if touched {
            self.after_change();
        }
    }

    /// Returns whether the submit control should be enabled.
    ///
    /// On-change mode gates pre-emptively: the control is disabled while
    /// the form is invalid. On-submit mode keeps it enabled and relies on
    /// [`submit`](Self::submit)'s reject-and-reveal behavior.
    #[must_use]
    pub fn submit_enabled(&self) -> bool {
        match self.mode {
            ValidationMode::OnChange => self.store.state().is_valid(),
            ValidationMode::OnSubmit => true,
        }
    }

    /// Triggers a submit.
    ///
    /// A valid form invokes the submit handler with the current values and
    /// reports [`SubmitOutcome::Submitted`]. An invalid form records the
    /// attempt (revealing every field's error) and reports
    /// [`SubmitOutcome::Rejected`] without invoking the handler.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.store.state().is_valid() {
            debug!("Form submit accepted");
            if let Some(handler) = self.on_submit.as_mut() {
                handler(self.store.state().values());
            }
            SubmitOutcome::Submitted
        } else {
            debug!(mode = ?self.mode, "Form submit rejected, revealing field errors");
            self.store.dispatch(FormAction::SubmitAttempted);
            SubmitOutcome::Rejected
        }
    }

    /// Merges an out-of-band error map, typically backend validation from
    /// a failed remote submission, into the store as error-only updates.
    ///
    /// Values are left untouched, and the errors surface through the same
    /// display pipeline as client-side validation; like a submit attempt,
    /// injection reveals errors immediately.
    pub fn inject_errors(&mut self, errors: &HashMap<String, String>) {
        debug!(count = errors.len(), "Injecting external field errors");
        let mut entries: Vec<(&str, &str)> = errors
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
            .collect();
        entries.sort_unstable();
        for (key, message) in entries {
            self.store
                .dispatch(FormAction::error_only(key, FieldError::message(message)));
        }
        self.store.dispatch(FormAction::SubmitAttempted);
        self.notify_validity();
    }

    /// Returns whether a field's error is currently presented.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] when no field has the key.
    pub fn error_visible(&self, key: &str) -> Result<bool> {
        let index = self.field_index(key)?;
        Ok(self.controllers[index].error_visible(self.store.state()))
    }

    /// Returns the live snapshot dump: values, wire-shaped errors, the
    /// registered field set and the submit flag.
    #[must_use]
    pub fn debug_dump(&self) -> Value {
        self.store.state().to_json()
    }

    /// Renders the whole form as Bootstrap 5 HTML.
    ///
    /// Every field renders through the registry, hidden fields inside an
    /// invisible wrapper; the submit button carries the gating-derived
    /// `disabled` attribute; with debug enabled, the snapshot dump renders
    /// at the end of the form.
    #[must_use]
    pub fn render(&self, action: &str, method: &str) -> String {
        let mut form = html! {
            form.action(#action).method(#method).class("samf-form")
        };

        for controller in &self.controllers {
            let field_html = self.render_field(controller);
            form = form.child::<Div, _>(|d| d.raw(&field_html));
        }

        let enabled = self.submit_enabled();
        form = form.child::<Div, _>(|d| {
            let mut button = html! {
                button.type_("submit").class("btn btn-primary") { "Submit" }
            };
            if !enabled {
                button = button.attr("disabled", "disabled");
            }
            d.raw(button.render())
        });

        if self.debug {
            let dump =
                serde_json::to_string_pretty(&self.debug_dump()).unwrap_or_default();
            form = form.child::<Div, _>(|d| {
                d.class("samf-form-debug")
                    .raw(&format!("<pre>{}</pre>", html_escape(&dump)))
            });
        }

        form.render()
    }

    fn render_field(&self, controller: &FieldController) -> String {
        let descriptor = controller.descriptor();
        let control = controller.render(self.store.state(), &self.registry);

        if descriptor.field_type == "hidden" {
            return control;
        }

        let id = format!("id_{}", descriptor.key.replace('.', "_"));
        let required_marker = if descriptor.required { " *" } else { "" };
        let label_text = format!("{}{}", descriptor.label, required_marker);
        let wrapper_class = if descriptor.hidden { "mb-3 d-none" } else { "mb-3" };
        let help_text = descriptor.help_text.clone();

        let label_el = html! {
            label.for_(#id).class("form-label") { #label_text }
        };

        html! { div.class(#wrapper_class) }
            .raw(label_el.render())
            .raw(&control)
            .when(help_text.is_some(), |d| {
                d.child::<Div, _>(|h| {
                    h.class("form-text")
                        .text(help_text.as_deref().unwrap_or(""))
                })
            })
            .render()
    }

    fn after_change(&mut self) {
        if let Some(handler) = self.on_change.as_mut() {
            handler(self.store.state().values());
        }
        self.notify_validity();
    }

    fn notify_validity(&mut self) {
        let valid = self.store.state().is_valid();
        if self.last_validity != Some(valid) {
            self.last_validity = Some(valid);
            if let Some(handler) = self.on_validity_changed.as_mut() {
                handler(valid);
            }
        }
    }
}

/// Builder for [`SamfForm`].
///
/// Building mounts every field: each one dispatches its synthetic first
/// change so the store holds a consistent error for every field before any
/// interaction, and the validity notification is primed with the initial
/// aggregate.
#[derive(Default)]
pub struct SamfFormBuilder {
    mode: ValidationMode,
    registry: Arc<RendererRegistry>,
    fields: Vec<FieldDescriptor>,
    initial: HashMap<String, Value>,
    on_submit: Option<SubmitHandler>,
    on_change: Option<ChangeHandler>,
    on_validity_changed: Option<ValidityHandler>,
    debug: bool,
}

impl std::fmt::Debug for SamfFormBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SamfFormBuilder")
            .field("mode", &self.mode)
            .field("fields", &self.fields)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}

impl SamfFormBuilder {
    /// Creates a builder with the default mode and registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the validation disclosure mode.
    #[must_use]
    pub fn mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Replaces the renderer registry.
    #[must_use]
    pub fn registry(mut self, registry: Arc<RendererRegistry>) -> Self {
        self.registry = registry;
        self
    }

    /// Adds a field.
    #[must_use]
    pub fn field(mut self, descriptor: FieldDescriptor) -> Self {
        self.fields.push(descriptor);
        self
    }

    /// Seeds one initial value.
    #[must_use]
    pub fn initial(mut self, key: impl Into<String>, value: Value) -> Self {
        self.initial.insert(key.into(), value);
        self
    }

    /// Seeds initial values from a map.
    #[must_use]
    pub fn initial_values(mut self, values: HashMap<String, Value>) -> Self {
        self.initial.extend(values);
        self
    }

    /// Seeds initial values from a JSON object keyed like the fields.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidInitial`] when the value is not an
    /// object.
    pub fn initial_json(mut self, values: Value) -> Result<Self> {
        match values {
            Value::Object(map) => {
                self.initial.extend(map);
                Ok(self)
            }
            other => Err(FormError::InvalidInitial(other.to_string())),
        }
    }

    /// Sets the submit handler.
    #[must_use]
    pub fn on_submit(mut self, handler: impl FnMut(&HashMap<String, Value>) + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    /// Sets the change notification handler.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&HashMap<String, Value>) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Sets the validity notification handler.
    #[must_use]
    pub fn on_validity_changed(mut self, handler: impl FnMut(bool) + 'static) -> Self {
        self.on_validity_changed = Some(Box::new(handler));
        self
    }

    /// Enables the live state dump in [`SamfForm::render`].
    #[must_use]
    pub fn debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// Builds the form and mounts every field.
    #[must_use]
    pub fn build(self) -> SamfForm {
        let mut store = FormStore::with_initial(self.initial);
        let controllers: Vec<FieldController> =
            self.fields.into_iter().map(FieldController::new).collect();
        for controller in &controllers {
            controller.mount(&mut store);
        }

        let mut form = SamfForm {
            store,
            mode: self.mode,
            registry: self.registry,
            controllers,
            on_submit: self.on_submit,
            on_change: self.on_change,
            on_validity_changed: self.on_validity_changed,
            last_validity: None,
            debug: self.debug,
        };
        form.notify_validity();
        form
    }
}
