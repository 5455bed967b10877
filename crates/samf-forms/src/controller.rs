//! The field controller: glue between one descriptor and the store.

use samf_form_core::{FieldError, FormAction, FormState, FormStore, ValidationMode, is_blank};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::registry::{RenderArgs, RendererRegistry};

/// Bridges one [`FieldDescriptor`] to the form store and decides when its
/// own error may be presented.
///
/// Controllers are created by the form container, one per field, and live
/// exactly as long as the store they registered with; they never outlive
/// or switch stores. All store access goes through dispatched actions.
pub struct FieldController {
    descriptor: FieldDescriptor,
    show_error: bool,
}

impl std::fmt::Debug for FieldController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldController")
            .field("key", &self.descriptor.key)
            .field("show_error", &self.show_error)
            .finish_non_exhaustive()
    }
}

impl FieldController {
    pub(crate) fn new(descriptor: FieldDescriptor) -> Self {
        Self {
            descriptor,
            show_error: false,
        }
    }

    /// Returns the field's key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.descriptor.key
    }

    /// Returns the descriptor.
    #[must_use]
    pub const fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    /// Computes the field's error for a candidate value.
    ///
    /// A required field with a blank value is invalid before the custom
    /// validator is consulted; otherwise the validator's verdict decides,
    /// and a field with neither concern is valid.
    #[must_use]
    pub fn compute_error(&self, value: &Value) -> FieldError {
        if self.descriptor.required && is_blank(value) {
            return FieldError::Invalid;
        }
        match &self.descriptor.validator {
            Some(validator) => validator.validate(value),
            None => FieldError::Valid,
        }
    }

    /// Registers the field with the store.
    ///
    /// Dispatches one synthetic change carrying the seeded value (`Null`
    /// when unset) so every registered field has a computed error before
    /// any interaction. Does not reveal the error.
    pub(crate) fn mount(&self, store: &mut FormStore) {
        let value = store
            .state()
            .value(self.key())
            .cloned()
            .unwrap_or(Value::Null);
        let error = self.compute_error(&value);
        store.dispatch(FormAction::changed(self.key(), value, error));
    }

    /// Routes raw user input through the renderer's coercion, then applies
    /// it as a value change.
    pub(crate) fn handle_input(
        &mut self,
        store: &mut FormStore,
        registry: &RendererRegistry,
        mode: ValidationMode,
        raw: &str,
    ) {
        let value = registry.resolve(&self.descriptor.field_type).coerce(raw);
        self.apply_value(store, mode, value);
    }

    /// Applies an already-typed value change: computes the new error,
    /// dispatches, and in on-change mode starts revealing errors for this
    /// field from now on.
    pub(crate) fn apply_value(&mut self, store: &mut FormStore, mode: ValidationMode, value: Value) {
        let error = self.compute_error(&value);
        store.dispatch(FormAction::changed(self.key(), value, error));
        if mode.reveals_on_change() {
            self.show_error = true;
        }
    }

    /// Returns whether the field's error should be presented.
    ///
    /// An error surfaces once this field changed in on-change mode, or
    /// once any submit attempt occurred, and only while the stored error
    /// is not `Valid`.
    #[must_use]
    pub fn error_visible(&self, state: &FormState) -> bool {
        (self.show_error || state.did_submit()) && !state.error(self.key()).is_valid()
    }

    /// Renders the field's control through the registry.
    #[must_use]
    pub fn render(&self, state: &FormState, registry: &RendererRegistry) -> String {
        let value = state.value(self.key()).unwrap_or(&Value::Null);
        let args = RenderArgs {
            key: &self.descriptor.key,
            value,
            error: state.error(self.key()),
            show_error: self.error_visible(state),
            label: &self.descriptor.label,
            required: self.descriptor.required,
            hidden: self.descriptor.hidden,
            options: &self.descriptor.options,
            default_option: self.descriptor.default_option.as_deref(),
            attrs: &self.descriptor.attrs,
        };
        registry.resolve(&self.descriptor.field_type).render(&args)
    }
}
