//! # samf-forms
//!
//! Declarative forms with reducer-driven state, a two-phase validation
//! disclosure protocol, and an extensible field renderer registry.
//!
//! This crate provides:
//! - Field descriptors with builder-style configuration and validators
//! - A form container that owns one store per form and gates submission
//!   on aggregate validity
//! - A renderer registry decoupling field behavior (value, validity,
//!   visibility) from field rendering, open for new field types
//! - Bootstrap 5 renderers for the built-in field types
//!
//! ## Quick Start
//!
//! ```rust
//! use samf_forms::{FieldDescriptor, SamfForm, SubmitOutcome};
//! use samf_form_core::{FieldError, ValidationMode};
//! use serde_json::{Value, json};
//!
//! let mut form = SamfForm::builder()
//!     .mode(ValidationMode::OnChange)
//!     .field(FieldDescriptor::new("name", "text").label("Name"))
//!     .field(FieldDescriptor::new("code", "text").validator(|value: &Value| {
//!         if value == &json!("OK") {
//!             FieldError::Valid
//!         } else {
//!             FieldError::message("must be OK")
//!         }
//!     }))
//!     .build();
//!
//! // Both fields are required and start empty, so the submit control is
//! // gated until they hold acceptable values.
//! assert!(!form.submit_enabled());
//!
//! form.set_input("name", "Ada").unwrap();
//! form.set_input("code", "OK").unwrap();
//!
//! assert!(form.submit_enabled());
//! assert_eq!(form.submit(), SubmitOutcome::Submitted);
//! ```
//!
//! ## Validation Disclosure
//!
//! Errors are always computed and stored, but only shown when the active
//! [`ValidationMode`] permits: `OnSubmit` withholds them until a submit
//! attempt, `OnChange` reveals each field's error once it has been edited.
//! A user is never shown a "required" error before they have had a chance
//! to interact with, or submit, the form.
//!
//! ## Extending the Registry
//!
//! New field types plug in without touching the store or the field layer:
//!
//! ```rust
//! use std::sync::Arc;
//! use samf_forms::{FieldRenderer, RenderArgs, RendererRegistry};
//!
//! struct StarRating;
//!
//! impl FieldRenderer for StarRating {
//!     fn render(&self, args: &RenderArgs<'_>) -> String {
//!         format!(r#"<div class="star-rating" data-key="{}"></div>"#, args.key)
//!     }
//! }
//!
//! let registry = RendererRegistry::default().with("stars", Arc::new(StarRating));
//! assert!(registry.contains("stars"));
//! ```

pub mod container;
pub mod controller;
pub mod descriptor;
pub mod error;
pub mod fields;
pub mod registry;
pub mod validation;
pub mod widgets;

pub use container::{SamfForm, SamfFormBuilder, SubmitOutcome};
pub use controller::FieldController;
pub use descriptor::{Choice, FieldDescriptor};
pub use error::{FormError, Result};
pub use registry::{FieldRenderer, NoopRenderer, RenderArgs, RendererRegistry};
pub use validation::Validator;

// The state layer, re-exported for callers that drive the store directly.
pub use samf_form_core::{FieldError, FormAction, FormState, FormStore, ValidationMode};
