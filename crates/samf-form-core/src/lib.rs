//! # samf-form-core
//!
//! Reducer-driven state for declarative forms.
//!
//! This crate provides:
//! - A pure, two-action reducer over an immutable form snapshot
//! - A three-kind field validity taxonomy (valid, invalid, invalid with message)
//! - Dotted-path value maps backed by `serde_json::Value`
//! - The validation disclosure vocabulary shared with the rendering layer
//!
//! ## Quick Start
//!
//! ```rust
//! use samf_form_core::{FieldError, FormAction, FormStore};
//! use serde_json::json;
//!
//! let mut store = FormStore::new();
//!
//! store.dispatch(FormAction::FieldChanged {
//!     key: "name".to_string(),
//!     value: Some(json!("Ada")),
//!     error: FieldError::Valid,
//! });
//!
//! assert_eq!(store.state().value("name"), Some(&json!("Ada")));
//! assert!(store.state().is_valid());
//! ```
//!
//! ## Ownership
//!
//! Each form owns exactly one [`FormStore`]; stores are handed out by
//! explicit construction, never through a shared module-level instance, so
//! concurrently mounted forms cannot cross-contaminate state. All mutation
//! funnels through [`FormStore::dispatch`], giving a single-writer
//! discipline over the snapshot.

pub mod error;
pub mod mode;
pub mod reducer;
pub mod state;
pub mod store;
pub mod value;

pub use error::FieldError;
pub use mode::ValidationMode;
pub use reducer::{FormAction, reduce};
pub use state::FormState;
pub use store::FormStore;
pub use value::{is_blank, nest};
