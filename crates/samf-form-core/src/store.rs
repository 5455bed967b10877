//! An owned form store.

use std::collections::HashMap;

use serde_json::Value;

use crate::reducer::{FormAction, reduce};
use crate::state::FormState;

/// Owns a [`FormState`] and funnels every mutation through the reducer.
///
/// A store belongs to exactly one form for that form's whole lifetime; a
/// remounted form gets a fresh store, and no field survives two different
/// store instances.
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    state: FormState,
}

impl FormStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with initial values.
    ///
    /// Fields absent from the map start unset. Seeding records values
    /// only; registration and errors arrive with each field's first
    /// dispatched change.
    #[must_use]
    pub fn with_initial(values: HashMap<String, Value>) -> Self {
        Self {
            state: FormState::with_values(values),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn state(&self) -> &FormState {
        &self.state
    }

    /// Applies an action through the reducer.
    pub fn dispatch(&mut self, action: FormAction) {
        self.state = reduce(&self.state, action);
    }
}
