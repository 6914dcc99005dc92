//! Form runtime (mutable) state.
//!
//! Holds only the *current editing state* of a form:
//!   * Captured values (`values`)
//!   * Validation errors of the last submit attempt (`errors`)
//!
//! The engine owns one `FormState` per form instance; keep this module free of
//! UI concerns so it can be inspected in isolation.

use crate::errors::{ErrorMap, FormError};
use crate::value::{FieldValue, ValueMap};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormState {
    pub values: ValueMap,
    pub errors: ErrorMap,
}

impl FormState {
    pub fn new(values: ValueMap) -> Self {
        Self {
            values,
            errors: ErrorMap::new(),
        }
    }

    /// Replace the value of an existing field.
    ///
    /// Keys are fixed at construction; an unknown key is rejected and the map
    /// is left as it was.
    pub fn set_value(&mut self, key: &str, value: FieldValue) -> Result<(), FormError> {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FormError::UnknownField(key.to_string())),
        }
    }

    /// Swap in the result of a validation pass.
    pub fn replace_errors(&mut self, errors: ErrorMap) {
        self.errors = errors;
    }
}
