//! Change-event contract between input widgets and the engine.
//!
//! Every widget reports an edit as `{ target: { name, value } }` carrying the
//! complete new value of the field. Multi-value widgets compute the new list
//! themselves (see [`toggle_option`]); the engine only ever replaces values.

use serde::{Deserialize, Serialize};

use crate::value::FieldValue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeTarget {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub target: ChangeTarget,
}

impl ChangeEvent {
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            target: ChangeTarget {
                name: name.into(),
                value: value.into(),
            },
        }
    }
}

/// New selection of a checkbox group after `option` was (un)checked.
///
/// Checking appends (keeping selection order, never duplicating); unchecking
/// removes every occurrence.
pub fn toggle_option(current: &[String], option: &str, checked: bool) -> Vec<String> {
    if checked {
        let mut next = current.to_vec();
        if !next.iter().any(|v| v == option) {
            next.push(option.to_string());
        }
        next
    } else {
        current.iter().filter(|v| *v != option).cloned().collect()
    }
}
