//! Form schema: an ordered collection of `FormField`s plus presentation
//! metadata.
//!
//! The schema is the single place that knows every field a form can have,
//! across all conditional branches, so it also produces the initial
//! `ValueMap`.

use crate::field::FormField;
use crate::value::ValueMap;

/// Declarative schema for a multi-field form.
///
/// Fields:
/// - `title`:       Display title
/// - `description`: Optional descriptive text rendered above the fields
/// - `fields`:      Ordered collection of `FormField` definitions
pub struct FormSchema {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(title: impl Into<String>, fields: Vec<FormField>) -> Self {
        Self {
            title: title.into(),
            description: None,
            fields,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// A value map holding every field's default (empty text or empty list).
    pub fn initial_values(&self) -> ValueMap {
        let mut values = ValueMap::new();
        for field in &self.fields {
            values.insert(field.key.clone(), field.default_value());
        }
        values
    }

    /// Fields that are currently shown, in schema order.
    pub fn active_fields<'a>(&'a self, values: &'a ValueMap) -> impl Iterator<Item = &'a FormField> {
        self.fields.iter().filter(move |f| f.is_active(values))
    }
}
