//! Field values and the value map.
//!
//! A form field holds either a single string (text, numbers, selects, date
//! pickers) or an ordered list of strings (multi-select). Numbers stay
//! stringified; interpreting them is the validator's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Value of a single form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Empty text value.
    pub fn empty_text() -> Self {
        FieldValue::Text(String::new())
    }

    /// Empty list value.
    pub fn empty_list() -> Self {
        FieldValue::List(Vec::new())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            FieldValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items.as_slice()),
            FieldValue::Text(_) => None,
        }
    }

    /// True for `""` and `[]`.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Current values of all form fields, keyed by field name.
///
/// Keys are fixed once the map is handed to a [`FormEngine`](crate::FormEngine);
/// the builder methods exist to assemble that initial map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueMap {
    values: HashMap<String, FieldValue>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add (or replace) a text entry.
    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), FieldValue::Text(value.into()));
        self
    }

    /// Builder: add (or replace) a list entry.
    pub fn with_list<I, S>(mut self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.values.insert(key.into(), FieldValue::List(items));
        self
    }

    /// Insert or replace an entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: FieldValue) -> Option<FieldValue> {
        self.values.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut FieldValue> {
        self.values.get_mut(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Text value of `key`; `""` when the key is missing or holds a list.
    pub fn text(&self, key: &str) -> &str {
        self.values
            .get(key)
            .and_then(FieldValue::as_text)
            .unwrap_or("")
    }

    /// List value of `key`; empty when the key is missing or holds text.
    pub fn list(&self, key: &str) -> &[String] {
        self.values
            .get(key)
            .and_then(FieldValue::as_list)
            .unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
