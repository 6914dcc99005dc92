//! Form field kinds & metadata.
//!
//! - `FormFieldKind`: supported input widget types
//! - `FormField`: key, label, help text and an optional visibility predicate
//!
//! Fields are pure data. Values live in `ValueMap`, mutation in `engine.rs`.
//!
//! ```ignore
//! use form::{FormField, FormFieldKind};
//!
//! let field = FormField::new("portfolioUrl", "Portfolio URL *", FormFieldKind::Text)
//!     .help("Link to your published work")
//!     .visible_when(|values| values.text("position") == "Designer");
//! ```

use crate::value::{FieldValue, ValueMap};

/// Predicate deciding whether a field is currently part of the form.
pub type VisibilityPredicate = Box<dyn Fn(&ValueMap) -> bool + Send + Sync>;

/// A single form field kind.
///
/// Notes:
/// - Text / Email / Number / DateTime render as single-line editors
/// - Select cycles through its options; the empty string means "nothing selected"
/// - CheckboxGroup holds a list of the checked options
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFieldKind {
    Text,
    Email,
    Number,
    DateTime,
    Select { options: Vec<String> },
    CheckboxGroup { options: Vec<String> },
}

/// Declarative description of a form field.
///
/// `visibility` (optional): when set and returning false for the current
/// values, the field is hidden from rendering. Fields without a predicate are
/// always active.
pub struct FormField {
    pub key: String,
    pub label: String,
    pub kind: FormFieldKind,
    pub help: Option<String>,
    pub visibility: Option<VisibilityPredicate>,
}

impl FormField {
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FormFieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            kind,
            help: None,
            visibility: None,
        }
    }

    /// Attach help / hint text shown beneath the field.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Only show the field while `predicate` holds.
    pub fn visible_when(
        mut self,
        predicate: impl Fn(&ValueMap) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.visibility = Some(Box::new(predicate));
        self
    }

    pub fn is_active(&self, values: &ValueMap) -> bool {
        self.visibility.as_ref().map_or(true, |p| p(values))
    }

    pub fn is_conditional(&self) -> bool {
        self.visibility.is_some()
    }

    /// Return true if this field uses a textual editor when focused.
    pub fn is_textual(&self) -> bool {
        matches!(
            self.kind,
            FormFieldKind::Text
                | FormFieldKind::Email
                | FormFieldKind::Number
                | FormFieldKind::DateTime
        )
    }

    pub fn is_list(&self) -> bool {
        matches!(self.kind, FormFieldKind::CheckboxGroup { .. })
    }

    /// Options of a select or checkbox group; empty for textual fields.
    pub fn options(&self) -> &[String] {
        match &self.kind {
            FormFieldKind::Select { options } | FormFieldKind::CheckboxGroup { options } => {
                options
            }
            _ => &[],
        }
    }

    /// Value the field starts out with.
    pub fn default_value(&self) -> FieldValue {
        if self.is_list() {
            FieldValue::empty_list()
        } else {
            FieldValue::empty_text()
        }
    }
}

impl std::fmt::Debug for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormField")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .field("conditional", &self.is_conditional())
            .finish()
    }
}
