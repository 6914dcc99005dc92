use form::{FormField, FormSchema};
use job_application::{JobApplicationForm, job_application_schema, new_form};

/// Everything the components render from: the form engine and the schema
/// describing its fields.
pub struct State {
    pub form: JobApplicationForm,
    pub schema: FormSchema,
}

impl State {
    pub fn new() -> Self {
        Self {
            form: new_form(),
            schema: job_application_schema(),
        }
    }

    pub fn active_fields(&self) -> Vec<&FormField> {
        self.schema.active_fields(self.form.values()).collect()
    }

    /// Errors attached to fields that are currently hidden, in schema order.
    ///
    /// These can only be shape errors on stale values (e.g. an invalid
    /// portfolio URL entered before switching positions).
    pub fn hidden_errors(&self) -> Vec<(&FormField, &str)> {
        let values = self.form.values();
        self.schema
            .fields
            .iter()
            .filter(|f| !f.is_active(values))
            .filter_map(|f| self.form.error_for(&f.key).map(|msg| (f, msg)))
            .collect()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}
