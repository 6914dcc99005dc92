//! Job application form built on the generic `form` engine.
//!
//! - `fields`     : field names, positions, skill options
//! - `visibility` : which position-dependent fields are active
//! - `validation` : `validate(values) -> ErrorMap`
//! - `schema`     : declarative `FormSchema` for front-ends
//! - `summary`    : read-only confirmation view of submitted values

pub mod fields;
pub mod schema;
pub mod summary;
pub mod validation;
pub mod visibility;

use form::{ErrorMap, FormEngine, ValueMap};

pub use fields::Position;
pub use schema::job_application_schema;
pub use summary::{Confirmation, SummaryLine};
pub use validation::validate;

/// Engine type used by every job application front-end.
pub type JobApplicationForm = FormEngine<fn(&ValueMap) -> ErrorMap>;

/// A fresh form: every field empty, nothing submitted.
pub fn new_form() -> JobApplicationForm {
    FormEngine::new(initial_values(), validate as fn(&ValueMap) -> ErrorMap)
}

/// Initial value map holding every field across all positions.
pub fn initial_values() -> ValueMap {
    job_application_schema().initial_values()
}
