//! Generic form engine.
//!
//! The crate is split the same way a form is used:
//!   - `value.rs`  : `FieldValue` and `ValueMap` (what the user entered)
//!   - `errors.rs` : `ErrorMap` (validation output) and `FormError` (API misuse)
//!   - `event.rs`  : change-event contract shared with input widgets
//!   - `field.rs`  : declarative field metadata + visibility predicates
//!   - `schema.rs` : ordered collection of fields, initial values
//!   - `state.rs`  : mutable values + current errors
//!   - `engine.rs` : change / submit handlers and the submission state machine
//!
//! Nothing here knows about a concrete form; validation is injected through the
//! [`Validator`] trait.

pub mod engine;
pub mod errors;
pub mod event;
pub mod field;
pub mod schema;
pub mod state;
pub mod value;

pub use engine::{FormEngine, SubmissionState, SubmitOutcome, Validator};
pub use errors::{ErrorMap, FormError};
pub use event::{ChangeEvent, ChangeTarget, toggle_option};
pub use field::{FormField, FormFieldKind, VisibilityPredicate};
pub use schema::FormSchema;
pub use state::FormState;
pub use value::{FieldValue, ValueMap};
