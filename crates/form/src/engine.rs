//! Form state engine.
//!
//! Owns one form's values and its last validation result, and implements the
//! two handlers a front-end binds to:
//!
//! - `on_field_change`: replace one value, no validation
//! - `on_submit_attempt`: validate everything, swap the error map, decide
//!   whether the submission was accepted
//!
//! Submission lifecycle:
//!
//! ```text
//!   Idle ──submit──▶ Validating ──(no errors)──▶ Submitted ──close──▶ Idle
//!                      │    ▲
//!                      └────┘ (errors: stays Validating until a clean pass)
//! ```
//!
//! The "clear submitting" check runs synchronously at the end of
//! `on_submit_attempt`; there is no deferred reaction.

use tracing::{debug, info};

use crate::errors::{ErrorMap, FormError};
use crate::event::ChangeEvent;
use crate::state::FormState;
use crate::value::{FieldValue, ValueMap};

/// Maps a complete value map to its validation errors.
///
/// Implementations must be pure: the same values always yield the same errors.
pub trait Validator {
    fn validate(&self, values: &ValueMap) -> ErrorMap;
}

impl<F> Validator for F
where
    F: Fn(&ValueMap) -> ErrorMap,
{
    fn validate(&self, values: &ValueMap) -> ErrorMap {
        self(values)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A submit attempt happened and has not produced a clean pass yet.
    Validating,
    /// The last submit attempt produced zero errors.
    Submitted,
}

/// Result of a single submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted)
    }
}

pub struct FormEngine<V> {
    state: FormState,
    validator: V,
    submission: SubmissionState,
    confirmation_requested: bool,
}

impl<V: Validator> FormEngine<V> {
    /// Create an engine seeded with `initial`.
    ///
    /// `initial` must already contain every field the form can have; changes
    /// to other keys are rejected.
    pub fn new(initial: ValueMap, validator: V) -> Self {
        Self {
            state: FormState::new(initial),
            validator,
            submission: SubmissionState::Idle,
            confirmation_requested: false,
        }
    }

    pub fn values(&self) -> &ValueMap {
        &self.state.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    pub fn error_for(&self, name: &str) -> Option<&str> {
        self.state.errors.get(name)
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    /// Replace the value at `name`. Performs no validation.
    pub fn on_field_change(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), FormError> {
        let value = value.into();
        debug!(field = name, "field changed");
        self.state.set_value(name, value)
    }

    /// [`on_field_change`](Self::on_field_change) for the widget event shape.
    pub fn handle_change(&mut self, event: ChangeEvent) -> Result<(), FormError> {
        let ChangeEvent { target } = event;
        self.on_field_change(&target.name, target.value)
    }

    /// Validate the complete value map and replace the error map with the
    /// result.
    pub fn on_submit_attempt(&mut self) -> SubmitOutcome {
        let errors = self.validator.validate(&self.state.values);
        self.state.replace_errors(errors);
        self.submission = SubmissionState::Validating;
        self.confirmation_requested = true;

        if self.state.errors.is_empty() {
            self.submission = SubmissionState::Submitted;
            info!("submission accepted");
            SubmitOutcome::Accepted
        } else {
            let error_count = self.state.errors.len();
            debug!(error_count, "submission rejected");
            SubmitOutcome::Rejected { error_count }
        }
    }

    /// True iff the most recent submit attempt produced zero errors and the
    /// confirmation has not been closed since.
    pub fn show_confirmation(&self) -> bool {
        self.confirmation_requested && self.state.errors.is_empty()
    }

    /// Dismiss the confirmation. Values and errors are kept.
    pub fn close_confirmation(&mut self) {
        self.confirmation_requested = false;
        self.submission = SubmissionState::Idle;
    }
}

impl<V> std::fmt::Debug for FormEngine<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormEngine")
            .field("state", &self.state)
            .field("submission", &self.submission)
            .field("confirmation_requested", &self.confirmation_requested)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn require_name(values: &ValueMap) -> ErrorMap {
        let mut errors = ErrorMap::new();
        if values.text("name").is_empty() {
            errors.insert("name", "Name is required");
        }
        if values.list("tags").is_empty() {
            errors.insert("tags", "Pick a tag");
        }
        errors
    }

    fn engine() -> FormEngine<fn(&ValueMap) -> ErrorMap> {
        FormEngine::new(
            ValueMap::new()
                .with_text("name", "")
                .with_list("tags", Vec::<String>::new()),
            require_name as fn(&ValueMap) -> ErrorMap,
        )
    }

    #[test]
    fn starts_idle_without_errors() {
        let engine = engine();
        assert_eq!(engine.submission_state(), SubmissionState::Idle);
        assert!(engine.errors().is_empty());
        assert!(!engine.show_confirmation());
    }

    #[test]
    fn change_does_not_validate() {
        let mut engine = engine();
        engine.on_field_change("name", "").unwrap();
        assert!(engine.errors().is_empty());
        assert_eq!(engine.submission_state(), SubmissionState::Idle);
    }

    #[test]
    fn change_to_unknown_field_is_rejected() {
        let mut engine = engine();
        let before = engine.values().clone();
        let err = engine.on_field_change("nickname", "J").unwrap_err();

        assert_eq!(err, FormError::UnknownField("nickname".into()));
        assert_eq!(engine.values(), &before);
    }

    #[test]
    fn failed_submit_stays_validating() {
        let mut engine = engine();
        let outcome = engine.on_submit_attempt();

        assert_eq!(outcome, SubmitOutcome::Rejected { error_count: 2 });
        assert_eq!(engine.submission_state(), SubmissionState::Validating);
        assert_eq!(engine.error_for("name"), Some("Name is required"));
        assert!(!engine.show_confirmation());
    }

    #[test]
    fn errors_are_not_cleared_by_editing() {
        let mut engine = engine();
        engine.on_submit_attempt();
        engine.handle_change(ChangeEvent::new("name", "Jane")).unwrap();

        // Errors only change on the next submit attempt.
        assert!(engine.error_for("name").is_some());
        assert!(!engine.show_confirmation());
    }

    #[test]
    fn clean_pass_after_failure_is_accepted() {
        let mut engine = engine();
        engine.on_submit_attempt();
        engine.on_field_change("name", "Jane").unwrap();
        engine
            .on_field_change("tags", vec!["a".to_string()])
            .unwrap();

        let outcome = engine.on_submit_attempt();
        assert!(outcome.is_accepted());
        assert_eq!(engine.submission_state(), SubmissionState::Submitted);
        assert!(engine.errors().is_empty());
        assert!(engine.show_confirmation());
    }

    #[test]
    fn closing_confirmation_keeps_values() {
        let mut engine = engine();
        engine.on_field_change("name", "Jane").unwrap();
        engine
            .on_field_change("tags", vec!["a".to_string()])
            .unwrap();
        engine.on_submit_attempt();
        engine.close_confirmation();

        assert!(!engine.show_confirmation());
        assert_eq!(engine.submission_state(), SubmissionState::Idle);
        assert_eq!(engine.values().text("name"), "Jane");

        // A new attempt brings the confirmation back.
        engine.on_submit_attempt();
        assert!(engine.show_confirmation());
    }

    #[test]
    fn error_map_is_replaced_not_merged() {
        let mut engine = engine();
        engine.on_submit_attempt();
        assert_eq!(engine.errors().len(), 2);

        engine.on_field_change("name", "Jane").unwrap();
        engine.on_submit_attempt();
        assert_eq!(engine.errors().len(), 1);
        assert!(!engine.errors().contains("name"));
    }

    #[test]
    fn closures_are_validators() {
        let mut engine = FormEngine::new(ValueMap::new().with_text("x", ""), |_: &ValueMap| {
            ErrorMap::new()
        });
        assert!(engine.on_submit_attempt().is_accepted());
    }
}
