//! Conditional rendering policy.
//!
//! Each position-dependent field has one predicate over the current values.
//! The same predicates drive the schema (what is rendered) and the
//! required-when rules in `validation.rs`, so a hidden field can never be the
//! source of a "required" error.

use form::ValueMap;

use crate::fields::{
    ALL_FIELDS, MANAGEMENT_EXPERIENCE, PORTFOLIO_URL, Position, RELEVANT_EXPERIENCE,
};

pub fn experience_active(values: &ValueMap) -> bool {
    matches!(
        Position::from_values(values),
        Some(Position::Developer | Position::Designer)
    )
}

pub fn portfolio_active(values: &ValueMap) -> bool {
    Position::from_values(values) == Some(Position::Designer)
}

pub fn management_active(values: &ValueMap) -> bool {
    Position::from_values(values) == Some(Position::Manager)
}

/// Whether `field` is currently shown. Unconditional fields always are.
pub fn is_active(field: &str, values: &ValueMap) -> bool {
    match field {
        RELEVANT_EXPERIENCE => experience_active(values),
        PORTFOLIO_URL => portfolio_active(values),
        MANAGEMENT_EXPERIENCE => management_active(values),
        _ => true,
    }
}

/// Active field names in form order.
pub fn active_fields(values: &ValueMap) -> Vec<&'static str> {
    ALL_FIELDS
        .iter()
        .copied()
        .filter(|f| is_active(f, values))
        .collect()
}
