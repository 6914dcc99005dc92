//! Validation policy for the job application.
//!
//! Every rule is evaluated on every pass and contributes at most one message
//! for its field; the result is built from scratch each time.

use form::{ErrorMap, ValueMap};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::fields::{
    ADDITIONAL_SKILLS, EMAIL, FULL_NAME, INTERVIEW_TIME, MANAGEMENT_EXPERIENCE, PHONE_NUMBER,
    PORTFOLIO_URL, RELEVANT_EXPERIENCE,
};
use crate::visibility::{experience_active, management_active, portfolio_active};

lazy_static! {
    static ref EMAIL_SHAPE: Regex = Regex::new(r"\S+@\S+\.\S+").expect("valid email regex");
    static ref URL_SHAPE: Regex = Regex::new(r"^https?://\S+$").expect("valid url regex");
}

pub fn validate(values: &ValueMap) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if values.text(FULL_NAME).is_empty() {
        errors.insert(FULL_NAME, "Full Name is required");
    }

    let email = values.text(EMAIL);
    if email.is_empty() {
        errors.insert(EMAIL, "Email is required");
    } else if !EMAIL_SHAPE.is_match(email) {
        errors.insert(EMAIL, "Email must be a valid email address");
    }

    let phone = values.text(PHONE_NUMBER);
    if phone.is_empty() {
        errors.insert(PHONE_NUMBER, "Phone Number is required");
    } else if parse_number(phone).is_none() {
        errors.insert(PHONE_NUMBER, "Phone Number must be a valid number");
    }

    // Required and positive are separate checks: an empty value is only an
    // error while the field is shown, a present value must always be > 0.
    let experience = values.text(RELEVANT_EXPERIENCE);
    if experience.is_empty() {
        if experience_active(values) {
            errors.insert(RELEVANT_EXPERIENCE, "Relevant Experience is required");
        }
    } else if !parse_number(experience).is_some_and(|years| years > 0.0) {
        errors.insert(
            RELEVANT_EXPERIENCE,
            "Relevant Experience must be greater than 0",
        );
    }

    let portfolio = values.text(PORTFOLIO_URL);
    if portfolio.is_empty() {
        if portfolio_active(values) {
            errors.insert(PORTFOLIO_URL, "Portfolio URL is required");
        }
    } else if !URL_SHAPE.is_match(portfolio) {
        errors.insert(PORTFOLIO_URL, "Portfolio URL must be a valid URL");
    }

    if management_active(values) && values.text(MANAGEMENT_EXPERIENCE).is_empty() {
        errors.insert(MANAGEMENT_EXPERIENCE, "Management Experience is required");
    }

    if values.list(ADDITIONAL_SKILLS).is_empty() {
        errors.insert(ADDITIONAL_SKILLS, "At least one skill must be selected");
    }

    if values.text(INTERVIEW_TIME).is_empty() {
        errors.insert(INTERVIEW_TIME, "Preferred Interview Time is required");
    }

    trace!(error_count = errors.len(), "validated job application");
    errors
}

/// Lenient numeric parse: surrounding whitespace is ignored; NaN and the
/// infinities are not numbers.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::POSITION;
    use crate::initial_values;
    use form::FieldValue;
    use pretty_assertions::assert_eq;

    fn set(mut values: ValueMap, key: &str, value: &str) -> ValueMap {
        values.insert(key, FieldValue::from(value));
        values
    }

    fn developer() -> ValueMap {
        initial_values()
            .with_text(FULL_NAME, "Jane Doe")
            .with_text(EMAIL, "jane@co.com")
            .with_text(PHONE_NUMBER, "5551234567")
            .with_text(POSITION, "Developer")
            .with_text(RELEVANT_EXPERIENCE, "3")
            .with_list(ADDITIONAL_SKILLS, ["React"])
            .with_text(INTERVIEW_TIME, "2024-01-01T10:00")
    }

    fn fields(errors: &ErrorMap) -> Vec<&str> {
        let mut f: Vec<&str> = errors.fields().collect();
        f.sort_unstable();
        f
    }

    #[test]
    fn complete_developer_is_valid() {
        assert!(validate(&developer()).is_empty());
    }

    #[test]
    fn empty_form_reports_unconditional_fields() {
        let errors = validate(&initial_values());
        assert_eq!(
            fields(&errors),
            vec![
                ADDITIONAL_SKILLS,
                EMAIL,
                FULL_NAME,
                INTERVIEW_TIME,
                PHONE_NUMBER,
            ]
        );
        assert_eq!(errors.get(FULL_NAME), Some("Full Name is required"));
        assert_eq!(
            errors.get(ADDITIONAL_SKILLS),
            Some("At least one skill must be selected")
        );
    }

    #[test]
    fn email_shape() {
        let bad = validate(&set(developer(), EMAIL, "not-an-email"));
        assert_eq!(bad.get(EMAIL), Some("Email must be a valid email address"));

        let good = validate(&set(developer(), EMAIL, "a@b.com"));
        assert!(!good.contains(EMAIL));
    }

    #[test]
    fn phone_must_be_numeric() {
        let bad = validate(&set(developer(), PHONE_NUMBER, "555-1234"));
        assert_eq!(
            bad.get(PHONE_NUMBER),
            Some("Phone Number must be a valid number")
        );
        assert!(validate(&set(developer(), PHONE_NUMBER, " 5551234 ")).is_empty());
        for raw in ["NaN", "inf", "infinity", "-INF"] {
            assert_eq!(
                validate(&set(developer(), PHONE_NUMBER, raw)).get(PHONE_NUMBER),
                Some("Phone Number must be a valid number"),
                "value {raw:?}"
            );
        }
    }

    #[test]
    fn experience_required_for_developer() {
        let errors = validate(&set(developer(), RELEVANT_EXPERIENCE, ""));
        assert_eq!(
            errors.get(RELEVANT_EXPERIENCE),
            Some("Relevant Experience is required")
        );
    }

    #[test]
    fn experience_must_be_positive() {
        for raw in ["0", "-1", "abc", "inf", "infinity"] {
            let errors = validate(&set(developer(), RELEVANT_EXPERIENCE, raw));
            assert_eq!(
                errors.get(RELEVANT_EXPERIENCE),
                Some("Relevant Experience must be greater than 0"),
                "value {raw:?}"
            );
        }
        assert!(validate(&set(developer(), RELEVANT_EXPERIENCE, "0.5")).is_empty());
    }

    #[test]
    fn portfolio_required_only_for_designer() {
        let designer = set(developer(), POSITION, "Designer");
        assert_eq!(
            validate(&designer).get(PORTFOLIO_URL),
            Some("Portfolio URL is required")
        );
        assert!(!validate(&developer()).contains(PORTFOLIO_URL));
    }

    #[test]
    fn portfolio_shape_checked_for_any_position() {
        let errors = validate(&set(developer(), PORTFOLIO_URL, "ftp://example.com"));
        assert_eq!(
            errors.get(PORTFOLIO_URL),
            Some("Portfolio URL must be a valid URL")
        );

        let designer = set(
            set(developer(), POSITION, "Designer"),
            PORTFOLIO_URL,
            "https://jane.design",
        );
        assert!(validate(&designer).is_empty());
    }

    #[test]
    fn management_required_only_for_manager() {
        let manager = set(
            set(developer(), POSITION, "Manager"),
            RELEVANT_EXPERIENCE,
            "",
        );
        assert_eq!(
            fields(&validate(&manager)),
            vec![MANAGEMENT_EXPERIENCE]
        );

        let filled = set(manager, MANAGEMENT_EXPERIENCE, "Led a team of 5");
        assert!(validate(&filled).is_empty());
    }

    #[test]
    fn rules_report_independently() {
        let values = set(set(initial_values(), EMAIL, "nope"), PHONE_NUMBER, "x");
        let errors = validate(&values);
        assert!(errors.contains(FULL_NAME));
        assert_eq!(errors.get(EMAIL), Some("Email must be a valid email address"));
        assert_eq!(
            errors.get(PHONE_NUMBER),
            Some("Phone Number must be a valid number")
        );
    }

    #[test]
    fn validation_is_idempotent() {
        let values = set(developer(), EMAIL, "broken");
        assert_eq!(validate(&values), validate(&values));
    }
}
