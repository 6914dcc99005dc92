use form::{FormField, FormFieldKind, FormSchema};

use crate::fields::{
    ADDITIONAL_SKILLS, EMAIL, FULL_NAME, INTERVIEW_TIME, MANAGEMENT_EXPERIENCE, PHONE_NUMBER,
    PORTFOLIO_URL, POSITION, Position, RELEVANT_EXPERIENCE, SKILL_OPTIONS,
};
use crate::visibility::{experience_active, management_active, portfolio_active};

/// The job application form as a declarative schema.
///
/// Conditional fields carry the predicates from `visibility.rs`.
pub fn job_application_schema() -> FormSchema {
    FormSchema::new(
        "Job Application Form",
        vec![
            FormField::new(FULL_NAME, "Full Name *", FormFieldKind::Text),
            FormField::new(EMAIL, "Email *", FormFieldKind::Email),
            FormField::new(PHONE_NUMBER, "Phone Number *", FormFieldKind::Text),
            FormField::new(
                POSITION,
                "Applying for Position *",
                FormFieldKind::Select {
                    options: Position::select_options(),
                },
            )
            .help("Left/Right to choose"),
            FormField::new(
                RELEVANT_EXPERIENCE,
                "Relevant Experience (Years) *",
                FormFieldKind::Number,
            )
            .visible_when(experience_active),
            FormField::new(PORTFOLIO_URL, "Portfolio URL *", FormFieldKind::Text)
                .visible_when(portfolio_active),
            FormField::new(
                MANAGEMENT_EXPERIENCE,
                "Management Experience *",
                FormFieldKind::Text,
            )
            .visible_when(management_active),
            FormField::new(
                ADDITIONAL_SKILLS,
                "Additional Skills *",
                FormFieldKind::CheckboxGroup {
                    options: SKILL_OPTIONS.iter().map(|s| s.to_string()).collect(),
                },
            )
            .help("Left/Right to move, Space to toggle"),
            FormField::new(
                INTERVIEW_TIME,
                "Preferred Interview Time *",
                FormFieldKind::DateTime,
            )
            .help("e.g. 2024-01-01T10:00"),
        ],
    )
    .description("Fields marked * are required.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::ALL_FIELDS;
    use crate::visibility::active_fields;
    use form::{FieldValue, ValueMap};

    #[test]
    fn schema_lists_every_field_in_order() {
        let schema = job_application_schema();
        let keys: Vec<&str> = schema.fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, ALL_FIELDS.to_vec());
    }

    #[test]
    fn schema_carries_title_and_description() {
        let schema = job_application_schema();
        assert_eq!(schema.title, "Job Application Form");
        assert_eq!(
            schema.description.as_deref(),
            Some("Fields marked * are required.")
        );
    }

    #[test]
    fn initial_values_are_empty_defaults() {
        let values = job_application_schema().initial_values();
        assert_eq!(values.len(), ALL_FIELDS.len());
        assert_eq!(values.get(ADDITIONAL_SKILLS), Some(&FieldValue::empty_list()));
        assert_eq!(values.get(POSITION), Some(&FieldValue::empty_text()));
    }

    #[test]
    fn schema_visibility_matches_policy() {
        let schema = job_application_schema();
        for position in ["", "Developer", "Designer", "Manager", "Intern"] {
            let values = ValueMap::new().with_text(POSITION, position);
            let from_schema: Vec<&str> = schema
                .active_fields(&values)
                .map(|f| f.key.as_str())
                .collect();
            assert_eq!(from_schema, active_fields(&values), "position {position:?}");
        }
    }
}
