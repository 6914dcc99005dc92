//! Read-only confirmation view of a submitted application.

use form::ValueMap;
use serde::Serialize;

use crate::fields::{
    ADDITIONAL_SKILLS, EMAIL, FULL_NAME, INTERVIEW_TIME, MANAGEMENT_EXPERIENCE, PHONE_NUMBER,
    PORTFOLIO_URL, POSITION, RELEVANT_EXPERIENCE,
};
use crate::visibility::{experience_active, management_active, portfolio_active};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: &'static str,
    pub value: String,
}

impl std::fmt::Display for SummaryLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub title: &'static str,
    pub lines: Vec<SummaryLine>,
}

impl Confirmation {
    pub const TITLE: &'static str = "Submitted Data";

    /// Summarize `values`; position-dependent lines appear only while their
    /// field is active.
    pub fn from_values(values: &ValueMap) -> Self {
        let mut lines = Vec::with_capacity(8);
        let mut push = |label, value: String| lines.push(SummaryLine { label, value });

        push("Full Name", values.text(FULL_NAME).to_string());
        push("Email", values.text(EMAIL).to_string());
        push("Phone Number", values.text(PHONE_NUMBER).to_string());
        push("Applying for Position", values.text(POSITION).to_string());
        if experience_active(values) {
            push(
                "Relevant Experience",
                format!("{} years", values.text(RELEVANT_EXPERIENCE)),
            );
        }
        if portfolio_active(values) {
            push("Portfolio URL", values.text(PORTFOLIO_URL).to_string());
        }
        if management_active(values) {
            push(
                "Management Experience",
                values.text(MANAGEMENT_EXPERIENCE).to_string(),
            );
        }
        push("Additional Skills", values.list(ADDITIONAL_SKILLS).join(", "));
        push(
            "Preferred Interview Time",
            values.text(INTERVIEW_TIME).to_string(),
        );

        Self {
            title: Self::TITLE,
            lines,
        }
    }

    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.value.as_str())
    }
}

impl std::fmt::Display for Confirmation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
