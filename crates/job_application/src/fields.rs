//! Field names and fixed option lists.

use form::ValueMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PHONE_NUMBER: &str = "phoneNumber";
pub const POSITION: &str = "position";
pub const RELEVANT_EXPERIENCE: &str = "relevantExperience";
pub const PORTFOLIO_URL: &str = "portfolioUrl";
pub const MANAGEMENT_EXPERIENCE: &str = "managementExperience";
pub const ADDITIONAL_SKILLS: &str = "additionalSkills";
pub const INTERVIEW_TIME: &str = "interviewTime";

/// Every field in form order.
pub const ALL_FIELDS: [&str; 9] = [
    FULL_NAME,
    EMAIL,
    PHONE_NUMBER,
    POSITION,
    RELEVANT_EXPERIENCE,
    PORTFOLIO_URL,
    MANAGEMENT_EXPERIENCE,
    ADDITIONAL_SKILLS,
    INTERVIEW_TIME,
];

pub const SKILL_OPTIONS: [&str; 5] = ["JavaScript", "CSS", "Python", "React", "Node.js"];

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum Position {
    Developer,
    Designer,
    Manager,
}

impl Position {
    /// Position currently selected in `values`; `None` for `""` or anything
    /// that is not an exact option name.
    pub fn from_values(values: &ValueMap) -> Option<Self> {
        values.text(POSITION).parse().ok()
    }

    /// Select options as shown to the user, the empty "no selection" first.
    pub fn select_options() -> Vec<String> {
        std::iter::once(String::new())
            .chain(Position::iter().map(|p| p.to_string()))
            .collect()
    }
}
