//! Draft validation. Every rule is evaluated on each pass; errors are data.

use super::draft::{parse_rate, ProfileDraft, MAX_BIO_CHARS};
use serde::Serialize;
use std::collections::BTreeMap;

pub const FULL_NAME_REQUIRED: &str = "Full name is required";
pub const BIO_REQUIRED: &str = "Bio is required";
pub const BIO_TOO_LONG: &str = "Bio must be 500 characters or less";
pub const SKILLS_REQUIRED: &str = "At least one skill is required";
pub const TIMEZONE_REQUIRED: &str = "Timezone is required";
pub const EXPERTISE_REQUIRED: &str = "Expertise is required";
pub const AVAILABILITY_REQUIRED: &str = "Availability is required";
pub const EXPERIENCE_REQUIRED: &str = "Experience is required";
pub const HOURLY_RATE_INVALID: &str = "Hourly rate must be a positive number";

/// Field name → message, keyed by wire names (`fullName`, `skills`, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<&'static str, String>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Validate a draft. Mentor rules apply only to mentor drafts.
#[must_use]
pub fn validate(draft: &ProfileDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    let base = draft.base();

    if base.full_name.trim().is_empty() {
        errors.insert("fullName", FULL_NAME_REQUIRED);
    }

    if base.bio.trim().is_empty() {
        errors.insert("bio", BIO_REQUIRED);
    }
    if base.bio.chars().count() > MAX_BIO_CHARS {
        errors.insert("bio", BIO_TOO_LONG);
    }

    if base.skills.is_empty() {
        errors.insert("skills", SKILLS_REQUIRED);
    }

    if base.timezone.trim().is_empty() {
        errors.insert("timezone", TIMEZONE_REQUIRED);
    }

    if let Some(mentor) = draft.mentor_fields() {
        if mentor.expertise.trim().is_empty() {
            errors.insert("expertise", EXPERTISE_REQUIRED);
        }
        if mentor.availability.trim().is_empty() {
            errors.insert("availability", AVAILABILITY_REQUIRED);
        }
        if mentor.experience.trim().is_empty() {
            errors.insert("experience", EXPERIENCE_REQUIRED);
        }
        if !mentor.hourly_rate.trim().is_empty()
            && !parse_rate(&mentor.hourly_rate).is_some_and(|rate| rate >= 0.0)
        {
            errors.insert("hourlyRate", HOURLY_RATE_INVALID);
        }
    }

    errors
}
