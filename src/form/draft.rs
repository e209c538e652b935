//! Editable profile drafts.
//!
//! A draft is either a learner or a mentor draft. Both share [`ProfileBase`]; the
//! mentor variant adds [`MentorFields`]. The variant is fixed when the draft is
//! built from a record and never changes while editing.

use super::{
    field::{FieldGroup, FieldTarget, ScalarField, SocialKey},
    FormError,
};
use crate::api::types::{MentorUpdate, ProfileRecord, ProfileUpdate, SocialLinks};

/// Maximum bio length in characters.
pub const MAX_BIO_CHARS: usize = 500;

/// Timezones offered by the profile form.
pub const TIMEZONES: &[&str] = &[
    "UTC-12:00", "UTC-11:00", "UTC-10:00", "UTC-09:00", "UTC-08:00", "UTC-07:00", "UTC-06:00",
    "UTC-05:00", "UTC-04:00", "UTC-03:00", "UTC-02:00", "UTC-01:00", "UTC+00:00", "UTC+01:00",
    "UTC+02:00", "UTC+03:00", "UTC+04:00", "UTC+05:00", "UTC+05:30", "UTC+06:00", "UTC+07:00",
    "UTC+08:00", "UTC+09:00", "UTC+10:00", "UTC+11:00", "UTC+12:00", "UTC+13:00", "UTC+14:00",
];

#[must_use]
pub fn is_known_timezone(value: &str) -> bool {
    TIMEZONES.contains(&value)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileBase {
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub timezone: String,
    pub social_links: SocialLinks,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MentorFields {
    pub expertise: String,
    pub availability: String,
    /// Raw input; parsed only when the draft is submitted.
    pub hourly_rate: String,
    pub experience: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileDraft {
    Learner(ProfileBase),
    Mentor {
        base: ProfileBase,
        mentor: MentorFields,
    },
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self::Learner(ProfileBase::default())
    }
}

impl ProfileDraft {
    /// Empty mentor draft.
    #[must_use]
    pub fn mentor() -> Self {
        Self::Mentor {
            base: ProfileBase::default(),
            mentor: MentorFields::default(),
        }
    }

    /// Seed a draft from a server record. The mentor variant is chosen when the
    /// record carries the mentor role.
    #[must_use]
    pub fn from_record(record: &ProfileRecord) -> Self {
        let mut skills: Vec<String> = Vec::with_capacity(record.skills.len());
        for skill in &record.skills {
            let skill = skill.trim();
            if !skill.is_empty() && !skills.iter().any(|existing| existing == skill) {
                skills.push(skill.to_string());
            }
        }

        let base = ProfileBase {
            full_name: record.display_name().to_string(),
            bio: record.bio.clone(),
            avatar: record.avatar.clone(),
            skills,
            timezone: record.timezone.clone(),
            social_links: record.social_links.clone(),
        };

        if record.is_mentor() {
            Self::Mentor {
                base,
                mentor: MentorFields {
                    expertise: record.expertise.clone(),
                    availability: record.availability.clone(),
                    hourly_rate: record
                        .hourly_rate
                        .map(|rate| rate.to_string())
                        .unwrap_or_default(),
                    experience: record.experience.clone(),
                },
            }
        } else {
            Self::Learner(base)
        }
    }

    #[must_use]
    pub fn base(&self) -> &ProfileBase {
        match self {
            Self::Learner(base) | Self::Mentor { base, .. } => base,
        }
    }

    pub fn base_mut(&mut self) -> &mut ProfileBase {
        match self {
            Self::Learner(base) | Self::Mentor { base, .. } => base,
        }
    }

    #[must_use]
    pub fn mentor_fields(&self) -> Option<&MentorFields> {
        match self {
            Self::Learner(_) => None,
            Self::Mentor { mentor, .. } => Some(mentor),
        }
    }

    #[must_use]
    pub fn is_mentor(&self) -> bool {
        matches!(self, Self::Mentor { .. })
    }

    #[must_use]
    pub fn skills(&self) -> &[String] {
        &self.base().skills
    }

    /// Current value of a field.
    #[must_use]
    pub fn get(&self, target: FieldTarget) -> Option<&str> {
        let base = self.base();
        let value = match target {
            FieldTarget::Scalar(ScalarField::FullName) => &base.full_name,
            FieldTarget::Scalar(ScalarField::Bio) => &base.bio,
            FieldTarget::Scalar(ScalarField::Avatar) => &base.avatar,
            FieldTarget::Scalar(ScalarField::Timezone) => &base.timezone,
            FieldTarget::Scalar(scalar) => {
                let mentor = self.mentor_fields()?;
                match scalar {
                    ScalarField::Expertise => &mentor.expertise,
                    ScalarField::Availability => &mentor.availability,
                    ScalarField::HourlyRate => &mentor.hourly_rate,
                    ScalarField::Experience => &mentor.experience,
                    ScalarField::FullName
                    | ScalarField::Bio
                    | ScalarField::Avatar
                    | ScalarField::Timezone => return None,
                }
            }
            FieldTarget::Nested(FieldGroup::SocialLinks, key) => {
                social_link(&base.social_links, key)
            }
        };
        Some(value.as_str())
    }

    /// Write `value` into the field named by `target`. Bio input is truncated
    /// to [`MAX_BIO_CHARS`].
    ///
    /// # Errors
    /// Returns `FormError::FieldUnavailable` when a mentor-only field is set on a
    /// learner draft.
    pub fn set(&mut self, target: FieldTarget, value: String) -> Result<(), FormError> {
        let slot = match target {
            FieldTarget::Scalar(ScalarField::Bio) => {
                self.base_mut().bio = truncate_chars(value, MAX_BIO_CHARS);
                return Ok(());
            }
            FieldTarget::Scalar(ScalarField::FullName) => &mut self.base_mut().full_name,
            FieldTarget::Scalar(ScalarField::Avatar) => &mut self.base_mut().avatar,
            FieldTarget::Scalar(ScalarField::Timezone) => &mut self.base_mut().timezone,
            FieldTarget::Scalar(scalar) => match self {
                Self::Learner(_) => return Err(FormError::FieldUnavailable(target.name())),
                Self::Mentor { mentor, .. } => match scalar {
                    ScalarField::Expertise => &mut mentor.expertise,
                    ScalarField::Availability => &mut mentor.availability,
                    ScalarField::HourlyRate => &mut mentor.hourly_rate,
                    ScalarField::Experience => &mut mentor.experience,
                    ScalarField::FullName
                    | ScalarField::Bio
                    | ScalarField::Avatar
                    | ScalarField::Timezone => {
                        return Err(FormError::FieldUnavailable(target.name()))
                    }
                },
            },
            FieldTarget::Nested(FieldGroup::SocialLinks, key) => {
                social_link_mut(&mut self.base_mut().social_links, key)
            }
        };
        *slot = value;
        Ok(())
    }

    /// Build the request body. The hourly rate is parsed here; a blank or
    /// unparsable rate is sent as `null`, validation keeps the latter from
    /// ever reaching this point.
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        let base = self.base();
        ProfileUpdate {
            full_name: base.full_name.clone(),
            bio: base.bio.clone(),
            avatar: base.avatar.clone(),
            skills: base.skills.clone(),
            timezone: base.timezone.clone(),
            social_links: base.social_links.clone(),
            mentor: self.mentor_fields().map(|mentor| MentorUpdate {
                expertise: mentor.expertise.clone(),
                availability: mentor.availability.clone(),
                hourly_rate: parse_rate(&mentor.hourly_rate),
                experience: mentor.experience.clone(),
            }),
        }
    }
}

/// Parse a non-blank hourly rate. `NaN` and infinities are rejected.
pub(crate) fn parse_rate(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rate| rate.is_finite())
}

fn truncate_chars(value: String, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((cut, _)) => value[..cut].to_string(),
        None => value,
    }
}

fn social_link(links: &SocialLinks, key: SocialKey) -> &String {
    match key {
        SocialKey::Linkedin => &links.linkedin,
        SocialKey::Twitter => &links.twitter,
        SocialKey::Github => &links.github,
    }
}

fn social_link_mut(links: &mut SocialLinks, key: SocialKey) -> &mut String {
    match key {
        SocialKey::Linkedin => &mut links.linkedin,
        SocialKey::Twitter => &mut links.twitter,
        SocialKey::Github => &mut links.github,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(name: &str) -> FieldTarget {
        name.parse().unwrap()
    }

    #[test]
    fn record_with_mentor_role_builds_mentor_draft() {
        let record = ProfileRecord {
            full_name: "Ana".to_string(),
            roles: vec!["mentor".to_string()],
            hourly_rate: Some(50.0),
            expertise: "Rust".to_string(),
            ..ProfileRecord::default()
        };
        let draft = ProfileDraft::from_record(&record);

        assert!(draft.is_mentor());
        let mentor = draft.mentor_fields().unwrap();
        assert_eq!(mentor.hourly_rate, "50");
        assert_eq!(mentor.expertise, "Rust");
    }

    #[test]
    fn record_without_mentor_role_builds_learner_draft() {
        let record = ProfileRecord {
            name: "Legacy Name".to_string(),
            roles: vec!["learner".to_string()],
            expertise: "ignored".to_string(),
            ..ProfileRecord::default()
        };
        let draft = ProfileDraft::from_record(&record);

        assert!(!draft.is_mentor());
        assert_eq!(draft.base().full_name, "Legacy Name");
        assert_eq!(draft.get(target("expertise")), None);
    }

    #[test]
    fn seeding_drops_blank_and_duplicate_skills() {
        let record = ProfileRecord {
            skills: vec![
                "React".to_string(),
                "  ".to_string(),
                "React".to_string(),
                " Rust ".to_string(),
            ],
            ..ProfileRecord::default()
        };
        let draft = ProfileDraft::from_record(&record);
        assert_eq!(draft.skills(), ["React", "Rust"]);
    }

    #[test]
    fn set_updates_nested_social_link() {
        let mut draft = ProfileDraft::default();
        draft
            .set(target("socialLinks.github"), "octocat".to_string())
            .unwrap();

        assert_eq!(draft.base().social_links.github, "octocat");
        assert_eq!(draft.get(target("socialLinks.github")), Some("octocat"));
        assert_eq!(draft.base().social_links.linkedin, "");
    }

    #[test]
    fn set_rejects_mentor_field_on_learner() {
        let mut draft = ProfileDraft::default();
        let result = draft.set(target("hourlyRate"), "40".to_string());

        assert!(matches!(result, Err(FormError::FieldUnavailable("hourlyRate"))));
        assert_eq!(draft, ProfileDraft::default());
    }

    #[test]
    fn set_truncates_bio_on_char_boundary() {
        let mut draft = ProfileDraft::default();
        draft
            .set(target("bio"), "é".repeat(MAX_BIO_CHARS + 20))
            .unwrap();
        assert_eq!(draft.base().bio.chars().count(), MAX_BIO_CHARS);
    }

    #[test]
    fn update_parses_rate_at_submission_time() {
        let mut draft = ProfileDraft::mentor();
        draft.set(target("hourlyRate"), " 50 ".to_string()).unwrap();
        let update = draft.to_update();
        assert_eq!(update.mentor.unwrap().hourly_rate, Some(50.0));

        let mut blank = ProfileDraft::mentor();
        blank.set(target("hourlyRate"), String::new()).unwrap();
        assert_eq!(blank.to_update().mentor.unwrap().hourly_rate, None);
    }

    #[test]
    fn parse_rate_rejects_non_finite() {
        assert_eq!(parse_rate("NaN"), None);
        assert_eq!(parse_rate("inf"), None);
        assert_eq!(parse_rate("abc"), None);
        assert_eq!(parse_rate("0"), Some(0.0));
    }

    #[test]
    fn timezone_set_is_fixed() {
        assert!(is_known_timezone("UTC+00:00"));
        assert!(is_known_timezone("UTC+05:30"));
        assert!(!is_known_timezone("Europe/Lisbon"));
    }
}
