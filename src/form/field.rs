//! Field targets addressable by `set_field`.
//!
//! Wire names (`fullName`, `socialLinks.github`, ...) are resolved through a
//! static table instead of splitting strings at runtime, so every target the form
//! can mutate is an enum variant and every match over it is exhaustive.

use super::FormError;
use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarField {
    FullName,
    Bio,
    Avatar,
    Timezone,
    Expertise,
    Availability,
    HourlyRate,
    Experience,
}

impl ScalarField {
    /// Fields that only exist on mentor drafts.
    #[must_use]
    pub const fn is_mentor_only(self) -> bool {
        matches!(
            self,
            Self::Expertise | Self::Availability | Self::HourlyRate | Self::Experience
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    SocialLinks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialKey {
    Linkedin,
    Twitter,
    Github,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldTarget {
    Scalar(ScalarField),
    Nested(FieldGroup, SocialKey),
}

const FIELD_TABLE: &[(&str, FieldTarget)] = &[
    ("fullName", FieldTarget::Scalar(ScalarField::FullName)),
    ("bio", FieldTarget::Scalar(ScalarField::Bio)),
    ("avatar", FieldTarget::Scalar(ScalarField::Avatar)),
    ("timezone", FieldTarget::Scalar(ScalarField::Timezone)),
    ("expertise", FieldTarget::Scalar(ScalarField::Expertise)),
    ("availability", FieldTarget::Scalar(ScalarField::Availability)),
    ("hourlyRate", FieldTarget::Scalar(ScalarField::HourlyRate)),
    ("experience", FieldTarget::Scalar(ScalarField::Experience)),
    (
        "socialLinks.linkedin",
        FieldTarget::Nested(FieldGroup::SocialLinks, SocialKey::Linkedin),
    ),
    (
        "socialLinks.twitter",
        FieldTarget::Nested(FieldGroup::SocialLinks, SocialKey::Twitter),
    ),
    (
        "socialLinks.github",
        FieldTarget::Nested(FieldGroup::SocialLinks, SocialKey::Github),
    ),
];

impl FieldTarget {
    /// Wire name of the target; also the key used in `ValidationErrors`.
    #[must_use]
    pub fn name(self) -> &'static str {
        FIELD_TABLE
            .iter()
            .find(|(_, target)| *target == self)
            .map_or("", |(name, _)| name)
    }

    /// Every addressable target, in table order.
    pub fn all() -> impl Iterator<Item = Self> {
        FIELD_TABLE.iter().map(|(_, target)| *target)
    }
}

impl FromStr for FieldTarget {
    type Err = FormError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FIELD_TABLE
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, target)| *target)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}

impl fmt::Display for FieldTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
