//! Wire types for the `/profile/me` endpoints.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Role that unlocks the mentor field set.
pub const MENTOR_ROLE: &str = "mentor";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    #[serde(deserialize_with = "nullable_string")]
    pub linkedin: String,
    #[serde(deserialize_with = "nullable_string")]
    pub twitter: String,
    #[serde(deserialize_with = "nullable_string")]
    pub github: String,
}

/// Profile as returned by the API. Missing or `null` fields fall back to defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileRecord {
    #[serde(deserialize_with = "nullable_string")]
    pub full_name: String,
    /// Older records carry the display name here instead of `fullName`.
    #[serde(deserialize_with = "nullable_string", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(deserialize_with = "nullable_string")]
    pub bio: String,
    #[serde(deserialize_with = "nullable_string")]
    pub avatar: String,
    pub skills: Vec<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub timezone: String,
    pub social_links: SocialLinks,
    pub roles: Vec<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub expertise: String,
    #[serde(deserialize_with = "nullable_string")]
    pub availability: String,
    #[serde(deserialize_with = "nullable_rate")]
    pub hourly_rate: Option<f64>,
    #[serde(deserialize_with = "nullable_string")]
    pub experience: String,
}

impl ProfileRecord {
    /// `fullName`, or the legacy `name` when `fullName` is blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.name
        } else {
            &self.full_name
        }
    }

    #[must_use]
    pub fn is_mentor(&self) -> bool {
        self.roles.iter().any(|role| role == MENTOR_ROLE)
    }
}

/// `{ "user": ProfileRecord }`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub user: ProfileRecord,
}

/// Body of a failed API call. Only `message` is consumed.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `PUT /profile/me`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: String,
    pub bio: String,
    pub avatar: String,
    pub skills: Vec<String>,
    pub timezone: String,
    pub social_links: SocialLinks,
    #[serde(flatten)]
    pub mentor: Option<MentorUpdate>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorUpdate {
    pub expertise: String,
    pub availability: String,
    pub hourly_rate: Option<f64>,
    pub experience: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// Rates have been stored both as numbers and as form strings.
fn nullable_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        Some(Value::String(text)) => Ok(text.trim().parse::<f64>().ok()),
        Some(other) => Err(de::Error::custom(format!(
            "invalid hourlyRate value: {other}"
        ))),
    }
}
