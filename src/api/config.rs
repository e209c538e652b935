//! Connection settings for the profile API. Values arrive from CLI flags or
//! their environment fallbacks; blank values are treated as absent. The session
//! token is kept as a `SecretString` and never printed by `Debug`.

use super::errors::AppError;
use secrecy::SecretString;
use std::time::Duration;
use url::Url;

/// Default request timeout applied by `ApiClient`.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<SecretString>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl ApiConfig {
    /// Validate `base_url` and build a config with default timeout and user agent.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the URL is blank, unparsable, has no host,
    /// or uses a scheme other than http/https.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = normalize_value(base_url)
            .ok_or_else(|| AppError::Config("API base URL is required".to_string()))?;

        let parsed = Url::parse(&base_url)
            .map_err(|err| AppError::Config(format!("Invalid API base URL {base_url}: {err}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AppError::Config(format!(
                    "Unsupported API URL scheme: {scheme}"
                )))
            }
        }

        if parsed.host().is_none() {
            return Err(AppError::Config(format!(
                "API base URL has no host: {base_url}"
            )));
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: crate::APP_USER_AGENT.to_string(),
        })
    }

    /// Attach a session token; blank tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: Option<&str>) -> Self {
        self.token = token.and_then(normalize_value).map(SecretString::from);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim().trim_start_matches('/'))
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
