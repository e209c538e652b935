use crate::{
    api::{ApiClient, ApiConfig},
    form::SkillCatalog,
};
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};
use std::{path::PathBuf, time::Duration};

/// Connection and catalog settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub api_url: Option<String>,
    pub token: Option<SecretString>,
    pub timeout: Duration,
    pub skills_file: Option<PathBuf>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: Option<String>, timeout: Duration) -> Self {
        Self {
            api_url,
            token: None,
            timeout,
            skills_file: None,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Build the HTTP client for the configured API.
    ///
    /// # Errors
    /// Returns an error if `--api-url` is missing or invalid.
    pub fn api_client(&self) -> Result<ApiClient> {
        let api_url = self
            .api_url
            .as_deref()
            .context("missing required argument: --api-url")?;

        let config = ApiConfig::new(api_url)
            .context("invalid PROFILE_FORM_API_URL")?
            .with_token(self.token.as_ref().map(|token| token.expose_secret()))
            .with_timeout(self.timeout);

        Ok(ApiClient::new(config)?)
    }

    /// Load the skill catalog from `--skills-file`, or the built-in list.
    ///
    /// # Errors
    /// Returns an error if the skills file cannot be read.
    pub fn catalog(&self) -> Result<SkillCatalog> {
        match &self.skills_file {
            Some(path) => SkillCatalog::from_file(path)
                .with_context(|| format!("Could not read skills file {}", path.display())),
            None => Ok(SkillCatalog::default()),
        }
    }
}
