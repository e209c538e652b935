//! `reqwest` implementation of [`ProfileApi`]. Every request carries the
//! configured timeout and, when present, the session token as a bearer header.
//! Error bodies are trimmed and truncated before they are surfaced.

use super::{
    config::ApiConfig,
    errors::AppError,
    types::{ErrorPayload, ProfileRecord, ProfileUpdate, UserEnvelope},
    ProfileApi,
};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::ExposeSecret;
use tracing::{debug, info_span, Instrument};

/// Path of the current-user profile resource.
pub const PROFILE_PATH: &str = "/profile/me";
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    async fn send(
        &self,
        method: &'static str,
        builder: RequestBuilder,
    ) -> Result<Response, AppError> {
        let url = self.config.endpoint(PROFILE_PATH);
        let span = info_span!("profile.request", http.method = method, url = %url);

        self.authorize(builder)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)
    }
}

impl ProfileApi for ApiClient {
    async fn fetch_profile(&self) -> Result<ProfileRecord, AppError> {
        let url = self.config.endpoint(PROFILE_PATH);
        debug!("fetching profile from {url}");

        let response = self.send("GET", self.client.get(&url)).await?;
        let envelope: UserEnvelope = handle_json_response(response).await?;
        Ok(envelope.user)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<ProfileRecord, AppError> {
        let url = self.config.endpoint(PROFILE_PATH);
        let payload = serde_json::to_vec(update)
            .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;
        debug!("updating profile at {url}");

        let builder = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload);
        let response = self.send("PUT", builder).await?;
        let envelope: UserEnvelope = handle_json_response(response).await?;
        Ok(envelope.user)
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
async fn handle_json_response<T: serde::de::DeserializeOwned>(
    response: Response,
) -> Result<T, AppError> {
    let status = response.status();
    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(http_error(status.as_u16(), &body))
    }
}

fn http_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.message)
        .map(|message| message.trim().to_string())
        .filter(|message| !message.is_empty());

    AppError::Http {
        status,
        message,
        body: sanitize_body(body),
    }
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
