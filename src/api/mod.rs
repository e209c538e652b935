//! Profile API collaborator: wire types, configuration, errors and the HTTP client.

pub mod client;
pub mod config;
pub mod errors;
pub mod types;

pub use client::{ApiClient, PROFILE_PATH};
pub use config::{ApiConfig, DEFAULT_TIMEOUT};
pub use errors::AppError;

use std::future::Future;
use types::{ProfileRecord, ProfileUpdate};

/// Remote profile endpoints the form depends on.
pub trait ProfileApi {
    /// `GET /profile/me`
    fn fetch_profile(&self) -> impl Future<Output = Result<ProfileRecord, AppError>> + Send;

    /// `PUT /profile/me`, returning the canonical record.
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<ProfileRecord, AppError>> + Send;
}
