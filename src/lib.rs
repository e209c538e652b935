//! # profile-form
//!
//! Profile editing model for the mentor/learner marketplace client.
//!
//! ## Form model
//!
//! A [`form::ProfileForm`] owns an editable [`form::ProfileDraft`] seeded from the
//! current profile record. The draft comes in two shapes chosen once, at
//! construction time, from the subject's capabilities:
//!
//! - **Learner:** identity fields, skills, timezone and social links.
//! - **Mentor:** everything a learner has plus expertise, availability,
//!   hourly rate and experience.
//!
//! Field updates go through [`form::FieldTarget`], a closed set of scalar and
//! nested targets resolved from wire names such as `fullName` or
//! `socialLinks.github`. Validation is a pure function of the draft and returns
//! field errors as data; it never fails.
//!
//! ## Submission
//!
//! Submitting runs validation first and only reaches the network when the draft
//! is clean. The request is a single `PUT /profile/me`. On success the draft is
//! replaced by the canonical record returned by the server; on failure a single
//! general message is kept for display. A submission ticket guards against
//! re-entrant submits and lets a host drop late responses after teardown.
//!
//! ## Transport
//!
//! [`api::ApiClient`] implements [`api::ProfileApi`] on top of `reqwest` with a
//! bounded timeout and bearer-token authentication. The token is held as a
//! `SecretString` and never logged.

pub mod api;
pub mod cli;
pub mod form;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
