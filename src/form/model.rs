//! The profile form: draft ownership, field edits, skill tags and submission.
//!
//! Submission is split in two phases so a host can release the form while the
//! request is in flight:
//!
//! 1. [`ProfileForm::begin_submit`] validates and hands out a [`Submission`]
//!    carrying a ticket and the request body.
//! 2. [`ProfileForm::complete_submit`] applies the response, but only if the
//!    ticket is still the current one.
//!
//! [`ProfileForm::abandon`] forgets the current ticket, so a response that lands
//! after teardown is discarded. [`ProfileForm::submit`] runs both phases against
//! a [`ProfileApi`].

use super::{
    draft::ProfileDraft,
    field::FieldTarget,
    skills::{SkillCatalog, MAX_VISIBLE_SUGGESTIONS},
    validation::{validate, ValidationErrors},
    FormError,
};
use crate::api::{
    types::{ProfileRecord, ProfileUpdate},
    AppError, ProfileApi,
};
use std::fmt;
use tracing::{debug, info, warn};

/// General error shown when the server gives no usable message.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Failed to update profile";

type CompletionCallback = Box<dyn FnMut(&ProfileRecord) + Send>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

/// An accepted submission waiting for its response.
#[derive(Clone, Debug)]
pub struct Submission {
    ticket: SubmissionTicket,
    update: ProfileUpdate,
}

impl Submission {
    #[must_use]
    pub fn ticket(&self) -> SubmissionTicket {
        self.ticket
    }

    #[must_use]
    pub fn update(&self) -> &ProfileUpdate {
        &self.update
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// Validation failed; field errors are stored on the form.
    Invalid,
    /// Another submission is still pending.
    Busy,
    /// The server accepted the draft and the form now holds its record.
    Saved,
    /// The request failed; the general error is stored on the form.
    Failed,
    /// The response belonged to an abandoned submission and was ignored.
    Discarded,
}

pub struct ProfileForm {
    draft: ProfileDraft,
    errors: ValidationErrors,
    general_error: Option<String>,
    catalog: SkillCatalog,
    skill_input: String,
    show_suggestions: bool,
    pending: Option<SubmissionTicket>,
    next_ticket: u64,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for ProfileForm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ProfileForm")
            .field("draft", &self.draft)
            .field("errors", &self.errors)
            .field("general_error", &self.general_error)
            .field("skill_input", &self.skill_input)
            .field("show_suggestions", &self.show_suggestions)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl ProfileForm {
    #[must_use]
    pub fn new(draft: ProfileDraft, catalog: SkillCatalog) -> Self {
        Self {
            draft,
            errors: ValidationErrors::default(),
            general_error: None,
            catalog,
            skill_input: String::new(),
            show_suggestions: false,
            pending: None,
            next_ticket: 0,
            on_complete: None,
        }
    }

    /// Seed the form from the current profile record.
    #[must_use]
    pub fn from_record(record: &ProfileRecord, catalog: SkillCatalog) -> Self {
        Self::new(ProfileDraft::from_record(record), catalog)
    }

    /// Register the callback fired after a successful submission.
    #[must_use]
    pub fn with_on_complete(
        mut self,
        callback: impl FnMut(&ProfileRecord) + Send + 'static,
    ) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    #[must_use]
    pub fn skill_input(&self) -> &str {
        &self.skill_input
    }

    #[must_use]
    pub fn suggestions_visible(&self) -> bool {
        self.show_suggestions
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Update a field and clear its validation error.
    ///
    /// # Errors
    /// Returns `FormError::FieldUnavailable` for mentor-only fields on a learner draft.
    pub fn set_field(
        &mut self,
        target: FieldTarget,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        self.draft.set(target, value.into())?;
        self.errors.remove(target.name());
        debug!(field = %target, "field updated");
        Ok(())
    }

    /// [`Self::set_field`] addressed by wire name, e.g. `socialLinks.github`.
    ///
    /// # Errors
    /// Returns `FormError::UnknownField` if `name` is not a known field.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), FormError> {
        let target: FieldTarget = name.parse()?;
        self.set_field(target, value)
    }

    /// Update the skill input buffer; suggestions show while it is non-blank.
    pub fn set_skill_input(&mut self, value: impl Into<String>) {
        self.skill_input = value.into();
        self.show_suggestions = !self.skill_input.trim().is_empty();
    }

    /// Append a trimmed skill unless it is blank or already present. The input
    /// buffer and suggestion list are reset either way. Returns whether the
    /// skill was added.
    pub fn add_skill(&mut self, candidate: &str) -> bool {
        self.skill_input.clear();
        self.show_suggestions = false;

        let skill = candidate.trim();
        if skill.is_empty() || self.draft.skills().iter().any(|owned| owned == skill) {
            return false;
        }

        self.draft.base_mut().skills.push(skill.to_string());
        self.errors.remove("skills");
        debug!(skill, "skill added");
        true
    }

    /// Remove `target` from the skills. Returns whether it was present.
    pub fn remove_skill(&mut self, target: &str) -> bool {
        let skills = &mut self.draft.base_mut().skills;
        match skills.iter().position(|owned| owned == target) {
            Some(index) => {
                skills.remove(index);
                self.errors.remove("skills");
                debug!(skill = target, "skill removed");
                true
            }
            None => false,
        }
    }

    /// Catalog skills matching `query` that the draft does not already have.
    pub fn suggest_skills<'a>(&'a self, query: &str) -> impl Iterator<Item = &'a str> + Clone + 'a {
        self.catalog.suggest(query, self.draft.skills())
    }

    /// Suggestions for the current input buffer, capped for display.
    #[must_use]
    pub fn visible_suggestions(&self) -> Vec<&str> {
        if !self.show_suggestions {
            return Vec::new();
        }
        self.suggest_skills(&self.skill_input)
            .take(MAX_VISIBLE_SUGGESTIONS)
            .collect()
    }

    /// Validate the current draft without storing the result.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        validate(&self.draft)
    }

    /// Validate and, if clean, start a submission. Field errors are replaced
    /// wholesale and the general error is cleared. Returns `Ok(None)` when
    /// validation fails.
    ///
    /// # Errors
    /// Returns `FormError::SubmissionInProgress` while another submission is pending.
    pub fn begin_submit(&mut self) -> Result<Option<Submission>, FormError> {
        if self.pending.is_some() {
            return Err(FormError::SubmissionInProgress);
        }

        self.general_error = None;
        self.errors = validate(&self.draft);
        if !self.errors.is_empty() {
            debug!(errors = self.errors.len(), "profile draft rejected by validation");
            return Ok(None);
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);

        Ok(Some(Submission {
            ticket,
            update: self.draft.to_update(),
        }))
    }

    /// Apply the response for `ticket`. Responses for abandoned tickets are ignored.
    pub fn complete_submit(
        &mut self,
        ticket: SubmissionTicket,
        result: Result<ProfileRecord, AppError>,
    ) -> SubmitOutcome {
        if self.pending != Some(ticket) {
            debug!(?ticket, "discarding response for abandoned submission");
            return SubmitOutcome::Discarded;
        }
        self.pending = None;

        match result {
            Ok(record) => {
                self.draft = ProfileDraft::from_record(&record);
                self.errors = ValidationErrors::default();
                info!("profile updated");
                if let Some(callback) = self.on_complete.as_mut() {
                    callback(&record);
                }
                SubmitOutcome::Saved
            }
            Err(err) => {
                warn!("profile update failed: {err}");
                self.general_error = Some(
                    err.server_message()
                        .unwrap_or(SUBMIT_FALLBACK_MESSAGE)
                        .to_string(),
                );
                SubmitOutcome::Failed
            }
        }
    }

    /// Forget the pending submission; its response will be discarded.
    pub fn abandon(&mut self) {
        if let Some(ticket) = self.pending.take() {
            debug!(?ticket, "submission abandoned");
        }
    }

    /// Validate and submit through `api`. At most one request is sent.
    ///
    /// Dropping the returned future before it resolves returns the form to idle;
    /// the draft and errors are left as they were.
    pub async fn submit<A: ProfileApi>(&mut self, api: &A) -> SubmitOutcome {
        let submission = match self.begin_submit() {
            Ok(Some(submission)) => submission,
            Ok(None) => return SubmitOutcome::Invalid,
            Err(_) => return SubmitOutcome::Busy,
        };

        let guard = PendingGuard {
            form: self,
            ticket: submission.ticket(),
        };
        let result = api.update_profile(submission.update()).await;
        guard.form.complete_submit(guard.ticket, result)
    }
}

/// Clears the pending ticket if `submit` is dropped before the response arrives.
struct PendingGuard<'a> {
    form: &'a mut ProfileForm,
    ticket: SubmissionTicket,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.form.pending == Some(self.ticket) {
            debug!(ticket = ?self.ticket, "submission cancelled before completion");
            self.form.pending = None;
        }
    }
}
