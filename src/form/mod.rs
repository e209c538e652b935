//! Profile form model: draft, field targets, validation, skills, submission.

pub mod draft;
pub mod field;
pub mod model;
pub mod skills;
pub mod validation;

pub use draft::{
    is_known_timezone, MentorFields, ProfileBase, ProfileDraft, MAX_BIO_CHARS, TIMEZONES,
};
pub use field::{FieldGroup, FieldTarget, ScalarField, SocialKey};
pub use model::{
    ProfileForm, Submission, SubmissionTicket, SubmitOutcome, SUBMIT_FALLBACK_MESSAGE,
};
pub use skills::{SkillCatalog, MAX_VISIBLE_SUGGESTIONS};
pub use validation::{validate, ValidationErrors};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field {0} is only available on mentor profiles")]
    FieldUnavailable(&'static str),
    #[error("a submission is already in progress")]
    SubmissionInProgress,
}
