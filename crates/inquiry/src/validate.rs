use regex::Regex;
use std::sync::LazyLock;

use crate::draft::InquiryDraft;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Local validation failure. Never reaches the network; the form stays
/// editable with the display message surfaced inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in your name, email and message.")]
    MissingFields,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
        }
    }
}

/// Name, email and message must be non-empty after trimming. Phone and
/// subject are always optional.
pub fn validate_required(draft: &InquiryDraft) -> Result<(), ValidationError> {
    if draft.sender_name.trim().is_empty()
        || draft.sender_email.trim().is_empty()
        || draft.message.trim().is_empty()
    {
        return Err(ValidationError::MissingFields);
    }

    Ok(())
}

pub fn validate_email_shape(draft: &InquiryDraft) -> Result<(), ValidationError> {
    if !RE_EMAIL.is_match(&draft.sender_email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Combined form-level check. Required fields first, then email shape;
/// short-circuits on the first failure so the user-facing message is
/// deterministic.
pub fn validate(draft: &InquiryDraft) -> Result<(), ValidationError> {
    validate_required(draft)?;
    validate_email_shape(draft)?;

    Ok(())
}
