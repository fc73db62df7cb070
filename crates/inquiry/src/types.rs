use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::validate::ValidationError;

/// The two supply categories a visitor can inquire about.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TargetKind {
    Manpower,
    Equipment,
}

impl TargetKind {
    /// Identifying key the flat inquiry endpoints expect in the request body.
    pub fn id_field(&self) -> &'static str {
        match self {
            Self::Manpower => "manpowerId",
            Self::Equipment => "equipmentId",
        }
    }
}

/// The listing or profile being contacted. Supplied by the parent view and
/// never mutated by the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryTarget {
    pub kind: TargetKind,
    pub id: String,
    pub display_name: String,
    pub owner_contact_email: Option<String>,
}

impl InquiryTarget {
    pub fn new(kind: TargetKind, id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
            display_name: display_name.into(),
            owner_contact_email: None,
        }
    }
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SubmissionOutcome {
    Success,
    ValidationError,
    NetworkError,
    ServerError,
}

/// What a submission attempt came to. The message is shown to the user
/// verbatim, so server-supplied text passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionResult {
    pub outcome: SubmissionOutcome,
    pub message: String,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: SubmissionOutcome::Success,
            message: message.into(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            outcome: SubmissionOutcome::ServerError,
            message: message.into(),
        }
    }

    pub fn network_error(message: impl Into<String>) -> Self {
        Self {
            outcome: SubmissionOutcome::NetworkError,
            message: message.into(),
        }
    }

    pub fn validation(err: &ValidationError) -> Self {
        Self {
            outcome: SubmissionOutcome::ValidationError,
            message: err.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome == SubmissionOutcome::Success
    }
}
