mod client;
mod controller;
mod draft;
mod error;
mod route;
mod types;
mod validate;

pub use client::SubmissionClient;
pub use controller::{DEFAULT_AUTO_CLOSE, ModalController, ModalState};
pub use draft::{InquiryDraft, MIN_MESSAGE_HINT};
pub use error::{Error, Result};
pub use route::{Route, RouteTable, WireContract};
pub use types::{InquiryTarget, SubmissionOutcome, SubmissionResult, TargetKind};
pub use validate::{ValidationError, validate, validate_email_shape, validate_required};
