use clap::{Args, ValueEnum};
use profetch_inquiry::{InquiryDraft, InquiryTarget, SubmissionClient, SubmissionOutcome, TargetKind};

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Manpower,
    Equipment,
}

impl From<Kind> for TargetKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Manpower => TargetKind::Manpower,
            Kind::Equipment => TargetKind::Equipment,
        }
    }
}

#[derive(Args)]
pub struct SendArgs {
    /// Listing category to contact
    #[arg(long, value_enum)]
    pub kind: Kind,

    /// Listing or profile id
    #[arg(long)]
    pub id: String,

    /// Listing display name, used to pre-fill subject and message
    #[arg(long)]
    pub display_name: Option<String>,

    /// Your name
    #[arg(long)]
    pub name: String,

    /// Your email address
    #[arg(long)]
    pub email: String,

    /// Your phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Subject line (defaults to the per-category template)
    #[arg(long)]
    pub subject: Option<String>,

    /// Message body (defaults to the per-category template)
    #[arg(long)]
    pub message: Option<String>,
}

/// Compose, validate and deliver one inquiry from the terminal. Exits
/// non-zero on any outcome other than success.
pub async fn send(config: crate::config::Config, args: SendArgs) -> anyhow::Result<()> {
    let client = SubmissionClient::new(
        &config.backend.base_url,
        config.backend.routes.clone(),
        config.backend.timeout(),
    )?;

    let display_name = args.display_name.unwrap_or_else(|| args.id.clone());
    let target = InquiryTarget::new(args.kind.into(), args.id, display_name);

    let mut draft = InquiryDraft::seeded(&target);
    draft.sender_name = args.name;
    draft.sender_email = args.email;
    if let Some(phone) = args.phone {
        draft.sender_phone = phone;
    }
    if let Some(subject) = args.subject {
        draft.subject = subject;
    }
    if let Some(message) = args.message {
        draft.message = message;
    }

    let result = client.submit(&draft, &target).await;
    match result.outcome {
        SubmissionOutcome::Success => {
            tracing::info!(kind = %target.kind, target_id = %target.id, "inquiry delivered");
            println!("{}", result.message);
            Ok(())
        }
        outcome => {
            tracing::warn!(outcome = %outcome, "inquiry not delivered");
            anyhow::bail!("{}: {}", outcome, result.message)
        }
    }
}
