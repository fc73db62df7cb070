use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::client::SubmissionClient;
use crate::draft::InquiryDraft;
use crate::types::{InquiryTarget, SubmissionOutcome, SubmissionResult};
use crate::validate;

pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(2500);

/// Display state of one contact modal.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalState {
    Closed,
    /// Form visible and editable. `error` carries the inline validation or
    /// submission message, if any.
    Editing { error: Option<String> },
    /// A request is in flight; the submit control is disabled and the modal
    /// cannot be dismissed.
    Submitting,
    /// Delivery confirmed; the auto-close timer is armed.
    Success { message: String },
}

struct Inner {
    state: ModalState,
    draft: InquiryDraft,
    target: Option<InquiryTarget>,
    /// Bumped on every close/reopen. An auto-close timer only fires when
    /// the epoch it captured still matches, so a timer armed for a previous
    /// open/close cycle can never close a reopened modal.
    epoch: u64,
    timer: Option<JoinHandle<()>>,
}

impl Inner {
    fn reset_closed(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        self.state = ModalState::Closed;
        self.draft.clear();
        self.target = None;
        self.epoch += 1;
    }
}

/// Finite state machine driving one inquiry modal:
/// `Closed -> Editing -> Submitting -> Success -> Closed`, with
/// `Submitting -> Editing(withError)` on any non-success outcome.
///
/// Cheap to clone; clones share the same modal instance.
#[derive(Clone)]
pub struct ModalController {
    inner: Arc<Mutex<Inner>>,
    client: SubmissionClient,
    auto_close: Duration,
}

impl ModalController {
    pub fn new(client: SubmissionClient, auto_close: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: ModalState::Closed,
                draft: InquiryDraft::default(),
                target: None,
                epoch: 0,
                timer: None,
            })),
            client,
            auto_close,
        }
    }

    pub async fn state(&self) -> ModalState {
        self.inner.lock().await.state.clone()
    }

    pub async fn draft(&self) -> InquiryDraft {
        self.inner.lock().await.draft.clone()
    }

    /// Open the modal for a target, seeding the draft from the per-kind
    /// templates. No-op (returns false) when the modal is already open.
    pub async fn open(&self, target: InquiryTarget) -> bool {
        let mut inner = self.inner.lock().await;
        if inner.state != ModalState::Closed {
            return false;
        }

        tracing::debug!(kind = %target.kind, target_id = %target.id, "inquiry modal opened");
        inner.draft = InquiryDraft::seeded(&target);
        inner.target = Some(target);
        inner.state = ModalState::Editing { error: None };
        true
    }

    /// Apply a form edit. Only allowed while editing; returns false
    /// otherwise.
    pub async fn edit(&self, apply: impl FnOnce(&mut InquiryDraft)) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.state {
            ModalState::Editing { .. } => {
                apply(&mut inner.draft);
                true
            }
            _ => false,
        }
    }

    /// User pressed submit. Returns `None` when the press is a no-op: modal
    /// closed, already showing success, or a request already in flight (the
    /// pending guard: at most one outstanding request per draft).
    ///
    /// Validation failures stay in `Editing` with the message inline and
    /// issue no network call. A non-success submission returns to `Editing`
    /// with the draft preserved so the user can correct and resubmit.
    pub async fn submit(&self) -> Option<SubmissionResult> {
        let (draft, target, epoch) = {
            let mut inner = self.inner.lock().await;
            if !matches!(inner.state, ModalState::Editing { .. }) {
                return None;
            }
            let target = inner.target.clone()?;

            if let Err(err) = validate::validate(&inner.draft) {
                inner.state = ModalState::Editing {
                    error: Some(err.to_string()),
                };
                return Some(SubmissionResult::validation(&err));
            }

            inner.state = ModalState::Submitting;
            (inner.draft.clone(), target, inner.epoch)
        };

        // Lock released while the request is in flight; concurrent submit
        // calls observe `Submitting` and bail above.
        let result = self.client.submit(&draft, &target).await;

        let mut inner = self.inner.lock().await;
        if inner.epoch != epoch {
            // The modal instance this request belonged to is gone.
            return Some(result);
        }

        match result.outcome {
            SubmissionOutcome::Success => {
                inner.state = ModalState::Success {
                    message: result.message.clone(),
                };
                self.arm_auto_close(&mut inner);
            }
            _ => {
                inner.state = ModalState::Editing {
                    error: Some(result.message.clone()),
                };
            }
        }

        Some(result)
    }

    /// User-initiated dismissal (cancel button, backdrop, X icon) or the
    /// auto-close firing. Discards the draft. Refused (returns false) while
    /// a request is in flight so a resolution never lands on a disposed
    /// modal.
    pub async fn close(&self) -> bool {
        let mut inner = self.inner.lock().await;
        match inner.state {
            ModalState::Submitting => false,
            ModalState::Closed => true,
            _ => {
                tracing::debug!("inquiry modal closed");
                inner.reset_closed();
                true
            }
        }
    }

    fn arm_auto_close(&self, inner: &mut Inner) {
        if let Some(previous) = inner.timer.take() {
            previous.abort();
        }

        let shared = Arc::clone(&self.inner);
        let delay = self.auto_close;
        let epoch = inner.epoch;
        inner.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut inner = shared.lock().await;
            if inner.epoch == epoch && matches!(inner.state, ModalState::Success { .. }) {
                tracing::debug!("inquiry modal auto-closed");
                inner.reset_closed();
            }
        }));
    }
}
