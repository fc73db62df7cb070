use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::draft::InquiryDraft;
use crate::error::Result;
use crate::route::RouteTable;
use crate::types::{InquiryTarget, SubmissionResult};
use crate::validate;

/// Fallback shown when the backend is unreachable or replies with something
/// we cannot interpret.
const NETWORK_FALLBACK: &str = "Unable to send your inquiry right now. Please try again later.";
const SERVER_FALLBACK: &str = "The server could not process your inquiry.";
const SUCCESS_FALLBACK: &str = "Your inquiry has been sent.";

/// Envelope every inquiry endpoint replies with.
#[derive(Debug, Deserialize)]
struct ResponseEnvelope {
    success: bool,
    message: Option<String>,
}

/// Translates a draft plus target into one HTTP request and the response
/// back into a `SubmissionResult`. No error escapes this boundary as `Err`;
/// every failure mode is folded into the result so the caller always has
/// something to show the user.
#[derive(Debug, Clone)]
pub struct SubmissionClient {
    http: reqwest::Client,
    base: Url,
    routes: RouteTable,
}

impl SubmissionClient {
    pub fn new(base_url: &str, routes: RouteTable, timeout: Duration) -> Result<Self> {
        let base = Url::parse(base_url)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base, routes })
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Deliver one inquiry. Validates first; a draft that fails validation
    /// never produces a network call. Otherwise exactly one POST is issued,
    /// with no retries: a failed submission requires explicit user
    /// re-initiation.
    pub async fn submit(&self, draft: &InquiryDraft, target: &InquiryTarget) -> SubmissionResult {
        if let Err(err) = validate::validate(draft) {
            tracing::debug!(code = err.code(), "inquiry rejected before submission");
            return SubmissionResult::validation(&err);
        }

        let route = self.routes.route_for(target.kind);
        let url = match self.base.join(&route.path) {
            Ok(url) => url,
            Err(err) => {
                tracing::error!(path = %route.path, error = %err, "unusable inquiry route");
                return SubmissionResult::network_error(NETWORK_FALLBACK);
            }
        };

        let body = route.contract.body(draft, target);
        tracing::info!(kind = %target.kind, target_id = %target.id, url = %url, "submitting inquiry");

        let response = match self.http.post(url).json(&body).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(kind = %target.kind, error = %err, "inquiry request failed");
                return SubmissionResult::network_error(NETWORK_FALLBACK);
            }
        };

        let status = response.status();
        match response.json::<ResponseEnvelope>().await {
            // A parseable envelope wins over the HTTP status in both
            // directions; the observed backends send `success: false` with
            // 2xx and 4xx alike.
            Ok(envelope) if envelope.success => {
                let message = envelope.message.unwrap_or_else(|| SUCCESS_FALLBACK.to_string());
                tracing::info!(kind = %target.kind, target_id = %target.id, "inquiry delivered");
                SubmissionResult::success(message)
            }
            Ok(envelope) => {
                let message = envelope.message.unwrap_or_else(|| SERVER_FALLBACK.to_string());
                tracing::warn!(kind = %target.kind, %status, server_message = %message, "inquiry rejected by server");
                SubmissionResult::server_error(message)
            }
            Err(err) => {
                tracing::warn!(kind = %target.kind, %status, error = %err, "unparseable inquiry response");
                SubmissionResult::network_error(NETWORK_FALLBACK)
            }
        }
    }
}
