use std::sync::Arc;
use std::time::Duration;

use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router, extract::State};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use profetch_inquiry::{InquiryDraft, InquiryTarget, RouteTable, SubmissionClient, TargetKind};

/// How the stub backend answers every inquiry POST.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Behavior {
    /// `{success: true, message: "Sent"}`
    Accept,
    /// `{success: false, message: "Owner email invalid"}`
    Reject,
    /// 500 with a non-JSON body.
    Garbage,
}

#[derive(Debug)]
pub struct RecordedRequest {
    pub path: String,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    behavior: Behavior,
    delay: Duration,
}

pub struct StubServer {
    pub base_url: String,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn request_count(&self) -> usize {
        self.requests.lock().await.len()
    }
}

async fn record(State(state): State<StubState>, uri: Uri, Json(body): Json<Value>) -> Response {
    tokio::time::sleep(state.delay).await;
    state.requests.lock().await.push(RecordedRequest {
        path: uri.path().to_string(),
        body,
    });

    match state.behavior {
        Behavior::Accept => Json(json!({"success": true, "message": "Sent"})).into_response(),
        Behavior::Reject => {
            Json(json!({"success": false, "message": "Owner email invalid"})).into_response()
        }
        Behavior::Garbage => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
    }
}

#[allow(dead_code)]
pub async fn spawn_stub(behavior: Behavior) -> anyhow::Result<StubServer> {
    spawn_stub_with_delay(behavior, Duration::ZERO).await
}

/// Stub backend exposing all four observed endpoint paths on an ephemeral
/// port, recording every request it receives.
#[allow(dead_code)]
pub async fn spawn_stub_with_delay(
    behavior: Behavior,
    delay: Duration,
) -> anyhow::Result<StubServer> {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        requests: requests.clone(),
        behavior,
        delay,
    };

    let app = Router::new()
        .route("/api/inquiry/manpower", post(record))
        .route("/api/inquiry/equipment", post(record))
        .route("/api/contact/equipment", post(record))
        .route("/api/contact/freelancer", post(record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(StubServer {
        base_url: format!("http://{addr}"),
        requests,
    })
}

#[allow(dead_code)]
pub fn client(base_url: &str) -> SubmissionClient {
    client_with_routes(base_url, RouteTable::default())
}

#[allow(dead_code)]
pub fn client_with_routes(base_url: &str, routes: RouteTable) -> SubmissionClient {
    SubmissionClient::new(base_url, routes, Duration::from_secs(2)).unwrap()
}

#[allow(dead_code)]
pub fn valid_draft() -> InquiryDraft {
    InquiryDraft {
        sender_name: "Jane".to_string(),
        sender_email: "jane@x.com".to_string(),
        sender_phone: String::new(),
        subject: "Rental inquiry".to_string(),
        message: "Interested in renting this.".to_string(),
    }
}

#[allow(dead_code)]
pub fn equipment_target() -> InquiryTarget {
    InquiryTarget::new(TargetKind::Equipment, "42", "Excavator X")
}

#[allow(dead_code)]
pub fn manpower_target() -> InquiryTarget {
    InquiryTarget::new(TargetKind::Manpower, "7", "Ade the Welder")
}
