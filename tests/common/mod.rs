// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use rideshare_client::config::Config;
use rideshare_client::models::sos::LocationSample;
use rideshare_client::ports::{
    ImagePicker, LocationError, LocationProvider, Notice, Notifier, PickedImage,
};
use rideshare_client::RideShareClient;

/// Install a fmt subscriber for tests that want transition logs on failure.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One request as the stub backend saw it.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    /// Path including the query string
    pub path: String,
    /// Token from the `Authorization: Bearer ...` header
    pub bearer: Option<String>,
    pub content_type: Option<String>,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
    pub raw_body: Vec<u8>,
}

struct StubState {
    routes: HashMap<(String, String), (StatusCode, Value)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

/// In-process backend: serves scripted JSON responses and records every
/// request for exactly-once assertions.
pub struct StubBackend {
    pub base_url: String,
    state: Arc<StubState>,
    server: JoinHandle<()>,
}

#[allow(dead_code)]
impl StubBackend {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().unwrap().len()
    }

    /// Requests matching a method and path prefix (query ignored).
    pub fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path.starts_with(path))
            .collect()
    }
}

impl Drop for StubBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

pub fn stub_backend() -> StubBackendBuilder {
    StubBackendBuilder::default()
}

#[derive(Default)]
pub struct StubBackendBuilder {
    routes: HashMap<(String, String), (StatusCode, Value)>,
}

impl StubBackendBuilder {
    /// Answer `method path` with `status` and a JSON `body`.
    pub fn route(mut self, method: &str, path: &str, status: u16, body: Value) -> Self {
        self.routes.insert(
            (method.to_string(), path.to_string()),
            (StatusCode::from_u16(status).expect("valid status"), body),
        );
        self
    }

    pub async fn start(self) -> StubBackend {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener addr");

        let state = Arc::new(StubState {
            routes: self.routes,
            requests: Mutex::new(Vec::new()),
        });
        let router = Router::new()
            .fallback(record_and_respond)
            .with_state(state.clone());

        let server = tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, router).await {
                eprintln!("stub backend stopped: {err}");
            }
        });

        StubBackend {
            base_url: format!("http://{}", addr),
            state,
            server,
        }
    }
}

async fn record_and_respond(State(stub): State<Arc<StubState>>, request: Request) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.to_string())
        .unwrap_or_else(|| path.clone());
    let bearer = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(String::from);
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    stub.requests.lock().unwrap().push(RecordedRequest {
        method: method.clone(),
        path: path_and_query,
        bearer,
        content_type,
        body,
        raw_body: bytes.to_vec(),
    });

    match stub.routes.get(&(method, path)) {
        Some((status, body)) => (*status, Json(body.clone())).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Not found."})),
        )
            .into_response(),
    }
}

/// Client wired to a stub backend.
#[allow(dead_code)]
pub fn client_for(
    backend: &StubBackend,
    tokens: Arc<dyn rideshare_client::ports::TokenStore>,
) -> RideShareClient {
    let config = Config {
        base_url: backend.base_url.clone(),
        request_timeout_secs: 5,
    };
    RideShareClient::new(&config, tokens).expect("client should build")
}

/// Notifier that records every notice.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

#[allow(dead_code)]
impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: Notice) {
        self.notices.lock().unwrap().push(notice);
    }
}

/// Location provider with a scripted outcome.
#[allow(dead_code)]
pub enum StubLocation {
    Fix(LocationSample),
    PermissionDenied,
    Unavailable,
}

#[async_trait::async_trait]
impl LocationProvider for StubLocation {
    async fn current_position(&self) -> Result<LocationSample, LocationError> {
        match self {
            StubLocation::Fix(sample) => Ok(*sample),
            StubLocation::PermissionDenied => Err(LocationError::PermissionDenied),
            StubLocation::Unavailable => {
                Err(LocationError::Unavailable("no fix acquired".to_string()))
            }
        }
    }
}

/// Picker that returns a fixed image, or cancellation when `None`.
#[allow(dead_code)]
pub struct StubPicker {
    pub image: Option<PickedImage>,
}

#[async_trait::async_trait]
impl ImagePicker for StubPicker {
    async fn pick_image(&self) -> anyhow::Result<Option<PickedImage>> {
        Ok(self.image.clone())
    }
}

/// Backend-shaped user record.
#[allow(dead_code)]
pub fn user_json(id: u64) -> Value {
    json!({
        "id": id,
        "email": format!("user{}@example.com", id),
        "first_name": "User",
        "last_name": format!("{}", id),
        "gender": null,
        "student_id": null,
        "phone_number": null,
        "profile_photo": null,
        "expo_push_token": null,
        "latitude": null,
        "longitude": null,
    })
}

/// Backend-shaped ride record. `member_ids` are the joined users; the
/// serializer lists the host first, as the real one does.
#[allow(dead_code)]
pub fn ride_json(id: u64, host_id: u64, member_ids: &[u64]) -> Value {
    let mut members = vec![user_json(host_id)];
    members.extend(member_ids.iter().map(|id| user_json(*id)));

    json!({
        "id": id,
        "host": user_json(host_id),
        "vehicle_type": "Private Car",
        "pickup_name": "Dhanmondi",
        "pickup_longitude": 90.374,
        "pickup_latitude": 23.746,
        "destination_name": "Banani",
        "destination_longitude": 90.4043,
        "destination_latitude": 23.7937,
        "departure_time": "2026-03-01T08:30:00+06:00",
        "total_fare": "450.00",
        "per_person_fare": 150.0,
        "seats_available": 2,
        "is_female_only": false,
        "vehicle_number_plate": "DHA-1234",
        "ride_code": "AB12CD",
        "is_completed": false,
        "created_at": "2026-02-20T10:00:00+06:00",
        "members": members,
    })
}

/// Backend-shaped emergency contact relation.
#[allow(dead_code)]
pub fn contact_json(relation_id: u64, user_id: u64, phone: Option<&str>) -> Value {
    let mut contact = user_json(user_id);
    contact["phone_number"] = match phone {
        Some(p) => json!(p),
        None => Value::Null,
    };

    json!({
        "id": relation_id,
        "contact": contact,
        "added_at": "2026-02-11T09:00:00+06:00",
    })
}
