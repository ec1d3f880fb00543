use std::sync::Arc;

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Json},
    routing::{get, post},
};
use chrono::Utc;
use serde_json::{Map, Value as JsonValue, json};
use tokio::{net::TcpListener, time::Duration};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    clients::sink::{LogSink, NotificationSink},
    config::Config,
    models::{
        notification::AcknowledgedRecord, response::StatusResponse,
        validation::validate_required_keys,
    },
    utils::process_accepted,
};

/// Header carrying the shared secret agreed with the upstream notifier.
pub const AUTH_HEADER: &str = "x-media-auth";

pub struct AppState {
    pub config: Config,
    pub sink: Arc<dyn NotificationSink>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/notify", post(receive_notification))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_api_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(AppState {
        config: config.clone(),
        sink: Arc::new(LogSink),
    });

    let app = router(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = TcpListener::bind(&addr).await?;

    info!(address = %addr, "Notification receiver started");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Webhook endpoint for media-processing notifications.
///
/// Gates run in strict order: auth, JSON decode, required-key presence.
/// The first failure responds and stops. A payload that clears them is
/// acknowledged with 202 immediately; the sink write happens on a
/// detached task after the configured delay, so the notifier never waits
/// on it.
async fn receive_notification(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let secret = match headers.get(AUTH_HEADER) {
        Some(value) => value,
        None => return reject(StatusCode::FORBIDDEN, "Missing authorization header"),
    };

    if secret.as_bytes() != state.config.auth_secret.as_bytes() {
        return reject(StatusCode::FORBIDDEN, "Invalid authorization header");
    }

    let payload: Map<String, JsonValue> = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(_) => return reject(StatusCode::BAD_REQUEST, "Invalid JSON"),
    };

    if let Err(key) = validate_required_keys(&payload) {
        return reject(StatusCode::BAD_REQUEST, &format!("Missing {key}"));
    }

    let record = AcknowledgedRecord::from_payload(&payload);

    info!(
        record_id = %record.id,
        media_id = %record.media_id,
        status = %record.status,
        "Notification accepted"
    );

    let sink = Arc::clone(&state.sink);
    let delay = Duration::from_millis(state.config.processing_delay_ms);
    tokio::spawn(process_accepted(record, sink, delay));

    (StatusCode::ACCEPTED, Json(StatusResponse::accepted()))
}

fn reject(code: StatusCode, reason: &str) -> (StatusCode, Json<StatusResponse>) {
    (code, Json(StatusResponse::rejected(reason)))
}

async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    }))
}
