use crate::api::AppState;
use crate::api::schemas::health::HealthResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

/// Liveness probe: returns 200 OK as long as the server is running.
pub async fn livez() -> impl IntoResponse {
    StatusCode::OK
}

/// Readiness probe: checks that the message store is reachable.
pub async fn readyz(State(state): State<AppState>) -> impl IntoResponse {
    let mut status_code = StatusCode::OK;
    let storage_status = if let Err(e) = state.health_service.check_storage().await {
        tracing::warn!(error = %e, component = "storage", "Readiness probe failed");
        status_code = StatusCode::SERVICE_UNAVAILABLE;
        "error"
    } else {
        "ok"
    };

    let response = HealthResponse {
        status: if status_code == StatusCode::OK { "ok" } else { "error" }.to_string(),
        storage: storage_status.to_string(),
    };

    (status_code, Json(response))
}
