use axum::Json;
use chrono::Utc;

use crate::modules::health::model::{ActuatorHealthResponse, HealthResponse, RootResponse};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner with a live timestamp", body = RootResponse)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "✅ Insurai Backend is running!".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        message: "Welcome to Insurai Insurance API".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
        service: "Insurai Backend".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/actuator/health",
    responses(
        (status = 200, description = "Probe-friendly status body", body = ActuatorHealthResponse)
    ),
    tag = "Health"
)]
pub async fn actuator_health() -> Json<ActuatorHealthResponse> {
    Json(ActuatorHealthResponse {
        status: "UP".to_string(),
    })
}

// Smoke endpoint; unlike the banner routes it sits behind authentication.
#[utoipa::path(
    get,
    path = "/hello",
    responses(
        (status = 200, description = "Plain-text greeting", body = String),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Health",
    security(("bearer_auth" = []))
)]
pub async fn hello() -> &'static str {
    "Hello World from InsurAI!"
}
