use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{actuator_health, health, hello, root};

pub fn init_health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/actuator/health", get(actuator_health))
        .route("/hello", get(hello))
}
