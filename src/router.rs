use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::access::enforce_access;
use crate::middleware::auth::{agent_token_filter, employee_token_filter, hr_token_filter};
use crate::modules::auth::router::init_auth_router;
use crate::modules::health::router::init_health_router;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Assemble the full application router.
///
/// Layer order matters: requests pass through logging, then CORS, then
/// the employee, agent, and HR token filters in that order, then access
/// enforcement, and only then reach a route. The filters must all run
/// before enforcement, and HR runs last so that its principal would win
/// if a token ever verified for more than one audience.
pub fn init_router(state: AppState) -> Router {
    let uploads_dir = std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(init_health_router())
        .nest("/auth", init_auth_router())
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .fallback(not_found)
        .with_state(state.clone())
        .layer(middleware::from_fn_with_state(state.clone(), enforce_access))
        .layer(middleware::from_fn_with_state(state.clone(), hr_token_filter))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            agent_token_filter,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            employee_token_filter,
        ))
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}

// Paths with no route still pass access control first, so an anonymous
// request to an unknown protected path reads 401, not 404.
async fn not_found() -> AppError {
    AppError::NotFound("No route for the requested path".to_string())
}
