use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use insurai_backend::config::cors::CorsConfig;
use insurai_backend::config::jwt::JwtConfig;
use insurai_backend::modules::auth::model::{Role, TokenAudience};
use insurai_backend::router::init_router;
use insurai_backend::security::SecurityPolicy;
use insurai_backend::state::AppState;
use insurai_backend::utils::jwt::create_access_token;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test_secret_key_for_testing_purposes".to_string(),
        issuer: "insurai-backend".to_string(),
        access_token_expiry: 3600,
    }
}

pub fn setup_test_app() -> axum::Router {
    let state = AppState {
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        security: Arc::new(SecurityPolicy::default()),
    };
    init_router(state)
}

/// Mint a token the test app will accept.
#[allow(dead_code)]
pub fn mint_token(subject: &str, roles: &[Role], audience: TokenAudience) -> String {
    create_access_token(subject, roles, audience, &test_jwt_config()).unwrap()
}

#[allow(dead_code)]
pub fn get(path: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn get_with_token(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(path)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}
