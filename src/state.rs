use std::sync::Arc;

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::security::SecurityPolicy;

/// Shared application state, cloned into every middleware and handler.
///
/// The security policy is built once at startup and shared behind an
/// `Arc`; nothing mutates it afterwards, so request handling needs no
/// locking.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub security: Arc<SecurityPolicy>,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        security: Arc::new(SecurityPolicy::default()),
    }
}
