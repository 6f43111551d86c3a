use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::forgot_password;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/forgot-password", post(forgot_password))
}
