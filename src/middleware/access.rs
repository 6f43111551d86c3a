//! Central access enforcement for the HTTP surface.
//!
//! Runs after all token filters, so the request either carries a
//! verified [`Principal`] or it does not. The ordered rule table in
//! [`crate::security`] decides the outcome; denials short-circuit with
//! 401 or 403 and never reach a handler.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::modules::auth::model::Principal;
use crate::security::{Decision, DenyReason};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub async fn enforce_access(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let decision = state
        .security
        .decide(req.uri().path(), req.extensions().get::<Principal>());

    match decision {
        Decision::Allow => next.run(req).await,
        Decision::Deny(reason) => {
            let pattern = state
                .security
                .matching_rule(req.uri().path())
                .map(|rule| rule.pattern.as_str())
                .unwrap_or("<default>");
            debug!(
                path = %req.uri().path(),
                rule = pattern,
                reason = %reason,
                "request denied"
            );

            let err = match reason {
                DenyReason::Unauthenticated => {
                    AppError::Unauthorized("Authentication required".to_string())
                }
                DenyReason::Forbidden => {
                    AppError::Forbidden("Insufficient privileges for this resource".to_string())
                }
            };
            err.into_response()
        }
    }
}
