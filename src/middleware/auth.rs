use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::modules::auth::model::{Principal, Role, TokenAudience};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{RejectionReason, verify_token};

/// One verification pass per token audience. Each filter tries the
/// bearer token against its own audience and, on success, attaches the
/// resulting [`Principal`] to the request; every other outcome leaves
/// the request untouched. The filters never reject; enforcement lives
/// in [`crate::middleware::access`].
///
/// The filters run employee, then agent, then HR. All three can only
/// succeed for the same token if it names several audiences at once,
/// which the claim shape rules out; if that ever changed, the HR pass
/// would overwrite the earlier principal.
async fn run_token_filter(
    audience: TokenAudience,
    state: AppState,
    mut req: Request,
    next: Next,
) -> Response {
    match verify_token(bearer_token(&req), audience, &state.jwt_config) {
        Ok(principal) => {
            debug!(
                audience = %audience,
                subject = %principal.subject,
                "bearer token verified"
            );
            req.extensions_mut().insert(principal);
        }
        Err(RejectionReason::Absent) => {}
        Err(reason) => {
            debug!(audience = %audience, reason = %reason, "bearer token not accepted");
        }
    }

    next.run(req).await
}

pub async fn employee_token_filter(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    run_token_filter(TokenAudience::Employee, state, req, next).await
}

pub async fn agent_token_filter(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    run_token_filter(TokenAudience::Agent, state, req, next).await
}

pub async fn hr_token_filter(State(state): State<AppState>, req: Request, next: Next) -> Response {
    run_token_filter(TokenAudience::Hr, state, req, next).await
}

fn bearer_token(req: &Request) -> &str {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or("")
}

/// Extractor for handlers that need the verified caller.
///
/// Reads the principal the token filters attached; requests that
/// reached a protected handler always carry one, but the extractor
/// still answers 401 rather than panicking if a route is wired up
/// outside the filter chain.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn subject(&self) -> &str {
        &self.0.subject
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.0.has_role(role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        self.0.has_any_role(roles)
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::Unauthorized("Missing or invalid bearer token".to_string()))
    }
}
