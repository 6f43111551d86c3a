use std::fmt;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, Principal, Role, TokenAudience};
use crate::utils::errors::AppError;

/// Why a bearer token was not accepted for a given audience.
///
/// Verification never surfaces these to the caller directly; the request
/// simply continues without a principal and the access policy decides
/// what that means for the route. They exist for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// No token material was presented.
    Absent,
    /// The token could not be parsed into the expected claim shape.
    Malformed,
    /// The token was valid once but its expiry has passed.
    Expired,
    /// The signature does not match the configured secret.
    SignatureInvalid,
    /// Signed and well-formed, but minted for a different audience or issuer.
    WrongAudience,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::Absent => "absent",
            RejectionReason::Malformed => "malformed",
            RejectionReason::Expired => "expired",
            RejectionReason::SignatureInvalid => "signature_invalid",
            RejectionReason::WrongAudience => "wrong_audience",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn create_access_token(
    subject: &str,
    roles: &[Role],
    audience: TokenAudience,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp();
    let exp = now + jwt_config.access_token_expiry;

    let claims = Claims {
        sub: subject.to_string(),
        roles: roles.to_vec(),
        aud: audience.as_str().to_string(),
        iss: jwt_config.issuer.clone(),
        exp: exp as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verify a bearer token for one audience and produce the principal it
/// describes.
///
/// The checks, in order: the token is present, its signature matches the
/// shared secret, it has not expired, and its `aud` and `iss` claims match
/// the expected audience and configured issuer. A token minted for one
/// audience never verifies for another, even though all audiences share
/// the signing secret. Tokens with an empty role list are rejected as
/// malformed; a role-free principal could never pass a role gate anyway.
pub fn verify_token(
    token: &str,
    audience: TokenAudience,
    jwt_config: &JwtConfig,
) -> Result<Principal, RejectionReason> {
    if token.trim().is_empty() {
        return Err(RejectionReason::Absent);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[audience.as_str()]);
    validation.set_issuer(&[jwt_config.issuer.as_str()]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| classify(e.kind()))?;

    let claims = data.claims;
    if claims.roles.is_empty() {
        return Err(RejectionReason::Malformed);
    }

    Ok(Principal {
        subject: claims.sub,
        roles: claims.roles,
        issued_by: audience,
        expires_at: claims.exp,
    })
}

fn classify(kind: &ErrorKind) -> RejectionReason {
    match kind {
        ErrorKind::ExpiredSignature => RejectionReason::Expired,
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
            RejectionReason::SignatureInvalid
        }
        ErrorKind::InvalidAudience | ErrorKind::InvalidIssuer => RejectionReason::WrongAudience,
        ErrorKind::MissingRequiredClaim(claim) if claim == "aud" || claim == "iss" => {
            RejectionReason::WrongAudience
        }
        _ => RejectionReason::Malformed,
    }
}
