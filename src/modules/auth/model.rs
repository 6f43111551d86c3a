use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Platform roles as they appear inside token claims.
///
/// Claims carry these as uppercase strings; anything else fails
/// deserialization and the token is treated as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Employee,
    Agent,
    Hr,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Employee => "EMPLOYEE",
            Role::Agent => "AGENT",
            Role::Hr => "HR",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The population a token was minted for.
///
/// Each audience has its own verification pass over incoming requests;
/// a token only counts for the audience named in its `aud` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenAudience {
    Employee,
    Agent,
    Hr,
}

impl TokenAudience {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenAudience::Employee => "employee",
            TokenAudience::Agent => "agent",
            TokenAudience::Hr => "hr",
        }
    }
}

impl fmt::Display for TokenAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user identifier
    pub roles: Vec<Role>,
    pub aud: String,
    pub iss: String,
    pub exp: usize,
    pub iat: usize,
}

/// Verified identity attached to a request after its bearer token passed
/// signature, expiry, audience, and issuer checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub subject: String,
    pub roles: Vec<Role>,
    pub issued_by: TokenAudience,
    pub expires_at: usize,
}

impl Principal {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }
}

// Forgot password request structure
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ForgotPasswordRequest {
    #[validate(
        length(min = 1, message = "Email is required"),
        email(message = "Email should be valid")
    )]
    #[schema(example = "jane.doe@insurai.com")]
    pub email: String,
}

/// Generic acknowledgement body for endpoints that return no data.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
