//! Path-based access control for the HTTP surface.
//!
//! The whole surface is governed by one ordered rule table. Each rule
//! pairs a path pattern with an access requirement; the first rule whose
//! pattern matches the request path decides the outcome and no later
//! rule is consulted. Paths no rule covers require authentication.
//!
//! Token verification happens earlier in the middleware chain and never
//! rejects by itself; this module is the single place where a request is
//! actually allowed or denied.

use std::fmt;

use crate::modules::auth::model::{Principal, Role};

/// Segment-wise path pattern.
///
/// Literal segments match themselves exactly (case-sensitive), `*`
/// matches exactly one segment, and a trailing `**` matches the prefix
/// itself plus anything beneath it. `/admin/**` therefore covers
/// `/admin`, `/admin/users`, and `/admin/users/7/edit`, but not
/// `/administrator`. Leading and trailing slashes carry no meaning.
#[derive(Debug, Clone)]
pub struct PathPattern {
    raw: &'static str,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(&'static str),
    AnySingle,
    AnySuffix,
}

impl PathPattern {
    pub fn new(pattern: &'static str) -> Self {
        let segments: Vec<Segment> = split_segments(pattern)
            .map(|seg| match seg {
                "**" => Segment::AnySuffix,
                "*" => Segment::AnySingle,
                literal => Segment::Literal(literal),
            })
            .collect();

        // `**` is only meaningful as the final segment.
        debug_assert!(
            segments
                .iter()
                .position(|s| *s == Segment::AnySuffix)
                .is_none_or(|pos| pos == segments.len() - 1),
            "`**` must be the last segment in {pattern:?}"
        );

        Self {
            raw: pattern,
            segments,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        let mut actual = split_segments(path);
        for segment in &self.segments {
            match segment {
                Segment::AnySuffix => return true,
                Segment::AnySingle => {
                    if actual.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(expected) => {
                    if actual.next() != Some(*expected) {
                        return false;
                    }
                }
            }
        }
        actual.next().is_none()
    }

    pub fn as_str(&self) -> &'static str {
        self.raw
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw)
    }
}

fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|seg| !seg.is_empty())
}

/// Access requirement attached to a rule.
#[derive(Debug, Clone, Copy)]
pub enum Access {
    /// Anyone, with or without a token.
    PermitAll,
    /// Any verified principal, regardless of roles.
    Authenticated,
    /// A verified principal holding at least one of the listed roles.
    AnyOf(&'static [Role]),
}

impl Access {
    pub fn check(&self, principal: Option<&Principal>) -> Decision {
        match self {
            Access::PermitAll => Decision::Allow,
            Access::Authenticated => match principal {
                Some(_) => Decision::Allow,
                None => Decision::Deny(DenyReason::Unauthenticated),
            },
            Access::AnyOf(required) => match principal {
                None => Decision::Deny(DenyReason::Unauthenticated),
                Some(p) if p.has_any_role(required) => Decision::Allow,
                Some(_) => Decision::Deny(DenyReason::Forbidden),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(DenyReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No principal on the request.
    Unauthenticated,
    /// A principal was present but its roles do not cover the resource.
    Forbidden,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::Unauthenticated => "unauthenticated",
            DenyReason::Forbidden => "forbidden",
        }
    }
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the ordered rule table.
#[derive(Debug, Clone)]
pub struct AccessRule {
    pub pattern: PathPattern,
    pub access: Access,
}

impl AccessRule {
    pub fn new(pattern: &'static str, access: Access) -> Self {
        Self {
            pattern: PathPattern::new(pattern),
            access,
        }
    }
}

/// The ordered rule table plus the default for uncovered paths.
#[derive(Debug, Clone)]
pub struct SecurityPolicy {
    rules: Vec<AccessRule>,
}

impl SecurityPolicy {
    pub fn new(rules: Vec<AccessRule>) -> Self {
        Self { rules }
    }

    /// Decide whether `principal` may reach `path`.
    ///
    /// Rules are consulted strictly in table order and the first match
    /// wins, so a broad early rule shadows every narrower rule after it.
    /// Paths outside the table require any authenticated principal.
    pub fn decide(&self, path: &str, principal: Option<&Principal>) -> Decision {
        for rule in &self.rules {
            if rule.pattern.matches(path) {
                return rule.access.check(principal);
            }
        }
        Access::Authenticated.check(principal)
    }

    /// The rule that would decide `path`, for diagnostics.
    pub fn matching_rule(&self, path: &str) -> Option<&AccessRule> {
        self.rules.iter().find(|rule| rule.pattern.matches(path))
    }
}

impl Default for SecurityPolicy {
    fn default() -> Self {
        Self::new(access_rules())
    }
}

/// The production rule table.
///
/// Order is load-bearing and must not be rearranged: several broad
/// `PermitAll` prefixes sit above narrower role rules and deliberately
/// shadow them. `/admin/**`, `/employees/**`, and `/hr/**` are still
/// open; tightening them is tracked upstream and changes behavior for
/// every rule they currently shadow.
pub fn access_rules() -> Vec<AccessRule> {
    vec![
        // Liveness and framework endpoints.
        AccessRule::new("/", Access::PermitAll),
        AccessRule::new("/health", Access::PermitAll),
        AccessRule::new("/actuator/**", Access::PermitAll),
        AccessRule::new("/error", Access::PermitAll),
        // Login, registration, and password recovery.
        AccessRule::new("/auth/**", Access::PermitAll),
        AccessRule::new("/auth/forgot-password", Access::PermitAll),
        AccessRule::new("/auth/reset-password/**", Access::PermitAll),
        AccessRule::new("/employee/login", Access::PermitAll),
        AccessRule::new("/agent/login", Access::PermitAll),
        AccessRule::new("/employee/register", Access::PermitAll),
        AccessRule::new("/hr/login", Access::PermitAll),
        // Public resources and the anonymous browsing surface.
        AccessRule::new("/uploads/**", Access::PermitAll),
        AccessRule::new("/employee/policies", Access::PermitAll),
        AccessRule::new("/admin/**", Access::PermitAll),
        AccessRule::new("/admin/policies", Access::PermitAll),
        AccessRule::new("/admin/policies/save", Access::PermitAll),
        AccessRule::new("/agent/availability/**", Access::PermitAll),
        AccessRule::new("/agent/queries/pending/**", Access::PermitAll),
        AccessRule::new("/employees/**", Access::PermitAll),
        AccessRule::new("/hr/**", Access::PermitAll),
        // Employee self-service.
        AccessRule::new("/employee/claims/**", Access::AnyOf(&[Role::Employee])),
        AccessRule::new("/employee/queries/**", Access::AnyOf(&[Role::Employee])),
        AccessRule::new("/employee/chatbot", Access::AnyOf(&[Role::Employee])),
        AccessRule::new("/employee/**", Access::AnyOf(&[Role::Employee])),
        // Agent workspace.
        AccessRule::new("/agent/queries/respond/**", Access::AnyOf(&[Role::Agent])),
        AccessRule::new("/agent/queries/all/**", Access::AnyOf(&[Role::Agent])),
        AccessRule::new("/agent/**", Access::AnyOf(&[Role::Agent])),
        // Claim review and fraud screening.
        AccessRule::new("/hr/claims", Access::AnyOf(&[Role::Hr, Role::Admin])),
        AccessRule::new("/admin/claims", Access::AnyOf(&[Role::Hr, Role::Admin])),
        AccessRule::new("/hr/claims/fraud", Access::AnyOf(&[Role::Hr])),
        AccessRule::new("/admin/claims/fraud", Access::AnyOf(&[Role::Admin])),
        AccessRule::new(
            "/claims/approve/**",
            Access::AnyOf(&[Role::Hr, Role::Admin]),
        ),
        AccessRule::new("/claims/reject/**", Access::AnyOf(&[Role::Hr, Role::Admin])),
        AccessRule::new("/claims/all", Access::AnyOf(&[Role::Hr, Role::Admin])),
        // Notifications: personal feeds for everyone, management for HR/admin.
        AccessRule::new(
            "/notifications/user/**",
            Access::AnyOf(&[Role::Employee, Role::Hr, Role::Admin]),
        ),
        AccessRule::new(
            "/notifications/*/read",
            Access::AnyOf(&[Role::Employee, Role::Hr, Role::Admin]),
        ),
        AccessRule::new("/notifications/**", Access::AnyOf(&[Role::Hr, Role::Admin])),
    ]
}
