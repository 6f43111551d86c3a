//! Middleware for request processing.
//!
//! Cross-cutting request handling: token verification and access
//! enforcement.
//!
//! # Modules
//!
//! - [`auth`]: Per-audience bearer token filters and the [`auth::AuthUser`]
//!   extractor
//! - [`access`]: Rule-table enforcement that turns denials into 401/403
//!
//! # Request Flow
//!
//! 1. Client sends a request, optionally with `Authorization: Bearer <token>`
//! 2. The employee, agent, and HR filters each try the token for their own
//!    audience; a successful pass attaches a `Principal` to the request
//! 3. [`access::enforce_access`] consults the ordered rule table and either
//!    forwards the request or answers 401/403
//! 4. Handlers that need the caller use the [`auth::AuthUser`] extractor
//!
//! No filter ever rejects on its own; a bad token simply means the request
//! stays anonymous and the rule table decides what that implies.

pub mod access;
pub mod auth;
