//! # InsurAI Backend
//!
//! REST backend for the InsurAI corporate insurance platform, built with
//! Rust and Axum. This crate carries the security core of the service:
//! per-audience JWT verification, path-based access control, credential
//! hashing, and the public health and password-recovery endpoints.
//!
//! ## Overview
//!
//! - **Token verification**: three verification passes (employee, agent,
//!   HR), one per token audience, sharing a single HS256 secret
//! - **Access control**: one ordered rule table over the whole HTTP
//!   surface, evaluated strictly first-match-wins
//! - **Credential hashing**: bcrypt with independent salts per hash
//! - **Validation**: declarative DTO validation with field-level 400s
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, CORS)
//! ├── middleware/       # Token filters and access enforcement
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Token model, principal, password recovery
//! │   └── health/      # Liveness and banner endpoints
//! ├── security.rs       # Path patterns and the ordered rule table
//! └── utils/            # Shared utilities (errors, JWT, password)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models and DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Request Pipeline
//!
//! Every request flows through the same middleware chain:
//!
//! ```text
//! logging → CORS → employee filter → agent filter → HR filter → access policy → route
//! ```
//!
//! The three token filters never reject a request. Each one tries the
//! bearer token for its own audience and attaches the verified principal
//! on success; the access policy at the end of the chain is the only
//! place a request is denied. Unauthenticated callers get 401, callers
//! whose roles do not cover the path get 403.
//!
//! ## Token Claims
//!
//! Access tokens carry:
//! - Subject (user identifier) and role list (`EMPLOYEE`, `AGENT`, `HR`,
//!   `ADMIN`)
//! - Audience (`employee`, `agent`, or `hr`) and issuer
//! - Issued-at and expiry timestamps
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ISSUER=insurai-backend
//! JWT_ACCESS_EXPIRY=3600
//! ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
//! PORT=8080
//! UPLOADS_DIR=uploads
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available to
//! authenticated callers at:
//!
//! - Swagger UI: `http://localhost:8080/swagger-ui`
//! - Scalar: `http://localhost:8080/scalar`
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging and tracing setup
//! - [`middleware`]: Token filters and access enforcement
//! - [`modules`]: Feature modules (auth, health)
//! - [`router`]: Main application router
//! - [`security`]: Path patterns and the ordered access rule table
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities (errors, JWT, password hashing)
//! - [`validator`]: Request validation utilities
//!
//! ## Security Considerations
//!
//! - Passwords are hashed using bcrypt
//! - JWT secrets should be cryptographically random
//! - The rule table is ordered and first-match-wins; several broad
//!   public prefixes intentionally precede narrower role rules, and
//!   reordering them changes the exposed surface

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod security;
pub mod state;
pub mod utils;
pub mod validator;
