//! Utility modules for the InsurAI backend.
//!
//! Shared building blocks used throughout the application:
//!
//! - [`errors`]: Application error types and their HTTP mapping
//! - [`jwt`]: JWT token creation and per-audience verification
//! - [`password`]: Password hashing and verification

pub mod errors;
pub mod jwt;
pub mod password;
