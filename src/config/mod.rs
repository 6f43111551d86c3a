//! Configuration modules for the InsurAI backend.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with development-friendly defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`jwt`]: JWT signing secret, issuer, and token lifetime
//!
//! # Environment Variables
//!
//! See each submodule for specific variable names and their defaults.

pub mod cors;
pub mod jwt;
