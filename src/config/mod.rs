//! Configuration modules for the Memepad API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables exactly once at startup and carried in
//! [`crate::state::AppState`]. Nothing in the request pipeline reads the
//! environment ad hoc.
//!
//! # Modules
//!
//! - [`cors`]: CORS allowed origins
//! - [`jwt`]: JWT verification secret and token expiry
//! - [`rate_limit`]: API rate limiting configuration
//! - [`server`]: Bind address and deployment mode

pub mod cors;
pub mod jwt;
pub mod rate_limit;
pub mod server;
