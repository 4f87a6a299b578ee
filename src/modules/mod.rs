//! Feature modules.
//!
//! Each module follows the same structure: `router.rs` wires routes,
//! `controller.rs` holds the HTTP handlers, `service.rs` the business
//! logic, and `model.rs` the data types and DTOs.

pub mod admin;
pub mod analytics;
pub mod auth;
pub mod health;
pub mod tokens;
pub mod users;
