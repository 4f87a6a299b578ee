//! Middleware for the request pipeline.
//!
//! The pipeline a request flows through, outermost first:
//!
//! 1. [`error_handler`]: terminal stage, turns any classified failure
//!    into the JSON error envelope and logs it
//! 2. Request logging (see [`crate::logging`])
//! 3. [`auth`]: identity extraction from the `Authorization: Bearer`
//!    header (`AuthUser`), or best-effort extraction that never rejects
//!    (`OptionalAuthUser`)
//! 4. [`role`]: admin/moderator gates, as route layers or extractors
//!
//! Every stage signals failure through
//! [`AppError`](crate::utils::errors::AppError); only the terminal stage
//! writes an error response.

pub mod auth;
pub mod error_handler;
pub mod role;
