//! # Memepad API
//!
//! Backend API for the Memepad meme-token launchpad, built with Axum.
//!
//! ## Overview
//!
//! - **Authentication**: wallet-based sessions with JWT bearer tokens
//! - **Authorization**: role gates (user / moderator / admin) as router
//!   layers and extractors
//! - **Error pipeline**: every stage signals failure through a closed
//!   [`AppError`](utils::errors::AppError) enum; a single terminal
//!   middleware logs the failure and produces the JSON error envelope
//! - **Realtime**: per-token WebSocket rooms broadcasting lifecycle
//!   events
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── config/           # Env-driven configuration (JWT, CORS, rate limits, server)
//! ├── middleware/       # Auth extractors, role gates, terminal error handler
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Wallet sessions
//! │   ├── tokens/      # Token listings
//! │   ├── users/       # Profiles and user management
//! │   ├── analytics/   # Activity metrics
//! │   ├── admin/       # Administration and moderation
//! │   └── health/      # Liveness
//! ├── realtime.rs       # WebSocket token rooms
//! └── utils/            # Errors, JWT helpers
//! ```
//!
//! Each feature module follows a consistent structure: `router.rs`,
//! `controller.rs`, `service.rs`, `model.rs`.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=3600
//! APP_ENV=development            # "production" masks error details
//! HOST=0.0.0.0
//! PORT=3001
//! CORS_ORIGIN=http://localhost:3000
//! RATE_LIMIT_PER_SECOND=2
//! RATE_LIMIT_BURST_SIZE=30
//! ```
//!
//! API documentation is served at `/scalar` while the server is running.

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod realtime;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
