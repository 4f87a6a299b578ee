use chrono::{DateTime, Utc};

use crate::config::cors::CorsConfig;
use crate::config::jwt::JwtConfig;
use crate::config::rate_limit::RateLimitConfig;
use crate::config::server::ServerConfig;
use crate::modules::analytics::service::AnalyticsService;
use crate::modules::tokens::service::TokenService;
use crate::modules::users::service::UserService;
use crate::realtime::RoomHub;

/// Shared application state. Configuration is read from the environment
/// exactly once here; services are constructed once and injected,
/// never looked up ambiently.
#[derive(Clone, Debug)]
pub struct AppState {
    pub jwt_config: JwtConfig,
    pub server_config: ServerConfig,
    pub cors_config: CorsConfig,
    pub rate_limit_config: RateLimitConfig,
    pub tokens: TokenService,
    pub users: UserService,
    pub analytics: AnalyticsService,
    pub rooms: RoomHub,
    pub started_at: DateTime<Utc>,
}

pub fn init_app_state() -> AppState {
    AppState {
        jwt_config: JwtConfig::from_env(),
        server_config: ServerConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        rate_limit_config: RateLimitConfig::from_env(),
        tokens: TokenService::new(),
        users: UserService::new(),
        analytics: AnalyticsService::new(),
        rooms: RoomHub::new(),
        started_at: Utc::now(),
    }
}
