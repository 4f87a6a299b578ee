use axum::Router;
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use memepad::config::cors::CorsConfig;
use memepad::config::jwt::JwtConfig;
use memepad::config::rate_limit::RateLimitConfig;
use memepad::config::server::ServerConfig;
use memepad::modules::analytics::service::AnalyticsService;
use memepad::modules::auth::model::Claims;
use memepad::modules::tokens::service::TokenService;
use memepad::modules::users::service::UserService;
use memepad::realtime::RoomHub;
use memepad::router::init_router;
use memepad::state::AppState;

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes";

#[allow(dead_code)]
pub fn test_state(production: bool) -> AppState {
    AppState {
        jwt_config: JwtConfig {
            secret: TEST_SECRET.to_string(),
            access_token_expiry: 3600,
        },
        server_config: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production,
        },
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allow_credentials: false,
        },
        rate_limit_config: RateLimitConfig::default(),
        tokens: TokenService::new(),
        users: UserService::new(),
        analytics: AnalyticsService::new(),
        rooms: RoomHub::new(),
        started_at: Utc::now(),
    }
}

#[allow(dead_code)]
pub fn setup_test_app(production: bool) -> Router {
    init_router(test_state(production))
}

#[allow(dead_code)]
pub fn setup_test_app_with_state(state: AppState) -> Router {
    init_router(state)
}

/// Mint a token signed with the test secret. `expires_in` is relative to
/// now and may be negative to produce an expired token; verification
/// applies 60s of leeway, so use offsets well past that.
#[allow(dead_code)]
pub fn issue_token(address: &str, role: &str, expires_in: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        address: address.to_string(),
        role: role.to_string(),
        exp: (now + expires_in).max(0) as usize,
        iat: now as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
