use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    /// Verification secret. An empty value means the secret was never
    /// configured; token creation and verification report a
    /// misconfiguration rather than falling back to a default.
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_default(),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
