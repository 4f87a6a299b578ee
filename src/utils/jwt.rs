use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use jsonwebtoken::errors::ErrorKind;
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::utils::errors::AppError;

/// Creates a session access token embedding the wallet identity.
///
/// Claims carry everything the role gates need, so no store lookup happens
/// on authenticated requests.
pub fn create_access_token(
    user_id: Uuid,
    address: &str,
    role: &UserRole,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::misconfiguration("JWT secret is not configured"));
    }

    let now = Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        address: address.to_string(),
        role: role.as_str().to_string(),
        exp: now + jwt_config.access_token_expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Verifies signature and expiry, distinguishing the two failure modes:
/// an expired-but-well-formed token yields [`AppError::TokenExpired`],
/// anything else that fails verification yields [`AppError::InvalidToken`].
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    if jwt_config.secret.is_empty() {
        return Err(AppError::misconfiguration("JWT secret is not configured"));
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::InvalidToken,
    })
}
