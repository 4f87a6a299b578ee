use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer credential and provides the
/// authenticated identity.
///
/// Every failure is reported as an [`AppError`] rejection, which the
/// terminal error middleware turns into the JSON error envelope; this
/// extractor never writes a response itself.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Get the user ID as UUID
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub).map_err(|_| AppError::InvalidToken)
    }

    /// Get the wallet address
    pub fn address(&self) -> &str {
        &self.0.address
    }

    /// Parse the role carried by the token
    pub fn role(&self) -> Result<UserRole, AppError> {
        parse_role_from_string(&self.0.role)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::AuthenticationRequired)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .filter(|t| !t.is_empty())
            .ok_or(AppError::AuthenticationRequired)?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

/// Best-effort identity extractor for routes that personalize their
/// response when a valid credential is supplied but must never reject.
///
/// Missing, malformed, or expired tokens all result in `None`; the
/// request proceeds exactly as if no credential had been sent.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(OptionalAuthUser(
            AuthUser::from_request_parts(parts, state).await.ok(),
        ))
    }
}

/// Parse a role string from token claims into a [`UserRole`].
///
/// An unknown role means the token was not minted by us, so it is
/// treated as invalid rather than as a server error.
pub fn parse_role_from_string(role_str: &str) -> Result<UserRole, AppError> {
    match role_str {
        "user" => Ok(UserRole::User),
        "moderator" => Ok(UserRole::Moderator),
        "admin" => Ok(UserRole::Admin),
        _ => Err(AppError::InvalidToken),
    }
}
