use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{SessionRequest, SessionResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Open a session with a signed wallet challenge and receive a JWT
#[utoipa::path(
    post,
    path = "/api/auth/session",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Session created", body = SessionResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SessionRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let response = AuthService::create_session(&state.users, dto, &state.jwt_config)?;
    Ok(Json(response))
}
