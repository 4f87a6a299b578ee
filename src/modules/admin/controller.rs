use axum::{Json, extract::Path, extract::State};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::admin::model::{AdminStatsResponse, FlagTokenDto, UpdateTokenStatusDto};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::tokens::model::{LaunchToken, TokenStatus};
use crate::realtime::RoomEvent;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

fn parse_token_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_id(format!("{} is not a valid token id", raw)))
}

/// Launchpad-wide administrative counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    responses(
        (status = 200, description = "Admin statistics", body = AdminStatsResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument]
pub async fn get_admin_stats(State(state): State<AppState>) -> Json<AdminStatsResponse> {
    Json(AdminStatsResponse {
        total_tokens: state.tokens.count(),
        total_users: state.users.count(),
        pending_tokens: state.tokens.count_with_status(TokenStatus::Pending),
        flagged_tokens: state.tokens.count_with_status(TokenStatus::Flagged),
    })
}

/// Set a token's lifecycle status
#[utoipa::path(
    put,
    path = "/api/admin/tokens/{id}/status",
    params(("id" = String, Path, description = "Token id")),
    request_body = UpdateTokenStatusDto,
    responses(
        (status = 200, description = "Updated token", body = LaunchToken),
        (status = 400, description = "Malformed token id", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument]
pub async fn update_token_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateTokenStatusDto>,
) -> Result<Json<LaunchToken>, AppError> {
    let id = parse_token_id(&id)?;
    let token = state.tokens.set_status(id, dto.status)?;

    info!(token = %token.address, status = ?token.status, "Token status updated");
    state.rooms.publish(
        &token.address,
        RoomEvent::TokenStatusChanged {
            address: token.address.clone(),
            status: token.status,
        },
    );

    Ok(Json(token))
}

/// Flag a token for review (moderation gate applied at the router)
#[utoipa::path(
    post,
    path = "/api/admin/tokens/{id}/flag",
    params(("id" = String, Path, description = "Token id")),
    request_body = FlagTokenDto,
    responses(
        (status = 200, description = "Flagged token", body = LaunchToken),
        (status = 400, description = "Malformed token id", body = ErrorResponse),
        (status = 403, description = "Moderator access required", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
#[instrument]
pub async fn flag_token(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<FlagTokenDto>,
) -> Result<Json<LaunchToken>, AppError> {
    let id = parse_token_id(&id)?;
    let token = state.tokens.set_status(id, TokenStatus::Flagged)?;

    info!(token = %token.address, reason = ?dto.reason, "Token flagged");
    state.rooms.publish(
        &token.address,
        RoomEvent::TokenFlagged {
            address: token.address.clone(),
            reason: dto.reason,
        },
    );

    Ok(Json(token))
}
