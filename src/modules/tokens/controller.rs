use axum::{Json, extract::Path, extract::State, http::StatusCode};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::tokens::model::{CreateTokenDto, LaunchToken};
use crate::modules::users::model::UserRole;
use crate::realtime::RoomEvent;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

fn parse_token_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::invalid_id(format!("{} is not a valid token id", raw)))
}

/// List all launchpad tokens, newest first
#[utoipa::path(
    get,
    path = "/api/tokens",
    responses(
        (status = 200, description = "List of tokens", body = Vec<LaunchToken>)
    ),
    tag = "Tokens"
)]
#[instrument]
pub async fn list_tokens(State(state): State<AppState>) -> Json<Vec<LaunchToken>> {
    Json(state.tokens.list())
}

/// List a new token (requires authentication)
#[utoipa::path(
    post,
    path = "/api/tokens",
    request_body = CreateTokenDto,
    responses(
        (status = 201, description = "Token listed", body = LaunchToken),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 409, description = "Token address already registered", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tokens"
)]
#[instrument]
pub async fn create_token(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTokenDto>,
) -> Result<(StatusCode, Json<LaunchToken>), AppError> {
    let token = state.tokens.create(dto, auth_user.address())?;

    state.rooms.publish(
        &token.address,
        RoomEvent::TokenCreated {
            address: token.address.clone(),
            name: token.name.clone(),
            symbol: token.symbol.clone(),
        },
    );

    Ok((StatusCode::CREATED, Json(token)))
}

/// Get a single token by id
#[utoipa::path(
    get,
    path = "/api/tokens/{id}",
    params(("id" = String, Path, description = "Token id")),
    responses(
        (status = 200, description = "Token details", body = LaunchToken),
        (status = 400, description = "Malformed token id", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse)
    ),
    tag = "Tokens"
)]
#[instrument]
pub async fn get_token(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LaunchToken>, AppError> {
    let id = parse_token_id(&id)?;
    Ok(Json(state.tokens.get(id)?))
}

/// Delete a token listing (creator, or any elevated role)
#[utoipa::path(
    delete,
    path = "/api/tokens/{id}",
    params(("id" = String, Path, description = "Token id")),
    responses(
        (status = 200, description = "Token deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Not the creator", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Tokens"
)]
#[instrument]
pub async fn delete_token(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_token_id(&id)?;
    let elevated = matches!(
        auth_user.role()?,
        UserRole::Admin | UserRole::Moderator
    );

    let token = state.tokens.delete(id, auth_user.address(), elevated)?;

    Ok(Json(MessageResponse {
        message: format!("Token {} delisted", token.symbol),
    }))
}
