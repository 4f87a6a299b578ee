use axum::{Json, extract::Path, extract::State};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::OptionalAuthUser;
use crate::modules::analytics::model::{OverviewResponse, TokenStatsResponse};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Launchpad activity overview, personalized when a valid session token
/// is supplied. An invalid or expired token is ignored.
#[utoipa::path(
    get,
    path = "/api/analytics/overview",
    responses(
        (status = 200, description = "Activity overview", body = OverviewResponse)
    ),
    tag = "Analytics"
)]
#[instrument]
pub async fn get_overview(
    State(state): State<AppState>,
    OptionalAuthUser(auth_user): OptionalAuthUser,
) -> Json<OverviewResponse> {
    let viewer = auth_user.map(|u| u.0.address);
    Json(state.analytics.overview(&state.tokens, viewer))
}

/// Per-token statistics; each request counts as a view
#[utoipa::path(
    get,
    path = "/api/analytics/tokens/{id}",
    params(("id" = String, Path, description = "Token id")),
    responses(
        (status = 200, description = "Token statistics", body = TokenStatsResponse),
        (status = 400, description = "Malformed token id", body = ErrorResponse),
        (status = 404, description = "Token not found", body = ErrorResponse)
    ),
    tag = "Analytics"
)]
#[instrument]
pub async fn get_token_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TokenStatsResponse>, AppError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::invalid_id(format!("{} is not a valid token id", id)))?;

    let token = state.tokens.get(id)?;
    let views = state.analytics.record_view(id);

    Ok(Json(TokenStatsResponse {
        id: token.id,
        address: token.address,
        status: token.status,
        market_cap: token.market_cap,
        holders: token.holders,
        views,
    }))
}
