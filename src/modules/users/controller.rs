use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{UpdateProfileDto, User};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[derive(Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user_id: String,
    pub address: String,
    pub role: String,
}

/// Get the caller's identity as carried by the session token
#[utoipa::path(
    get,
    path = "/api/users/profile",
    responses(
        (status = 200, description = "Authenticated identity", body = ProfileResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_profile(auth_user: AuthUser) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        user_id: auth_user.0.sub,
        address: auth_user.0.address,
        role: auth_user.0.role,
    })
}

/// Update the caller's profile
#[utoipa::path(
    put,
    path = "/api/users/profile",
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateProfileDto>,
) -> Result<Json<User>, AppError> {
    // Sessions issued before the store restarted still carry a valid
    // identity; make sure a record exists before updating it.
    state.users.ensure(auth_user.address());
    let user = state.users.update_profile(auth_user.address(), dto)?;
    Ok(Json(user))
}

/// List all users (admin gate applied at the router)
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument]
pub async fn get_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list())
}
