//! Role-based authorization gates.
//!
//! Two forms are provided, both backed by the same checks:
//!
//! 1. Layer-based middleware (`require_admin`, `require_moderator`) for
//!    gating whole sub-routers via `middleware::from_fn_with_state`
//! 2. Extractors (`RequireAdmin`, `RequireModerator`) for gating a single
//!    handler
//!
//! A gate only runs its role check once identity extraction has
//! succeeded; a request without identity is rejected as
//! `AuthenticationRequired`, never as `Forbidden`.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

// TODO: both gates currently accept {admin, moderator}, mirroring the
// existing product behavior; confirm whether moderator-only routes should
// exclude admins before tightening either set.
const ADMIN_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Moderator];
const MODERATOR_ROLES: &[UserRole] = &[UserRole::Moderator, UserRole::Admin];

/// Middleware that checks the authenticated user against an allowed role
/// set.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[UserRole],
    denied_message: &str,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let auth_user = AuthUser::from_request_parts(&mut parts, &state).await?;
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(denied_message));
    }

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Gate for admin routes (admins and moderators allowed).
///
/// ```rust,ignore
/// let admin_routes = Router::new()
///     .route("/stats", get(stats_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));
/// ```
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, ADMIN_ROLES, "Admin access required").await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Gate for moderation routes (moderators and admins allowed).
pub async fn require_moderator(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(
        State(state),
        req,
        next,
        MODERATOR_ROLES,
        "Moderator access required",
    )
    .await
    {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor form of the admin gate.
///
/// ```rust,ignore
/// pub async fn stats_handler(
///     RequireAdmin(auth_user): RequireAdmin,
/// ) -> Result<Json<Stats>, AppError> {
///     // Only admins and moderators reach this point
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_any_role(&auth_user, ADMIN_ROLES, "Admin access required")?;
        Ok(RequireAdmin(auth_user))
    }
}

/// Extractor form of the moderator gate.
#[derive(Debug, Clone)]
pub struct RequireModerator(pub AuthUser);

impl FromRequestParts<AppState> for RequireModerator {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_any_role(&auth_user, MODERATOR_ROLES, "Moderator access required")?;
        Ok(RequireModerator(auth_user))
    }
}

/// Check that the user holds one of the allowed roles. Usable directly in
/// controller logic when a route needs a check mid-handler.
pub fn check_any_role(
    auth_user: &AuthUser,
    allowed_roles: &[UserRole],
    denied_message: &str,
) -> Result<(), AppError> {
    let user_role = auth_user.role()?;

    if !allowed_roles.contains(&user_role) {
        return Err(AppError::forbidden(denied_message));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::model::Claims;

    fn create_test_auth_user(role: &str) -> AuthUser {
        AuthUser(Claims {
            sub: "00000000-0000-0000-0000-000000000000".to_string(),
            address: "0xdeadbeef".to_string(),
            role: role.to_string(),
            exp: 9999999999,
            iat: 1234567890,
        })
    }

    #[test]
    fn test_admin_set_rejects_user() {
        let auth_user = create_test_auth_user("user");
        let result = check_any_role(&auth_user, ADMIN_ROLES, "Admin access required");
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_admin_set_accepts_admin_and_moderator() {
        for role in ["admin", "moderator"] {
            let auth_user = create_test_auth_user(role);
            assert!(check_any_role(&auth_user, ADMIN_ROLES, "Admin access required").is_ok());
        }
    }

    #[test]
    fn test_moderator_set_accepts_both_elevated_roles() {
        for role in ["admin", "moderator"] {
            let auth_user = create_test_auth_user(role);
            assert!(
                check_any_role(&auth_user, MODERATOR_ROLES, "Moderator access required").is_ok()
            );
        }
    }

    #[test]
    fn test_unknown_role_rejected_as_invalid_token() {
        let auth_user = create_test_auth_user("root");
        let result = check_any_role(&auth_user, ADMIN_ROLES, "Admin access required");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_empty_allowed_set_rejects_everyone() {
        let auth_user = create_test_auth_user("admin");
        assert!(check_any_role(&auth_user, &[], "no access").is_err());
    }
}
