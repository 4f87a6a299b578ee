use crate::modules::users::controller::{get_profile, get_users, update_profile};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_users_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

/// User listing, gated behind the admin role at the main router.
pub fn init_users_admin_router() -> Router<AppState> {
    Router::new().route("/", get(get_users))
}
