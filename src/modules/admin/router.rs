use crate::modules::admin::controller::{flag_token, get_admin_stats, update_token_status};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes behind the admin gate.
pub fn init_admin_router() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_admin_stats))
        .route("/tokens/{id}/status", put(update_token_status))
}

/// Routes behind the moderator gate.
pub fn init_moderation_router() -> Router<AppState> {
    Router::new().route("/tokens/{id}/flag", post(flag_token))
}
