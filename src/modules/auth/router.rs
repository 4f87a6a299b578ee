use crate::modules::auth::controller::create_session;
use crate::state::AppState;
use axum::{Router, routing::post};

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/session", post(create_session))
}
