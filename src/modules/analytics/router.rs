use crate::modules::analytics::controller::{get_overview, get_token_stats};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_analytics_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(get_overview))
        .route("/tokens/{id}", get(get_token_stats))
}
