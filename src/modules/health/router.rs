use crate::modules::health::controller::get_health;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_health_router() -> Router<AppState> {
    Router::new().route("/", get(get_health))
}
