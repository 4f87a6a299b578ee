use crate::modules::tokens::controller::{create_token, delete_token, get_token, list_tokens};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_tokens_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tokens).post(create_token))
        .route("/{id}", get(get_token).delete(delete_token))
}
