use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::error_handler::error_handler;
use crate::middleware::role::{require_admin, require_moderator};
use crate::modules::admin::router::{init_admin_router, init_moderation_router};
use crate::modules::analytics::router::init_analytics_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::health::controller::root_banner;
use crate::modules::health::router::init_health_router;
use crate::modules::tokens::router::init_tokens_router;
use crate::modules::users::router::{init_users_admin_router, init_users_router};
use crate::realtime::ws_handler;
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .route("/", get(root_banner))
        .route("/ws", get(ws_handler))
        .nest(
            "/api",
            Router::new()
                .nest("/health", init_health_router())
                .nest("/auth", init_auth_router())
                .nest("/tokens", init_tokens_router())
                .nest(
                    "/users",
                    init_users_router().merge(
                        init_users_admin_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_admin),
                        ),
                    ),
                )
                .nest("/analytics", init_analytics_router())
                .nest(
                    "/admin",
                    Router::new()
                        .merge(init_admin_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_admin),
                        ))
                        .merge(init_moderation_router().route_layer(
                            middleware::from_fn_with_state(state.clone(), require_moderator),
                        )),
                ),
        )
        .fallback(not_found_handler)
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(state.cors_config.allow_credentials)
        })
        .layer(middleware::from_fn(logging_middleware))
        // Outermost stage: every failure produced anywhere in the
        // pipeline, including the fallback, exits through here.
        .layer(middleware::from_fn_with_state(state, error_handler))
}

/// Unmatched routes flow through the same terminal error stage as every
/// other failure.
async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found(format!("Route {} not found", uri.path()))
}
