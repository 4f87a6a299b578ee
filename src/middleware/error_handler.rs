//! Terminal error-handling middleware.
//!
//! Installed as the outermost layer of the router, this middleware owns
//! the response shape for every failed request. Pipeline stages return an
//! [`AppError`](crate::utils::errors::AppError), whose `IntoResponse`
//! implementation stashes [`ErrorDetails`] in the response extensions;
//! this middleware detects the marker, emits the structured error log,
//! and builds the final JSON envelope:
//!
//! ```json
//! {
//!   "success": false,
//!   "error": { "message": "...", "stack": "..." },
//!   "timestamp": "...",
//!   "path": "/api/...",
//!   "method": "GET"
//! }
//! ```
//!
//! In production mode the message is replaced with a generic string and
//! the stack is omitted. Successful responses pass through untouched.

use std::net::SocketAddr;

use axum::{
    Json,
    extract::{ConnectInfo, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde_json::json;
use tracing::error;

use crate::state::AppState;
use crate::utils::errors::ErrorDetails;

pub async fn error_handler(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let response = next.run(req).await;

    let Some(details) = response.extensions().get::<ErrorDetails>().cloned() else {
        return response;
    };

    let status = response.status();

    error!(
        message = %details.message,
        detail = %details.detail,
        stack = %details.stack,
        status = %status.as_u16(),
        url = %path,
        method = %method,
        client_ip = %client_ip,
        user_agent = %user_agent,
        "Request failed"
    );

    let error_body = if state.server_config.production {
        json!({ "message": "Something went wrong" })
    } else {
        json!({
            "message": details.message,
            "stack": details.stack,
        })
    };

    let body = json!({
        "success": false,
        "error": error_body,
        "timestamp": Utc::now().to_rfc3339(),
        "path": path,
        "method": method.as_str(),
    });

    (status, Json(body)).into_response()
}
