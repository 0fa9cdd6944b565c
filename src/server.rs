//! HTTP surface for the sequential thinking service.
//!
//! The handlers here are a thin boundary: decode the body, call the
//! dispatcher, serialize the envelope. All protocol logic lives in
//! [`crate::thinking`].

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::error;

use crate::thinking::{process_thought, ErrorResponse, ThinkingRequest};

/// Build the Axum router with the thinking endpoint and health check.
pub fn routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health))
        .route("/tools/sequentialthinking_tools", post(sequential_thinking))
        .layer(cors)
}

// ── Health ──────────────────────────────────────────────────────────────

/// GET /
///
/// Service status and endpoint listing.
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "Clean Sequential Thinking Server Running",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "AI Coaching Platform",
        "endpoints": {
            "health": "/",
            "tools": "/tools/sequentialthinking_tools"
        }
    }))
}

// ── Sequential thinking ─────────────────────────────────────────────────

/// POST /tools/sequentialthinking_tools
///
/// Runs one step of the thinking protocol. Processing failures become a
/// 500 with an [`ErrorResponse`] carrying the request's step number.
async fn sequential_thinking(Json(request): Json<ThinkingRequest>) -> impl IntoResponse {
    match process_thought(&request) {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!(error = %e, thought_number = request.thought_number, "Sequential thinking error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    success: false,
                    error: e.to_string(),
                    thought_number: request.thought_number,
                }),
            )
                .into_response()
        }
    }
}
