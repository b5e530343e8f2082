//! Axum route handlers.
//!
//! # Routes
//!
//! - `GET  /health`      returns `{"ok": true}`
//! - `POST /api/fortune` accepts `{question?, mood?}` and returns a fortune

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::service::FortuneService;
use crate::domain::model::FortuneRequest;
use crate::domain::ports::FortuneGenerator;
use crate::utils::error::FortuneError;

/// Shared application state for the HTTP server.
pub struct AppState<G: FortuneGenerator> {
    pub service: Arc<FortuneService<G>>,
}

impl<G: FortuneGenerator> AppState<G> {
    pub fn new(service: FortuneService<G>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

impl<G: FortuneGenerator> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

/// Build the axum router with all routes.
pub fn app_router<G: FortuneGenerator + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/fortune", post(fortune_handler::<G>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /health: liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "ok": true }))
}

/// POST /api/fortune
///
/// Fields of the wrong type are dropped one by one instead of rejecting the
/// body, so a bad `mood` only falls back to a random mood.
async fn fortune_handler<G: FortuneGenerator + 'static>(
    State(state): State<AppState<G>>,
    body: Bytes,
) -> Response {
    let request = FortuneRequest::from_json_slice(&body);

    match state.service.tell(request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: FortuneError) -> Response {
    if err.is_validation() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
            .into_response();
    }

    tracing::error!("❌ Fortune request failed: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong. Please try again." })),
    )
        .into_response()
}
