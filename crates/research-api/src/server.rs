//! Axum server and routes.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use research_service::ResearchService;
use research_types::{ChatClient, ResearchError, ResearchRequest};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub service: ResearchService<Arc<dyn ChatClient>>,
}

impl AppState {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self {
            service: ResearchService::new(client),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/research/process", post(handle_process))
        .route("/health", get(handle_health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Unknown operations are the caller's fault; anything from the chat backend is ours.
fn error_status(err: &ResearchError) -> StatusCode {
    match err {
        ResearchError::InvalidOperation(_) => StatusCode::BAD_REQUEST,
        ResearchError::Completion(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn handle_process(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ResearchRequest>,
) -> Result<String, (StatusCode, String)> {
    match state.service.process_content(&req).await {
        Ok(text) => {
            tracing::info!(operation = %req.operation, "research request processed");
            Ok(text)
        }
        Err(e) => {
            let status = error_status(&e);
            tracing::info!(operation = %req.operation, status = %status, error = %e, "research request failed");
            Err((status, e.to_string()))
        }
    }
}

async fn handle_health() -> &'static str {
    "ok"
}
