use axum::{Json, extract::State};
use chrono::Utc;
use shared_types::TextEntry;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    dto::{ServiceStatus, SubmitRequest, SubmitResponse},
    error::{ApiError, ApiResult},
    state::AppState,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// GET /
/// Service banner with version, status and feature list
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        message: "Textboard backend".to_string(),
        version: VERSION.to_string(),
        status: "running".to_string(),
        timestamp: Utc::now(),
        features: vec![
            "text submission".to_string(),
            "reverse-chronological listing".to_string(),
            "health checks".to_string(),
        ],
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// POST /submit
/// Store one text; missing or empty text is rejected before any write
#[instrument(skip(state, request))]
pub async fn submit_text(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SubmitRequest>,
) -> ApiResult<Json<SubmitResponse>> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::BadRequest("No text provided".to_string())),
    };

    let id = state.store.insert_text(text).await?;
    info!(id, "text saved");

    Ok(Json(SubmitResponse {
        status: "success".to_string(),
        message: "Text saved successfully".to_string(),
        version: VERSION.to_string(),
        timestamp: Utc::now(),
    }))
}

/// GET /texts
/// Every stored text, most recently inserted first
#[instrument(skip(state))]
pub async fn list_texts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<TextEntry>>> {
    let entries = state.store.list_texts().await?;
    info!(count = entries.len(), "texts listed");
    Ok(Json(entries))
}
