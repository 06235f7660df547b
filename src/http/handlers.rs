//! HTTP API request handlers
//!
//! Stateless handlers over the storage gateway. Reads never fail the fetch
//! contract: any backend problem degrades to the synthesized empty record.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, warn};

use super::types::*;
use crate::storage::{ClipboardStore, StoreError};
use crate::types::ClipboardItem;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClipboardStore>,
}

/// Single-page browser UI, embedded at build time
const INDEX_PAGE: &str = include_str!("../../assets/index.html");

/// Serve the browser UI
pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Fetch the current clipboard record
pub async fn fetch_clipboard(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.read().await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)),
        Ok(None) => {
            debug!("no clipboard record stored, synthesizing empty record");
            (StatusCode::OK, Json(ClipboardItem::empty()))
        }
        Err(e) => {
            // Absence of data is not a failure; neither is backend trouble
            // on the read path
            warn!("clipboard read failed, degrading to empty record: {}", e);
            (StatusCode::OK, Json(ClipboardItem::empty()))
        }
    }
}

/// Replace the current clipboard record
pub async fn replace_clipboard(
    State(state): State<AppState>,
    payload: Result<Json<ReplaceRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "content must be a string: {}",
                    rejection.body_text()
                ))),
            )
                .into_response();
        }
    };

    if request.content.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("content must not be empty")),
        )
            .into_response();
    }

    let item = ClipboardItem::from_content(request.content);
    debug!(
        "storing clipboard record: type={}, {} bytes",
        item.kind,
        item.content.len()
    );

    match state.store.write(&item).await {
        Ok(()) => (StatusCode::OK, Json(item)).into_response(),
        Err(e @ StoreError::PayloadTooLarge { .. }) => (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(ErrorResponse::payload_too_large(e.to_string())),
        )
            .into_response(),
        Err(e) => {
            error!("clipboard write failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::backend_unavailable(e.to_string()).with_record(item)),
            )
                .into_response()
        }
    }
}

/// Clear the clipboard by storing an empty record. The record persists with
/// empty content; readers cannot distinguish "cleared" from "never written".
pub async fn clear_clipboard(State(state): State<AppState>) -> Response {
    let item = ClipboardItem::empty();

    match state.store.write(&item).await {
        Ok(()) => (StatusCode::OK, Json(ClearResponse { success: true })).into_response(),
        Err(e) => {
            error!("clipboard clear failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::backend_unavailable(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Backend connectivity report
pub async fn debug_storage(State(state): State<AppState>) -> impl IntoResponse {
    let (can_read, error) = match state.store.read().await {
        Ok(_) => (true, None),
        Err(e) => (false, Some(e.to_string())),
    };

    Json(DebugResponse {
        timestamp: Utc::now().to_rfc3339(),
        configured: state.store.is_configured(),
        can_read,
        error,
    })
}
