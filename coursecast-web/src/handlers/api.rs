//! JSON API handlers for keyword video search

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use coursecast_search::{SearchRequest, SearchResponse};
use serde_json::json;

use crate::server::AppState;

/// Handler for `POST /api/get-videos`.
///
/// Blank keywords are answered with the validation payload (HTTP 200),
/// anything else is forwarded to the configured backend.
///
/// # Errors
/// - `StatusCode::BAD_GATEWAY` - Backend failed; body is `{"error": "..."}`
pub async fn api_get_videos(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<serde_json::Value>)> {
    if let Some(errors) = request.validation_errors() {
        tracing::debug!("Rejecting blank keyword");
        return Ok(Json(errors));
    }

    match state.backend.search_videos(&request).await {
        Ok(response) => {
            tracing::info!(
                keyword = %request.keyword,
                videos = response.video_count(),
                "Answered video search"
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!(keyword = %request.keyword, "Backend search failed: {e}");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": e.user_message() })),
            ))
        }
    }
}
