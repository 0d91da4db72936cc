//! HTMX handlers for partial updates
//!
//! The search form posts here; the response replaces the whole search
//! section, rendered by running the submit controller on a headless page.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use coursecast_core::CourseContext;
use serde::Deserialize;

use crate::controller::SearchSubmitController;
use crate::elements::HeadlessPage;
use crate::pages::search_section;
use crate::server::AppState;

/// Form data posted by the keyword search form
#[derive(Debug, Deserialize)]
pub struct KeywordSearchForm {
    /// Raw keyword, untrimmed
    #[serde(default)]
    pub keyword: String,
}

/// Handler for `POST /courses/{course_id}/search`.
///
/// # Errors
/// - `StatusCode::BAD_REQUEST` - Course identifier in the path is not valid
pub async fn search_fragment(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Form(form): Form<KeywordSearchForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let course = CourseContext::from_page_value(&course_id)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.user_message()))?;

    let page = HeadlessPage::with_keyword(form.keyword);
    let controller = SearchSubmitController::new(state.backend.clone(), page.elements(), course)
        .with_thumbnail(state.thumbnail);

    let outcome = controller.handle_submit().await;
    tracing::debug!(?outcome, %course, "Rendered search fragment");

    Ok(Html(search_section(course, &page)))
}
