//! Search page - find videos and attach them to a course

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Html;
use coursecast_core::CourseContext;

use crate::components::layout;
use crate::elements::{HeadlessPage, KeywordInput};
use crate::pages::base::render_page;

/// Renders the keyword search form, its error slot and the results container.
///
/// The keyword input shows the page's current keyword, so a rejected query
/// stays in the field while a successful one is cleared. This section is
/// also the HTMX swap target of the form itself.
pub fn search_section(course: CourseContext, page: &HeadlessPage) -> String {
    let form = format!(
        r##"<form id="keyword-search-form"
                  hx-post="/courses/{course_id}/search"
                  hx-target="#keyword-search"
                  hx-swap="outerHTML"
                  hx-indicator="#search-spinner"
                  class="space-y-2">
                <div class="flex space-x-4">
                    {input}
                    {button}
                </div>
                {error}
            </form>"##,
        course_id = course.course_id,
        input = layout::input(
            "keyword",
            "keyword",
            "Search videos by keyword...",
            &page.keyword.value(),
            Some("flex-1")
        ),
        button = layout::button("Search", "primary", Some(r#"type="submit""#)),
        error = page.error_html(),
    );

    format!(
        r#"<section id="keyword-search">
            {}
            <span id="search-spinner" class="htmx-indicator text-gray-400 text-sm">Searching...</span>
            <div id="keyword-search-results" class="space-y-4" data-course-id="{}">
                {}
            </div>
        </section>"#,
        layout::card(Some("Find videos"), &form),
        course.course_id,
        page.results.to_html()
    )
}

/// Renders the full search page for one course.
pub fn render_search_page(course: CourseContext) -> Html<String> {
    let content = format!(
        "{}\n{}",
        layout::page_header(
            "Add videos",
            Some(&format!("Search for videos to add to course #{course}"))
        ),
        search_section(course, &HeadlessPage::default())
    );

    render_page("Search", &content)
}

/// Handler for `GET /courses/{course_id}/search`.
///
/// # Errors
/// - `StatusCode::BAD_REQUEST` - Course identifier in the path is not valid
pub async fn search_page(
    Path(course_id): Path<String>,
) -> Result<Html<String>, (StatusCode, String)> {
    let course = CourseContext::from_page_value(&course_id)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.user_message()))?;

    Ok(render_search_page(course))
}
