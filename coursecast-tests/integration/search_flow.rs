//! End-to-end keyword search: controller -> HTTP backend -> dev server.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use coursecast_core::{CourseContext, SearchConfig, ThumbnailVariant};
use coursecast_search::providers::{ScriptedBackend, sample_videos};
use coursecast_search::{
    DemoBackend, HttpSearchBackend, KEYWORD_REQUIRED_MESSAGE, SearchRequest, SearchResponse,
    VideoSearchBackend, VideoSearchError,
};
use coursecast_web::components::video::fields;
use coursecast_web::{
    AppState, HeadlessPage, KeywordInput, SearchSubmitController, SubmitOutcome, build_router,
};

const COURSE: CourseContext = CourseContext { course_id: 42 };

/// Starts the dev server on an ephemeral port.
async fn spawn_server(backend: Arc<dyn VideoSearchBackend>) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = build_router(AppState::new(backend, ThumbnailVariant::High));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

fn http_backend(addr: SocketAddr) -> Arc<HttpSearchBackend> {
    let config = SearchConfig {
        base_url: format!("http://{addr}"),
        request_timeout: Duration::from_secs(5),
        ..Default::default()
    };
    Arc::new(HttpSearchBackend::new(&config).unwrap())
}

fn controller_for(addr: SocketAddr, page: &HeadlessPage) -> SearchSubmitController {
    SearchSubmitController::new(http_backend(addr), page.elements(), COURSE)
}

#[tokio::test]
async fn test_demo_results_render_one_card_per_video() {
    let addr = spawn_server(Arc::new(DemoBackend::new())).await;
    let page = HeadlessPage::with_keyword("lifetimes");

    let outcome = controller_for(addr, &page).handle_submit().await;

    let SearchResponse::Videos(expected) = DemoBackend::new()
        .search_videos(&SearchRequest::new("lifetimes"))
        .await
        .unwrap()
    else {
        panic!("demo backend should return videos");
    };

    assert_eq!(outcome, SubmitOutcome::Rendered { cards: 3 });
    let cards = page.results.cards();
    assert_eq!(cards.len(), expected.len());
    for (card, video) in cards.iter().zip(&expected) {
        assert_eq!(card.hidden_value(fields::VIDEO_ID), Some(video.video_id.as_str()));
        assert_eq!(card.hidden_value(fields::TITLE), Some(video.title.as_str()));
        assert_eq!(
            card.hidden_value(fields::DESCRIPTION),
            Some(video.description.as_str())
        );
        assert_eq!(card.hidden_value(fields::CHANNEL_ID), Some(video.channel_id.as_str()));
        assert_eq!(
            card.hidden_value(fields::CHANNEL_TITLE),
            Some(video.channel_title.as_str())
        );
        assert_eq!(
            card.hidden_value(fields::THUMB_URL),
            Some(video.thumbnail(ThumbnailVariant::High))
        );
        assert!(card.action.contains("/courses/42/"));
        assert!(card.action.contains(&video.video_id));
    }
    assert_eq!(page.keyword.value(), "");
    assert!(page.error.is_empty());
}

#[tokio::test]
async fn test_blank_keyword_shows_required_message() {
    let backend = Arc::new(ScriptedBackend::new());
    let addr = spawn_server(backend.clone()).await;
    let page = HeadlessPage::with_keyword("   ");

    let outcome = controller_for(addr, &page).handle_submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected {
            message: Some(KEYWORD_REQUIRED_MESSAGE.to_string())
        }
    );
    assert_eq!(page.error.text(), KEYWORD_REQUIRED_MESSAGE);
    assert!(page.results.is_empty());
    assert_eq!(page.keyword.value(), "   ");
    assert!(backend.keywords().is_empty());
}

#[tokio::test]
async fn test_second_search_replaces_previous_cards() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_videos(sample_videos(3)).push_videos(sample_videos(1));
    let addr = spawn_server(backend.clone()).await;
    let page = HeadlessPage::with_keyword("first");
    let controller = controller_for(addr, &page);

    controller.handle_submit().await;
    assert_eq!(page.results.len(), 3);

    page.keyword.set_value("second");
    let outcome = controller.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Rendered { cards: 1 });
    assert_eq!(page.results.len(), 1);
    assert_eq!(backend.keywords(), vec!["first", "second"]);
}

#[tokio::test]
async fn test_rejection_after_success_clears_cards_and_keeps_keyword() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_videos(sample_videos(2))
        .push_response(SearchResponse::field_error("keyword", "Keyword too short"));
    let addr = spawn_server(backend).await;
    let page = HeadlessPage::with_keyword("rust");
    let controller = controller_for(addr, &page);

    controller.handle_submit().await;
    page.keyword.set_value("r");
    controller.handle_submit().await;

    assert!(page.results.is_empty());
    assert_eq!(page.error.text(), "Keyword too short");
    assert_eq!(page.keyword.value(), "r");
}

#[tokio::test]
async fn test_empty_result_list_renders_nothing() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_videos(Vec::new());
    let addr = spawn_server(backend).await;
    let page = HeadlessPage::with_keyword("nothing matches");

    let outcome = controller_for(addr, &page).handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Rendered { cards: 0 });
    assert!(page.results.is_empty());
    assert!(page.error.is_empty());
}

#[tokio::test]
async fn test_backend_failure_is_reported_in_error_slot() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_error(VideoSearchError::NetworkError {
        reason: "upstream down".to_string(),
    });
    let addr = spawn_server(backend).await;
    let page = HeadlessPage::with_keyword("ownership");

    let outcome = controller_for(addr, &page).handle_submit().await;

    let expected = VideoSearchError::HttpStatus { status: 502 }.user_message();
    assert_eq!(outcome, SubmitOutcome::Failed { message: expected.clone() });
    assert_eq!(page.error.text(), expected);
    assert!(page.results.is_empty());
    assert_eq!(page.keyword.value(), "ownership");
}

#[tokio::test]
async fn test_unreachable_backend_keeps_keyword() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let page = HeadlessPage::with_keyword("traits");

    let outcome = controller_for(addr, &page).handle_submit().await;

    assert!(matches!(outcome, SubmitOutcome::Failed { .. }));
    assert!(!page.error.is_empty());
    assert_eq!(page.keyword.value(), "traits");
}

#[tokio::test]
async fn test_search_form_fragment_round_trip() {
    let addr = spawn_server(Arc::new(DemoBackend::with_result_count(2))).await;
    let client = reqwest::Client::new();

    let page = client
        .get(format!("http://{addr}/courses/42/search"))
        .send()
        .await
        .unwrap();
    assert!(page.status().is_success());
    let page_html = page.text().await.unwrap();
    assert!(page_html.contains(r#"hx-post="/courses/42/search""#));
    assert!(page_html.contains(r#"data-course-id="42""#));

    let fragment = client
        .post(format!("http://{addr}/courses/42/search"))
        .header("content-type", "application/x-www-form-urlencoded")
        .body("keyword=pattern+matching")
        .send()
        .await
        .unwrap();
    assert!(fragment.status().is_success());
    let html = fragment.text().await.unwrap();

    assert_eq!(html.matches("<article").count(), 2);
    assert!(html.contains("pattern matching - Lesson 1"));
    assert!(html.contains(r#"action="/courses/42/add-video/demo0000001""#));
}

#[tokio::test]
async fn test_json_endpoint_matches_contract() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_videos(sample_videos(1));
    let addr = spawn_server(backend).await;

    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/get-videos"))
        .json(&serde_json::json!({ "keyword": "tokio" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let first = &body.as_array().unwrap()[0];
    assert_eq!(first["ytVideoId"], "vid-0");
    assert_eq!(first["title"], "Video <0> & \"friends\"");
    assert!(first["thumb_url_high"].is_string());
}
