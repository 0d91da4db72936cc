//! Backends that still answer with the older snake_case record fields.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use coursecast_core::{CourseContext, SearchConfig, ThumbnailVariant};
use coursecast_search::HttpSearchBackend;
use coursecast_web::components::video::fields;
use coursecast_web::{HeadlessPage, SearchSubmitController, SubmitOutcome};
use serde_json::{Value, json};

async fn legacy_videos() -> axum::Json<Value> {
    axum::Json(json!([
        {
            "id": "abc123",
            "title": "Intro to Iterators",
            "description": "Adapters and consumers",
            "channel_id": "UC-legacy",
            "channel_title": "Legacy Channel",
            "thumb_url": "https://img.test/abc123/high.jpg"
        },
        {
            "yt_video_id": "def456",
            "title": "Closures",
            "yt_channel_id": "UC-snake",
            "yt_channel_title": "Snake Channel",
            "thumb_url_medium": "https://img.test/def456/medium.jpg"
        }
    ]))
}

async fn spawn_legacy_endpoint() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().route("/api/get-videos", post(legacy_videos));

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn test_legacy_field_names_fill_hidden_inputs() {
    let addr = spawn_legacy_endpoint().await;
    let config = SearchConfig {
        base_url: format!("http://{addr}"),
        ..Default::default()
    };
    let backend = Arc::new(HttpSearchBackend::new(&config).unwrap());
    let page = HeadlessPage::with_keyword("rust");
    let controller = SearchSubmitController::new(backend, page.elements(), CourseContext::new(7))
        .with_thumbnail(ThumbnailVariant::High);

    let outcome = controller.handle_submit().await;

    assert_eq!(outcome, SubmitOutcome::Rendered { cards: 2 });
    let cards = page.results.cards();

    assert_eq!(cards[0].hidden_value(fields::VIDEO_ID), Some("abc123"));
    assert_eq!(cards[0].hidden_value(fields::CHANNEL_ID), Some("UC-legacy"));
    assert_eq!(cards[0].hidden_value(fields::CHANNEL_TITLE), Some("Legacy Channel"));
    assert_eq!(
        cards[0].hidden_value(fields::THUMB_URL),
        Some("https://img.test/abc123/high.jpg")
    );
    assert_eq!(cards[0].action, "/courses/7/add-video/abc123");

    assert_eq!(cards[1].hidden_value(fields::VIDEO_ID), Some("def456"));
    assert_eq!(cards[1].hidden_value(fields::DESCRIPTION), Some(""));
    assert_eq!(cards[1].hidden_value(fields::CHANNEL_TITLE), Some("Snake Channel"));
    // High requested but only medium sent
    assert_eq!(
        cards[1].hidden_value(fields::THUMB_URL),
        Some("https://img.test/def456/medium.jpg")
    );
}
