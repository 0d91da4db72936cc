//! Keyword search submit controller
//!
//! Owns one search form's submit cycle: read the keyword, ask the backend,
//! and render either result cards or an inline message into the injected
//! page elements.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use coursecast_core::{CourseContext, ThumbnailVariant};
use coursecast_search::{SearchRequest, SearchResponse, VideoSearchBackend, VideoSearchError};

use crate::components::video::VideoCard;
use crate::elements::{ErrorDisplay, KeywordInput, PageElements, ResultsContainer};

/// Whether a submission is currently waiting on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No submission in flight
    Idle,
    /// At least one submission is waiting on the backend
    AwaitingResponse,
}

/// What one submission did to the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Result list rendered; the keyword input was reset.
    Rendered { cards: usize },
    /// Backend rejected the keyword. `message` is what the error slot shows,
    /// `None` when the payload had no entry for the keyword field.
    Rejected { message: Option<String> },
    /// Transport or contract failure, reported in the error slot.
    Failed { message: String },
    /// A newer submission was issued while this one was in flight; its
    /// response was dropped without touching the page.
    Superseded,
}

/// Decrements the in-flight counter even if the submission is cancelled.
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Submit controller for one keyword search form.
///
/// Every submission takes a request token; only the response to the most
/// recent token is rendered, so overlapping submissions cannot render out
/// of order.
pub struct SearchSubmitController {
    backend: Arc<dyn VideoSearchBackend>,
    keyword_input: Arc<dyn KeywordInput>,
    error_display: Arc<dyn ErrorDisplay>,
    results: Arc<dyn ResultsContainer>,
    course: CourseContext,
    thumbnail: ThumbnailVariant,
    latest_token: AtomicU64,
    in_flight: AtomicUsize,
}

impl SearchSubmitController {
    /// Controller wired to `elements`, adding videos to `course`.
    pub fn new(
        backend: Arc<dyn VideoSearchBackend>,
        elements: PageElements,
        course: CourseContext,
    ) -> Self {
        Self {
            backend,
            keyword_input: elements.keyword_input,
            error_display: elements.error_display,
            results: elements.results,
            course,
            thumbnail: ThumbnailVariant::default(),
            latest_token: AtomicU64::new(0),
            in_flight: AtomicUsize::new(0),
        }
    }

    /// Selects which thumbnail resolution the cards show.
    pub fn with_thumbnail(mut self, thumbnail: ThumbnailVariant) -> Self {
        self.thumbnail = thumbnail;
        self
    }

    /// Course the cards add videos to.
    pub fn course(&self) -> CourseContext {
        self.course
    }

    /// Whether a submission is in flight.
    pub fn state(&self) -> ControllerState {
        if self.in_flight.load(Ordering::SeqCst) > 0 {
            ControllerState::AwaitingResponse
        } else {
            ControllerState::Idle
        }
    }

    /// Sends `keyword` to the backend as-is and waits for its answer.
    ///
    /// # Errors
    /// - `VideoSearchError` - Transport or contract failure; validation
    ///   problems come back as `Ok(SearchResponse::Errors)`
    pub async fn submit_search(&self, keyword: &str) -> Result<SearchResponse, VideoSearchError> {
        tracing::debug!(keyword, course = %self.course, "Submitting keyword search");
        self.backend
            .search_videos(&SearchRequest::new(keyword))
            .await
    }

    /// Renders a backend response into the page.
    ///
    /// Clears the error slot and every previous card first. Validation
    /// errors leave the keyword input untouched; a rendered result list
    /// resets it.
    pub fn render_result(&self, response: &SearchResponse) -> SubmitOutcome {
        self.error_display.clear();
        self.results.clear();

        match response {
            SearchResponse::Errors { errors } => {
                let message = response.keyword_error().map(str::to_string);
                match &message {
                    Some(message) => self.error_display.set_text(message),
                    None => tracing::warn!(
                        fields = ?errors.keys().collect::<Vec<_>>(),
                        "Search rejected without a keyword message"
                    ),
                }
                SubmitOutcome::Rejected { message }
            }
            SearchResponse::Videos(videos) => {
                for video in videos {
                    self.results
                        .append(VideoCard::new(video, self.course, self.thumbnail));
                }
                self.keyword_input.reset();

                tracing::info!(cards = videos.len(), course = %self.course, "Rendered search results");
                SubmitOutcome::Rendered {
                    cards: videos.len(),
                }
            }
        }
    }

    /// Reports a failed search in the error slot.
    ///
    /// Previous cards are removed; the keyword stays so the user can retry.
    pub fn render_failure(&self, error: &VideoSearchError) -> SubmitOutcome {
        let message = error.user_message();
        self.results.clear();
        self.error_display.set_text(&message);
        SubmitOutcome::Failed { message }
    }

    /// Runs one full submit cycle: read keyword, search, render.
    pub async fn handle_submit(&self) -> SubmitOutcome {
        let keyword = self.keyword_input.value();
        let token = self.latest_token.fetch_add(1, Ordering::SeqCst) + 1;

        let result = {
            let _in_flight = InFlight::enter(&self.in_flight);
            self.submit_search(&keyword).await
        };

        if self.latest_token.load(Ordering::SeqCst) != token {
            tracing::debug!(token, keyword = %keyword, "Dropping response to superseded search");
            return SubmitOutcome::Superseded;
        }

        match result {
            Ok(response) => self.render_result(&response),
            Err(e) => {
                tracing::warn!(keyword = %keyword, "Video search failed: {e}");
                self.render_failure(&e)
            }
        }
    }
}

impl std::fmt::Debug for SearchSubmitController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchSubmitController")
            .field("backend", &self.backend)
            .field("course", &self.course)
            .field("thumbnail", &self.thumbnail)
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use coursecast_search::providers::{ScriptedBackend, sample_videos};
    use coursecast_search::types::KEYWORD_REQUIRED_MESSAGE;
    use proptest::prelude::*;

    use super::*;
    use crate::components::video::fields;
    use crate::elements::HeadlessPage;

    const COURSE: CourseContext = CourseContext { course_id: 42 };

    fn controller_for(page: &HeadlessPage) -> (Arc<ScriptedBackend>, SearchSubmitController) {
        let backend = Arc::new(ScriptedBackend::new());
        let controller = SearchSubmitController::new(backend.clone(), page.elements(), COURSE);
        (backend, controller)
    }

    #[tokio::test]
    async fn test_renders_one_card_per_video_with_mirrored_fields() {
        let page = HeadlessPage::with_keyword("rust");
        let (backend, controller) = controller_for(&page);
        let videos = sample_videos(4);
        backend.push_videos(videos.clone());

        let outcome = controller.handle_submit().await;

        assert_eq!(outcome, SubmitOutcome::Rendered { cards: 4 });
        let cards = page.results.cards();
        assert_eq!(cards.len(), 4);
        for (card, video) in cards.iter().zip(&videos) {
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
                video.thumb_url_high.as_deref()
            );
            assert!(card.action.contains("/courses/42/"));
            assert!(card.action.ends_with(&video.video_id));
        }
        assert_eq!(backend.keywords(), vec!["rust"]);
    }

    #[tokio::test]
    async fn test_validation_error_shows_first_message_and_keeps_input() {
        let page = HeadlessPage::with_keyword("   ");
        let (backend, controller) = controller_for(&page);
        let mut errors = std::collections::BTreeMap::new();
        errors.insert(
            "keyword".to_string(),
            vec![KEYWORD_REQUIRED_MESSAGE.to_string(), "second".to_string()],
        );
        backend.push_response(SearchResponse::Errors { errors });

        let outcome = controller.handle_submit().await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: Some(KEYWORD_REQUIRED_MESSAGE.to_string())
            }
        );
        assert_eq!(page.error.text(), KEYWORD_REQUIRED_MESSAGE);
        assert!(page.results.is_empty());
        assert_eq!(page.keyword.value(), "   ");
    }

    #[tokio::test]
    async fn test_second_search_replaces_first_results() {
        let page = HeadlessPage::with_keyword("first");
        let (backend, controller) = controller_for(&page);
        backend
            .push_videos(sample_videos(3))
            .push_videos(sample_videos(2));

        controller.handle_submit().await;
        assert_eq!(page.keyword.value(), "");
        page.keyword.set_value("second");
        let outcome = controller.handle_submit().await;

        assert_eq!(outcome, SubmitOutcome::Rendered { cards: 2 });
        let ids: Vec<_> = page.results.cards().into_iter().map(|c| c.video_id).collect();
        assert_eq!(ids, vec!["vid-0", "vid-1"]);
    }

    #[tokio::test]
    async fn test_success_clears_stale_error_text() {
        let page = HeadlessPage::with_keyword("");
        let (backend, controller) = controller_for(&page);
        backend
            .push_response(SearchResponse::field_error("keyword", "Required"))
            .push_videos(sample_videos(1));

        controller.handle_submit().await;
        assert_eq!(page.error.text(), "Required");

        page.keyword.set_value("rust");
        controller.handle_submit().await;
        assert!(page.error.is_empty());
        assert_eq!(page.results.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_result_list_renders_nothing() {
        let page = HeadlessPage::with_keyword("obscure");
        let (backend, controller) = controller_for(&page);
        backend.push_videos(sample_videos(2)).push_videos(Vec::new());

        controller.handle_submit().await;
        page.keyword.set_value("more obscure");
        let outcome = controller.handle_submit().await;

        assert_eq!(outcome, SubmitOutcome::Rendered { cards: 0 });
        assert!(page.results.is_empty());
        assert!(page.error.is_empty());
        assert_eq!(page.results.to_html(), "");
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_to_user() {
        let page = HeadlessPage::with_keyword("rust");
        let (backend, controller) = controller_for(&page);
        backend
            .push_videos(sample_videos(2))
            .push_error(VideoSearchError::NetworkError {
                reason: "connection refused".to_string(),
            });

        controller.handle_submit().await;
        page.keyword.set_value("rust again");
        let outcome = controller.handle_submit().await;

        let SubmitOutcome::Failed { message } = outcome else {
            panic!("expected failure, got {outcome:?}");
        };
        assert_eq!(page.error.text(), message);
        assert!(!message.contains("connection refused"));
        assert!(page.results.is_empty());
        assert_eq!(page.keyword.value(), "rust again");
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[tokio::test]
    async fn test_error_payload_without_keyword_entry() {
        let page = HeadlessPage::with_keyword("rust");
        let (backend, controller) = controller_for(&page);
        backend.push_response(SearchResponse::field_error("csrf_token", "Missing."));

        let outcome = controller.handle_submit().await;

        assert_eq!(outcome, SubmitOutcome::Rejected { message: None });
        assert!(page.error.is_empty());
        assert_eq!(page.keyword.value(), "rust");
    }

    #[tokio::test]
    async fn test_stale_response_is_not_rendered() {
        let page = HeadlessPage::with_keyword("slow");
        let (backend, controller) = controller_for(&page);
        backend
            .push_delayed(
                Duration::from_millis(150),
                SearchResponse::Videos(sample_videos(5)),
            )
            .push_videos(sample_videos(1));

        let (slow, fast) = tokio::join!(controller.handle_submit(), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            assert_eq!(controller.state(), ControllerState::AwaitingResponse);
            page.keyword.set_value("fast");
            controller.handle_submit().await
        });

        assert_eq!(slow, SubmitOutcome::Superseded);
        assert_eq!(fast, SubmitOutcome::Rendered { cards: 1 });
        assert_eq!(page.results.len(), 1);
        assert_eq!(backend.keywords(), vec!["slow", "fast"]);
        assert_eq!(controller.state(), ControllerState::Idle);
    }

    #[test]
    fn test_medium_thumbnail_selection() {
        let page = HeadlessPage::default();
        let (_backend, controller) = controller_for(&page);
        let controller = controller.with_thumbnail(ThumbnailVariant::Medium);

        controller.render_result(&SearchResponse::Videos(sample_videos(1)));

        assert_eq!(
            page.results.cards()[0].thumbnail_url,
            "https://img.test/0/medium.jpg"
        );
    }

    proptest! {
        #[test]
        fn prop_card_count_matches_response(count in 0usize..40, previous in 0usize..10) {
            let page = HeadlessPage::with_keyword("anything");
            let (_backend, controller) = controller_for(&page);

            controller.render_result(&SearchResponse::Videos(sample_videos(previous)));
            let outcome = controller.render_result(&SearchResponse::Videos(sample_videos(count)));

            prop_assert_eq!(outcome, SubmitOutcome::Rendered { cards: count });
            prop_assert_eq!(page.results.len(), count);
            let cards = page.results.cards();
            for (index, card) in cards.iter().enumerate() {
                let expected = format!("vid-{index}");
                prop_assert_eq!(card.hidden_value(fields::VIDEO_ID), Some(expected.as_str()));
                prop_assert_eq!(card.hidden_fields.len(), 6);
            }
        }
    }
}
