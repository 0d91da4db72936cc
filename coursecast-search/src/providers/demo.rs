//! Demo backend for offline development.

use async_trait::async_trait;

use super::VideoSearchBackend;
use crate::errors::VideoSearchError;
use crate::types::{SearchRequest, SearchResponse, VideoResult};

/// Demo backend for development and UI work.
///
/// Answers like the real endpoint, including its required-keyword
/// validation, with deterministic videos derived from the keyword.
#[derive(Debug, Clone)]
pub struct DemoBackend {
    result_count: usize,
}

impl DemoBackend {
    /// Demo backend returning three videos per search.
    pub fn new() -> Self {
        Self { result_count: 3 }
    }

    /// Demo backend returning `result_count` videos per search.
    pub fn with_result_count(result_count: usize) -> Self {
        Self { result_count }
    }

    fn demo_video(keyword: &str, index: usize) -> VideoResult {
        let video_id = format!("demo{:07}", index + 1);
        let slug = urlencoding::encode(keyword);

        VideoResult {
            title: format!("{keyword} - Lesson {}", index + 1),
            description: format!("Demo lecture {} covering {keyword}", index + 1),
            channel_id: "UCdemo0000000000000000".to_string(),
            channel_title: "Coursecast Demo Channel".to_string(),
            thumb_url_high: Some(format!(
                "https://i.ytimg.com/vi/{video_id}/hqdefault.jpg?q={slug}"
            )),
            thumb_url_medium: Some(format!(
                "https://i.ytimg.com/vi/{video_id}/mqdefault.jpg?q={slug}"
            )),
            video_id,
        }
    }
}

impl Default for DemoBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoSearchBackend for DemoBackend {
    async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, VideoSearchError> {
        if let Some(errors) = request.validation_errors() {
            return Ok(errors);
        }

        let keyword = request.keyword.trim();
        let videos = (0..self.result_count)
            .map(|index| Self::demo_video(keyword, index))
            .collect();

        Ok(SearchResponse::Videos(videos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_results_follow_keyword() {
        let backend = DemoBackend::new();

        let response = backend
            .search_videos(&SearchRequest::new("pattern matching"))
            .await
            .unwrap();

        let SearchResponse::Videos(videos) = response else {
            panic!("expected videos");
        };
        assert_eq!(videos.len(), 3);
        assert_eq!(videos[0].title, "pattern matching - Lesson 1");
        assert!(
            videos[0]
                .thumb_url_high
                .as_deref()
                .unwrap()
                .ends_with("q=pattern%20matching")
        );
    }

    #[tokio::test]
    async fn test_demo_validates_blank_keyword() {
        let backend = DemoBackend::with_result_count(5);

        let response = backend.search_videos(&SearchRequest::new(" ")).await.unwrap();

        assert!(response.keyword_error().is_some());
    }
}
