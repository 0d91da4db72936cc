//! Scripted backend for testing.

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::VideoSearchBackend;
use crate::errors::VideoSearchError;
use crate::types::{SearchRequest, SearchResponse, VideoResult};

#[derive(Debug)]
struct ScriptedReply {
    delay: Duration,
    outcome: Result<SearchResponse, VideoSearchError>,
}

/// Backend that answers from a queue of prepared replies.
///
/// Each search pops the next reply, optionally sleeping first so tests can
/// interleave overlapping submissions. Received keywords are recorded.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<ScriptedReply>>,
    keywords: Mutex<Vec<String>>,
}

impl ScriptedBackend {
    /// Backend with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn push_response(&self, response: SearchResponse) -> &Self {
        self.push_delayed(Duration::ZERO, response)
    }

    /// Queues a video list reply.
    pub fn push_videos(&self, videos: Vec<VideoResult>) -> &Self {
        self.push_response(SearchResponse::Videos(videos))
    }

    /// Queues a successful reply delivered after `delay`.
    pub fn push_delayed(&self, delay: Duration, response: SearchResponse) -> &Self {
        self.replies.lock().push_back(ScriptedReply {
            delay,
            outcome: Ok(response),
        });
        self
    }

    /// Queues a transport failure.
    pub fn push_error(&self, error: VideoSearchError) -> &Self {
        self.replies.lock().push_back(ScriptedReply {
            delay: Duration::ZERO,
            outcome: Err(error),
        });
        self
    }

    /// Keywords received so far, in call order.
    pub fn keywords(&self) -> Vec<String> {
        self.keywords.lock().clone()
    }
}

#[async_trait]
impl VideoSearchBackend for ScriptedBackend {
    async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, VideoSearchError> {
        self.keywords.lock().push(request.keyword.clone());

        let reply = self.replies.lock().pop_front();
        let Some(reply) = reply else {
            return Err(VideoSearchError::ProviderError {
                reason: "no scripted reply left".to_string(),
            });
        };

        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.outcome
    }
}

/// A fully populated video record for tests.
pub fn sample_video(index: usize) -> VideoResult {
    VideoResult {
        video_id: format!("vid-{index}"),
        title: format!("Video <{index}> & \"friends\""),
        description: format!("Description for video {index}"),
        channel_id: format!("UC-channel-{index}"),
        channel_title: format!("Channel {index}"),
        thumb_url_high: Some(format!("https://img.test/{index}/high.jpg")),
        thumb_url_medium: Some(format!("https://img.test/{index}/medium.jpg")),
    }
}

/// `count` distinct sample videos.
pub fn sample_videos(count: usize) -> Vec<VideoResult> {
    (0..count).map(sample_video).collect()
}
