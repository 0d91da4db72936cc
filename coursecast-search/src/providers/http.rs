//! HTTP backend talking to the remote search endpoint.

use async_trait::async_trait;
use coursecast_core::SearchConfig;
use url::Url;

use super::VideoSearchBackend;
use crate::errors::VideoSearchError;
use crate::types::{SearchRequest, SearchResponse};

/// Searches by posting the keyword as JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpSearchBackend {
    client: reqwest::Client,
    url: Url,
}

impl HttpSearchBackend {
    /// Creates a backend from search configuration.
    ///
    /// # Errors
    /// - `VideoSearchError::ProviderError` - Invalid endpoint URL or HTTP client setup failure
    pub fn new(config: &SearchConfig) -> Result<Self, VideoSearchError> {
        let url = config
            .search_url()
            .map_err(|e| VideoSearchError::ProviderError {
                reason: e.to_string(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| VideoSearchError::ProviderError {
                reason: format!("failed to build HTTP client: {e}"),
            })?;

        Ok(Self { client, url })
    }

    /// Endpoint this backend posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl VideoSearchBackend for HttpSearchBackend {
    async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, VideoSearchError> {
        tracing::debug!(url = %self.url, keyword = %request.keyword, "Posting search request");

        let response = self
            .client
            .post(self.url.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }

        // Some backends report validation failures with a 4xx status
        if status.is_client_error() {
            if let Ok(errors @ SearchResponse::Errors { .. }) =
                serde_json::from_slice::<SearchResponse>(&body)
            {
                return Ok(errors);
            }
        }

        tracing::warn!(%status, "Search endpoint returned non-success status");
        Err(VideoSearchError::HttpStatus {
            status: status.as_u16(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn config_for(server: &MockServer) -> SearchConfig {
        SearchConfig {
            base_url: server.uri(),
            ..Default::default()
        }
    }

    /// Mounts one reply for the keyword search endpoint.
    async fn mount_reply(server: &MockServer, reply: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/api/get-videos"))
            .respond_with(reply)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_posts_keyword_and_decodes_videos() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/get-videos"))
            .and(body_json(json!({ "keyword": "rust" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "ytVideoId": "v1", "title": "Borrowing" },
                { "ytVideoId": "v2", "title": "Lifetimes" }
            ])))
            .expect(1)
            .mount(&server)
            .await;
        let backend = HttpSearchBackend::new(&config_for(&server)).unwrap();

        let response = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap();

        assert_eq!(response.video_count(), 2);
    }

    #[tokio::test]
    async fn test_base_url_prefix_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/academy/api/get-videos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&server)
            .await;
        let config = SearchConfig {
            base_url: format!("{}/academy", server.uri()),
            ..Default::default()
        };
        let backend = HttpSearchBackend::new(&config).unwrap();

        let response = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap();

        assert_eq!(response, SearchResponse::Videos(Vec::new()));
    }

    #[tokio::test]
    async fn test_validation_payload_with_client_error_status() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(400).set_body_json(json!({
                "errors": { "keyword": ["This field is required."] }
            })),
        )
        .await;
        let backend = HttpSearchBackend::new(&config_for(&server)).unwrap();

        let response = backend.search_videos(&SearchRequest::new("")).await.unwrap();

        assert_eq!(response.keyword_error(), Some("This field is required."));
    }

    #[tokio::test]
    async fn test_server_error_is_reported_as_status() {
        let server = MockServer::start().await;
        mount_reply(&server, ResponseTemplate::new(500).set_body_string("{}")).await;
        let backend = HttpSearchBackend::new(&config_for(&server)).unwrap();

        let err = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap_err();

        assert_eq!(err, VideoSearchError::HttpStatus { status: 500 });
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })),
        )
        .await;
        let backend = HttpSearchBackend::new(&config_for(&server)).unwrap();

        let err = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, VideoSearchError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_spellings_in_body_still_render() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(200).set_body_json(json!([
                { "id": "abc", "ytVideoId": "abc", "title": "T" }
            ])),
        )
        .await;
        let backend = HttpSearchBackend::new(&config_for(&server)).unwrap();

        let response = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap();

        assert_eq!(response.video_count(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = SearchConfig {
            base_url: format!("http://{addr}"),
            ..Default::default()
        };
        let backend = HttpSearchBackend::new(&config).unwrap();

        let err = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, VideoSearchError::NetworkError { .. }));
    }

    #[tokio::test]
    async fn test_hung_backend_times_out() {
        let server = MockServer::start().await;
        mount_reply(
            &server,
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(5)),
        )
        .await;
        let config = SearchConfig {
            request_timeout: Duration::from_millis(200),
            ..config_for(&server)
        };
        let backend = HttpSearchBackend::new(&config).unwrap();

        let err = backend
            .search_videos(&SearchRequest::new("rust"))
            .await
            .unwrap_err();

        assert!(matches!(err, VideoSearchError::Timeout { .. }));
    }

    #[test]
    fn test_invalid_base_url_is_provider_error() {
        let config = SearchConfig {
            base_url: "::nonsense::".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            HttpSearchBackend::new(&config),
            Err(VideoSearchError::ProviderError { .. })
        ));
    }
}
