//! Backend implementations for keyword video search.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::VideoSearchError;
use crate::types::{SearchRequest, SearchResponse};

pub mod demo;
pub mod http;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use demo::DemoBackend;
pub use http::HttpSearchBackend;
#[cfg(any(test, feature = "test-utils"))]
pub use mock::{ScriptedBackend, sample_video, sample_videos};

/// Trait for keyword video search backends.
///
/// Implementations answer one search request: the remote endpoint over
/// HTTP, built-in demo data, or scripted replies for testing.
#[async_trait]
pub trait VideoSearchBackend: Send + Sync + std::fmt::Debug {
    /// Search for videos matching the request keyword.
    ///
    /// Backend validation failures are returned as `Ok(SearchResponse::Errors)`.
    ///
    /// # Errors
    /// - `VideoSearchError::NetworkError` - Backend unreachable
    /// - `VideoSearchError::Timeout` - No answer within the request timeout
    /// - `VideoSearchError::HttpStatus` - Non-success status without a validation payload
    /// - `VideoSearchError::ParseError` - Body does not match the search contract
    async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, VideoSearchError>;
}

#[async_trait]
impl<B: VideoSearchBackend + ?Sized> VideoSearchBackend for Arc<B> {
    async fn search_videos(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, VideoSearchError> {
        (**self).search_videos(request).await
    }
}
