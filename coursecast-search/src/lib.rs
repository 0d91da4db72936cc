//! Coursecast Search - Keyword video search contract and backends

#![warn(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Defines the request/response contract of the `POST /api/get-videos`
//! endpoint and the backends able to answer it: the remote endpoint over
//! HTTP, built-in demo data, and scripted replies for tests.

pub mod errors;
pub mod providers;
pub mod types;

// Re-export main types
pub use errors::VideoSearchError;
pub use providers::{DemoBackend, HttpSearchBackend, VideoSearchBackend};
pub use types::{KEYWORD_REQUIRED_MESSAGE, SearchRequest, SearchResponse, VideoResult};

/// Convenience type alias for Results with VideoSearchError.
pub type Result<T> = std::result::Result<T, VideoSearchError>;
