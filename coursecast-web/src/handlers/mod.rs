//! HTTP request handlers organized by functionality

pub mod api;
pub mod htmx;

// Re-export handler functions
pub use api::api_get_videos;
pub use htmx::{KeywordSearchForm, search_fragment};
