//! Full page handlers using component system
//!
//! Pages compose components into complete HTML responses.

pub mod base;
pub mod search;

// Re-export page handlers
pub use base::render_page;
pub use search::{render_search_page, search_page, search_section};
