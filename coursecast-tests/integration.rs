//! Integration tests for Coursecast
//!
//! These tests run the development server on an ephemeral port and drive
//! the search submit controller against it over real HTTP.

#[path = "integration/search_flow.rs"]
mod search_flow;

#[path = "integration/field_names.rs"]
mod field_names;
