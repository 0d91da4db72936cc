//! Coursecast Web - Video search controller and HTMX development server

#![warn(missing_docs)]
#![warn(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]
//!
//! Hosts the search submit controller, which drives a keyword search
//! against a backend and renders results into injected page elements,
//! together with the HTML components and the axum server that serves the
//! course search page.

pub mod components;
pub mod controller;
pub mod elements;
pub mod handlers;
pub mod pages;
pub mod server;

// Re-export main types
pub use controller::{ControllerState, SearchSubmitController, SubmitOutcome};
pub use elements::{
    CardContainer, ErrorDisplay, ErrorText, HeadlessPage, KeywordInput, PageElements,
    ResultsContainer, TextInput,
};
pub use server::{AppState, WebError, build_router, run_server};
