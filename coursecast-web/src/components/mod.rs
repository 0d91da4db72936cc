//! Reusable HTML components for HTMX + Tailwind UI
//!
//! Components are server-rendered HTML fragments that can be used
//! in full pages or as HTMX partial updates. All styling uses Tailwind CSS.

pub mod layout;
pub mod video;

// Re-export main component functions
pub use layout::{button, card, escape_html, hidden_input, input, page_header};
pub use video::{HiddenField, VideoCard, add_to_course_form, add_to_course_path, video_card_list};
