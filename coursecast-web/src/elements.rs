//! Page elements the search controller reads from and renders into.
//!
//! The controller never looks elements up by itself; the keyword input,
//! the error slot and the results container are handed to it at
//! construction. Element handles behave like DOM nodes: cloning a handle
//! refers to the same element, and mutation goes through `&self`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::components::layout::escape_html;
use crate::components::video::{VideoCard, video_card_list};

/// Text input the keyword is read from.
pub trait KeywordInput: Send + Sync {
    /// Current raw value, untrimmed.
    fn value(&self) -> String;

    /// Clears the input for the next query.
    fn reset(&self);
}

/// Inline message slot under the keyword field.
pub trait ErrorDisplay: Send + Sync {
    fn set_text(&self, text: &str);

    fn clear(&self) {
        self.set_text("");
    }
}

/// Container the result cards are appended to.
pub trait ResultsContainer: Send + Sync {
    /// Removes every card.
    fn clear(&self);

    /// Appends one card after the existing ones.
    fn append(&self, card: VideoCard);
}

/// The three elements a controller is wired to.
#[derive(Clone)]
pub struct PageElements {
    /// Keyword text field
    pub keyword_input: Arc<dyn KeywordInput>,
    /// Inline error slot under the field
    pub error_display: Arc<dyn ErrorDisplay>,
    /// Result card container
    pub results: Arc<dyn ResultsContainer>,
}

/// In-memory keyword input.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: Arc<Mutex<String>>,
}

impl TextInput {
    /// Input holding `value`.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Arc::new(Mutex::new(value.into())),
        }
    }

    /// Simulates the user typing into the field.
    pub fn set_value(&self, value: impl Into<String>) {
        *self.value.lock() = value.into();
    }
}

impl KeywordInput for TextInput {
    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn reset(&self) {
        self.value.lock().clear();
    }
}

/// In-memory error slot.
#[derive(Debug, Clone, Default)]
pub struct ErrorText {
    text: Arc<Mutex<String>>,
}

impl ErrorText {
    /// Message currently shown.
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    /// Whether the slot shows nothing.
    pub fn is_empty(&self) -> bool {
        self.text.lock().is_empty()
    }
}

impl ErrorDisplay for ErrorText {
    fn set_text(&self, text: &str) {
        *self.text.lock() = text.to_string();
    }
}

/// In-memory results container.
#[derive(Debug, Clone, Default)]
pub struct CardContainer {
    cards: Arc<Mutex<Vec<VideoCard>>>,
}

impl CardContainer {
    /// Snapshot of the cards currently shown, in display order.
    pub fn cards(&self) -> Vec<VideoCard> {
        self.cards.lock().clone()
    }

    /// Number of cards shown.
    pub fn len(&self) -> usize {
        self.cards.lock().len()
    }

    /// Whether no card is shown.
    pub fn is_empty(&self) -> bool {
        self.cards.lock().is_empty()
    }

    /// Cards rendered in order.
    pub fn to_html(&self) -> String {
        video_card_list(&self.cards.lock())
    }
}

impl ResultsContainer for CardContainer {
    fn clear(&self) {
        self.cards.lock().clear();
    }

    fn append(&self, card: VideoCard) {
        self.cards.lock().push(card);
    }
}

/// A search page without a browser: the three elements held in memory.
///
/// Used by the development server to render HTMX fragments and by the CLI
/// to run one search from the terminal.
#[derive(Debug, Clone, Default)]
pub struct HeadlessPage {
    /// Keyword field
    pub keyword: TextInput,
    /// Error slot
    pub error: ErrorText,
    /// Rendered cards
    pub results: CardContainer,
}

impl HeadlessPage {
    /// Page whose keyword input already holds `keyword`.
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: TextInput::new(keyword),
            ..Default::default()
        }
    }

    /// Handles onto this page's elements for wiring a controller.
    pub fn elements(&self) -> PageElements {
        PageElements {
            keyword_input: Arc::new(self.keyword.clone()),
            error_display: Arc::new(self.error.clone()),
            results: Arc::new(self.results.clone()),
        }
    }

    /// Error slot markup.
    pub fn error_html(&self) -> String {
        format!(
            r#"<p id="keyword-err" class="text-red-400 text-sm mt-2">{}</p>"#,
            escape_html(&self.error.text())
        )
    }
}
