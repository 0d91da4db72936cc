//! Coursecast Core - Configuration and shared runtime plumbing
//!
//! Provides the pieces every other Coursecast crate builds on: centralized
//! configuration with environment overrides, the runtime mode switch,
//! the course context read from the hosting page, and tracing setup.

pub mod config;
pub mod course;
pub mod mode;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{CoursecastConfig, SearchConfig, ServerConfig, ThumbnailVariant};
pub use course::CourseContext;
pub use mode::RuntimeMode;

/// Core errors that can bubble up from any Coursecast subsystem.
#[derive(Debug, thiserror::Error)]
pub enum CoursecastError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Invalid course identifier: '{value}'")]
    InvalidCourse { value: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoursecastError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            CoursecastError::Configuration { reason } => format!("Configuration problem: {reason}"),
            CoursecastError::InvalidCourse { .. } => "This page is not linked to a course".to_string(),
            CoursecastError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CoursecastError::InvalidCourse { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoursecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_error_classification() {
        let invalid = CoursecastError::InvalidCourse {
            value: "abc".to_string(),
        };
        assert!(invalid.is_user_error());
        assert_eq!(invalid.user_message(), "This page is not linked to a course");

        let config = CoursecastError::Configuration {
            reason: "bad url".to_string(),
        };
        assert!(!config.is_user_error());
        assert!(config.to_string().contains("bad url"));
    }
}
