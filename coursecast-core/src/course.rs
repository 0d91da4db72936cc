//! Course context embedded in the hosting page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoursecastError, Result};

/// Identifier of the course a found video may be attached to.
///
/// The search page embeds it as `data-course-id`; every add-to-course
/// sub-form is parameterized by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CourseContext {
    pub course_id: u64,
}

impl CourseContext {
    pub fn new(course_id: u64) -> Self {
        Self { course_id }
    }

    /// Parses the course identifier as it appears in the page attribute.
    ///
    /// # Errors
    ///
    /// - `CoursecastError::InvalidCourse` - Value is empty or not a non-negative integer
    pub fn from_page_value(value: &str) -> Result<Self> {
        value
            .trim()
            .parse::<u64>()
            .map(Self::new)
            .map_err(|_| CoursecastError::InvalidCourse {
                value: value.to_string(),
            })
    }
}

impl fmt::Display for CourseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.course_id)
    }
}
