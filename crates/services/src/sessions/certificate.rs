use chrono::{DateTime, Utc};

use course_core::model::Course;

/// Proof of completion, issued when the learner advances past the last module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    course_title: String,
    author: String,
    issued_at: DateTime<Utc>,
}

impl Certificate {
    #[must_use]
    pub fn issue(course: &Course, issued_at: DateTime<Utc>) -> Self {
        Self {
            course_title: course.title().to_string(),
            author: course.author().to_string(),
            issued_at,
        }
    }

    #[must_use]
    pub fn course_title(&self) -> &str {
        &self.course_title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }
}
