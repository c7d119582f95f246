use std::sync::Arc;

use course_core::model::{ContentIssue, Course};
use storage::CourseSource;
use tracing::{info, warn};

use crate::error::CourseServiceError;

/// Loads the course document once and reports authoring issues.
#[derive(Clone)]
pub struct CourseService {
    source: Arc<dyn CourseSource>,
}

/// A loaded course together with the issues `Course::lint` found in it.
#[derive(Debug, Clone)]
pub struct LoadedCourse {
    pub course: Arc<Course>,
    pub issues: Vec<ContentIssue>,
}

impl CourseService {
    #[must_use]
    pub fn new(source: Arc<dyn CourseSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn origin(&self) -> String {
        self.source.describe()
    }

    /// Load the course, logging every authoring issue as a warning.
    ///
    /// # Errors
    ///
    /// Returns `CourseServiceError::Load` if the source cannot produce a course.
    pub async fn load(&self) -> Result<LoadedCourse, CourseServiceError> {
        let origin = self.source.describe();
        let course = self
            .source
            .load()
            .await
            .map_err(|source| CourseServiceError::Load {
                origin: origin.clone(),
                source,
            })?;

        let issues = course.lint();
        for issue in &issues {
            warn!(%issue, "course content issue");
        }
        info!(
            %origin,
            title = course.title(),
            modules = course.len(),
            issues = issues.len(),
            "course loaded"
        );

        Ok(LoadedCourse {
            course: Arc::new(course),
            issues,
        })
    }
}
