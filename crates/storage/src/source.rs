use std::path::PathBuf;

use async_trait::async_trait;
use course_core::model::{ContentError, Course};
use thiserror::Error;
use tracing::debug;

use crate::document::CourseRecord;

/// The bundled Automotive IDPS course document.
pub const EMBEDDED_COURSE_JSON: &str = include_str!("../data/idps_course.json");

/// Errors surfaced while loading a course document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("course document not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed course document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("module {module}, section {position}: {source}")]
    InvalidSection {
        module: String,
        position: usize,
        #[source]
        source: ContentError,
    },

    #[error(transparent)]
    Domain(#[from] course_core::Error),
}

/// Parse a JSON course document into a validated `Course`.
///
/// # Errors
///
/// Returns `StorageError::Parse` for malformed JSON and mapping errors for
/// structurally invalid content.
pub fn parse_course(json: &str) -> Result<Course, StorageError> {
    let record: CourseRecord = serde_json::from_str(json)?;
    record.into_course()
}

/// Render a course back into its JSON document form.
///
/// # Errors
///
/// Returns `StorageError::Parse` if serialization fails.
pub fn render_course(course: &Course) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(&CourseRecord::from_course(course))?)
}

/// Where the course document comes from. Loaded once at startup.
#[async_trait]
pub trait CourseSource: Send + Sync {
    /// Load and validate the course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the document is missing, malformed or invalid.
    async fn load(&self) -> Result<Course, StorageError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// The course compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCourse;

#[async_trait]
impl CourseSource for EmbeddedCourse {
    async fn load(&self) -> Result<Course, StorageError> {
        parse_course(EMBEDDED_COURSE_JSON)
    }

    fn describe(&self) -> String {
        "embedded course".to_string()
    }
}

/// A JSON course document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCourse {
    path: PathBuf,
}

impl JsonFileCourse {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CourseSource for JsonFileCourse {
    async fn load(&self) -> Result<Course, StorageError> {
        debug!(path = %self.path.display(), "reading course document");
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound => StorageError::NotFound(self.path.clone()),
                _ => StorageError::Io(err),
            })?;
        parse_course(&raw)
    }

    fn describe(&self) -> String {
        format!("course file {}", self.path.display())
    }
}

/// Simple in-memory source for tests and prototyping.
#[derive(Debug, Clone)]
pub struct InMemoryCourse {
    course: Course,
}

impl InMemoryCourse {
    #[must_use]
    pub fn new(course: Course) -> Self {
        Self { course }
    }
}

#[async_trait]
impl CourseSource for InMemoryCourse {
    async fn load(&self) -> Result<Course, StorageError> {
        Ok(self.course.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory course '{}'", self.course.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::{ContentIssue, CourseError, ModuleId};

    #[test]
    fn embedded_course_parses() {
        let course = parse_course(EMBEDDED_COURSE_JSON).unwrap();
        assert_eq!(course.len(), 8);
        assert_eq!(course.author(), "PlaxidityX");
        assert!(course.lint().is_empty(), "{:?}", course.lint());
    }

    #[test]
    fn embedded_course_gates_last_module_on_video_only() {
        let course = parse_course(EMBEDDED_COURSE_JSON).unwrap();
        let last = &course.modules()[7];
        assert_eq!(last.id, ModuleId::new("m8"));
        assert!(!last.has_quiz());
        assert_eq!(last.video_urls().count(), 1);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_course("{ not json").unwrap_err();
        assert!(matches!(err, StorageError::Parse(_)));
    }

    #[test]
    fn empty_module_list_is_rejected() {
        let err = parse_course(r#"{"title":"t","author":"a","modules":[]}"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::Domain(course_core::Error::Course(CourseError::Empty))
        ));
    }

    #[test]
    fn invalid_section_reports_module_and_position() {
        let json = r#"{"title":"t","author":"a","modules":[
            {"id":"m1","title":"One","shortTitle":"One","sections":[
                {"type":"text","content":"ok"},
                {"type":"list","content":"not a list"}
            ]}
        ]}"#;
        let err = parse_course(json).unwrap_err();
        match err {
            StorageError::InvalidSection {
                module, position, ..
            } => {
                assert_eq!(module, "m1");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn unusual_video_locators_load_and_are_linted() {
        let json = r#"{"title":"t","author":"a","modules":[
            {"id":"m1","title":"One","shortTitle":"One","sections":[
                {"type":"video","videoUrl":"videos/intro.mp4"},
                {"type":"video","title":"Coming soon"}
            ]}
        ]}"#;
        let course = parse_course(json).unwrap();
        let module = &course.modules()[0];
        let tracked: Vec<&str> = module.video_urls().map(|url| url.as_str()).collect();
        assert_eq!(tracked, vec!["videos/intro.mp4"]);

        let issues = course.lint();
        assert_eq!(issues.len(), 2, "{issues:?}");
        assert!(issues.contains(&ContentIssue::VideoWithoutLocator {
            module: ModuleId::new("m1"),
            position: 1
        }));
    }

    #[test]
    fn rendered_course_parses_back_to_same_course() {
        let course = parse_course(EMBEDDED_COURSE_JSON).unwrap();
        let rendered = render_course(&course).unwrap();
        assert_eq!(parse_course(&rendered).unwrap(), course);
    }
}
