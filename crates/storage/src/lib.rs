#![forbid(unsafe_code)]

pub mod document;
mod mapping;
pub mod source;

pub use document::CourseRecord;
pub use source::{
    CourseSource, EMBEDDED_COURSE_JSON, EmbeddedCourse, InMemoryCourse, JsonFileCourse,
    StorageError, parse_course, render_course,
};
