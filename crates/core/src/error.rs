use thiserror::Error;

use crate::model::{ContentError, CourseError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Course(#[from] CourseError),
}
