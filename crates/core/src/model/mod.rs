pub mod content;
mod course;
mod ids;
mod module;
mod quiz;

pub use content::{
    BlockKind, ComparisonPanel, ContentBlock, ContentError, DiagramNode, DiagramNodeKind, VideoUrl,
};
pub use ids::{ModuleId, ParseIdError};

pub use course::{ContentIssue, Course, CourseError};
pub use module::Module;
pub use quiz::{Quiz, QuizOption};
