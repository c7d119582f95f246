mod certificate;
mod progress;
mod quiz;
mod service;

// Public API of the course session subsystem.
pub use certificate::Certificate;
pub use progress::CourseProgress;
pub use quiz::{QuizAttempt, QuizFeedback};
pub use service::CourseSession;
