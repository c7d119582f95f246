#![forbid(unsafe_code)]

pub mod course_service;
pub mod error;
pub mod sessions;
pub mod simulation_player;

pub use course_core::Clock;

pub use course_service::{CourseService, LoadedCourse};
pub use error::CourseServiceError;
pub use simulation_player::{ScheduledAdvance, SimulationPlayer};

pub use sessions::{Certificate, CourseProgress, CourseSession, QuizAttempt, QuizFeedback};
