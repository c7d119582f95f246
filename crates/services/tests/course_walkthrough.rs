use std::sync::Arc;

use async_trait::async_trait;
use course_core::model::Course;
use course_core::progression::{AdvanceOutcome, ModuleStatus};
use course_core::time::{fixed_clock, fixed_now};
use services::{CourseService, CourseServiceError, CourseSession};
use storage::{CourseSource, EmbeddedCourse, StorageError};

const CORRECT_ANSWERS: [&str; 7] = ["a", "c", "a", "c", "a", "c", "a"];
const FINAL_VIDEO: &str =
    "https://drive.google.com/file/d/1UbVgLGyYnfw97vYur-C6NpgNcPEq7I3u/preview";

struct BrokenSource;

#[async_trait]
impl CourseSource for BrokenSource {
    async fn load(&self) -> Result<Course, StorageError> {
        Err(StorageError::NotFound("missing.json".into()))
    }

    fn describe(&self) -> String {
        "broken source".to_string()
    }
}

#[tokio::test]
async fn embedded_course_can_be_completed() {
    let service = CourseService::new(Arc::new(EmbeddedCourse));
    let loaded = service.load().await.unwrap();
    assert!(loaded.issues.is_empty());
    assert_eq!(loaded.course.len(), 8);

    let mut session = CourseSession::new(loaded.course, fixed_clock());
    assert_eq!(session.module_status(1), ModuleStatus::Locked);

    for (index, answer) in CORRECT_ANSWERS.iter().enumerate() {
        assert_eq!(session.current_index(), index);
        assert_eq!(session.advance(), AdvanceOutcome::Blocked);

        session.select_quiz_option(answer);
        let feedback = session.submit_quiz().unwrap();
        assert!(feedback.correct, "module {index} answer {answer}");
        assert_eq!(session.advance(), AdvanceOutcome::Moved { to: index + 1 });
    }

    // Last module has no quiz, only a video.
    assert!(!session.can_advance());
    assert_eq!(session.submit_quiz(), None);
    session.mark_video_watched(FINAL_VIDEO);
    assert_eq!(session.advance(), AdvanceOutcome::Finished);

    let certificate = session.certificate().unwrap();
    assert_eq!(
        certificate.course_title(),
        "Automotive IDPS: Intrusion Detection & Prevention"
    );
    assert_eq!(certificate.issued_at(), fixed_now());
    assert_eq!(session.progress().percent, 100);

    session.restart();
    assert_eq!(session.current_index(), 0);
    assert!(session.certificate().is_none());
}

#[tokio::test]
async fn completed_modules_stay_reachable() {
    let loaded = CourseService::new(Arc::new(EmbeddedCourse))
        .load()
        .await
        .unwrap();
    let mut session = CourseSession::new(loaded.course, fixed_clock());

    session.select_quiz_option("a");
    session.submit_quiz();
    session.advance();
    session.select_quiz_option("c");
    session.submit_quiz();
    session.advance();

    assert!(session.select_module(0));
    assert_eq!(session.module_status(0), ModuleStatus::Active);
    assert_eq!(session.module_status(1), ModuleStatus::Completed);
    assert!(session.quiz_attempt().selected().is_none());
    assert!(session.can_advance());

    assert!(!session.select_module(3));
    assert!(session.select_module(2));
}

#[tokio::test]
async fn load_failure_names_the_source() {
    let service = CourseService::new(Arc::new(BrokenSource));
    let err = service.load().await.unwrap_err();
    assert!(matches!(
        err,
        CourseServiceError::Load { ref origin, source: StorageError::NotFound(_) } if origin == "broken source"
    ));
    assert!(err.to_string().starts_with("failed to load broken source"));
}
