use std::sync::Arc;

use course_core::model::{ContentBlock, Course, Module};

use super::test_harness::{embedded_course, fresh_session, render_root, render_session};

const CORRECT_ANSWERS: [&str; 7] = ["a", "c", "a", "c", "a", "c", "a"];
const FINAL_VIDEO: &str =
    "https://drive.google.com/file/d/1UbVgLGyYnfw97vYur-C6NpgNcPEq7I3u/preview";

fn session_at(index: usize) -> services::CourseSession {
    let mut session = fresh_session();
    for answer in CORRECT_ANSWERS.iter().take(index) {
        session.select_quiz_option(answer);
        session.submit_quiz();
        session.advance();
    }
    session
}

#[tokio::test(flavor = "current_thread")]
async fn course_root_renders_first_module() {
    let html = render_root(embedded_course());
    assert!(html.contains("Module 1"), "missing position in {html}");
    assert!(html.contains("Knowledge Check"), "missing quiz in {html}");
    assert!(html.contains("Next Module"), "missing advance label in {html}");
    assert!(html.contains("module-item--locked"), "missing locked module in {html}");
    assert!(html.contains("module-item--active"), "missing active module in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn wrong_answer_shows_retry() {
    let mut session = fresh_session();
    session.select_quiz_option("b");
    session.submit_quiz();

    let html = render_session(session);
    assert!(html.contains("Not quite right."), "missing feedback in {html}");
    assert!(html.contains("Try Again"), "missing retry in {html}");
    assert!(html.contains("quiz-option--wrong"), "missing wrong marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn simulation_module_renders_idle_widget() {
    let html = render_session(session_at(6));
    assert!(html.contains("Module 7"), "missing position in {html}");
    assert!(html.contains("Stage 0/4"), "missing stage label in {html}");
    assert!(html.contains("System Nominal"), "missing stage title in {html}");
    assert!(html.contains("SECURE"), "missing status badge in {html}");
    assert!(html.contains("sim-badge--nominal"), "missing severity in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn final_module_requires_video() {
    let html = render_session(session_at(7));
    assert!(html.contains("I have watched the video"), "missing toggle in {html}");
    assert!(html.contains("Please watch the video to proceed"), "missing hint in {html}");
    assert!(html.contains("Finish Course"), "missing finish label in {html}");
    assert!(!html.contains("Knowledge Check"), "unexpected quiz in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn watched_video_clears_hint() {
    let mut session = session_at(7);
    session.mark_video_watched(FINAL_VIDEO);

    let html = render_session(session);
    assert!(html.contains("Video Watched"), "missing watched state in {html}");
    assert!(!html.contains("Please watch the video"), "unexpected hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn finished_course_renders_certificate() {
    let mut session = session_at(7);
    session.mark_video_watched(FINAL_VIDEO);
    session.advance();

    let html = render_session(session);
    assert!(html.contains("Certificate of Completion"), "missing heading in {html}");
    assert!(html.contains("Intrusion Detection"), "missing course title in {html}");
    assert!(html.contains("Training provided by PlaxidityX"), "missing author in {html}");
    assert!(html.contains("Issued on November 14, 2023"), "missing date in {html}");
    assert!(html.contains("Restart Course"), "missing restart in {html}");
    assert!(html.contains("Print Certificate"), "missing print in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn video_without_locator_renders_placeholder() {
    let trailer = Module::new("m1", "Trailer").with_block(ContentBlock::Video {
        title: Some("Coming soon".into()),
        url: None,
        caption: None,
    });
    let course = Arc::new(Course::new("Course", "Author", vec![trailer]).unwrap());

    let html = render_root(course);
    assert!(html.contains("Video coming soon."), "missing placeholder in {html}");
    assert!(!html.contains("I have watched the video"), "unexpected toggle in {html}");
    assert!(!html.contains("Please watch the video"), "unexpected hint in {html}");
}
