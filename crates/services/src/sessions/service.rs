use std::sync::Arc;

use course_core::Clock;
use course_core::model::{Course, Module};
use course_core::progression::{AdvanceOutcome, ModuleStatus, ProgressionEngine};
use tracing::{debug, info};

use super::certificate::Certificate;
use super::progress::CourseProgress;
use super::quiz::{QuizAttempt, QuizFeedback};

/// One learner walking through one course.
///
/// Wraps `ProgressionEngine` with the interaction state the engine does not
/// track: the quiz attempt for the module on screen and the issued certificate.
/// The attempt belongs to the current module and is cleared whenever the
/// current module changes.
#[derive(Debug, Clone)]
pub struct CourseSession {
    engine: ProgressionEngine,
    clock: Clock,
    attempt: QuizAttempt,
    certificate: Option<Certificate>,
}

impl CourseSession {
    #[must_use]
    pub fn new(course: Arc<Course>, clock: Clock) -> Self {
        Self {
            engine: ProgressionEngine::new(course),
            clock,
            attempt: QuizAttempt::default(),
            certificate: None,
        }
    }

    //
    // ─── QUERIES ───────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn engine(&self) -> &ProgressionEngine {
        &self.engine
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        self.engine.course()
    }

    #[must_use]
    pub fn current_module(&self) -> &Module {
        self.engine.current_module()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    #[must_use]
    pub fn module_status(&self, index: usize) -> ModuleStatus {
        self.engine.module_status(index)
    }

    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.engine.can_advance()
    }

    #[must_use]
    pub fn show_certificate(&self) -> bool {
        self.engine.show_certificate()
    }

    #[must_use]
    pub fn certificate(&self) -> Option<&Certificate> {
        self.certificate.as_ref()
    }

    #[must_use]
    pub fn quiz_attempt(&self) -> &QuizAttempt {
        &self.attempt
    }

    #[must_use]
    pub fn progress(&self) -> CourseProgress {
        CourseProgress {
            total: self.course().len(),
            completed: self.engine.completed_count(),
            current: self.engine.current_index(),
            percent: self.engine.progress_percent(),
            is_finished: self.engine.show_certificate(),
        }
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Jump to a module from the module list. Locked modules are ignored.
    pub fn select_module(&mut self, index: usize) -> bool {
        let before = self.engine.current_index();
        let moved = self.engine.select_module(index);
        if moved && before != index {
            self.attempt.retry();
        }
        moved
    }

    /// Leave the current module, issuing the certificate after the last one.
    ///
    /// The certificate is stamped once; finishing again after `go_back` keeps
    /// the original issue time.
    pub fn advance(&mut self) -> AdvanceOutcome {
        let outcome = self.engine.advance();
        match outcome {
            AdvanceOutcome::Blocked => {}
            AdvanceOutcome::Moved { .. } => self.attempt.retry(),
            AdvanceOutcome::Finished => {
                if self.certificate.is_none() {
                    let certificate = Certificate::issue(self.engine.course(), self.clock.now());
                    info!(
                        course = certificate.course_title(),
                        issued_at = %certificate.issued_at(),
                        "certificate issued"
                    );
                    self.certificate = Some(certificate);
                }
            }
        }
        outcome
    }

    pub fn go_back(&mut self) {
        let before = self.engine.current_index();
        self.engine.go_back();
        if self.engine.current_index() != before {
            self.attempt.retry();
        }
    }

    /// Forget everything, including the certificate.
    pub fn restart(&mut self) {
        self.engine.restart();
        self.attempt = QuizAttempt::default();
        self.certificate = None;
        info!(course = self.course().title(), "course restarted");
    }

    //
    // ─── TRACKING ──────────────────────────────────────────────────────────────
    //

    pub fn mark_video_watched(&mut self, url: &str) {
        self.engine.mark_video_watched(url);
    }

    pub fn select_quiz_option(&mut self, option_id: &str) {
        self.attempt.select(option_id);
    }

    /// Submit the selected answer for the current module's quiz.
    ///
    /// Returns `None` when the module has no quiz or nothing is selected.
    /// A correct answer opens the quiz half of the forward gate.
    pub fn submit_quiz(&mut self) -> Option<QuizFeedback> {
        let module = self.engine.current_module();
        let quiz = module.quiz.as_ref()?;
        let id = module.id.clone();
        let feedback = self.attempt.submit(quiz)?;

        debug!(module = %id, correct = feedback.correct, "quiz submitted");
        if feedback.correct {
            self.engine.record_quiz_pass(&id);
        }
        Some(feedback)
    }

    /// Clear a submitted answer so another option can be tried.
    pub fn retry_quiz(&mut self) {
        self.attempt.retry();
    }
}
