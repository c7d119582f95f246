//! Course traversal state machine.
//!
//! `ProgressionEngine` owns the per-session bookkeeping (current module, completed
//! modules, passed quizzes, watched videos, certificate flag) and decides whether
//! the learner may leave the current module. All operations are total: invalid
//! requests are ignored instead of failing.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::model::{Course, Module, ModuleId, VideoUrl};

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Runtime session state. `ProgressState::default()` is the initial state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub current_index: usize,
    /// Only grows, except through `restart`.
    pub completed: BTreeSet<ModuleId>,
    pub passed_quizzes: BTreeSet<ModuleId>,
    pub watched_videos: BTreeSet<String>,
    pub show_certificate: bool,
}

/// How a module should be presented in the module list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleStatus {
    Active,
    Completed,
    Available,
    Locked,
}

/// Result of an `advance` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Gate not satisfied; nothing changed.
    Blocked,
    /// Moved on to the module at `to`.
    Moved { to: usize },
    /// Advanced past the final module; the certificate is now shown.
    Finished,
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct ProgressionEngine {
    course: Arc<Course>,
    state: ProgressState,
}

impl ProgressionEngine {
    #[must_use]
    pub fn new(course: Arc<Course>) -> Self {
        Self {
            course,
            state: ProgressState::default(),
        }
    }

    #[must_use]
    pub fn course(&self) -> &Arc<Course> {
        &self.course
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// The module being viewed. `Course` is never empty and the index is kept in range.
    #[must_use]
    pub fn current_module(&self) -> &Module {
        &self.course.modules()[self.state.current_index]
    }

    /// The module after the current one, if any ("up next").
    #[must_use]
    pub fn next_module(&self) -> Option<&Module> {
        self.course.module(self.state.current_index + 1)
    }

    #[must_use]
    pub fn is_last_module(&self) -> bool {
        self.state.current_index + 1 == self.course.len()
    }

    #[must_use]
    pub fn show_certificate(&self) -> bool {
        self.state.show_certificate
    }

    #[must_use]
    pub fn is_completed(&self, id: &ModuleId) -> bool {
        self.state.completed.contains(id)
    }

    #[must_use]
    pub fn is_quiz_passed(&self, id: &ModuleId) -> bool {
        self.state.passed_quizzes.contains(id)
    }

    #[must_use]
    pub fn is_video_watched(&self, url: &str) -> bool {
        self.state.watched_videos.contains(url)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.state.completed.len()
    }

    /// Position in the course as shown by the progress bar, `0..=100`.
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = self.course.len().max(1);
        let percent = (self.state.current_index + 1) * 100 / total;
        u8::try_from(percent.min(100)).unwrap_or(100)
    }

    /// A module is locked when its predecessor is not completed, unless it is
    /// the first module or the current one. Out-of-range indices are locked.
    #[must_use]
    pub fn is_locked(&self, index: usize) -> bool {
        if index >= self.course.len() {
            return true;
        }
        if index == 0 || index == self.state.current_index {
            return false;
        }
        let previous = &self.course.modules()[index - 1];
        !self.state.completed.contains(&previous.id)
    }

    #[must_use]
    pub fn module_status(&self, index: usize) -> ModuleStatus {
        if index == self.state.current_index {
            return ModuleStatus::Active;
        }
        if self.is_locked(index) {
            return ModuleStatus::Locked;
        }
        match self.course.module(index) {
            Some(module) if self.state.completed.contains(&module.id) => ModuleStatus::Completed,
            _ => ModuleStatus::Available,
        }
    }

    /// Videos of the current module that still need to be watched.
    #[must_use]
    pub fn pending_videos(&self) -> Vec<&VideoUrl> {
        self.current_module()
            .video_urls()
            .filter(|url| !self.state.watched_videos.contains(url.as_str()))
            .collect()
    }

    /// Jump to `index` unless it is locked. Returns whether navigation happened.
    pub fn select_module(&mut self, index: usize) -> bool {
        if index >= self.course.len() {
            warn!(index, len = self.course.len(), "select_module: index out of range, ignored");
            return false;
        }
        if self.is_locked(index) {
            debug!(index, "select_module: module locked, ignored");
            return false;
        }
        self.state.current_index = index;
        debug!(index, "select_module: moved");
        true
    }

    pub fn mark_video_watched(&mut self, url: &str) {
        if self.state.watched_videos.insert(url.to_string()) {
            debug!(url, "video marked watched");
        }
    }

    pub fn record_quiz_pass(&mut self, id: &ModuleId) {
        if self.state.passed_quizzes.insert(id.clone()) {
            debug!(module = %id, "quiz passed");
        }
    }

    /// Forward gate for the current module.
    ///
    /// A completed module always passes; otherwise its quiz (if any) must be
    /// passed and every video in it watched.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        let module = self.current_module();
        if self.state.completed.contains(&module.id) {
            return true;
        }

        let quiz_satisfied = !module.has_quiz() || self.state.passed_quizzes.contains(&module.id);
        let videos_watched = module
            .video_urls()
            .all(|url| self.state.watched_videos.contains(url.as_str()));

        quiz_satisfied && videos_watched
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if !self.can_advance() {
            debug!(index = self.state.current_index, "advance: gate not satisfied");
            return AdvanceOutcome::Blocked;
        }

        let id = self.current_module().id.clone();
        if self.state.completed.insert(id.clone()) {
            debug!(module = %id, "module completed");
        }

        if self.is_last_module() {
            self.state.show_certificate = true;
            debug!("advance: course finished");
            AdvanceOutcome::Finished
        } else {
            self.state.current_index += 1;
            debug!(index = self.state.current_index, "advance: moved");
            AdvanceOutcome::Moved {
                to: self.state.current_index,
            }
        }
    }

    /// Step back one module (clamped at 0) and leave the certificate view.
    pub fn go_back(&mut self) {
        self.state.show_certificate = false;
        self.state.current_index = self.state.current_index.saturating_sub(1);
        debug!(index = self.state.current_index, "go_back");
    }

    /// Forget all progress. The course itself is untouched.
    pub fn restart(&mut self) {
        self.state = ProgressState::default();
        debug!("progress restarted");
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
