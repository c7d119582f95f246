use course_core::progression::{ModuleStatus, ProgressionEngine};
use services::CourseSession;

//
// ─── MODULE LIST ───────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleListItemVm {
    pub index: usize,
    /// 1-based position shown in the badge.
    pub number: usize,
    pub short_title: String,
    pub duration: String,
    pub status: ModuleStatus,
}

impl ModuleListItemVm {
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.status == ModuleStatus::Locked
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.status {
            ModuleStatus::Active => "module-item module-item--active",
            ModuleStatus::Completed => "module-item module-item--completed",
            ModuleStatus::Available => "module-item",
            ModuleStatus::Locked => "module-item module-item--locked",
        }
    }

    /// Badge content: a check mark for completed modules, the number otherwise.
    #[must_use]
    pub fn badge(&self) -> String {
        if self.status == ModuleStatus::Completed {
            "\u{2713}".to_string()
        } else {
            self.number.to_string()
        }
    }
}

#[must_use]
pub fn map_module_list(engine: &ProgressionEngine) -> Vec<ModuleListItemVm> {
    engine
        .course()
        .modules()
        .iter()
        .enumerate()
        .map(|(index, module)| ModuleListItemVm {
            index,
            number: index + 1,
            short_title: module.short_title.clone(),
            duration: module.duration.clone(),
            status: engine.module_status(index),
        })
        .collect()
}

//
// ─── HEADER ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleHeaderVm {
    pub position_label: String,
    pub total_label: String,
    pub title: String,
    /// Width of the position bar, counting the module on screen.
    pub bar_percent: u8,
}

impl ModuleHeaderVm {
    #[must_use]
    pub fn from_engine(engine: &ProgressionEngine) -> Self {
        let total = engine.course().len();
        let current = engine.current_index();
        Self {
            position_label: format!("Module {}", current + 1),
            total_label: total.to_string(),
            title: engine.current_module().title.clone(),
            bar_percent: engine.progress_percent(),
        }
    }
}

//
// ─── FOOTER ────────────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavFooterVm {
    pub can_go_back: bool,
    pub can_advance: bool,
    pub next_label: String,
    pub advance_label: &'static str,
    pub show_video_hint: bool,
}

impl NavFooterVm {
    #[must_use]
    pub fn from_session(session: &CourseSession) -> Self {
        let engine = session.engine();
        let is_last = engine.is_last_module();
        let can_advance = engine.can_advance();
        let has_pending_videos = !engine.pending_videos().is_empty();

        Self {
            can_go_back: engine.current_index() > 0,
            can_advance,
            next_label: if is_last {
                "Finish Course".to_string()
            } else {
                engine
                    .next_module()
                    .map(|module| module.short_title.clone())
                    .unwrap_or_default()
            },
            advance_label: if is_last { "Finish Course" } else { "Next Module" },
            show_video_hint: !can_advance && has_pending_videos,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use course_core::model::{ContentBlock, Course, Module, Quiz, QuizOption, VideoUrl};
    use course_core::time::fixed_clock;

    fn course() -> Arc<Course> {
        let quiz = Quiz::new(
            "q",
            vec![QuizOption::new("a", "yes", true), QuizOption::new("b", "no", false)],
            "why",
        );
        let video = VideoUrl::parse("https://example.com/intro").unwrap();
        Arc::new(
            Course::new(
                "Course",
                "Author",
                vec![
                    Module::new("m1", "Introduction")
                        .with_short_title("Intro")
                        .with_duration("5 min")
                        .with_block(ContentBlock::text("hello"))
                        .with_quiz(quiz),
                    Module::new("m2", "Deep Dive")
                        .with_short_title("Deep")
                        .with_block(ContentBlock::video(video)),
                    Module::new("m3", "Wrap Up").with_block(ContentBlock::text("bye")),
                ],
            )
            .unwrap(),
        )
    }

    #[test]
    fn module_list_reflects_lock_state() {
        let session = CourseSession::new(course(), fixed_clock());
        let items = map_module_list(session.engine());

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].status, ModuleStatus::Active);
        assert_eq!(items[0].short_title, "Intro");
        assert_eq!(items[0].duration, "5 min");
        assert!(items[1].is_locked());
        assert_eq!(items[1].css_class(), "module-item module-item--locked");
        assert_eq!(items[2].badge(), "3");
    }

    #[test]
    fn completed_module_shows_check_badge() {
        let mut session = CourseSession::new(course(), fixed_clock());
        session.select_quiz_option("a");
        session.submit_quiz();
        session.advance();

        let items = map_module_list(session.engine());
        assert_eq!(items[0].status, ModuleStatus::Completed);
        assert_eq!(items[0].badge(), "\u{2713}");
        assert_eq!(items[1].status, ModuleStatus::Active);
    }

    #[test]
    fn header_counts_current_module() {
        let session = CourseSession::new(course(), fixed_clock());
        let header = ModuleHeaderVm::from_engine(session.engine());
        assert_eq!(header.position_label, "Module 1");
        assert_eq!(header.total_label, "3");
        assert_eq!(header.title, "Introduction");
        assert_eq!(header.bar_percent, 33);
    }

    #[test]
    fn footer_labels_and_video_hint() {
        let mut session = CourseSession::new(course(), fixed_clock());
        let footer = NavFooterVm::from_session(&session);
        assert!(!footer.can_go_back);
        assert!(!footer.can_advance);
        assert_eq!(footer.next_label, "Deep");
        assert_eq!(footer.advance_label, "Next Module");
        assert!(!footer.show_video_hint);

        session.select_quiz_option("a");
        session.submit_quiz();
        session.advance();
        let footer = NavFooterVm::from_session(&session);
        assert!(footer.can_go_back);
        assert!(footer.show_video_hint);

        session.mark_video_watched("https://example.com/intro");
        session.advance();
        let footer = NavFooterVm::from_session(&session);
        assert_eq!(footer.next_label, "Finish Course");
        assert_eq!(footer.advance_label, "Finish Course");
        assert!(footer.can_advance);
    }
}
