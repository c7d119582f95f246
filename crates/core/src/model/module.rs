use crate::model::content::{ContentBlock, VideoUrl};
use crate::model::{ModuleId, Quiz};

/// One unit of course content with an optional gating quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub id: ModuleId,
    pub title: String,
    pub short_title: String,
    /// Display label such as "10 min".
    pub duration: String,
    pub blocks: Vec<ContentBlock>,
    pub quiz: Option<Quiz>,
}

impl Module {
    #[must_use]
    pub fn new(id: impl Into<ModuleId>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            short_title: title.clone(),
            title,
            duration: String::new(),
            blocks: Vec::new(),
            quiz: None,
        }
    }

    #[must_use]
    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = short_title.into();
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.duration = duration.into();
        self
    }

    #[must_use]
    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }

    #[must_use]
    pub fn with_quiz(mut self, quiz: Quiz) -> Self {
        self.quiz = Some(quiz);
        self
    }

    #[must_use]
    pub fn has_quiz(&self) -> bool {
        self.quiz.is_some()
    }

    /// Locators of every video block, in content order.
    pub fn video_urls(&self) -> impl Iterator<Item = &VideoUrl> {
        self.blocks.iter().filter_map(ContentBlock::video_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_urls_skip_display_only_blocks() {
        let module = Module::new("m1", "Intro")
            .with_block(ContentBlock::text("hello"))
            .with_block(ContentBlock::video(VideoUrl::new_unchecked("v1")))
            .with_block(ContentBlock::video(VideoUrl::new_unchecked("v2")));

        let urls: Vec<&str> = module.video_urls().map(VideoUrl::as_str).collect();
        assert_eq!(urls, vec!["v1", "v2"]);
    }

    #[test]
    fn short_title_defaults_to_title() {
        let module = Module::new("m1", "Intro");
        assert_eq!(module.short_title, "Intro");
        assert!(!module.has_quiz());
    }
}
