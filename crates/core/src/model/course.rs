use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::model::content::ContentBlock;
use crate::model::{Module, ModuleId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course must contain at least one module")]
    Empty,

    #[error("module at position {position} has an empty id")]
    EmptyModuleId { position: usize },

    #[error("duplicate module id: {0}")]
    DuplicateModuleId(ModuleId),
}

//
// ─── AUTHORING DIAGNOSTICS ─────────────────────────────────────────────────────
//

/// Authoring defect found by `Course::lint`. Never blocks loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    QuizWithoutOptions { module: ModuleId },
    QuizWithoutCorrectOption { module: ModuleId },
    QuizWithMultipleCorrectOptions { module: ModuleId, count: usize },
    DuplicateQuizOption { module: ModuleId, option: String },
    ModuleWithoutContent { module: ModuleId },
    EmptyBlock { module: ModuleId, position: usize },
    VideoWithoutLocator { module: ModuleId, position: usize },
    VideoNotWebLink { module: ModuleId, position: usize, locator: String },
}

impl ContentIssue {
    #[must_use]
    pub fn module(&self) -> &ModuleId {
        match self {
            ContentIssue::QuizWithoutOptions { module }
            | ContentIssue::QuizWithoutCorrectOption { module }
            | ContentIssue::QuizWithMultipleCorrectOptions { module, .. }
            | ContentIssue::DuplicateQuizOption { module, .. }
            | ContentIssue::ModuleWithoutContent { module }
            | ContentIssue::EmptyBlock { module, .. }
            | ContentIssue::VideoWithoutLocator { module, .. }
            | ContentIssue::VideoNotWebLink { module, .. } => module,
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentIssue::QuizWithoutOptions { module } => {
                write!(f, "{module}: quiz has no options")
            }
            ContentIssue::QuizWithoutCorrectOption { module } => {
                write!(f, "{module}: quiz has no correct option")
            }
            ContentIssue::QuizWithMultipleCorrectOptions { module, count } => {
                write!(f, "{module}: quiz has {count} correct options, expected 1")
            }
            ContentIssue::DuplicateQuizOption { module, option } => {
                write!(f, "{module}: quiz option id '{option}' is used more than once")
            }
            ContentIssue::ModuleWithoutContent { module } => {
                write!(f, "{module}: module has no content blocks")
            }
            ContentIssue::EmptyBlock { module, position } => {
                write!(f, "{module}: block #{position} has nothing to show")
            }
            ContentIssue::VideoWithoutLocator { module, position } => {
                write!(f, "{module}: video block #{position} has no locator and is not tracked")
            }
            ContentIssue::VideoNotWebLink {
                module,
                position,
                locator,
            } => {
                write!(
                    f,
                    "{module}: video block #{position} locator '{locator}' is not an http(s) URL"
                )
            }
        }
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Ordered, immutable course document. Module order is traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    author: String,
    modules: Vec<Module>,
}

impl Course {
    /// Build a course, checking the structural invariants progression relies on.
    ///
    /// # Errors
    ///
    /// Returns `CourseError::Empty` without modules, `CourseError::EmptyModuleId`
    /// for a blank id and `CourseError::DuplicateModuleId` when ids collide.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        modules: Vec<Module>,
    ) -> Result<Self, CourseError> {
        if modules.is_empty() {
            return Err(CourseError::Empty);
        }

        let mut seen = HashSet::with_capacity(modules.len());
        for (position, module) in modules.iter().enumerate() {
            if module.id.is_blank() {
                return Err(CourseError::EmptyModuleId { position });
            }
            if !seen.insert(&module.id) {
                return Err(CourseError::DuplicateModuleId(module.id.clone()));
            }
        }

        Ok(Self {
            title: title.into(),
            author: author.into(),
            modules,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn module(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// Number of modules; never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    #[must_use]
    pub fn position_of(&self, id: &ModuleId) -> Option<usize> {
        self.modules.iter().position(|module| &module.id == id)
    }

    /// Collect authoring defects. The course stays usable whatever this returns.
    #[must_use]
    pub fn lint(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        for module in &self.modules {
            if module.blocks.is_empty() {
                issues.push(ContentIssue::ModuleWithoutContent {
                    module: module.id.clone(),
                });
            }

            for (position, block) in module.blocks.iter().enumerate() {
                if block_is_empty(block) {
                    issues.push(ContentIssue::EmptyBlock {
                        module: module.id.clone(),
                        position,
                    });
                }
                if let ContentBlock::Video { url, .. } = block {
                    match url {
                        None => issues.push(ContentIssue::VideoWithoutLocator {
                            module: module.id.clone(),
                            position,
                        }),
                        Some(url) if !url.is_web_link() => {
                            issues.push(ContentIssue::VideoNotWebLink {
                                module: module.id.clone(),
                                position,
                                locator: url.as_str().to_string(),
                            });
                        }
                        Some(_) => {}
                    }
                }
            }

            let Some(quiz) = module.quiz.as_ref() else {
                continue;
            };

            if quiz.options.is_empty() {
                issues.push(ContentIssue::QuizWithoutOptions {
                    module: module.id.clone(),
                });
                continue;
            }

            match quiz.correct_count() {
                0 => issues.push(ContentIssue::QuizWithoutCorrectOption {
                    module: module.id.clone(),
                }),
                1 => {}
                count => issues.push(ContentIssue::QuizWithMultipleCorrectOptions {
                    module: module.id.clone(),
                    count,
                }),
            }

            let mut ids = HashSet::new();
            for option in &quiz.options {
                if !ids.insert(option.id.as_str()) {
                    issues.push(ContentIssue::DuplicateQuizOption {
                        module: module.id.clone(),
                        option: option.id.clone(),
                    });
                }
            }
        }

        issues
    }
}

fn block_is_empty(block: &ContentBlock) -> bool {
    match block {
        ContentBlock::Text { body, .. } | ContentBlock::Alert { body, .. } => {
            body.trim().is_empty()
        }
        ContentBlock::List { items, .. } => items.is_empty(),
        ContentBlock::Diagram { nodes, .. } => nodes.is_empty(),
        ContentBlock::Comparison { left, right, .. } => {
            left.points.is_empty() && right.points.is_empty()
        }
        ContentBlock::Simulation { .. } | ContentBlock::Video { .. } => false,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
