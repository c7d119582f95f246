/// One answer choice of a knowledge check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
    pub is_correct: bool,
}

impl QuizOption {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            is_correct,
        }
    }
}

/// Single-question knowledge check gating a module.
///
/// Exactly one option is expected to be correct; this is checked by
/// `Course::lint`, not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    pub question: String,
    pub options: Vec<QuizOption>,
    pub explanation: String,
}

impl Quiz {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<QuizOption>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            explanation: explanation.into(),
        }
    }

    #[must_use]
    pub fn option(&self, id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == id)
    }

    /// Whether the option with `id` is marked correct. Unknown ids are wrong.
    #[must_use]
    pub fn is_correct(&self, id: &str) -> bool {
        self.option(id).is_some_and(|option| option.is_correct)
    }

    #[must_use]
    pub fn correct_option(&self) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.is_correct)
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.is_correct).count()
    }
}
