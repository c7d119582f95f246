use course_core::model::Quiz;

/// Result shown after an answer is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizFeedback {
    pub correct: bool,
    pub explanation: String,
}

/// Learner's interaction with one knowledge check: pick, submit, maybe retry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAttempt {
    selected: Option<String>,
    submitted: bool,
}

impl QuizAttempt {
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Choose an option. Ignored once the answer has been submitted.
    pub fn select(&mut self, option_id: impl Into<String>) {
        if !self.submitted {
            self.selected = Some(option_id.into());
        }
    }

    /// Lock in the selected option. `None` when nothing is selected.
    pub fn submit(&mut self, quiz: &Quiz) -> Option<QuizFeedback> {
        let selected = self.selected.as_deref()?;
        let correct = quiz.is_correct(selected);
        self.submitted = true;
        Some(QuizFeedback {
            correct,
            explanation: quiz.explanation.clone(),
        })
    }

    /// Whether the submitted answer was right; `None` before submission.
    #[must_use]
    pub fn outcome(&self, quiz: &Quiz) -> Option<bool> {
        if !self.submitted {
            return None;
        }
        self.selected.as_deref().map(|id| quiz.is_correct(id))
    }

    pub fn retry(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::QuizOption;

    fn quiz() -> Quiz {
        Quiz::new(
            "Which regulation requires detect and respond?",
            vec![
                QuizOption::new("a", "ISO 9001", false),
                QuizOption::new("c", "UNECE R155", true),
            ],
            "R155 mandates a CSMS.",
        )
    }

    #[test]
    fn submit_without_selection_does_nothing() {
        let mut attempt = QuizAttempt::default();
        assert_eq!(attempt.submit(&quiz()), None);
        assert!(!attempt.is_submitted());
    }

    #[test]
    fn wrong_answer_then_retry() {
        let quiz = quiz();
        let mut attempt = QuizAttempt::default();
        attempt.select("a");
        let feedback = attempt.submit(&quiz).unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.explanation, "R155 mandates a CSMS.");
        assert_eq!(attempt.outcome(&quiz), Some(false));

        attempt.retry();
        assert_eq!(attempt, QuizAttempt::default());
    }

    #[test]
    fn selection_is_frozen_after_submit() {
        let quiz = quiz();
        let mut attempt = QuizAttempt::default();
        attempt.select("c");
        assert!(attempt.submit(&quiz).unwrap().correct);
        attempt.select("a");
        assert_eq!(attempt.selected(), Some("c"));
        assert_eq!(attempt.outcome(&quiz), Some(true));
    }
}
