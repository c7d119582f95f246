use course_core::model::Quiz;
use services::QuizAttempt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizOptionState {
    Idle,
    Selected,
    Correct,
    Wrong,
}

impl QuizOptionState {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            QuizOptionState::Idle => "quiz-option",
            QuizOptionState::Selected => "quiz-option quiz-option--selected",
            QuizOptionState::Correct => "quiz-option quiz-option--correct",
            QuizOptionState::Wrong => "quiz-option quiz-option--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizOptionVm {
    pub id: String,
    pub text: String,
    pub state: QuizOptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizFeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub question: String,
    pub options: Vec<QuizOptionVm>,
    pub submitted: bool,
    pub can_submit: bool,
    pub feedback: Option<QuizFeedbackVm>,
}

impl QuizVm {
    #[must_use]
    pub fn new(quiz: &Quiz, attempt: &QuizAttempt) -> Self {
        let submitted = attempt.is_submitted();
        let selected = attempt.selected();

        let options = quiz
            .options
            .iter()
            .map(|option| {
                let is_selected = selected == Some(option.id.as_str());
                let state = match (is_selected, submitted) {
                    (false, _) => QuizOptionState::Idle,
                    (true, false) => QuizOptionState::Selected,
                    (true, true) if option.is_correct => QuizOptionState::Correct,
                    (true, true) => QuizOptionState::Wrong,
                };
                QuizOptionVm {
                    id: option.id.clone(),
                    text: option.text.clone(),
                    state,
                }
            })
            .collect();

        let feedback = attempt.outcome(quiz).map(|correct| QuizFeedbackVm {
            correct,
            headline: if correct {
                "That is correct!"
            } else {
                "Not quite right."
            },
            explanation: quiz.explanation.clone(),
        });

        Self {
            question: quiz.question.clone(),
            options,
            submitted,
            can_submit: !submitted && selected.is_some(),
            feedback,
        }
    }

    /// Retry is only offered after a wrong answer.
    #[must_use]
    pub fn can_retry(&self) -> bool {
        self.feedback.as_ref().is_some_and(|feedback| !feedback.correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use course_core::model::QuizOption;

    fn quiz() -> Quiz {
        Quiz::new(
            "Where does an IPS sit?",
            vec![
                QuizOption::new("a", "In-line", true),
                QuizOption::new("b", "On a mirror port", false),
            ],
            "It must be in the traffic path to block.",
        )
    }

    #[test]
    fn nothing_selected_disables_submit() {
        let vm = QuizVm::new(&quiz(), &QuizAttempt::default());
        assert!(!vm.can_submit);
        assert!(vm.feedback.is_none());
        assert!(vm.options.iter().all(|option| option.state == QuizOptionState::Idle));
    }

    #[test]
    fn selection_before_submit_is_highlighted() {
        let mut attempt = QuizAttempt::default();
        attempt.select("b");
        let vm = QuizVm::new(&quiz(), &attempt);
        assert!(vm.can_submit);
        assert_eq!(vm.options[1].state, QuizOptionState::Selected);
        assert_eq!(vm.options[0].state, QuizOptionState::Idle);
    }

    #[test]
    fn wrong_submission_offers_retry() {
        let quiz = quiz();
        let mut attempt = QuizAttempt::default();
        attempt.select("b");
        attempt.submit(&quiz);

        let vm = QuizVm::new(&quiz, &attempt);
        assert_eq!(vm.options[1].state, QuizOptionState::Wrong);
        assert!(!vm.can_submit);
        let feedback = vm.feedback.clone().unwrap();
        assert_eq!(feedback.headline, "Not quite right.");
        assert!(vm.can_retry());
    }

    #[test]
    fn correct_submission_has_no_retry() {
        let quiz = quiz();
        let mut attempt = QuizAttempt::default();
        attempt.select("a");
        attempt.submit(&quiz);

        let vm = QuizVm::new(&quiz, &attempt);
        assert_eq!(vm.options[0].state, QuizOptionState::Correct);
        assert_eq!(vm.feedback.as_ref().map(|f| f.headline), Some("That is correct!"));
        assert!(!vm.can_retry());
    }
}
