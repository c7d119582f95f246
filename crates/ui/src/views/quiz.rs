use dioxus::prelude::*;
use services::CourseSession;

use crate::vm::{QuizOptionState, QuizOptionVm, QuizVm};

#[component]
pub fn QuizPanel() -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let vm = {
        let session = session.read();
        session
            .current_module()
            .quiz
            .as_ref()
            .map(|quiz| QuizVm::new(quiz, session.quiz_attempt()))
    };
    let Some(vm) = vm else {
        return rsx! {};
    };
    let can_retry = vm.can_retry();
    let feedback_class = match vm.feedback.as_ref() {
        Some(feedback) if feedback.correct => "quiz__feedback quiz__feedback--correct",
        _ => "quiz__feedback quiz__feedback--wrong",
    };
    let QuizVm {
        question,
        options,
        submitted,
        can_submit,
        feedback,
    } = vm;

    rsx! {
        div { class: "quiz",
            header { class: "quiz__header",
                span { class: "quiz__icon", "?" }
                div {
                    h3 { class: "quiz__title", "Knowledge Check" }
                    p { class: "quiz__subtitle", "Verify your understanding" }
                }
            }
            div { class: "quiz__body",
                p { class: "quiz__question", "{question}" }
                div { class: "quiz__options",
                    for option in options {
                        QuizOptionButton { key: "{option.id}", option, submitted }
                    }
                }
                if !submitted {
                    div { class: "quiz__actions",
                        button {
                            class: "quiz__submit",
                            r#type: "button",
                            disabled: !can_submit,
                            onclick: move |_| {
                                session.write().submit_quiz();
                            },
                            "Check Answer \u{2192}"
                        }
                    }
                }
                if let Some(feedback) = feedback {
                    div { class: feedback_class,
                        p { class: "quiz__headline", "{feedback.headline}" }
                        p { class: "quiz__explanation", "{feedback.explanation}" }
                        if can_retry {
                            button {
                                class: "quiz__retry",
                                r#type: "button",
                                onclick: move |_| session.write().retry_quiz(),
                                "\u{21BB} Try Again"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizOptionButton(option: QuizOptionVm, submitted: bool) -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let marker = match option.state {
        QuizOptionState::Idle => "\u{25CB}",
        QuizOptionState::Selected => "\u{25CF}",
        QuizOptionState::Correct => "\u{2714}",
        QuizOptionState::Wrong => "\u{2718}",
    };
    let id = option.id.clone();

    rsx! {
        button {
            class: option.state.css_class(),
            r#type: "button",
            disabled: submitted,
            onclick: move |_| session.write().select_quiz_option(&id),
            span { class: "quiz-option__text", "{option.text}" }
            span { class: "quiz-option__marker", "{marker}" }
        }
    }
}
