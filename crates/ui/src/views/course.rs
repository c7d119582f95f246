use dioxus::document::eval;
use dioxus::prelude::*;
use services::CourseSession;

use crate::context::AppContext;
use crate::vm::{ModuleHeaderVm, NavFooterVm};

use super::certificate::CertificateView;
use super::module_content::ModuleContent;
use super::quiz::QuizPanel;
use super::sidebar::Sidebar;

/// Creates the learner's session and provides it to every view below.
#[component]
pub fn CourseRoot() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_signal(|| CourseSession::new(ctx.course(), ctx.clock()));
    use_context_provider(|| session);

    rsx! { CourseScreen {} }
}

/// Switches between the course and the certificate.
#[component]
pub(crate) fn CourseScreen() -> Element {
    let session = use_context::<Signal<CourseSession>>();
    let show_certificate = session.read().show_certificate();

    rsx! {
        if show_certificate {
            CertificateView {}
        } else {
            CourseView {}
        }
    }
}

#[component]
fn CourseView() -> Element {
    let session = use_context::<Signal<CourseSession>>();
    let has_quiz = session.read().current_module().has_quiz();

    use_effect(move || {
        let _index = session.read().current_index();
        let _ = eval("window.scrollTo(0, 0);");
    });

    rsx! {
        div { class: "course",
            Sidebar {}
            main { class: "course__main",
                ModuleHeader {}
                div { class: "module-card",
                    ModuleContent {}
                    if has_quiz {
                        QuizPanel {}
                    }
                }
                NavFooter {}
            }
        }
    }
}

#[component]
fn ModuleHeader() -> Element {
    let session = use_context::<Signal<CourseSession>>();
    let vm = ModuleHeaderVm::from_engine(session.read().engine());

    rsx! {
        header { class: "module-header",
            div { class: "module-header__crumbs",
                span { class: "module-header__position", "{vm.position_label}" }
                span { class: "module-header__sep", "/" }
                span { "{vm.total_label}" }
            }
            h1 { class: "module-header__title", "{vm.title}" }
            div { class: "progress",
                div { class: "progress__fill", style: "width: {vm.bar_percent}%" }
            }
        }
    }
}

#[component]
fn NavFooter() -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let vm = NavFooterVm::from_session(&session.read());
    let advance_class = if vm.can_advance {
        "nav-footer__next"
    } else {
        "nav-footer__next nav-footer__next--blocked"
    };

    rsx! {
        footer { class: "nav-footer",
            button {
                class: "nav-footer__prev",
                r#type: "button",
                disabled: !vm.can_go_back,
                onclick: move |_| session.write().go_back(),
                "\u{2039} Previous"
            }
            div { class: "nav-footer__upnext",
                span { class: "nav-footer__upnext-label", "Up Next" }
                span { class: "nav-footer__upnext-title", "{vm.next_label}" }
            }
            div { class: "nav-footer__advance",
                button {
                    class: advance_class,
                    id: "nav-advance",
                    r#type: "button",
                    disabled: !vm.can_advance,
                    onclick: move |_| {
                        session.write().advance();
                    },
                    "{vm.advance_label} \u{203A}"
                }
                if vm.show_video_hint {
                    span { class: "nav-footer__hint", "Please watch the video to proceed" }
                }
            }
        }
    }
}
