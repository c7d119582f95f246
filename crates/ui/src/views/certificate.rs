use dioxus::document::eval;
use dioxus::prelude::*;
use services::CourseSession;
use tracing::debug;

use crate::vm::CertificateVm;

#[component]
pub fn CertificateView() -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let vm = CertificateVm::from_session(&session.read());

    rsx! {
        div { class: "certificate-page",
            div { class: "certificate",
                div { class: "certificate__seal", "\u{2605}" }
                h1 { class: "certificate__heading", "Certificate of Completion" }
                p { class: "certificate__lead", "This certifies that you have successfully completed the" }
                h2 { class: "certificate__course", "{vm.course_title}" }
                p { class: "certificate__author", "Training provided by {vm.author}" }
                if let Some(issued_on) = vm.issued_on.as_ref() {
                    p { class: "certificate__date", "Issued on {issued_on}" }
                }
                div { class: "certificate__rule" }
                div { class: "certificate__actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| session.write().restart(),
                        "Restart Course"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: move |_| {
                            debug!("printing certificate");
                            let _ = eval("window.print();");
                        },
                        "Print Certificate"
                    }
                }
            }
        }
    }
}
