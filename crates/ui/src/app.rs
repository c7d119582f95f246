use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::CourseRoot;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let course = ctx.course();
    let title = course.title();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{title}" }

        // A single root container for global layout CSS hooks.
        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                CourseRoot {}
            }
        }
    }
}
