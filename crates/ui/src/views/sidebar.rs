use dioxus::prelude::*;
use services::CourseSession;

use crate::vm::{ModuleListItemVm, map_module_list};

#[component]
pub fn Sidebar() -> Element {
    let session = use_context::<Signal<CourseSession>>();
    let (items, brand) = {
        let session = session.read();
        (
            map_module_list(session.engine()),
            session.course().author().to_string(),
        )
    };

    rsx! {
        aside { class: "sidebar",
            div { class: "sidebar__brand",
                span { class: "sidebar__logo", "{brand}" }
                p { class: "sidebar__tagline", "Academy" }
            }
            nav { class: "sidebar__nav",
                for item in items {
                    ModuleListItem { key: "{item.index}", item }
                }
            }
        }
    }
}

#[component]
fn ModuleListItem(item: ModuleListItemVm) -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let index = item.index;
    let badge = item.badge();

    rsx! {
        button {
            class: item.css_class(),
            r#type: "button",
            disabled: item.is_locked(),
            onclick: move |_| {
                session.write().select_module(index);
            },
            span { class: "module-item__badge", "{badge}" }
            span { class: "module-item__text",
                span { class: "module-item__title", "{item.short_title}" }
                span { class: "module-item__duration", "{item.duration}" }
            }
        }
    }
}
