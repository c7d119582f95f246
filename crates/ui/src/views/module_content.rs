use course_core::model::ContentBlock;
use dioxus::prelude::*;
use services::CourseSession;

use super::diagram::DiagramView;
use super::simulation::SimulationWidget;
use super::video::VideoBlock;

/// Renders the blocks of the current module. Keys include the module id so
/// stateful blocks start fresh on every module change.
#[component]
pub fn ModuleContent() -> Element {
    let session = use_context::<Signal<CourseSession>>();
    let (module_id, blocks) = {
        let session = session.read();
        let module = session.current_module();
        (module.id.to_string(), module.blocks.clone())
    };

    rsx! {
        div { class: "module-content",
            for (index, block) in blocks.into_iter().enumerate() {
                BlockView { key: "{module_id}-{index}", block }
            }
        }
    }
}

#[component]
fn BlockView(block: ContentBlock) -> Element {
    match block {
        ContentBlock::Text { title, body } => rsx! {
            section { class: "block block--text",
                if let Some(title) = title {
                    h3 { class: "block__title", "{title}" }
                }
                p { "{body}" }
            }
        },
        ContentBlock::List { title, items } => rsx! {
            section { class: "block block--list",
                if let Some(title) = title {
                    h4 { class: "block__title", "{title}" }
                }
                ul {
                    for item in items {
                        li { span { class: "block__check", "\u{2713}" } "{item}" }
                    }
                }
            }
        },
        ContentBlock::Diagram { title, caption, nodes } => rsx! {
            section { class: "block block--diagram",
                if let Some(title) = title {
                    h3 { class: "block__title", "{title}" }
                }
                if let Some(caption) = caption {
                    p { class: "block__caption", "{caption}" }
                }
                DiagramView { nodes }
            }
        },
        ContentBlock::Comparison { title, left, right } => rsx! {
            section { class: "block block--comparison",
                if let Some(title) = title {
                    h3 { class: "block__title", "{title}" }
                }
                div { class: "comparison",
                    div { class: "comparison__panel comparison__panel--left",
                        h4 { "{left.title}" }
                        ul {
                            for point in left.points {
                                li { "{point}" }
                            }
                        }
                    }
                    div { class: "comparison__panel comparison__panel--right",
                        h4 { "{right.title}" }
                        ul {
                            for point in right.points {
                                li { "{point}" }
                            }
                        }
                    }
                }
            }
        },
        ContentBlock::Alert { title, body } => {
            let title = title.unwrap_or_else(|| "Critical Insight".to_string());
            rsx! {
                aside { class: "block block--alert",
                    span { class: "block__alert-icon", "\u{26A0}" }
                    div {
                        h4 { class: "block__alert-title", "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
        ContentBlock::Simulation { title, caption } => rsx! {
            section { class: "block block--simulation",
                if let Some(title) = title {
                    h3 { class: "block__title", "{title}" }
                }
                if let Some(caption) = caption {
                    p { class: "block__caption", "{caption}" }
                }
                SimulationWidget {}
            }
        },
        ContentBlock::Video { title, url, caption } => {
            let frame_title = title.clone().unwrap_or_else(|| "Video content".to_string());
            rsx! {
                section { class: "block block--video",
                    if let Some(title) = title {
                        h3 { class: "block__title", "\u{25B6} {title}" }
                    }
                    if let Some(url) = url {
                        VideoBlock { url: url.as_str().to_string(), frame_title }
                    } else {
                        div { class: "video video--pending", "Video coming soon." }
                    }
                    if let Some(caption) = caption {
                        p { class: "block__caption block__caption--video", "{caption}" }
                    }
                }
            }
        }
    }
}
