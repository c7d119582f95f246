use dioxus::prelude::*;
use services::CourseSession;

const FRAME_PERMISSIONS: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Embedded player plus the manual "watched" confirmation that feeds the gate.
#[component]
pub fn VideoBlock(url: String, frame_title: String) -> Element {
    let mut session = use_context::<Signal<CourseSession>>();
    let watched = session.read().engine().is_video_watched(&url);
    let toggle_class = if watched {
        "video__toggle video__toggle--watched"
    } else {
        "video__toggle"
    };
    let watched_url = url.clone();

    rsx! {
        div { class: "video",
            div { class: "video__frame",
                iframe {
                    src: "{url}",
                    title: "{frame_title}",
                    allow: FRAME_PERMISSIONS,
                    allowfullscreen: true,
                }
            }
            div { class: "video__actions",
                button {
                    class: toggle_class,
                    r#type: "button",
                    disabled: watched,
                    onclick: move |_| session.write().mark_video_watched(&watched_url),
                    if watched {
                        "\u{2611} Video Watched"
                    } else {
                        "\u{2610} I have watched the video"
                    }
                }
            }
        }
    }
}
