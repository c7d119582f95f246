use course_core::model::{DiagramNode, DiagramNodeKind};
use dioxus::prelude::*;

/// Left-to-right flow of labelled boxes with arrows between them.
#[component]
pub fn DiagramView(nodes: Vec<DiagramNode>) -> Element {
    let count = nodes.len();

    rsx! {
        div { class: "diagram",
            for (index, node) in nodes.into_iter().enumerate() {
                DiagramNodeCard { key: "{index}", node, show_arrow: index + 1 < count }
            }
        }
    }
}

#[component]
fn DiagramNodeCard(node: DiagramNode, show_arrow: bool) -> Element {
    let class = format!("diagram__node diagram__node--{}", node.kind.as_str());
    let icon = kind_icon(node.kind);

    rsx! {
        div { class: "{class}",
            span { class: "diagram__icon", "{icon}" }
            h4 { class: "diagram__label", "{node.label}" }
            if let Some(description) = node.description {
                p { class: "diagram__description", "{description}" }
            }
        }
        if show_arrow {
            span { class: "diagram__arrow", "\u{2192}" }
        }
    }
}

fn kind_icon(kind: DiagramNodeKind) -> &'static str {
    match kind {
        DiagramNodeKind::Component => "\u{25A3}",
        DiagramNodeKind::Network => "\u{224B}",
        DiagramNodeKind::Action => "\u{2714}",
        DiagramNodeKind::Threat => "\u{26A0}",
    }
}
