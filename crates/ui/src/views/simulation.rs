use std::rc::Rc;

use dioxus::prelude::*;
use services::SimulationPlayer;
use tracing::debug;

use crate::vm::{SimulationNodeVm, SimulationVm};

/// Interactive walkthrough of a remote vehicle compromise.
///
/// The player lives as long as this component; unmounting drops it and with
/// it any pending advance.
#[component]
pub fn SimulationWidget() -> Element {
    let player = use_hook(|| Rc::new(SimulationPlayer::new()));
    let mut snapshot = use_signal(|| player.snapshot());

    let updates = Rc::clone(&player);
    use_future(move || {
        let mut rx = updates.subscribe();
        async move {
            while rx.changed().await.is_ok() {
                let next = *rx.borrow_and_update();
                snapshot.set(next);
            }
        }
    });

    let vm = SimulationVm::from_snapshot(snapshot());
    let badge_class = vm.badge_class();
    let play_icon = if vm.show_replay { "\u{21BA}" } else { "\u{25B6}" };
    let SimulationVm {
        stage_label,
        progress_percent,
        title,
        description,
        status_label,
        play_disabled,
        packet_visible,
        nodes,
        ..
    } = vm;

    rsx! {
        div { class: "sim",
            div { class: "sim__titlebar",
                span { class: "sim__lights", "\u{25CF} \u{25CF} \u{25CF}" }
                span { class: "sim__terminal", "SIMULATION_TERMINAL_V2.0" }
            }
            div { class: "sim__screen",
                span { class: badge_class, "{status_label}" }
                if packet_visible {
                    span { class: "sim__packet" }
                }
                div { class: "sim__nodes",
                    for node in nodes {
                        SimulationNode { key: "{node.label}", node }
                    }
                }
            }
            div { class: "sim__controls",
                button {
                    class: "sim__play",
                    r#type: "button",
                    disabled: play_disabled,
                    onclick: move |_| {
                        debug!(from_stage = snapshot.peek().stage, "simulation play pressed");
                        player.play();
                    },
                    "{play_icon}"
                }
                div { class: "sim__info",
                    div { class: "sim__progress",
                        span { class: "sim__stage", "{stage_label}" }
                        div { class: "sim__bar",
                            div { class: "sim__bar-fill", style: "width: {progress_percent}%" }
                        }
                    }
                    h3 { class: "sim__step-title", "{title}" }
                    p { class: "sim__step-description", "{description}" }
                }
            }
        }
    }
}

#[component]
fn SimulationNode(node: SimulationNodeVm) -> Element {
    let class = if node.lit {
        "sim-node sim-node--lit"
    } else {
        "sim-node"
    };

    rsx! {
        div { class: "{class}",
            if let Some(badge) = node.badge {
                span { class: "sim-node__badge", "{badge}" }
            }
            span { class: "sim-node__label", "{node.label}" }
        }
    }
}
