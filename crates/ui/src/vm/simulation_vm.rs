use course_core::simulation::{ATTACK_STAGES, SequencerSnapshot, Severity, TERMINAL_STAGE};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationNodeVm {
    pub label: &'static str,
    pub lit: bool,
    pub badge: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationVm {
    pub stage_label: String,
    pub progress_percent: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub status_label: &'static str,
    pub severity: Severity,
    pub play_disabled: bool,
    pub show_replay: bool,
    pub packet_visible: bool,
    pub nodes: Vec<SimulationNodeVm>,
}

impl SimulationVm {
    #[must_use]
    pub fn from_snapshot(snapshot: SequencerSnapshot) -> Self {
        let stage = snapshot.stage.min(TERMINAL_STAGE);
        let info = &ATTACK_STAGES[usize::from(stage)];

        Self {
            stage_label: format!("Stage {stage}/{TERMINAL_STAGE}"),
            progress_percent: percent_of_run(stage),
            title: info.title,
            description: info.description,
            status_label: info.status.label(),
            severity: info.status.severity(),
            play_disabled: snapshot.is_playing && stage < TERMINAL_STAGE,
            show_replay: stage == TERMINAL_STAGE,
            packet_visible: stage > 0 && stage < TERMINAL_STAGE,
            nodes: vec![
                node("Attacker", stage >= 1, None),
                node("Network", stage >= 1, None),
                node("Infotainment", stage >= 2, (stage == 2).then_some("ROOTED")),
                node("Gateway", stage >= 3, (stage == 3).then_some("PATCHED")),
                node(
                    "Safety Critical",
                    stage >= TERMINAL_STAGE,
                    (stage >= TERMINAL_STAGE).then_some("COMPROMISED"),
                ),
            ],
        }
    }

    #[must_use]
    pub fn badge_class(&self) -> &'static str {
        match self.severity {
            Severity::Nominal => "sim-badge sim-badge--nominal",
            Severity::Warning => "sim-badge sim-badge--warning",
            Severity::Critical => "sim-badge sim-badge--critical",
        }
    }
}

fn percent_of_run(stage: u8) -> u8 {
    let percent = u16::from(stage) * 100 / u16::from(TERMINAL_STAGE);
    u8::try_from(percent).unwrap_or(100)
}

fn node(label: &'static str, lit: bool, badge: Option<&'static str>) -> SimulationNodeVm {
    SimulationNodeVm { label, lit, badge }
}
