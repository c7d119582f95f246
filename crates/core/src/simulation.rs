//! Five-stage attack walkthrough with timed auto-advance.
//!
//! `StepSequencer` is the pure state machine; the delay itself is owned by the
//! caller. Every delayed advance is represented by an `ArmToken`: `play` hands
//! out the first one and each accepted `fire` hands out the next, so at most one
//! advance is ever outstanding. Tokens from before a `play`/`reset` are stale and
//! rejected.

use std::time::Duration;

use tracing::debug;

/// Index of the last stage. Reaching it stops playback.
pub const TERMINAL_STAGE: u8 = 4;

pub const STAGE_COUNT: usize = TERMINAL_STAGE as usize + 1;

/// Delay between two automatic advances.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(3000);

//
// ─── STAGE TABLE ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Secure,
    Scanning,
    Intrusion,
    Escalation,
    Compromised,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Nominal,
    Warning,
    Critical,
}

impl StageStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Secure => "SECURE",
            StageStatus::Scanning => "SCANNING",
            StageStatus::Intrusion => "INTRUSION",
            StageStatus::Escalation => "ESCALATION",
            StageStatus::Compromised => "COMPROMISED",
        }
    }

    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            StageStatus::Secure => Severity::Nominal,
            StageStatus::Scanning | StageStatus::Intrusion | StageStatus::Escalation => {
                Severity::Warning
            }
            StageStatus::Compromised => Severity::Critical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackStage {
    pub title: &'static str,
    pub description: &'static str,
    pub status: StageStatus,
}

/// Remote compromise of a connected vehicle, from cellular scan to CAN injection.
pub const ATTACK_STAGES: [AttackStage; STAGE_COUNT] = [
    AttackStage {
        title: "System Nominal",
        description: "Vehicle systems are operating normally. The infotainment system is connected to the cellular network for music and maps.",
        status: StageStatus::Secure,
    },
    AttackStage {
        title: "Reconnaissance",
        description: "Attackers scan the cellular provider's IP range (Sprint) and identify the vehicle's Uconnect head unit listening on port 6667.",
        status: StageStatus::Scanning,
    },
    AttackStage {
        title: "Exploitation (OMAP)",
        description: "Attackers exploit a vulnerability in the D-Bus service to gain root access to the OMAP (Infotainment) chip. Music volume and screen are now compromised.",
        status: StageStatus::Intrusion,
    },
    AttackStage {
        title: "Lateral Movement (V850)",
        description: "To reach the car's controls, attackers reflash the firmware of the V850 gateway chip, which bridges the Infotainment system to the CAN Bus.",
        status: StageStatus::Escalation,
    },
    AttackStage {
        title: "Execution (CAN Bus)",
        description: "Attackers inject spoofed CAN messages. They disable brakes, kill the engine, or manipulate steering. Driver loses control.",
        status: StageStatus::Compromised,
    },
];

//
// ─── SEQUENCER ─────────────────────────────────────────────────────────────────
//

/// Permission to perform exactly one delayed advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmToken {
    generation: u64,
    stage: u8,
}

impl ArmToken {
    /// Stage the advance will move away from.
    #[must_use]
    pub fn from_stage(self) -> u8 {
        self.stage
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequencerSnapshot {
    pub stage: u8,
    pub is_playing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StepSequencer {
    stage: u8,
    is_playing: bool,
    generation: u64,
}

impl StepSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stage(&self) -> u8 {
        self.stage
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.stage == TERMINAL_STAGE
    }

    /// The play control is disabled while a run is in progress.
    #[must_use]
    pub fn can_play(&self) -> bool {
        !(self.is_playing && self.stage < TERMINAL_STAGE)
    }

    #[must_use]
    pub fn snapshot(&self) -> SequencerSnapshot {
        SequencerSnapshot {
            stage: self.stage,
            is_playing: self.is_playing,
        }
    }

    #[must_use]
    pub fn stage_info(&self) -> &'static AttackStage {
        &ATTACK_STAGES[usize::from(self.stage)]
    }

    /// Restart from stage 0 and return the token for the first delayed advance.
    pub fn play(&mut self) -> ArmToken {
        self.generation = self.generation.wrapping_add(1);
        self.stage = 0;
        self.is_playing = true;
        debug!(generation = self.generation, "simulation: play");
        self.token()
    }

    /// Apply a delayed advance. Returns the token for the next one, or `None`
    /// when the token was stale or the terminal stage was reached.
    pub fn fire(&mut self, token: ArmToken) -> Option<ArmToken> {
        if !self.is_playing || token.generation != self.generation || token.stage != self.stage {
            debug!(?token, "simulation: stale advance ignored");
            return None;
        }

        self.stage += 1;
        debug!(stage = self.stage, "simulation: advanced");

        if self.stage >= TERMINAL_STAGE {
            self.is_playing = false;
            debug!("simulation: finished");
            return None;
        }
        Some(self.token())
    }

    /// Back to stage 0, stopped. Any outstanding token becomes stale.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.stage = 0;
        self.is_playing = false;
        debug!("simulation: reset");
    }

    fn token(&self) -> ArmToken {
        ArmToken {
            generation: self.generation,
            stage: self.stage,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(seq: &mut StepSequencer) -> usize {
        let mut fires = 0;
        let mut next = Some(seq.play());
        while let Some(token) = next {
            next = seq.fire(token);
            fires += 1;
        }
        fires
    }

    #[test]
    fn four_advances_reach_terminal_stage() {
        let mut seq = StepSequencer::new();
        assert_eq!(run_to_end(&mut seq), 4);
        assert_eq!(seq.stage(), TERMINAL_STAGE);
        assert!(!seq.is_playing());
        assert!(seq.is_terminal());
    }

    #[test]
    fn stage_table_has_five_entries_ending_compromised() {
        assert_eq!(ATTACK_STAGES.len(), 5);
        assert_eq!(ATTACK_STAGES[0].status, StageStatus::Secure);
        assert_eq!(ATTACK_STAGES[4].status.label(), "COMPROMISED");
        assert_eq!(ATTACK_STAGES[4].status.severity(), Severity::Critical);
        assert_eq!(ATTACK_STAGES[2].status.severity(), Severity::Warning);
    }

    #[test]
    fn token_is_single_use() {
        let mut seq = StepSequencer::new();
        let token = seq.play();
        assert!(seq.fire(token).is_some());
        assert_eq!(seq.fire(token), None);
        assert_eq!(seq.stage(), 1);
    }

    #[test]
    fn token_from_previous_run_is_stale() {
        let mut seq = StepSequencer::new();
        let old = seq.play();
        let _ = seq.fire(old);
        let fresh = seq.play();
        assert_eq!(seq.stage(), 0);

        let stale = ArmToken {
            generation: old.generation,
            stage: 0,
        };
        assert_eq!(seq.fire(stale), None);
        assert_eq!(seq.stage(), 0);
        assert!(seq.fire(fresh).is_some());
    }

    #[test]
    fn reset_invalidates_pending_token() {
        let mut seq = StepSequencer::new();
        let token = seq.play();
        seq.reset();
        assert_eq!(seq.fire(token), None);
        assert_eq!(seq.snapshot(), SequencerSnapshot::default());
    }

    #[test]
    fn replay_after_terminal_starts_over() {
        let mut seq = StepSequencer::new();
        run_to_end(&mut seq);
        assert!(seq.can_play());

        let token = seq.play();
        assert_eq!(seq.stage(), 0);
        assert!(seq.is_playing());
        assert!(!seq.can_play());
        assert_eq!(token.from_stage(), 0);
        assert_eq!(seq.stage_info().title, "System Nominal");
    }
}
