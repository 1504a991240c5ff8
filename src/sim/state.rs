//! Engine state
//!
//! Everything the tick loop mutates lives here: the participant list, the
//! wheel, the CR roster, the manual-assignment state machine, the
//! celebration, and the seeded RNG. One writer, one reader, same thread,
//! same tick.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::celebrate::CelebrationController;
use super::wheel::WheelSpinner;
use crate::config::EngineConfig;
use crate::roster::RosterStore;

/// How long the "Copied!" indicator stays up (wall-clock milliseconds)
pub const COPY_FEEDBACK_MS: u64 = 1200;

/// Manual assignment flow: pick a CR, then pick a participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignPhase {
    /// No CR selected
    Idle,
    /// A CR is selected and the next participant pick binds to it
    CrChosen { cr: String },
    /// The selected CR has been assigned; participant picks are ignored
    /// until another CR is chosen
    Bound { cr: String },
}

impl AssignPhase {
    /// Currently selected CR, if any
    pub fn selected_cr(&self) -> Option<&str> {
        match self {
            AssignPhase::Idle => None,
            AssignPhase::CrChosen { cr } | AssignPhase::Bound { cr } => Some(cr),
        }
    }

    /// Whether the next participant pick will bind
    pub fn awaiting_target(&self) -> bool {
        matches!(self, AssignPhase::CrChosen { .. })
    }
}

/// Complete engine state
#[derive(Clone)]
pub struct EngineState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Participant labels in wheel-slice order; append-only
    pub(crate) participants: Vec<String>,
    pub wheel: WheelSpinner,
    pub roster: RosterStore,
    pub phase: AssignPhase,
    pub celebration: CelebrationController,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Wall-clock time of the last successful copy
    pub(crate) copy_feedback_at_ms: Option<u64>,
    pub(crate) rng: Pcg32,
}

impl EngineState {
    pub fn new(seed: u64, config: &EngineConfig) -> Self {
        Self {
            seed,
            participants: Vec::new(),
            wheel: WheelSpinner::new(config),
            roster: RosterStore::new(config.roster_capacity),
            phase: AssignPhase::Idle,
            celebration: CelebrationController::new(config),
            time_ticks: 0,
            copy_feedback_at_ms: None,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Add a participant if the submitted text is non-blank. Duplicates are
    /// allowed; insertion order is slice order on the wheel.
    pub fn add_participant(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.participants.push(name.to_string());
        log::info!("Added name: {name}");
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Winner of the last settled spin
    pub fn selected_participant(&self) -> Option<&str> {
        self.wheel
            .selected()
            .and_then(|i| self.participants.get(i))
            .map(String::as_str)
    }

    /// Whether the transient "Copied!" indicator should be showing
    pub fn copy_feedback_active(&self, now_ms: u64) -> bool {
        self.copy_feedback_at_ms
            .is_some_and(|at| now_ms.saturating_sub(at) < COPY_FEEDBACK_MS)
    }
}
