//! Deterministic simulation module
//!
//! All engine logic lives here. This module must be pure and deterministic:
//! - Fixed per-tick semantics (tuned for a 60 Hz frame driver)
//! - Seeded RNG only
//! - Input events consumed before physics, physics before celebration
//! - No rendering or platform dependencies

pub mod celebrate;
pub mod state;
pub mod tick;
pub mod wheel;

pub use celebrate::{CelebrationController, Firework, Particle};
pub use state::{AssignPhase, EngineState};
pub use tick::{TickInput, tick};
pub use wheel::{WheelSpinner, resolve_index};
