//! Wheel of Opportunity - spin a wheel of names, staff a CR
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wheel physics, assignment flow, fireworks)
//! - `roster`: Bounded CR roster with per-entry assignments
//! - `config`: Engine tuning handed to constructors
//! - `export`: Clipboard-facing assignment table
//! - `snapshot`: Read-only view for rendering/UI layers

pub mod config;
pub mod export;
pub mod roster;
pub mod sim;
pub mod snapshot;

pub use config::EngineConfig;
pub use roster::RosterStore;
pub use sim::{EngineState, TickInput, tick};

/// Normalize an angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    angle.rem_euclid(std::f64::consts::TAU)
}
