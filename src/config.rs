//! Engine tuning
//!
//! Every tunable the simulation needs lives in one struct handed to
//! constructors. Nothing reads process-wide globals.

use serde::{Deserialize, Serialize};

/// Wheel slice colors (0xRRGGBB), indexed by slice position modulo length
pub const SLICE_COLORS: [u32; 9] = [
    0x00FFFF, // neon cyan
    0x00B4FF, // neon blue
    0xFF7800, // neon orange
    0xFFFF50, // neon yellow
    0xDCFFFF, // pale white-blue
    0x14283C, // dark panel blue
    0x00C8FF,
    0x00FFC8,
    0xFFC800,
];

/// Firework explosion colors (0xRRGGBB)
pub const FIREWORK_COLORS: [u32; 6] = [
    0x00FFFF, // neon cyan
    0x00B4FF, // neon blue
    0xFF7800, // neon orange
    0xFFFF50, // neon yellow
    0xDCFFFF, // pale white-blue
    0xFF3C3C, // neon red
];

/// Engine configuration
///
/// Defaults reproduce the behavior the physics constants were tuned for:
/// a fixed 60 Hz tick rate. Friction and the stop threshold are per-tick
/// quantities and must be re-derived if the rate changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    // === Playfield ===
    /// Playfield width in pixels (fireworks spawn inside it)
    pub field_width: f32,
    /// Playfield height in pixels
    pub field_height: f32,

    // === Roster ===
    /// Max CR entries kept; the oldest is evicted when full
    pub roster_capacity: usize,

    // === Wheel physics ===
    /// Lower bound of the initial spin velocity draw (radians/tick)
    pub spin_speed_min: f64,
    /// Upper bound of the initial spin velocity draw (radians/tick)
    pub spin_speed_max: f64,
    /// Multiplicative per-tick velocity decay
    pub friction: f64,
    /// Velocity below which the wheel settles and resolves a winner
    pub stop_threshold: f64,

    // === Celebration ===
    /// Length of the celebration window (wall-clock milliseconds)
    pub celebration_duration_ms: u64,
    /// Per-tick chance of launching a new firework while the window is open
    pub firework_spawn_chance: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            field_width: 1200.0,
            field_height: 1000.0,

            roster_capacity: 8,

            spin_speed_min: 0.05,
            spin_speed_max: 0.2,
            friction: 0.99,
            stop_threshold: 0.01,

            celebration_duration_ms: 5000,
            firework_spawn_chance: 0.1,
        }
    }
}
