//! Read-only render view
//!
//! Rendering and UI layers consume a `FrameSnapshot` captured between
//! ticks instead of reaching into the engine. Everything here is plain
//! data and serializes with serde.

use glam::Vec2;
use serde::Serialize;

use crate::config::SLICE_COLORS;
use crate::sim::EngineState;

/// One spark, ready to draw
#[derive(Debug, Clone, Serialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub color: u32,
    /// Remaining opacity, 0-255
    pub alpha: f32,
    pub size: f32,
}

/// One firework: a rocket until `exploded`, sparks afterwards
#[derive(Debug, Clone, Serialize)]
pub struct FireworkView {
    pub pos: Vec2,
    pub color: u32,
    pub exploded: bool,
    pub particles: Vec<ParticleView>,
}

/// One wheel slice: a participant label and its fill color
#[derive(Debug, Clone, Serialize)]
pub struct SliceView {
    pub label: String,
    pub color: u32,
}

/// One roster row
#[derive(Debug, Clone, Serialize)]
pub struct CrView {
    pub id: String,
    pub assignee: Option<String>,
    /// Highlighted as the current selection
    pub selected: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    /// Wheel rotation (radians, [0, 2π))
    pub angle: f64,
    pub spinning: bool,
    /// Winner of the last settled spin
    pub selected: Option<String>,
    /// Wheel slices in participant order
    pub slices: Vec<SliceView>,
    pub roster: Vec<CrView>,
    /// A CR is selected and waiting for a participant pick
    pub awaiting_target: bool,
    pub celebrating: bool,
    pub fireworks: Vec<FireworkView>,
    /// Show the transient "Copied!" indicator
    pub copy_feedback: bool,
}

impl FrameSnapshot {
    pub fn capture(state: &EngineState, now_ms: u64) -> Self {
        let selected_cr = state.phase.selected_cr();
        Self {
            angle: state.wheel.angle(),
            spinning: state.wheel.is_spinning(),
            selected: state.selected_participant().map(str::to_string),
            slices: state
                .participants()
                .iter()
                .enumerate()
                .map(|(i, name)| SliceView {
                    label: name.clone(),
                    color: SLICE_COLORS[i % SLICE_COLORS.len()],
                })
                .collect(),
            roster: state
                .roster
                .slots()
                .iter()
                .map(|slot| CrView {
                    id: slot.id.clone(),
                    assignee: slot.assignee.clone(),
                    selected: selected_cr == Some(slot.id.as_str()),
                })
                .collect(),
            awaiting_target: state.phase.awaiting_target(),
            celebrating: state.celebration.is_active(),
            fireworks: state
                .celebration
                .fireworks()
                .iter()
                .map(|fw| FireworkView {
                    pos: fw.pos(),
                    color: fw.color(),
                    exploded: fw.exploded(),
                    particles: fw
                        .particles()
                        .iter()
                        .map(|p| ParticleView {
                            pos: p.pos(),
                            color: p.color(),
                            alpha: p.alpha(),
                            size: p.size(),
                        })
                        .collect(),
                })
                .collect(),
            copy_feedback: state.copy_feedback_active(now_ms),
        }
    }
}
