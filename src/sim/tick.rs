//! Per-frame update
//!
//! One `tick()` call consumes a frame's worth of validated input events,
//! then advances wheel physics, then the celebration. A spin that settles
//! this frame resolves its winner, opens the celebration window, and binds
//! the winner to the selected CR (auto-selecting the oldest roster entry
//! when none is). Renderers observe state only between calls.

use super::state::{AssignPhase, EngineState};
use crate::export::{ClipboardSink, assignment_table};

/// One frame's worth of already-validated UI events
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Participant name submitted from the name box
    pub submit_participant: Option<String>,
    /// CR id submitted from the CR box
    pub submit_cr: Option<String>,
    /// Roster index of a clicked CR entry
    pub select_cr: Option<usize>,
    /// Roster index of a clicked delete icon
    pub remove_cr: Option<usize>,
    /// Slice index of a clicked participant
    pub pick_participant: Option<usize>,
    /// Spin control clicked
    pub spin: bool,
    /// Copy control clicked
    pub copy: bool,
}

/// Advance the engine by one frame
pub fn tick(
    state: &mut EngineState,
    input: &TickInput,
    now_ms: u64,
    clipboard: &mut dyn ClipboardSink,
) {
    // Input events land before any physics this frame
    if let Some(name) = &input.submit_participant {
        state.add_participant(name);
    }
    if let Some(id) = &input.submit_cr {
        state.roster.add(id);
        // Capacity eviction may have taken the selected CR with it
        if state
            .phase
            .selected_cr()
            .is_some_and(|cr| !state.roster.contains(cr))
        {
            state.phase = AssignPhase::Idle;
        }
    }
    if let Some(index) = input.remove_cr {
        remove_cr_at(state, index);
    }
    if let Some(index) = input.select_cr {
        if let Some(slot) = state.roster.get(index) {
            state.phase = AssignPhase::CrChosen { cr: slot.id.clone() };
        }
    }
    if let Some(slice) = input.pick_participant {
        pick_participant(state, slice);
    }
    if input.spin {
        let slices = state.participants.len();
        state.wheel.start_spin(slices, &mut state.rng);
    }
    if input.copy {
        copy_assignments(state, now_ms, clipboard);
    }

    state.time_ticks += 1;

    let slices = state.participants.len();
    if let Some(index) = state.wheel.tick(slices) {
        settle_spin(state, index, now_ms);
    }

    state.celebration.tick(now_ms, &mut state.rng);
}

/// A settled spin always celebrates, and always binds when the roster has
/// an entry: the selected CR if any, else the oldest one.
fn settle_spin(state: &mut EngineState, winner_index: usize, now_ms: u64) {
    let winner = state.participants[winner_index].clone();
    log::info!("Selected: {winner}");
    state.celebration.start(now_ms);

    if state.phase.selected_cr().is_none() {
        if let Some(first) = state.roster.first_id() {
            state.phase = AssignPhase::CrChosen {
                cr: first.to_string(),
            };
        }
    }
    if let Some(cr) = state.phase.selected_cr().map(str::to_string) {
        state.roster.assign(&cr, &winner);
        state.phase = AssignPhase::Bound { cr };
    }
}

fn remove_cr_at(state: &mut EngineState, index: usize) {
    let Some(id) = state.roster.get(index).map(|slot| slot.id.clone()) else {
        return;
    };
    state.roster.remove(&id);
    if state.phase.selected_cr() == Some(id.as_str()) {
        state.phase = AssignPhase::Idle;
    }
}

/// Binds only while a CR pick is pending; any other phase ignores the click
fn pick_participant(state: &mut EngineState, slice: usize) {
    if !state.phase.awaiting_target() {
        return;
    }
    let Some(name) = state.participants.get(slice).cloned() else {
        return;
    };
    let Some(cr) = state.phase.selected_cr().map(str::to_string) else {
        return;
    };
    state.roster.assign(&cr, &name);
    state.phase = AssignPhase::Bound { cr };
}

fn copy_assignments(state: &mut EngineState, now_ms: u64, clipboard: &mut dyn ClipboardSink) {
    let table = assignment_table(&state.roster);
    if table.is_empty() {
        state.copy_feedback_at_ms = None;
        return;
    }
    match clipboard.set_text(&table) {
        Ok(()) => state.copy_feedback_at_ms = Some(now_ms),
        Err(err) => log::warn!("Clipboard error: {err}"),
    }
}
