//! Headless demo
//!
//! Runs a scripted session against a simulated 60 Hz clock: enter names
//! and CRs, spin the wheel to settle, bind one CR by hand, copy the
//! assignment table, and dump a JSON snapshot of the final frame.
//!
//! Set `WHEEL_SEED` to replay a specific run; `RUST_LOG=info` shows the
//! engine's log lines.

use wheel_of_opportunity::export::{ClipboardSink, MemoryClipboard};
use wheel_of_opportunity::snapshot::FrameSnapshot;
use wheel_of_opportunity::{EngineConfig, EngineState, TickInput, tick};

/// Simulated frame duration (60 Hz)
const FRAME_MS: u64 = 1000 / 60;

fn step(
    state: &mut EngineState,
    clipboard: &mut dyn ClipboardSink,
    frame: &mut u64,
    input: TickInput,
) {
    tick(state, &input, *frame * FRAME_MS, clipboard);
    *frame += 1;
}

fn main() {
    env_logger::init();

    let seed = std::env::var("WHEEL_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    log::info!("Demo run with seed {seed}");

    let config = EngineConfig::default();
    let mut state = EngineState::new(seed, &config);
    let mut clipboard = MemoryClipboard::default();
    let mut frame: u64 = 0;

    for name in ["Alice", "Bob", "Carol", "Dana"] {
        step(
            &mut state,
            &mut clipboard,
            &mut frame,
            TickInput {
                submit_participant: Some(name.to_string()),
                ..Default::default()
            },
        );
    }
    for cr in ["CR-101", "CR-102", "CR-103"] {
        step(
            &mut state,
            &mut clipboard,
            &mut frame,
            TickInput {
                submit_cr: Some(cr.to_string()),
                ..Default::default()
            },
        );
    }

    step(
        &mut state,
        &mut clipboard,
        &mut frame,
        TickInput {
            spin: true,
            ..Default::default()
        },
    );
    while state.wheel.is_spinning() {
        step(&mut state, &mut clipboard, &mut frame, TickInput::default());
    }
    println!(
        "Winner: {}",
        state.selected_participant().unwrap_or("<none>")
    );

    // Bind the second CR by hand: select it, then pick a slice
    step(
        &mut state,
        &mut clipboard,
        &mut frame,
        TickInput {
            select_cr: Some(1),
            ..Default::default()
        },
    );
    step(
        &mut state,
        &mut clipboard,
        &mut frame,
        TickInput {
            pick_participant: Some(0),
            ..Default::default()
        },
    );

    // Let the celebration burn out
    while state.celebration.is_active() || !state.celebration.fireworks().is_empty() {
        step(&mut state, &mut clipboard, &mut frame, TickInput::default());
    }

    step(
        &mut state,
        &mut clipboard,
        &mut frame,
        TickInput {
            copy: true,
            ..Default::default()
        },
    );
    if let Some(table) = &clipboard.contents {
        println!("Assignments:\n{table}");
    }

    let snapshot = FrameSnapshot::capture(&state, frame * FRAME_MS);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Snapshot serialization failed: {err}"),
    }
}
