//! Core runtime loop that coordinates input events, session messages, and
//! pill frames.

use std::time::{Duration, Instant};

use crossbeam_channel::select;
use crossterm::terminal::size as terminal_size;
use voicepill::{
    button_label, log_debug, CallStatus, ControlAction, ControlInput, SessionMessage, SoundMode,
};

use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::InputEvent;
use crate::pill::{pill_layout, PillFrame};
use crate::terminal::{resolved_size, take_sigwinch};
use crate::writer::WriterMessage;

const EVENT_LOOP_IDLE_MS: u64 = 50;

pub(crate) fn run_event_loop(state: &mut EventLoopState, deps: &EventLoopDeps) {
    let mut running = true;
    let tick_interval = Duration::from_millis(EVENT_LOOP_IDLE_MS);
    let mut last_periodic_tick = Instant::now();
    send_frame(state, deps);
    while running {
        let now = Instant::now();
        if now.duration_since(last_periodic_tick) >= tick_interval {
            run_periodic_tasks(state, deps, now);
            last_periodic_tick = now;
        }
        select! {
            recv(deps.input_rx) -> event => match event {
                Ok(event) => handle_input(state, deps, event, &mut running),
                Err(_) => running = false,
            },
            recv(deps.session_rx) -> message => match message {
                Ok(message) => handle_session_message(state, deps, message),
                Err(_) => running = false,
            },
            default(tick_interval) => {}
        }
    }
    // Make sure a live session is torn down before the terminal restores.
    let actions = state.call.apply(ControlInput::Teardown, Instant::now());
    run_actions(state, deps, actions);
}

fn run_periodic_tasks(state: &mut EventLoopState, deps: &EventLoopDeps, now: Instant) {
    if take_sigwinch() {
        if let Ok((cols, rows)) = terminal_size() {
            state.terminal_cols = cols;
            state.terminal_rows = rows;
            let _ = deps.writer_tx.send(WriterMessage::Resize { rows, cols });
            send_frame(state, deps);
        }
    }

    if state.call.tick(now) || scene_is_live(state, now) {
        send_frame(state, deps);
    }
}

/// Whether anything on screen is animating and needs frames without input:
/// the connect spinner and typewriter, mic dots, or the post-connect pulse
/// and wave tails.
fn scene_is_live(state: &EventLoopState, now: Instant) -> bool {
    state.call.status() != CallStatus::Idle
        || state.call.just_connected(now)
        || state.call.wave_progress(now).is_some()
}

fn handle_input(
    state: &mut EventLoopState,
    deps: &EventLoopDeps,
    event: InputEvent,
    running: &mut bool,
) {
    match event {
        InputEvent::PrimaryAction => {
            apply_control(state, deps, ControlInput::PrimaryAction);
        }
        InputEvent::Exit => *running = false,
        InputEvent::MousePress { x, y } => {
            let (rows, cols) = resolved_size(state.terminal_rows, state.terminal_cols);
            if pill_layout(rows, cols).rect.contains(x, y) {
                apply_control(state, deps, ControlInput::PrimaryAction);
            }
        }
        InputEvent::MouseRelease { .. } => {}
        InputEvent::MouseMove { x, y } => update_hover(state, deps, x, y),
    }
}

/// Track the pointer against the pill box. Leaving always clears the hover;
/// entering only arms it in states where hover changes the pill, so a
/// pointer parked over the box during connecting does not light it up.
fn update_hover(state: &mut EventLoopState, deps: &EventLoopDeps, x: u16, y: u16) {
    let (rows, cols) = resolved_size(state.terminal_rows, state.terminal_cols);
    let inside = pill_layout(rows, cols).rect.contains(x, y);
    let hovered = if inside {
        state.hovered || hover_can_begin(state.call.status())
    } else {
        false
    };
    if hovered != state.hovered {
        state.hovered = hovered;
        send_frame(state, deps);
    }
}

fn hover_can_begin(status: CallStatus) -> bool {
    matches!(
        status,
        CallStatus::Idle | CallStatus::Listening | CallStatus::Speaking
    )
}

fn handle_session_message(
    state: &mut EventLoopState,
    deps: &EventLoopDeps,
    message: SessionMessage,
) {
    match message {
        SessionMessage::Event(event) => {
            log_debug(&format!("session event: {event:?}"));
            apply_control(state, deps, ControlInput::Session(event));
        }
        SessionMessage::StartFailed(reason) => {
            log_debug(&format!("session start failed: {reason}"));
            apply_control(state, deps, ControlInput::StartFailed);
        }
        SessionMessage::StopFinished { error } => {
            if let Some(err) = error {
                log_debug(&format!("session stop reported: {err}"));
            }
            apply_control(state, deps, ControlInput::StopFinished);
        }
    }
}

fn apply_control(state: &mut EventLoopState, deps: &EventLoopDeps, input: ControlInput) {
    let actions = state.call.apply(input, Instant::now());
    run_actions(state, deps, actions);
    send_frame(state, deps);
}

fn run_actions(state: &EventLoopState, deps: &EventLoopDeps, actions: Vec<ControlAction>) {
    for action in actions {
        match action {
            ControlAction::StartSession => deps.worker.start(&state.assistant),
            ControlAction::StopSession => deps.worker.stop(),
            ControlAction::PlayClick => play_click(state, deps),
        }
    }
}

fn play_click(state: &EventLoopState, deps: &EventLoopDeps) {
    match state.sound_mode {
        SoundMode::Synth => {
            #[cfg(feature = "sounds")]
            voicepill::sound::spawn_click();
        }
        SoundMode::Bell => {
            let _ = deps.writer_tx.send(WriterMessage::Bell { count: 1 });
        }
        SoundMode::Off => {}
    }
}

fn send_frame(state: &EventLoopState, deps: &EventLoopDeps) {
    let now = Instant::now();
    let status = state.call.status();
    let typed = state.call.show_typewriter().then(|| state.call.typed());
    let label = button_label(status, state.hovered, typed, &state.idle_label).to_string();
    let frame = PillFrame {
        status,
        label,
        hovered: state.hovered,
        just_connected: state.call.just_connected(now),
        wave: state.call.wave_progress(now),
        mic_amps: state.call.mic_amps(),
        fade: 0.0,
    };
    let _ = deps.writer_tx.send(WriterMessage::Frame(frame));
}
