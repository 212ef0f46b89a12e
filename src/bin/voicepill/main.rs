//! VoicePill entrypoint so the pill, input decoding, and call session start as
//! one runtime.
//!
//! Draws a single call button centered in the terminal and drives a voice
//! session behind it. Enter, space, or a mouse click toggles the call; the
//! pill animates connecting, speech, and hang-up.
//!
//! # Architecture
//!
//! - Input thread: reads stdin, decodes keys and SGR mouse reports
//! - Session worker: runs start/stop requests off the event loop
//! - Writer thread: owns stdout and repaints the pill scene
//! - Event loop: folds input and session messages into the call state

mod color_mode;
mod config;
mod event_loop;
mod event_state;
mod input;
mod pill;
mod terminal;
mod theme;
mod writer;

use anyhow::Result;
use clap::Parser;
use crossbeam_channel::bounded;
use crossterm::terminal::size as terminal_size;
use std::io;
use voicepill::{
    init_logging, init_tracing, log_debug, logging::log_file_path, spawn_session_worker,
    CallScript, CallState, ScriptedCall, TerminalRestoreGuard,
};

use crate::config::{render_config_report, PillConfig};
use crate::event_loop::run_event_loop;
use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::spawn_input_thread;
use crate::terminal::install_sigwinch_handler;
use crate::writer::{spawn_writer_thread, WriterMessage};

/// Max pending messages for the output writer thread.
const WRITER_CHANNEL_CAPACITY: usize = 512;

/// Max pending input events before backpressure.
const INPUT_CHANNEL_CAPACITY: usize = 256;

/// Max queued session messages before the worker blocks.
const SESSION_CHANNEL_CAPACITY: usize = 64;

fn main() -> Result<()> {
    let mut config = PillConfig::parse();
    config.app.validate()?;
    let color_mode = config.color_mode();
    let theme = config.resolve_theme(color_mode)?;

    if config.app.print_config {
        println!("{}", render_config_report(&config, color_mode, theme));
        return Ok(());
    }

    init_logging(&config.app);
    let log_path = log_file_path();
    log_debug("=== VoicePill Started ===");
    log_debug(&format!("Log file: {log_path:?}"));
    init_tracing(&config.app);

    install_sigwinch_handler()?;

    let terminal_guard = TerminalRestoreGuard::new();
    terminal_guard.enable_raw_mode()?;
    let mut stdout = io::stdout();
    terminal_guard.enter_alt_screen(&mut stdout)?;
    terminal_guard.hide_cursor(&mut stdout)?;

    let (writer_tx, writer_rx) = bounded(WRITER_CHANNEL_CAPACITY);
    let writer_handle = spawn_writer_thread(writer_rx);

    // Set the color theme before the first frame goes out.
    let _ = writer_tx.send(WriterMessage::SetTheme(theme));

    let mut terminal_cols = 0u16;
    let mut terminal_rows = 0u16;
    if let Ok((cols, rows)) = terminal_size() {
        terminal_cols = cols;
        terminal_rows = rows;
        let _ = writer_tx.send(WriterMessage::Resize { rows, cols });
    }
    let _ = writer_tx.send(WriterMessage::EnableMouse);

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let _input_handle = spawn_input_thread(input_tx);

    let (session_tx, session_rx) = bounded(SESSION_CHANNEL_CAPACITY);
    let script = match config.app.script.as_deref() {
        Some(path) => CallScript::load(path)?,
        None => CallScript::default(),
    };
    let backend = ScriptedCall::new(script, session_tx.clone());
    let worker = spawn_session_worker(Box::new(backend), session_tx);

    let mut state = EventLoopState {
        call: CallState::new(),
        hovered: false,
        idle_label: config.app.idle_label.clone(),
        assistant: config.app.assistant.clone(),
        sound_mode: config.app.sound_mode,
        terminal_rows,
        terminal_cols,
    };
    let mut deps = EventLoopDeps {
        writer_tx,
        input_rx,
        session_rx,
        worker,
    };

    run_event_loop(&mut state, &deps);

    // Writer first so the mouse-off escapes land while the terminal is still
    // in raw mode, then the worker, then the terminal itself.
    let _ = deps.writer_tx.send(WriterMessage::Shutdown);
    let _ = writer_handle.join();
    deps.worker.shutdown();
    terminal_guard.restore();
    log_debug("=== VoicePill Exiting ===");
    Ok(())
}
