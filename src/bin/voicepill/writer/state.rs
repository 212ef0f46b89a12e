//! Writer thread state so frames, fades, and mouse tracking stay synchronized.

use crossterm::terminal::size as terminal_size;
use std::io::{self, Write};
use std::time::Instant;
use voicepill::log_debug;

use super::mouse::{disable_mouse, enable_mouse};
use super::render::{clear_rows, clear_screen, write_scene};
use super::WriterMessage;
use crate::pill::{fade_progress, format_scene, PillFrame};
use crate::theme::Theme;

pub(super) struct WriterState {
    stdout: io::Stdout,
    /// Latest frame from the event loop, not yet promoted to the screen.
    pending: Option<PillFrame>,
    /// Frame the screen currently shows.
    display: Option<PillFrame>,
    needs_redraw: bool,
    rows: u16,
    cols: u16,
    theme: Theme,
    mouse_enabled: bool,
    transition_started_at: Option<Instant>,
    /// (start_row, height) of the scene currently on screen.
    drawn: Option<(u16, usize)>,
    clear_screen: bool,
}

impl WriterState {
    pub(super) fn new() -> Self {
        Self {
            stdout: io::stdout(),
            pending: None,
            display: None,
            needs_redraw: false,
            rows: 0,
            cols: 0,
            theme: Theme::default(),
            mouse_enabled: false,
            transition_started_at: None,
            drawn: None,
            clear_screen: false,
        }
    }

    pub(super) fn handle_message(&mut self, message: WriterMessage) -> bool {
        match message {
            WriterMessage::Frame(frame) => {
                let start_transition = self
                    .pending
                    .as_ref()
                    .or(self.display.as_ref())
                    .map(|prev| should_restart_fade(prev, &frame))
                    .unwrap_or(true);
                if start_transition {
                    self.transition_started_at = Some(Instant::now());
                }
                self.pending = Some(frame);
                self.needs_redraw = true;
                self.redraw();
            }
            WriterMessage::Bell { count } => {
                let sequence = vec![0x07; count.max(1) as usize];
                if let Err(err) = self.stdout.write_all(&sequence) {
                    log_debug(&format!("bell write failed: {err}"));
                }
                if let Err(err) = self.stdout.flush() {
                    log_debug(&format!("bell flush failed: {err}"));
                }
            }
            WriterMessage::Resize { rows, cols } => {
                self.rows = rows;
                self.cols = cols;
                self.clear_screen = true;
                if self.display.is_some() || self.pending.is_some() {
                    self.needs_redraw = true;
                }
                self.redraw();
            }
            WriterMessage::SetTheme(new_theme) => {
                self.theme = new_theme;
                if self.display.is_some() {
                    self.needs_redraw = true;
                }
            }
            WriterMessage::EnableMouse => {
                enable_mouse(&mut self.stdout, &mut self.mouse_enabled);
            }
            WriterMessage::Shutdown => {
                disable_mouse(&mut self.stdout, &mut self.mouse_enabled);
                return false;
            }
        }
        true
    }

    /// Repaint if anything changed, and keep repainting while a fade is
    /// running. The recv timeout in the thread loop calls this between
    /// messages so fades animate without new frames arriving.
    pub(super) fn redraw(&mut self) {
        if !self.needs_redraw {
            return;
        }
        if self.rows == 0 || self.cols == 0 {
            if let Ok((c, r)) = terminal_size() {
                self.rows = r;
                self.cols = c;
            }
        }
        if let Some(frame) = self.pending.take() {
            self.display = Some(frame);
        }
        let now = Instant::now();
        let fade = fade_progress(self.transition_started_at, now);
        if fade <= 0.0 {
            self.transition_started_at = None;
        }
        let Some(frame) = self.display.as_mut() else {
            self.needs_redraw = false;
            return;
        };
        frame.fade = fade;
        let scene = format_scene(frame, self.theme, self.rows, self.cols);

        let mut flush_error: Option<io::Error> = None;
        if self.clear_screen {
            if let Err(err) = clear_screen(&mut self.stdout) {
                flush_error = Some(err);
            }
            self.drawn = None;
            self.clear_screen = false;
        }
        if let Some((start, height)) = self.drawn {
            if start != scene.start_row || height != scene.lines.len() {
                if let Err(err) = clear_rows(&mut self.stdout, start, height) {
                    flush_error.get_or_insert(err);
                }
            }
        }
        if let Err(err) = write_scene(&mut self.stdout, &scene) {
            flush_error.get_or_insert(err);
        }
        self.drawn = Some((scene.start_row, scene.lines.len()));

        if let Err(err) = self.stdout.flush() {
            flush_error.get_or_insert(err);
        }
        self.needs_redraw = fade > 0.0;
        if let Some(err) = flush_error {
            log_debug(&format!("pill redraw flush failed: {err}"));
        }
    }
}

/// The transition fade restarts when the call status or hover state changes,
/// never for label text or mic level updates within a state.
fn should_restart_fade(prev: &PillFrame, next: &PillFrame) -> bool {
    prev.status != next.status || prev.hovered != next.hovered
}
