//! Dedicated stdout writer thread. The event loop never touches the
//! terminal directly; it sends frames here and the writer owns cursor
//! movement, fades, and mouse tracking toggles.

mod mouse;
mod render;
mod state;

use crossbeam_channel::Receiver;
use std::thread;
use std::time::Duration;

use crate::pill::PillFrame;
use crate::theme::Theme;

const WRITER_RECV_TIMEOUT_MS: u64 = 25;

#[derive(Debug, Clone)]
pub(crate) enum WriterMessage {
    /// Full pill state to draw.
    Frame(PillFrame),
    /// Emit terminal bell sound (click fallback)
    Bell {
        count: u8,
    },
    Resize {
        rows: u16,
        cols: u16,
    },
    SetTheme(Theme),
    /// Enable mouse tracking for hover and clicks
    EnableMouse,
    Shutdown,
}

pub(crate) fn spawn_writer_thread(rx: Receiver<WriterMessage>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut state = state::WriterState::new();
        loop {
            match rx.recv_timeout(Duration::from_millis(WRITER_RECV_TIMEOUT_MS)) {
                Ok(message) => {
                    if !state.handle_message(message) {
                        break;
                    }
                }
                Err(crossbeam_channel::RecvTimeoutError::Timeout) => {
                    state.redraw();
                }
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                    break;
                }
            }
        }
    })
}
