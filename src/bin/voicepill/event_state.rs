use crossbeam_channel::{Receiver, Sender};
use voicepill::{CallState, SessionMessage, SessionWorker, SoundMode};

use crate::input::InputEvent;
use crate::writer::WriterMessage;

pub(crate) struct EventLoopState {
    pub(crate) call: CallState,
    pub(crate) hovered: bool,
    pub(crate) idle_label: String,
    pub(crate) assistant: String,
    pub(crate) sound_mode: SoundMode,
    pub(crate) terminal_rows: u16,
    pub(crate) terminal_cols: u16,
}

pub(crate) struct EventLoopDeps {
    pub(crate) writer_tx: Sender<WriterMessage>,
    pub(crate) input_rx: Receiver<InputEvent>,
    pub(crate) session_rx: Receiver<SessionMessage>,
    pub(crate) worker: SessionWorker,
}
