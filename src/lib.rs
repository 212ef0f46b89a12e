pub mod call;
pub mod config;
pub mod logging;
pub mod session;
#[cfg(feature = "sounds")]
pub mod sound;
mod telemetry;
pub mod terminal_restore;

pub use call::{button_label, CallState, CallStatus, ControlAction, ControlInput};
pub use config::{AppConfig, SoundMode};
pub use logging::{init_logging, log_debug, log_debug_content, log_panic};
pub use session::{
    spawn_session_worker, CallScript, CallSession, ScriptedCall, SessionEvent, SessionMessage,
    SessionWorker,
};
pub use telemetry::{init_tracing, tracing_log_path};
pub use terminal_restore::{
    install_terminal_panic_hook, note_mouse_tracking, restore_terminal, TerminalRestoreGuard,
};
