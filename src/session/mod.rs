//! Call session backends and the worker thread that drives them.
//!
//! The controller never blocks on the session SDK. Start and stop requests
//! are handed to a dedicated worker thread which runs them one at a time and
//! reports the outcome back over the message channel, alongside the live
//! events the session itself emits.

pub mod script;


pub use script::{CallScript, ScriptedCall, SpeechTurn};

use std::thread::{self, JoinHandle};

use anyhow::Result;
use crossbeam_channel::{bounded, Receiver, Sender};

/// Live notifications from a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The session is established and audio is flowing.
    Started,
    /// The assistant began speaking.
    SpeechStart,
    /// The assistant stopped speaking.
    SpeechEnd,
    /// The session ended, locally or remotely.
    Ended,
    /// The session failed mid-call.
    Error(String),
}

/// Everything the event loop can receive from the session side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMessage {
    Event(SessionEvent),
    /// A start request was rejected before the session came up.
    StartFailed(String),
    /// A stop request completed; `error` carries the failure text if the
    /// teardown itself went wrong.
    StopFinished { error: Option<String> },
}

/// One call backend. `start` returns once the attempt is accepted or
/// rejected; progress then arrives as [`SessionEvent`]s on the message
/// channel the backend was built with. `stop` blocks until the session is
/// fully torn down and must be a no-op when nothing is running.
pub trait CallSession: Send {
    fn start(&mut self, target: &str) -> Result<()>;
    fn stop(&mut self) -> Result<()>;
}

enum SessionCommand {
    Start { target: String },
    Stop,
    Shutdown,
}

/// Handle to the worker thread. Requests are fire-and-forget; outcomes come
/// back as [`SessionMessage`]s.
pub struct SessionWorker {
    commands: Sender<SessionCommand>,
    handle: Option<JoinHandle<()>>,
}

impl SessionWorker {
    pub fn start(&self, target: &str) {
        let _ = self.commands.send(SessionCommand::Start {
            target: target.to_string(),
        });
    }

    pub fn stop(&self) {
        let _ = self.commands.send(SessionCommand::Stop);
    }

    /// Ask the worker to exit and wait for it.
    pub fn shutdown(&mut self) {
        let _ = self.commands.send(SessionCommand::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Spawn the worker thread around a concrete backend. Outcome messages go to
/// `messages`, the same channel the backend sends its live events on.
pub fn spawn_session_worker(
    session: Box<dyn CallSession>,
    messages: Sender<SessionMessage>,
) -> SessionWorker {
    let (command_tx, command_rx) = bounded::<SessionCommand>(4);
    let handle = thread::spawn(move || run_worker(session, command_rx, messages));
    SessionWorker {
        commands: command_tx,
        handle: Some(handle),
    }
}

fn run_worker(
    mut session: Box<dyn CallSession>,
    commands: Receiver<SessionCommand>,
    messages: Sender<SessionMessage>,
) {
    while let Ok(command) = commands.recv() {
        match command {
            SessionCommand::Start { target } => {
                if let Err(err) = session.start(&target) {
                    tracing::debug!(error = %err, "session start rejected");
                    let _ = messages.send(SessionMessage::StartFailed(format!("{err:#}")));
                }
            }
            SessionCommand::Stop => {
                let error = session.stop().err().map(|err| format!("{err:#}"));
                let _ = messages.send(SessionMessage::StopFinished { error });
            }
            SessionCommand::Shutdown => break,
        }
    }
}
