//! Call status controller.
//!
//! Owns the lifecycle of one assistant call as seen by the UI: the status
//! machine (idle, connecting, listening, speaking, ending), the cosmetic
//! typewriter shown while connecting, the simulated mic meter, and the short
//! deadline-driven effects (just-connected pulse, wave ring, deferred return
//! to idle). The controller is synchronous and single-threaded: the event
//! loop feeds it inputs and clock ticks, and it answers with the side effects
//! the loop should run (start or stop the session, play the click).

pub mod label;
pub mod meter;
pub mod typewriter;


pub use label::button_label;
pub use meter::MicLevels;
pub use typewriter::Typewriter;

use std::fmt;
use std::time::{Duration, Instant};

use crate::session::SessionEvent;

/// How long the pill pulses right after the session starts (milliseconds).
pub const JUST_CONNECTED_MS: u64 = 800;
/// Lifetime of the expanding wave ring after connect (milliseconds).
pub const WAVE_MS: u64 = 1000;
/// Grace period before a finished call settles back to idle (milliseconds).
pub const IDLE_RETURN_MS: u64 = 1000;

/// Where the call is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallStatus {
    #[default]
    Idle,
    Connecting,
    Listening,
    Speaking,
    Ending,
}

impl CallStatus {
    /// True once the session is live (assistant listening or speaking).
    pub fn is_connected(self) -> bool {
        matches!(self, CallStatus::Listening | CallStatus::Speaking)
    }

    /// True when the mic indicator is drawn.
    pub fn shows_mic(self) -> bool {
        matches!(
            self,
            CallStatus::Connecting | CallStatus::Listening | CallStatus::Speaking
        )
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CallStatus::Idle => "idle",
            CallStatus::Connecting => "connecting",
            CallStatus::Listening => "listening",
            CallStatus::Speaking => "speaking",
            CallStatus::Ending => "ending",
        };
        f.write_str(name)
    }
}

/// Everything the event loop can feed into the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlInput {
    /// The user pressed the pill (key or click).
    PrimaryAction,
    /// A session event arrived from the worker.
    Session(SessionEvent),
    /// The worker could not start the session.
    StartFailed,
    /// The worker finished a requested stop.
    StopFinished,
    /// The app is shutting down.
    Teardown,
}

/// Side effects the event loop must carry out after an `apply`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    StartSession,
    StopSession,
    PlayClick,
}

/// Full controller state. All mutation goes through [`CallState::apply`] and
/// [`CallState::tick`]; readers only see the getters.
#[derive(Debug, Clone, Default)]
pub struct CallState {
    status: CallStatus,
    is_ending: bool,
    show_typewriter: bool,
    typewriter: Typewriter,
    mic: MicLevels,
    idle_return_at: Option<Instant>,
    connected_pulse_until: Option<Instant>,
    wave_until: Option<Instant>,
}

impl CallState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input and return the side effects it demands.
    pub fn apply(&mut self, input: ControlInput, now: Instant) -> Vec<ControlAction> {
        let mut actions = Vec::new();
        match input {
            ControlInput::PrimaryAction => {
                if self.status.is_connected() {
                    actions.push(ControlAction::PlayClick);
                    self.is_ending = true;
                    self.show_typewriter = false;
                    self.typewriter.cancel();
                    self.set_status(CallStatus::Ending, now);
                    actions.push(ControlAction::StopSession);
                } else if self.status == CallStatus::Idle {
                    actions.push(ControlAction::PlayClick);
                    self.set_status(CallStatus::Connecting, now);
                    self.show_typewriter = true;
                    actions.push(ControlAction::StartSession);
                }
                // Presses during connecting or ending are ignored.
            }
            ControlInput::Session(event) => match event {
                SessionEvent::Started => {
                    self.show_typewriter = false;
                    self.typewriter.cancel();
                    self.connected_pulse_until =
                        Some(now + Duration::from_millis(JUST_CONNECTED_MS));
                    self.wave_until = Some(now + Duration::from_millis(WAVE_MS));
                    actions.push(ControlAction::PlayClick);
                    if !self.is_ending {
                        self.set_status(CallStatus::Listening, now);
                    }
                }
                SessionEvent::SpeechStart => {
                    if !self.is_ending {
                        self.set_status(CallStatus::Speaking, now);
                    }
                }
                SessionEvent::SpeechEnd => {
                    if !self.is_ending {
                        self.set_status(CallStatus::Listening, now);
                    }
                }
                SessionEvent::Ended => {
                    self.show_typewriter = false;
                    self.typewriter.cancel();
                    self.schedule_idle_return(now);
                }
                SessionEvent::Error(_) => {
                    self.show_typewriter = false;
                    self.typewriter.cancel();
                    self.is_ending = false;
                    self.idle_return_at = None;
                    self.set_status(CallStatus::Idle, now);
                }
            },
            ControlInput::StartFailed => {
                self.show_typewriter = false;
                self.typewriter.cancel();
                self.set_status(CallStatus::Idle, now);
            }
            ControlInput::StopFinished => {
                self.schedule_idle_return(now);
            }
            ControlInput::Teardown => {
                self.show_typewriter = false;
                self.typewriter.cancel();
                self.idle_return_at = None;
                self.connected_pulse_until = None;
                self.wave_until = None;
                self.is_ending = false;
                self.mic.reset();
                self.set_status(CallStatus::Idle, now);
                actions.push(ControlAction::StopSession);
            }
        }
        actions
    }

    /// Advance every deadline that is due. Returns true when anything visible
    /// changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(due) = self.idle_return_at {
            if now >= due {
                self.idle_return_at = None;
                self.is_ending = false;
                self.set_status(CallStatus::Idle, now);
                changed = true;
            }
        }
        if self.show_typewriter && self.typewriter.step(now) {
            changed = true;
        }
        if self.status == CallStatus::Speaking && self.mic.step(now) {
            changed = true;
        }
        if let Some(due) = self.connected_pulse_until {
            if now >= due {
                self.connected_pulse_until = None;
                changed = true;
            }
        }
        if let Some(due) = self.wave_until {
            if now >= due {
                self.wave_until = None;
                changed = true;
            }
        }
        changed
    }

    pub fn status(&self) -> CallStatus {
        self.status
    }

    pub fn is_ending(&self) -> bool {
        self.is_ending
    }

    pub fn show_typewriter(&self) -> bool {
        self.show_typewriter
    }

    /// Revealed prefix of the connecting text.
    pub fn typed(&self) -> &str {
        self.typewriter.typed()
    }

    pub fn mic_amps(&self) -> [f32; 3] {
        self.mic.amps()
    }

    /// True during the short pulse after the session started.
    pub fn just_connected(&self, now: Instant) -> bool {
        matches!(self.connected_pulse_until, Some(until) if now < until)
    }

    /// Wave ring progress in `[0, 1)`, or None once the burst is over.
    pub fn wave_progress(&self, now: Instant) -> Option<f32> {
        let until = self.wave_until?;
        if now >= until {
            return None;
        }
        let total = WAVE_MS as f32;
        let remaining = until.duration_since(now).as_millis() as f32;
        Some(((total - remaining) / total).clamp(0.0, 1.0))
    }

    /// Arm the deferred return to idle, replacing any pending deadline.
    /// Skipped when the controller is already settled at idle, where firing
    /// would change nothing.
    fn schedule_idle_return(&mut self, now: Instant) {
        if self.status == CallStatus::Idle && !self.is_ending && self.idle_return_at.is_none() {
            return;
        }
        self.idle_return_at = Some(now + Duration::from_millis(IDLE_RETURN_MS));
    }

    fn set_status(&mut self, next: CallStatus, now: Instant) {
        if self.status == next {
            return;
        }
        let prev = self.status;
        self.status = next;
        if next == CallStatus::Connecting {
            self.typewriter.start(now);
        } else if prev == CallStatus::Connecting {
            self.typewriter.cancel();
        }
        if next == CallStatus::Speaking {
            self.mic.arm(now);
        } else if prev == CallStatus::Speaking {
            self.mic.reset();
        }
        tracing::debug!(from = %prev, to = %next, "call status changed");
    }
}
