//! Scripted call backend.
//!
//! Plays a canned call from a JSON timeline: wait, come up, alternate
//! listening and speaking turns, then hang up or hold the line until asked
//! to stop. Used by the demo binary and by tests that need a deterministic
//! session without any real SDK behind it.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};

use super::{CallSession, SessionEvent, SessionMessage};

/// How often a waiting timeline checks the stop flag (milliseconds).
const STOP_POLL_MS: u64 = 20;

/// One assistant speech turn: silence, then speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechTurn {
    /// Listening time before the assistant talks (milliseconds).
    pub pause_ms: u64,
    /// How long the assistant talks (milliseconds).
    pub speak_ms: u64,
}

/// Timeline for one scripted call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CallScript {
    /// Delay before the session reports itself started (milliseconds).
    pub connect_delay_ms: u64,
    /// Speech turns played in order once connected.
    pub turns: Vec<SpeechTurn>,
    /// Hang up this long after the last turn; None holds the line until the
    /// user ends the call.
    pub hangup_after_ms: Option<u64>,
    /// Reject the start request instead of connecting.
    pub fail_start: bool,
}

impl Default for CallScript {
    fn default() -> Self {
        Self {
            connect_delay_ms: 600,
            turns: vec![
                SpeechTurn {
                    pause_ms: 800,
                    speak_ms: 1500,
                },
                SpeechTurn {
                    pause_ms: 1200,
                    speak_ms: 2200,
                },
            ],
            hangup_after_ms: None,
            fail_start: false,
        }
    }
}

impl CallScript {
    /// Read a script from a JSON file. Missing fields fall back to the
    /// defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read call script {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid call script {}", path.display()))
    }
}

struct Timeline {
    stop_flag: Arc<AtomicBool>,
    /// Raised by the timeline thread before it sends its final event, so a
    /// caller that has seen `Ended` can safely join.
    done: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// [`CallSession`] that replays a [`CallScript`] on its own thread.
pub struct ScriptedCall {
    script: CallScript,
    events: Sender<SessionMessage>,
    active: Option<Timeline>,
}

impl ScriptedCall {
    pub fn new(script: CallScript, events: Sender<SessionMessage>) -> Self {
        Self {
            script,
            events,
            active: None,
        }
    }
}

impl CallSession for ScriptedCall {
    fn start(&mut self, _target: &str) -> Result<()> {
        // A timeline that hung up on its own is done but never joined.
        if self
            .active
            .as_ref()
            .is_some_and(|timeline| timeline.done.load(Ordering::Acquire))
        {
            if let Some(timeline) = self.active.take() {
                let _ = timeline.handle.join();
            }
        }
        if self.active.is_some() {
            bail!("a session is already running");
        }
        if self.script.fail_start {
            bail!("scripted start failure");
        }
        let stop_flag = Arc::new(AtomicBool::new(false));
        let done = Arc::new(AtomicBool::new(false));
        let script = self.script.clone();
        let events = self.events.clone();
        let stop = Arc::clone(&stop_flag);
        let done_flag = Arc::clone(&done);
        let handle = thread::spawn(move || run_timeline(script, events, stop, done_flag));
        self.active = Some(Timeline {
            stop_flag,
            done,
            handle,
        });
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        if let Some(timeline) = self.active.take() {
            timeline.stop_flag.store(true, Ordering::Relaxed);
            if timeline.handle.join().is_err() {
                bail!("session timeline thread panicked");
            }
        }
        Ok(())
    }
}

fn run_timeline(
    script: CallScript,
    events: Sender<SessionMessage>,
    stop: Arc<AtomicBool>,
    done: Arc<AtomicBool>,
) {
    let send = |event: SessionEvent| {
        let _ = events.send(SessionMessage::Event(event));
    };
    play_script(&script, &send, &stop);
    // Before the final event: anyone who receives Ended must find done set.
    done.store(true, Ordering::Release);
    send(SessionEvent::Ended);
}

/// Walk the scripted timeline, returning as soon as the call is over or the
/// stop flag interrupts a wait. The caller sends the final `Ended`.
fn play_script(script: &CallScript, send: &impl Fn(SessionEvent), stop: &AtomicBool) {
    if !wait_or_stop(script.connect_delay_ms, stop) {
        return;
    }
    send(SessionEvent::Started);
    for turn in &script.turns {
        if !wait_or_stop(turn.pause_ms, stop) {
            return;
        }
        send(SessionEvent::SpeechStart);
        if !wait_or_stop(turn.speak_ms, stop) {
            return;
        }
        send(SessionEvent::SpeechEnd);
    }
    match script.hangup_after_ms {
        Some(ms) => {
            wait_or_stop(ms, stop);
        }
        None => {
            // Hold the line until the user hangs up.
            while !stop.load(Ordering::Relaxed) {
                thread::sleep(Duration::from_millis(STOP_POLL_MS));
            }
        }
    }
}

/// Sleep for `ms`, waking early when the stop flag is raised. Returns false
/// if the wait was interrupted.
fn wait_or_stop(ms: u64, stop: &AtomicBool) -> bool {
    let mut remaining = ms;
    while remaining > 0 {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        let chunk = remaining.min(STOP_POLL_MS);
        thread::sleep(Duration::from_millis(chunk));
        remaining -= chunk;
    }
    !stop.load(Ordering::Relaxed)
}
