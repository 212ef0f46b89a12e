//! Character-by-character reveal loop for the connecting label.

use std::time::{Duration, Instant};

/// Text the loop types out while a session is being established.
pub const CONNECT_TEXT: &str = "CONNECTING...";

/// Delay between revealed characters (milliseconds).
pub const TYPE_STEP_MS: u64 = 90;
/// How long the fully typed text is held before clearing (milliseconds).
pub const TYPE_HOLD_MS: u64 = 1000;
/// Pause between clearing and restarting the reveal (milliseconds).
pub const TYPE_GAP_MS: u64 = 400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Revealing one more character per step.
    Typing,
    /// Full text shown, waiting before the wipe.
    Holding,
    /// Text cleared, waiting before the next pass.
    Resting,
}

/// One typewriter loop. Starting a new pass replaces the old one wholesale,
/// so there is never more than one schedule alive.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    phase: Phase,
    next_step_at: Option<Instant>,
}

impl Typewriter {
    pub fn new() -> Self {
        Self {
            text: CONNECT_TEXT,
            shown: 0,
            phase: Phase::Typing,
            next_step_at: None,
        }
    }

    /// Begin a fresh pass: the first character appears immediately, the rest
    /// follow on the step interval. Any previously scheduled step is dropped.
    pub fn start(&mut self, now: Instant) {
        self.shown = usize::from(!self.text.is_empty());
        self.phase = Phase::Typing;
        self.next_step_at = Some(now + Duration::from_millis(TYPE_STEP_MS));
    }

    /// Drop the schedule and the revealed text. After this returns no step
    /// fires until `start` is called again.
    pub fn cancel(&mut self) {
        self.shown = 0;
        self.phase = Phase::Typing;
        self.next_step_at = None;
    }

    /// Advance the loop if a step is due. Returns true when the visible text
    /// changed.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_step_at else {
            return false;
        };
        if now < due {
            return false;
        }
        match self.phase {
            Phase::Typing => {
                let total = self.text.chars().count();
                if self.shown < total {
                    self.shown += 1;
                }
                if self.shown >= total {
                    self.phase = Phase::Holding;
                    self.next_step_at = Some(now + Duration::from_millis(TYPE_HOLD_MS));
                } else {
                    self.next_step_at = Some(now + Duration::from_millis(TYPE_STEP_MS));
                }
            }
            Phase::Holding => {
                self.shown = 0;
                self.phase = Phase::Resting;
                self.next_step_at = Some(now + Duration::from_millis(TYPE_GAP_MS));
            }
            Phase::Resting => {
                self.shown = usize::from(!self.text.is_empty());
                self.phase = Phase::Typing;
                self.next_step_at = Some(now + Duration::from_millis(TYPE_STEP_MS));
            }
        }
        true
    }

    /// Currently revealed prefix.
    pub fn typed(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((idx, _)) => &self.text[..idx],
            None => self.text,
        }
    }

    /// True while a step is scheduled.
    pub fn is_armed(&self) -> bool {
        self.next_step_at.is_some()
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(tw: &mut Typewriter, start: Instant, ms: u64) -> bool {
        tw.step(start + Duration::from_millis(ms))
    }

    #[test]
    fn first_character_shows_immediately() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        assert_eq!(tw.typed(), "C");
        assert!(tw.is_armed());
    }

    #[test]
    fn reveals_one_character_per_step() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        assert!(advance(&mut tw, now, TYPE_STEP_MS));
        assert_eq!(tw.typed(), "CO");
        assert!(advance(&mut tw, now, 2 * TYPE_STEP_MS));
        assert_eq!(tw.typed(), "CON");
    }

    #[test]
    fn step_before_deadline_is_a_no_op() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        assert!(!advance(&mut tw, now, TYPE_STEP_MS / 2));
        assert_eq!(tw.typed(), "C");
    }

    #[test]
    fn holds_then_clears_then_restarts() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        let total = CONNECT_TEXT.chars().count() as u64;
        // Walk through the remaining characters.
        let mut at = 0;
        for _ in 1..total {
            at += TYPE_STEP_MS;
            advance(&mut tw, now, at);
        }
        assert_eq!(tw.typed(), CONNECT_TEXT);

        // Hold expires: text wipes.
        at += TYPE_HOLD_MS;
        assert!(advance(&mut tw, now, at));
        assert_eq!(tw.typed(), "");

        // Gap expires: first character of the next pass appears.
        at += TYPE_GAP_MS;
        assert!(advance(&mut tw, now, at));
        assert_eq!(tw.typed(), "C");
    }

    #[test]
    fn cancel_clears_text_and_schedule() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        advance(&mut tw, now, TYPE_STEP_MS);
        tw.cancel();
        assert_eq!(tw.typed(), "");
        assert!(!tw.is_armed());
        // A late step from the old schedule must not fire.
        assert!(!advance(&mut tw, now, 10 * TYPE_STEP_MS));
        assert_eq!(tw.typed(), "");
    }

    #[test]
    fn restart_replaces_previous_pass() {
        let now = Instant::now();
        let mut tw = Typewriter::new();
        tw.start(now);
        advance(&mut tw, now, TYPE_STEP_MS);
        advance(&mut tw, now, 2 * TYPE_STEP_MS);
        assert_eq!(tw.typed(), "CON");

        let later = now + Duration::from_millis(5 * TYPE_STEP_MS);
        tw.start(later);
        assert_eq!(tw.typed(), "C");
        // The old pass's cadence is gone; only the new schedule advances it.
        assert!(!tw.step(later + Duration::from_millis(TYPE_STEP_MS / 2)));
        assert!(tw.step(later + Duration::from_millis(TYPE_STEP_MS)));
        assert_eq!(tw.typed(), "CO");
    }
}
