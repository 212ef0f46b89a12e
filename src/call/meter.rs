//! Simulated mic level meter shown while the assistant is speaking.

use std::time::{Duration, Instant};

use rand::Rng;

/// How often the three bars are resampled (milliseconds).
pub const MIC_RESAMPLE_MS: u64 = 250;
/// Resting amplitude for every bar.
pub const MIC_AMP_MIN: f32 = 1.0;
/// Width of the random band above the resting amplitude.
pub const MIC_AMP_SPAN: f32 = 0.8;

/// Three amplitude multipliers, resampled on a fixed cadence while armed and
/// pinned to the resting value otherwise.
#[derive(Debug, Clone)]
pub struct MicLevels {
    amps: [f32; 3],
    next_sample_at: Option<Instant>,
}

impl MicLevels {
    pub fn new() -> Self {
        Self {
            amps: [MIC_AMP_MIN; 3],
            next_sample_at: None,
        }
    }

    /// Start jittering. The first resample lands one full interval out; the
    /// bars stay at rest until then.
    pub fn arm(&mut self, now: Instant) {
        self.next_sample_at = Some(now + Duration::from_millis(MIC_RESAMPLE_MS));
    }

    /// Stop jittering and drop every bar back to the resting amplitude.
    pub fn reset(&mut self) {
        self.amps = [MIC_AMP_MIN; 3];
        self.next_sample_at = None;
    }

    /// Resample the bars if the cadence deadline passed. Returns true when
    /// the amplitudes changed.
    pub fn step(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_sample_at else {
            return false;
        };
        if now < due {
            return false;
        }
        let mut rng = rand::thread_rng();
        for amp in &mut self.amps {
            *amp = rng.gen_range(MIC_AMP_MIN..MIC_AMP_MIN + MIC_AMP_SPAN);
        }
        self.next_sample_at = Some(now + Duration::from_millis(MIC_RESAMPLE_MS));
        true
    }

    pub fn amps(&self) -> [f32; 3] {
        self.amps
    }

    /// True while a resample is scheduled.
    pub fn is_armed(&self) -> bool {
        self.next_sample_at.is_some()
    }
}

impl Default for MicLevels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_rest() {
        let mic = MicLevels::new();
        assert_eq!(mic.amps(), [MIC_AMP_MIN; 3]);
        assert!(!mic.is_armed());
    }

    #[test]
    fn no_resample_before_first_interval() {
        let now = Instant::now();
        let mut mic = MicLevels::new();
        mic.arm(now);
        assert!(!mic.step(now + Duration::from_millis(MIC_RESAMPLE_MS / 2)));
        assert_eq!(mic.amps(), [MIC_AMP_MIN; 3]);
    }

    #[test]
    fn resample_lands_in_band() {
        let now = Instant::now();
        let mut mic = MicLevels::new();
        mic.arm(now);
        assert!(mic.step(now + Duration::from_millis(MIC_RESAMPLE_MS)));
        for amp in mic.amps() {
            assert!(amp >= MIC_AMP_MIN);
            assert!(amp < MIC_AMP_MIN + MIC_AMP_SPAN);
        }
    }

    #[test]
    fn reset_pins_bars_to_rest() {
        let now = Instant::now();
        let mut mic = MicLevels::new();
        mic.arm(now);
        mic.step(now + Duration::from_millis(MIC_RESAMPLE_MS));
        mic.reset();
        assert_eq!(mic.amps(), [MIC_AMP_MIN; 3]);
        assert!(!mic.is_armed());
        assert!(!mic.step(now + Duration::from_millis(10 * MIC_RESAMPLE_MS)));
    }

    #[test]
    fn cadence_continues_after_each_sample() {
        let now = Instant::now();
        let mut mic = MicLevels::new();
        mic.arm(now);
        assert!(mic.step(now + Duration::from_millis(MIC_RESAMPLE_MS)));
        // Next deadline is a full interval past the fire time.
        assert!(!mic.step(now + Duration::from_millis(MIC_RESAMPLE_MS + MIC_RESAMPLE_MS / 2)));
        assert!(mic.step(now + Duration::from_millis(2 * MIC_RESAMPLE_MS)));
    }
}
