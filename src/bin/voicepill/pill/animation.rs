use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Connect spinner frames (braille dots for smooth animation).
const CONNECT_SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const CONNECT_SPINNER_CYCLE_MS: u64 = 120;

/// How long the dim-then-settle transition fade runs after a state or hover
/// change.
pub(crate) const FADE_MS: u64 = 750;

/// Get the current animation frame based on system time.
/// Returns a frame index that cycles through the given frame count.
#[inline]
fn get_animation_frame(frame_count: usize, cycle_ms: u64) -> usize {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    ((now / cycle_ms) % frame_count as u64) as usize
}

/// Get the connect spinner character.
#[inline]
pub(super) fn get_connect_spinner() -> &'static str {
    let frame = get_animation_frame(CONNECT_SPINNER_FRAMES.len(), CONNECT_SPINNER_CYCLE_MS);
    CONNECT_SPINNER_FRAMES[frame]
}

/// Remaining transition fade, counting down from 1.0 at the moment the fade
/// starts to 0.0 once [`FADE_MS`] has elapsed. The first half renders faint,
/// so a fresh transition dims and then settles back to full ink.
pub(crate) fn fade_progress(started: Option<Instant>, now: Instant) -> f32 {
    let Some(started) = started else {
        return 0.0;
    };
    let elapsed = now.saturating_duration_since(started).as_millis() as u64;
    if elapsed >= FADE_MS {
        return 0.0;
    }
    1.0 - (elapsed as f32 / FADE_MS as f32)
}

/// Map a mic amplitude (1.0..1.8) onto a dot weight.
#[inline]
pub(super) fn mic_glyph(amp: f32) -> char {
    if amp < 1.2 {
        '·'
    } else if amp < 1.5 {
        '•'
    } else {
        '●'
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn connect_spinner_in_range() {
        let spinner = get_connect_spinner();
        assert!(CONNECT_SPINNER_FRAMES.contains(&spinner));
    }

    #[test]
    fn fade_counts_down_and_finishes() {
        let now = Instant::now();
        assert_eq!(fade_progress(None, now), 0.0);
        assert_eq!(fade_progress(Some(now), now), 1.0);

        let halfway = now + Duration::from_millis(FADE_MS / 2);
        let mid = fade_progress(Some(now), halfway);
        assert!(mid > 0.4 && mid < 0.6);

        let done = now + Duration::from_millis(FADE_MS);
        assert_eq!(fade_progress(Some(now), done), 0.0);
        let past = now + Duration::from_millis(FADE_MS * 3);
        assert_eq!(fade_progress(Some(now), past), 0.0);
    }

    #[test]
    fn mic_glyph_weights_by_amplitude() {
        assert_eq!(mic_glyph(1.0), '·');
        assert_eq!(mic_glyph(1.19), '·');
        assert_eq!(mic_glyph(1.2), '•');
        assert_eq!(mic_glyph(1.49), '•');
        assert_eq!(mic_glyph(1.5), '●');
        assert_eq!(mic_glyph(1.79), '●');
    }
}
