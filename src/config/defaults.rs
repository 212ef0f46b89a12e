//! Default values shared between CLI definitions and validation.

use super::SoundMode;

pub const DEFAULT_ASSISTANT: &str = "demo";
pub const DEFAULT_IDLE_LABEL: &str = "TALK TO VOICEPILL";

/// Upper bound for the assistant target handed to the session layer (bytes).
pub const MAX_TARGET_BYTES: usize = 128;
/// Widest idle label that still fits inside the pill (columns).
pub const MAX_IDLE_LABEL_WIDTH: usize = 32;

pub fn default_sound_mode() -> SoundMode {
    if cfg!(feature = "sounds") {
        SoundMode::Synth
    } else {
        SoundMode::Bell
    }
}
