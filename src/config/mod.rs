//! Command-line parsing and validation helpers.

mod defaults;
mod validation;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub use defaults::{
    default_sound_mode, DEFAULT_ASSISTANT, DEFAULT_IDLE_LABEL, MAX_IDLE_LABEL_WIDTH,
    MAX_TARGET_BYTES,
};

/// CLI options for the VoicePill TUI. Validated values keep the session layer
/// and the pill rendering safe.
#[derive(Debug, Parser, Clone)]
#[command(about = "VoicePill TUI", author, version)]
pub struct AppConfig {
    /// Assistant target handed to the call session
    #[arg(long, env = "VOICEPILL_ASSISTANT", default_value = DEFAULT_ASSISTANT)]
    pub assistant: String,

    /// Path to a JSON call script driving the demo session
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Resting label shown on the pill
    #[arg(
        long = "idle-label",
        env = "VOICEPILL_IDLE_LABEL",
        default_value = DEFAULT_IDLE_LABEL
    )]
    pub idle_label: String,

    /// How button presses are voiced
    #[arg(long = "sound-mode", value_enum, default_value_t = default_sound_mode())]
    pub sound_mode: SoundMode,

    /// Enable file logging (debug)
    #[arg(long = "logs", env = "VOICEPILL_LOGS", default_value_t = false)]
    pub logs: bool,

    /// Disable all file logging (overrides --logs and log env vars)
    #[arg(long = "no-logs", env = "VOICEPILL_NO_LOGS", default_value_t = false)]
    pub no_logs: bool,

    /// Allow logging content snippets (debug log only)
    #[arg(
        long = "log-content",
        env = "VOICEPILL_LOG_CONTENT",
        default_value_t = false
    )]
    pub log_content: bool,

    /// Print the resolved configuration and exit
    #[arg(long = "print-config", default_value_t = false)]
    pub print_config: bool,
}

/// Available press sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SoundMode {
    /// Synthesized click on the default audio output
    Synth,
    /// Terminal bell
    Bell,
    /// Silent
    Off,
}

impl SoundMode {
    pub fn label(self) -> &'static str {
        match self {
            SoundMode::Synth => "synth",
            SoundMode::Bell => "bell",
            SoundMode::Off => "off",
        }
    }
}
