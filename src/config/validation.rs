use super::{AppConfig, MAX_IDLE_LABEL_WIDTH, MAX_TARGET_BYTES};
use anyhow::{bail, Result};
use clap::Parser;
use unicode_width::UnicodeWidthStr;

use crate::session::CallScript;

impl AppConfig {
    /// Parse CLI arguments and validate them right away.
    pub fn parse_args() -> Result<Self> {
        let mut config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    /// Check CLI values and normalize them.
    pub fn validate(&mut self) -> Result<()> {
        let assistant = self.assistant.trim();
        if assistant.is_empty() {
            bail!("--assistant must not be empty");
        }
        if assistant.len() > MAX_TARGET_BYTES {
            bail!(
                "--assistant must be at most {MAX_TARGET_BYTES} bytes, got {}",
                assistant.len()
            );
        }
        // The target is forwarded verbatim to the session layer.
        if !assistant.chars().all(|ch| ch.is_ascii_graphic()) {
            bail!("--assistant must contain only printable ASCII without spaces");
        }
        self.assistant = assistant.to_string();

        let idle_label = self.idle_label.trim();
        if idle_label.is_empty() {
            bail!("--idle-label must not be empty");
        }
        if idle_label.chars().any(char::is_control) {
            bail!("--idle-label must not contain control characters");
        }
        if idle_label.width() > MAX_IDLE_LABEL_WIDTH {
            bail!(
                "--idle-label must be at most {MAX_IDLE_LABEL_WIDTH} columns wide, got {}",
                idle_label.width()
            );
        }
        self.idle_label = idle_label.to_string();

        // Surface script problems at startup instead of on the first call.
        if let Some(script) = &self.script {
            CallScript::load(script)?;
        }

        #[cfg(not(feature = "sounds"))]
        if matches!(self.sound_mode, super::SoundMode::Synth) {
            bail!("--sound-mode synth requires building with the 'sounds' feature");
        }

        Ok(())
    }
}
