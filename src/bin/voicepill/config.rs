//! Theme resolution policy so color mode, flags, and terminal support agree.

use anyhow::{anyhow, Result};
use clap::Parser;
use voicepill::{tracing_log_path, AppConfig};

use crate::color_mode::ColorMode;
use crate::theme::Theme;

#[derive(Debug, Parser, Clone)]
#[command(about = "VoicePill", author, version)]
pub(crate) struct PillConfig {
    #[command(flatten)]
    pub(crate) app: AppConfig,

    /// Color theme for the pill (pill, ansi, none)
    #[arg(long = "theme")]
    pub(crate) theme_name: Option<String>,

    /// Disable colors in pill output
    #[arg(long = "no-color", default_value_t = false)]
    pub(crate) no_color: bool,
}

impl PillConfig {
    /// Get the resolved theme for a detected color mode, validating the
    /// requested name and then degrading to what the terminal can show.
    pub(crate) fn resolve_theme(&self, mode: ColorMode) -> Result<Theme> {
        let requested = match self.theme_name.as_deref() {
            Some(name) => Theme::from_name(name).ok_or_else(|| {
                anyhow!(
                    "unknown theme '{name}', expected one of: {}",
                    Theme::available().join(", ")
                )
            })?,
            None => Theme::default(),
        };
        Ok(if !mode.supports_color() {
            Theme::None
        } else if !mode.supports_truecolor() {
            requested.fallback_for_ansi()
        } else {
            requested
        })
    }

    /// Get the detected color mode for the terminal.
    pub(crate) fn color_mode(&self) -> ColorMode {
        if self.no_color {
            ColorMode::None
        } else {
            ColorMode::detect()
        }
    }
}

/// Render the `--print-config` report: the resolved values the pill will
/// actually run with.
pub(crate) fn render_config_report(config: &PillConfig, mode: ColorMode, theme: Theme) -> String {
    let script = config
        .app
        .script
        .as_ref()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    let logging = if config.app.logs && !config.app.no_logs {
        "on"
    } else {
        "off"
    };
    format!(
        "assistant:  {}\n\
         script:     {}\n\
         idle label: {}\n\
         sound mode: {}\n\
         theme:      {}\n\
         color mode: {}\n\
         logging:    {}\n\
         log file:   {}\n\
         trace file: {}\n",
        config.app.assistant,
        script,
        config.app.idle_label,
        config.app.sound_mode.label(),
        theme,
        mode,
        logging,
        voicepill::logging::log_file_path().display(),
        tracing_log_path().display(),
    )
}
