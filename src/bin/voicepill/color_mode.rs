//! Terminal color-capability detection so theme fallbacks match host support.

use std::env;

/// How much color the terminal can show, matching the three theme tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit RGB fills
    #[default]
    TrueColor,
    /// Basic 16 ANSI colors
    Ansi16,
    /// No color support
    None,
}

impl ColorMode {
    /// Detect the terminal's color capability from the environment.
    ///
    /// `NO_COLOR` wins over everything (https://no-color.org/), then
    /// `COLORTERM`, then known truecolor terminals that do not set it, then
    /// a `TERM` heuristic. Anything ambiguous lands on ANSI 16, which every
    /// palette here can render.
    pub fn detect() -> Self {
        if env::var_os("NO_COLOR").is_some() {
            return Self::None;
        }
        if truecolor_advertised() || truecolor_known_host() {
            return Self::TrueColor;
        }
        match env::var("TERM").as_deref() {
            Ok("dumb") => Self::None,
            _ => Self::Ansi16,
        }
    }

    pub fn supports_color(&self) -> bool {
        *self != Self::None
    }

    pub fn supports_truecolor(&self) -> bool {
        *self == Self::TrueColor
    }
}

fn truecolor_advertised() -> bool {
    matches!(
        env::var("COLORTERM").as_deref(),
        Ok("truecolor") | Ok("24bit")
    )
}

/// Terminals that render 24-bit color but leave `COLORTERM` unset.
fn truecolor_known_host() -> bool {
    if let Ok(program) = env::var("TERM_PROGRAM") {
        let program = program.to_lowercase();
        if matches!(
            program.as_str(),
            "vscode" | "cursor" | "wezterm" | "iterm.app" | "warpterminal"
        ) || program.contains("jetbrains")
            || program.contains("jediterm")
        {
            return true;
        }
    }
    if let Ok(emulator) = env::var("TERMINAL_EMULATOR") {
        let emulator = emulator.to_lowercase();
        return emulator.contains("jetbrains") || emulator.contains("jediterm");
    }
    false
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TrueColor => write!(f, "truecolor"),
            Self::Ansi16 => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    const VARS: &[&str] = &[
        "NO_COLOR",
        "COLORTERM",
        "TERM",
        "TERM_PROGRAM",
        "TERMINAL_EMULATOR",
    ];

    /// Run `f` with exactly `set` in the environment, restoring the previous
    /// values afterwards. Serialized so detection tests cannot race.
    fn with_env<T>(set: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        static ENV_GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        let _guard = ENV_GUARD
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        let saved: Vec<(&str, Option<String>)> = VARS
            .iter()
            .map(|&name| (name, std::env::var(name).ok()))
            .collect();
        for &name in VARS {
            std::env::remove_var(name);
        }
        for (name, value) in set {
            std::env::set_var(name, value);
        }
        let result = f();
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
        result
    }

    #[test]
    fn no_color_beats_everything() {
        with_env(&[("NO_COLOR", "1"), ("COLORTERM", "truecolor")], || {
            assert_eq!(ColorMode::detect(), ColorMode::None);
        });
    }

    #[test]
    fn colorterm_advertises_truecolor() {
        with_env(&[("COLORTERM", "truecolor")], || {
            assert_eq!(ColorMode::detect(), ColorMode::TrueColor);
        });
        with_env(&[("COLORTERM", "24bit")], || {
            assert_eq!(ColorMode::detect(), ColorMode::TrueColor);
        });
    }

    #[test]
    fn known_truecolor_hosts_detected_without_colorterm() {
        with_env(&[("TERM", "xterm-256color"), ("TERM_PROGRAM", "vscode")], || {
            assert_eq!(ColorMode::detect(), ColorMode::TrueColor);
        });
        with_env(
            &[
                ("TERM", "xterm-256color"),
                ("TERMINAL_EMULATOR", "JetBrains-JediTerm"),
            ],
            || {
                assert_eq!(ColorMode::detect(), ColorMode::TrueColor);
            },
        );
    }

    #[test]
    fn plain_xterm_falls_back_to_ansi() {
        with_env(&[("TERM", "xterm-256color")], || {
            assert_eq!(ColorMode::detect(), ColorMode::Ansi16);
        });
        with_env(&[("TERM", "screen")], || {
            assert_eq!(ColorMode::detect(), ColorMode::Ansi16);
        });
        with_env(&[], || {
            assert_eq!(ColorMode::detect(), ColorMode::Ansi16);
        });
    }

    #[test]
    fn dumb_terminal_gets_no_color() {
        with_env(&[("TERM", "dumb")], || {
            assert_eq!(ColorMode::detect(), ColorMode::None);
        });
    }

    #[test]
    fn capability_predicates() {
        assert!(ColorMode::TrueColor.supports_color());
        assert!(ColorMode::TrueColor.supports_truecolor());
        assert!(ColorMode::Ansi16.supports_color());
        assert!(!ColorMode::Ansi16.supports_truecolor());
        assert!(!ColorMode::None.supports_color());
    }

    #[test]
    fn display_names_match_theme_names() {
        assert_eq!(format!("{}", ColorMode::TrueColor), "truecolor");
        assert_eq!(format!("{}", ColorMode::Ansi16), "ansi");
        assert_eq!(format!("{}", ColorMode::None), "none");
    }
}
