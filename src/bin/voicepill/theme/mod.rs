//! Color themes for the pill.
//!
//! Provides predefined color palettes that can be selected via CLI flags.

mod borders;
mod colors;
mod palettes;

pub use borders::{BorderSet, BORDER_ROUNDED, BORDER_SINGLE};
pub use colors::ThemeColors;
pub use palettes::{THEME_ANSI, THEME_NONE, THEME_PILL};

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default dark pill with truecolor fills (matches the launcher UI)
    #[default]
    Pill,
    /// ANSI 16-color fallback for older terminals
    Ansi,
    /// No colors - plain text
    None,
}

impl Theme {
    /// Parse theme name from string.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "pill" | "default" => Some(Self::Pill),
            "ansi" | "ansi16" | "basic" => Some(Self::Ansi),
            "none" | "plain" => Some(Self::None),
            _ => None,
        }
    }

    /// Get the color palette for this theme.
    pub fn colors(&self) -> ThemeColors {
        match self {
            Self::Pill => THEME_PILL,
            Self::Ansi => THEME_ANSI,
            Self::None => THEME_NONE,
        }
    }

    /// List all available theme names.
    pub fn available() -> &'static [&'static str] {
        &["pill", "ansi", "none"]
    }

    /// Check if this theme uses truecolor (24-bit RGB).
    pub fn is_truecolor(&self) -> bool {
        matches!(self, Self::Pill)
    }

    /// Get a fallback theme for terminals without truecolor support.
    pub fn fallback_for_ansi(&self) -> Self {
        if self.is_truecolor() {
            Self::Ansi
        } else {
            *self
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pill => write!(f, "pill"),
            Self::Ansi => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_name_parses_valid() {
        assert_eq!(Theme::from_name("pill"), Some(Theme::Pill));
        assert_eq!(Theme::from_name("default"), Some(Theme::Pill));
        assert_eq!(Theme::from_name("PILL"), Some(Theme::Pill));
        assert_eq!(Theme::from_name("ansi"), Some(Theme::Ansi));
        assert_eq!(Theme::from_name("ansi16"), Some(Theme::Ansi));
        assert_eq!(Theme::from_name("basic"), Some(Theme::Ansi));
        assert_eq!(Theme::from_name("none"), Some(Theme::None));
        assert_eq!(Theme::from_name("plain"), Some(Theme::None));
    }

    #[test]
    fn theme_from_name_rejects_invalid() {
        assert_eq!(Theme::from_name("invalid"), None);
        assert_eq!(Theme::from_name(""), None);
    }

    #[test]
    fn theme_is_truecolor() {
        assert!(Theme::Pill.is_truecolor());
        assert!(!Theme::Ansi.is_truecolor());
        assert!(!Theme::None.is_truecolor());
    }

    #[test]
    fn theme_fallback_for_ansi() {
        assert_eq!(Theme::Pill.fallback_for_ansi(), Theme::Ansi);
        assert_eq!(Theme::Ansi.fallback_for_ansi(), Theme::Ansi);
        assert_eq!(Theme::None.fallback_for_ansi(), Theme::None);
    }

    #[test]
    fn theme_colors_returns_palette() {
        let colors = Theme::Pill.colors();
        assert!(colors.base_fill.contains("\x1b["));
        assert!(colors.reset.contains("\x1b[0m"));

        let none_colors = Theme::None.colors();
        assert!(none_colors.base_fill.is_empty());
        assert!(none_colors.reset.is_empty());
    }

    #[test]
    fn theme_display_matches_name() {
        assert_eq!(format!("{}", Theme::Pill), "pill");
        assert_eq!(format!("{}", Theme::Ansi), "ansi");
        assert_eq!(format!("{}", Theme::None), "none");
    }

    #[test]
    fn theme_has_expected_borders() {
        assert_eq!(Theme::Pill.colors().borders.top_left, '╭'); // Rounded
        assert_eq!(Theme::Ansi.colors().borders.top_left, '┌'); // Single
        assert_eq!(Theme::None.colors().borders.horizontal, '─'); // Single
    }
}
