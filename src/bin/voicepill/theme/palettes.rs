use super::{ThemeColors, BORDER_ROUNDED, BORDER_SINGLE};

/// Pill theme - dark pill on charcoal, white ink (default)
/// Matches the launcher the pill lives in: near-black fill, white label,
/// inverted on hover, red hang-up affordance while connected.
pub const THEME_PILL: ThemeColors = ThemeColors {
    base_fill: "\x1b[48;2;26;26;26m",    // Charcoal #1a1a1a
    base_ink: "\x1b[38;2;255;255;255m",  // White #ffffff
    hover_fill: "\x1b[48;2;255;255;255m", // White #ffffff
    hover_ink: "\x1b[38;2;26;26;26m",    // Charcoal #1a1a1a
    danger_fill: "\x1b[48;2;255;59;48m", // Hang-up red #ff3b30
    danger_ink: "\x1b[38;2;255;255;255m", // White #ffffff
    border: "\x1b[38;2;140;140;140m",    // Mid gray #8c8c8c
    dim: "\x1b[38;2;110;110;110m",       // Muted gray #6e6e6e
    mic: "\x1b[38;2;255;149;0m",         // Warm amber #ff9500
    wave: "\x1b[38;2;80;80;80m",         // Faint ring gray #505050
    bold: "\x1b[1m",
    faint: "\x1b[2m",
    reset: "\x1b[0m",
    borders: BORDER_ROUNDED,
};

/// Ansi theme - 16-color fallback for terminals without truecolor
pub const THEME_ANSI: ThemeColors = ThemeColors {
    base_fill: "\x1b[40m",    // Black background
    base_ink: "\x1b[97m",     // Bright white
    hover_fill: "\x1b[107m",  // Bright white background
    hover_ink: "\x1b[30m",    // Black
    danger_fill: "\x1b[101m", // Bright red background
    danger_ink: "\x1b[97m",   // Bright white
    border: "\x1b[90m",       // Dark gray
    dim: "\x1b[90m",          // Dark gray
    mic: "\x1b[93m",          // Bright yellow
    wave: "\x1b[90m",         // Dark gray
    bold: "\x1b[1m",
    faint: "\x1b[2m",
    reset: "\x1b[0m",
    borders: BORDER_SINGLE,
};

/// None theme - no color or attribute escapes at all, plain box drawing
pub const THEME_NONE: ThemeColors = ThemeColors {
    base_fill: "",
    base_ink: "",
    hover_fill: "",
    hover_ink: "",
    danger_fill: "",
    danger_ink: "",
    border: "",
    dim: "",
    mic: "",
    wave: "",
    bold: "",
    faint: "",
    reset: "",
    borders: BORDER_SINGLE,
};
