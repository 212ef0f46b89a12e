/// ANSI color codes for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Background for the pill at rest
    pub base_fill: &'static str,
    /// Label text on the resting pill
    pub base_ink: &'static str,
    /// Background while hovered and idle
    pub hover_fill: &'static str,
    /// Label text while hovered and idle
    pub hover_ink: &'static str,
    /// Background while hovered on a live call (hang-up affordance)
    pub danger_fill: &'static str,
    /// Label text on the hang-up affordance
    pub danger_ink: &'static str,
    /// Border/frame color
    pub border: &'static str,
    /// Dim/muted text for the hint row
    pub dim: &'static str,
    /// Mic level dots
    pub mic: &'static str,
    /// Expanding connect ring
    pub wave: &'static str,
    /// Bold attribute (connect flash)
    pub bold: &'static str,
    /// Faint attribute (transition fade)
    pub faint: &'static str,
    /// Reset code
    pub reset: &'static str,
    /// Border character set
    pub borders: super::BorderSet,
}
