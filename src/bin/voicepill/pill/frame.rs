use voicepill::CallStatus;

/// Everything the writer needs to draw the pill once: the call state plus
/// the cosmetic flags that shape this particular repaint.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PillFrame {
    pub status: CallStatus,
    /// Fully derived label text, typewriter output included.
    pub label: String,
    pub hovered: bool,
    /// Bold flash right after the session comes up.
    pub just_connected: bool,
    /// Expanding connect ring, 0.0 (tight) to 1.0 (gone), when active.
    pub wave: Option<f32>,
    /// Mic level dots while the assistant side of the call is live.
    pub mic_amps: [f32; 3],
    /// Transition fade countdown, filled in by the writer at draw time.
    pub fade: f32,
}
