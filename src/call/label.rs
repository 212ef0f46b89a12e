//! Button label derivation.

use super::CallStatus;

pub const LABEL_HOVER_IDLE: &str = "GIVE IT A TRY";
pub const LABEL_HOVER_CONNECTED: &str = "DISCONNECT";
pub const LABEL_LISTENING: &str = "LISTENING...";
pub const LABEL_SPEAKING: &str = "SPEAKING...";
pub const LABEL_ENDING: &str = "ENDING...";

/// Pick the label for the current status. Hover overrides win first, then the
/// per-status text. `typed` is the typewriter's revealed connecting text; an
/// empty or missing value falls back to the full literal, so the wipe between
/// passes shows `CONNECTING...` rather than a blank pill. `idle_label` is the
/// configured resting call to action.
pub fn button_label<'a>(
    status: CallStatus,
    hovered: bool,
    typed: Option<&'a str>,
    idle_label: &'a str,
) -> &'a str {
    if hovered && status == CallStatus::Idle {
        return LABEL_HOVER_IDLE;
    }
    if hovered && status.is_connected() {
        return LABEL_HOVER_CONNECTED;
    }
    match status {
        CallStatus::Connecting => match typed {
            Some(text) if !text.is_empty() => text,
            _ => super::typewriter::CONNECT_TEXT,
        },
        CallStatus::Listening => LABEL_LISTENING,
        CallStatus::Speaking => LABEL_SPEAKING,
        CallStatus::Ending => LABEL_ENDING,
        CallStatus::Idle => idle_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: &str = "TALK TO VOICEPILL";

    #[test]
    fn idle_shows_configured_label() {
        assert_eq!(button_label(CallStatus::Idle, false, None, IDLE), IDLE);
    }

    #[test]
    fn hover_over_idle_invites() {
        assert_eq!(
            button_label(CallStatus::Idle, true, None, IDLE),
            LABEL_HOVER_IDLE
        );
    }

    #[test]
    fn hover_over_live_call_offers_disconnect() {
        assert_eq!(
            button_label(CallStatus::Listening, true, None, IDLE),
            LABEL_HOVER_CONNECTED
        );
        assert_eq!(
            button_label(CallStatus::Speaking, true, None, IDLE),
            LABEL_HOVER_CONNECTED
        );
    }

    #[test]
    fn hover_does_not_override_connecting_or_ending() {
        assert_eq!(
            button_label(CallStatus::Connecting, true, Some("CONN"), IDLE),
            "CONN"
        );
        assert_eq!(
            button_label(CallStatus::Ending, true, None, IDLE),
            LABEL_ENDING
        );
    }

    #[test]
    fn connecting_shows_typed_prefix() {
        assert_eq!(
            button_label(CallStatus::Connecting, false, Some("CONNEC"), IDLE),
            "CONNEC"
        );
    }

    #[test]
    fn connecting_wipe_falls_back_to_full_text() {
        assert_eq!(
            button_label(CallStatus::Connecting, false, Some(""), IDLE),
            super::super::typewriter::CONNECT_TEXT
        );
    }

    #[test]
    fn connecting_without_animation_shows_full_text() {
        assert_eq!(
            button_label(CallStatus::Connecting, false, None, IDLE),
            super::super::typewriter::CONNECT_TEXT
        );
    }

    #[test]
    fn live_statuses_have_fixed_labels() {
        assert_eq!(
            button_label(CallStatus::Listening, false, None, IDLE),
            LABEL_LISTENING
        );
        assert_eq!(
            button_label(CallStatus::Speaking, false, None, IDLE),
            LABEL_SPEAKING
        );
        assert_eq!(
            button_label(CallStatus::Ending, false, None, IDLE),
            LABEL_ENDING
        );
    }
}
