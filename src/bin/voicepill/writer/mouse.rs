use std::io::Write;
use voicepill::log_debug;

// SGR mouse mode escape sequences
// Enable any-motion tracking (hover needs moves without a button held) + SGR
// extended coordinates
const MOUSE_ENABLE: &[u8] = b"\x1b[?1003h\x1b[?1006h";
// Disable mouse reporting
const MOUSE_DISABLE: &[u8] = b"\x1b[?1006l\x1b[?1003l";

/// Enable SGR mouse tracking for hover and clicks.
pub(super) fn enable_mouse(stdout: &mut dyn Write, mouse_enabled: &mut bool) {
    if !*mouse_enabled {
        if let Err(err) = stdout.write_all(MOUSE_ENABLE) {
            log_debug(&format!("mouse enable failed: {err}"));
        }
        let _ = stdout.flush();
        *mouse_enabled = true;
        voicepill::note_mouse_tracking(true);
    }
}

/// Disable mouse tracking.
pub(super) fn disable_mouse(stdout: &mut dyn Write, mouse_enabled: &mut bool) {
    if *mouse_enabled {
        if let Err(err) = stdout.write_all(MOUSE_DISABLE) {
            log_debug(&format!("mouse disable failed: {err}"));
        }
        let _ = stdout.flush();
        *mouse_enabled = false;
        voicepill::note_mouse_tracking(false);
    }
}
