use anyhow::{anyhow, Result};
use crossterm::terminal::size as terminal_size;
use std::sync::atomic::{AtomicBool, Ordering};
use voicepill::log_debug;

/// Flag set by SIGWINCH handler to trigger terminal resize.
static SIGWINCH_RECEIVED: AtomicBool = AtomicBool::new(false);

/// Signal handler for terminal resize events.
///
/// Sets a flag that the event loop checks to recenter the pill.
/// Only uses atomic operations (async-signal-safe).
extern "C" fn handle_sigwinch(_: libc::c_int) {
    SIGWINCH_RECEIVED.store(true, Ordering::SeqCst);
}

pub(crate) fn install_sigwinch_handler() -> Result<()> {
    unsafe {
        // SAFETY: handle_sigwinch is an extern "C" signal handler with no side effects
        // beyond flipping an atomic flag, which is async-signal-safe.
        let handler = handle_sigwinch as *const () as libc::sighandler_t;
        if libc::signal(libc::SIGWINCH, handler) == libc::SIG_ERR {
            log_debug("failed to install SIGWINCH handler");
            return Err(anyhow!("failed to install SIGWINCH handler"));
        }
    }
    Ok(())
}

pub(crate) fn take_sigwinch() -> bool {
    SIGWINCH_RECEIVED.swap(false, Ordering::SeqCst)
}

/// Resolve the cached terminal dimensions, querying the terminal when either
/// axis is still zero. The pill is centered on both axes, so callers always
/// want the pair.
pub(crate) fn resolved_size(cached_rows: u16, cached_cols: u16) -> (u16, u16) {
    if cached_rows > 0 && cached_cols > 0 {
        return (cached_rows, cached_cols);
    }
    let (cols, rows) = terminal_size().unwrap_or((80, 24));
    (
        if cached_rows > 0 { cached_rows } else { rows },
        if cached_cols > 0 { cached_cols } else { cols },
    )
}
