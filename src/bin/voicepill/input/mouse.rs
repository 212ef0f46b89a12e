#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MouseEventKind {
    Press,
    Release,
    Motion,
}

/// Parse SGR mouse event: ESC [ < button ; x ; y M (press) or m (release).
/// Motion reports carry bit 32 in the button code and arrive because the
/// writer enables any-motion tracking (1003) for hover. Only left-button
/// presses are accepted; wheel and chord events are dropped.
#[inline]
pub(crate) fn parse_sgr_mouse(buffer: &[u8]) -> Option<(MouseEventKind, u16, u16)> {
    // Minimum: ESC [ < 0 ; 1 ; 1 M = 10 bytes
    if buffer.len() < 10 {
        return None;
    }
    // Check prefix: ESC [ <
    if buffer[0] != 0x1b || buffer[1] != b'[' || buffer[2] != b'<' {
        return None;
    }
    // Check final character is 'M' (press) or 'm' (release)
    let final_char = buffer[buffer.len() - 1];
    let pressed = match final_char {
        b'M' => true,
        b'm' => false,
        _ => return None,
    };
    // Parse: button ; x ; y
    let params = &buffer[3..buffer.len() - 1];
    let params_str = std::str::from_utf8(params).ok()?;
    let mut parts = params_str.split(';');

    let button: u16 = parts.next()?.parse().ok()?;
    let x: u16 = parts.next()?.parse().ok()?;
    let y: u16 = parts.next()?.parse().ok()?;

    if button & 32 != 0 {
        return Some((MouseEventKind::Motion, x, y));
    }
    if pressed {
        if button != 0 {
            return None;
        }
        Some((MouseEventKind::Press, x, y))
    } else {
        if button != 0 && button != 3 {
            return None;
        }
        Some((MouseEventKind::Release, x, y))
    }
}
