use crate::input::event::InputEvent;
use crate::input::mouse::{parse_sgr_mouse, MouseEventKind};

/// Longest SGR mouse report we will buffer before giving up on it.
const MAX_PENDING_ESCAPE: usize = 24;

/// Incremental decoder for the raw stdin stream: plain keys come out
/// directly, SGR mouse reports are reassembled across read boundaries, and
/// unrecognized escape sequences are swallowed so they never leak into the
/// event stream.
pub(crate) struct InputParser {
    pending: Vec<u8>,
}

impl InputParser {
    pub(crate) fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub(crate) fn consume_bytes(&mut self, bytes: &[u8], events: &mut Vec<InputEvent>) {
        self.pending.extend_from_slice(bytes);
        loop {
            let consumed = match self.pending.first() {
                None => break,
                Some(&0x1b) => match self.take_escape(events) {
                    Some(len) => len,
                    None => break,
                },
                Some(&byte) => {
                    if let Some(event) = key_event(byte) {
                        events.push(event);
                    }
                    1
                }
            };
            self.pending.drain(..consumed);
        }
    }

    /// Emit whatever a lone trailing ESC means once the read that produced it
    /// is fully consumed. A real escape sequence always arrives within the
    /// same read, so a bare ESC here is the key itself.
    pub(crate) fn flush_pending(&mut self, events: &mut Vec<InputEvent>) {
        if self.pending == [0x1b] {
            self.pending.clear();
            events.push(InputEvent::Exit);
        }
    }

    /// Decode one escape sequence at the head of the buffer. Returns the
    /// number of bytes consumed, or None when the sequence is still
    /// incomplete.
    fn take_escape(&mut self, events: &mut Vec<InputEvent>) -> Option<usize> {
        match self.pending.get(1) {
            None => None,
            Some(b'[') => match self.pending.get(2) {
                None => None,
                Some(b'<') => self.take_mouse(events),
                Some(_) => self.take_csi(),
            },
            // ESC followed by anything else is an alt-chord; drop the ESC and
            // let the next byte decode on its own.
            Some(_) => Some(1),
        }
    }

    fn take_mouse(&mut self, events: &mut Vec<InputEvent>) -> Option<usize> {
        let end = self.pending[3..]
            .iter()
            .position(|&b| b == b'M' || b == b'm')
            .map(|idx| idx + 3);
        let Some(end) = end else {
            if self.pending.len() > MAX_PENDING_ESCAPE {
                // Runaway sequence; drop the ESC and resynchronize.
                return Some(1);
            }
            return None;
        };
        if let Some((kind, x, y)) = parse_sgr_mouse(&self.pending[..=end]) {
            events.push(match kind {
                MouseEventKind::Press => InputEvent::MousePress { x, y },
                MouseEventKind::Release => InputEvent::MouseRelease { x, y },
                MouseEventKind::Motion => InputEvent::MouseMove { x, y },
            });
        }
        Some(end + 1)
    }

    /// Skip a non-mouse CSI sequence (arrows, function keys). The final byte
    /// of a CSI sequence is in 0x40..=0x7e.
    fn take_csi(&mut self) -> Option<usize> {
        for (idx, &byte) in self.pending.iter().enumerate().skip(2) {
            if (0x40..=0x7e).contains(&byte) {
                return Some(idx + 1);
            }
            if idx >= MAX_PENDING_ESCAPE {
                return Some(1);
            }
        }
        None
    }
}

fn key_event(byte: u8) -> Option<InputEvent> {
    match byte {
        b'\r' | b'\n' | b' ' => Some(InputEvent::PrimaryAction),
        b'q' | b'Q' | 0x03 => Some(InputEvent::Exit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(bytes: &[u8]) -> Vec<InputEvent> {
        let mut parser = InputParser::new();
        let mut events = Vec::new();
        parser.consume_bytes(bytes, &mut events);
        parser.flush_pending(&mut events);
        events
    }

    #[test]
    fn enter_space_and_newline_trigger_the_pill() {
        assert_eq!(parse(b"\r"), vec![InputEvent::PrimaryAction]);
        assert_eq!(parse(b" "), vec![InputEvent::PrimaryAction]);
        assert_eq!(parse(b"\n"), vec![InputEvent::PrimaryAction]);
    }

    #[test]
    fn quit_keys_exit() {
        assert_eq!(parse(b"q"), vec![InputEvent::Exit]);
        assert_eq!(parse(b"Q"), vec![InputEvent::Exit]);
        assert_eq!(parse(b"\x03"), vec![InputEvent::Exit]);
    }

    #[test]
    fn bare_escape_exits_after_flush() {
        assert_eq!(parse(b"\x1b"), vec![InputEvent::Exit]);
    }

    #[test]
    fn other_printable_keys_are_ignored() {
        assert_eq!(parse(b"abc123"), vec![]);
    }

    #[test]
    fn mouse_press_release_and_motion_decode() {
        assert_eq!(
            parse(b"\x1b[<0;10;4M"),
            vec![InputEvent::MousePress { x: 10, y: 4 }]
        );
        assert_eq!(
            parse(b"\x1b[<0;10;4m"),
            vec![InputEvent::MouseRelease { x: 10, y: 4 }]
        );
        assert_eq!(
            parse(b"\x1b[<35;7;3M"),
            vec![InputEvent::MouseMove { x: 7, y: 3 }]
        );
    }

    #[test]
    fn mouse_sequence_split_across_reads_reassembles() {
        let mut parser = InputParser::new();
        let mut events = Vec::new();
        parser.consume_bytes(b"\x1b[<35;1", &mut events);
        parser.flush_pending(&mut events);
        assert_eq!(events, vec![]);
        parser.consume_bytes(b"2;6M", &mut events);
        parser.flush_pending(&mut events);
        assert_eq!(events, vec![InputEvent::MouseMove { x: 12, y: 6 }]);
    }

    #[test]
    fn arrow_keys_are_swallowed() {
        assert_eq!(parse(b"\x1b[A\x1b[B"), vec![]);
    }

    #[test]
    fn keys_around_mouse_reports_survive() {
        assert_eq!(
            parse(b"q\x1b[<0;3;3M\r"),
            vec![
                InputEvent::Exit,
                InputEvent::MousePress { x: 3, y: 3 },
                InputEvent::PrimaryAction,
            ]
        );
    }
}
