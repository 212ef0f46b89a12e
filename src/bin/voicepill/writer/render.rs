use std::io::{self, Write};

use crate::pill::Scene;

const SAVE_CURSOR: &[u8] = b"\x1b[s\x1b7";
const RESTORE_CURSOR: &[u8] = b"\x1b[u\x1b8";

/// Write a formatted scene at its target rows, clearing each line first.
pub(super) fn write_scene(stdout: &mut dyn Write, scene: &Scene) -> io::Result<()> {
    if scene.lines.is_empty() {
        return Ok(());
    }
    let mut sequence = Vec::new();
    sequence.extend_from_slice(SAVE_CURSOR);

    for (idx, line) in scene.lines.iter().enumerate() {
        let row = scene.start_row.saturating_add(idx as u16);
        sequence.extend_from_slice(format!("\x1b[{row};1H").as_bytes());
        sequence.extend_from_slice(b"\x1b[2K");
        sequence.extend_from_slice(line.as_bytes());
    }

    sequence.extend_from_slice(RESTORE_CURSOR);
    stdout.write_all(&sequence)
}

/// Blank a run of rows left behind by a previous scene placement.
pub(super) fn clear_rows(stdout: &mut dyn Write, start_row: u16, height: usize) -> io::Result<()> {
    if height == 0 {
        return Ok(());
    }
    let mut sequence = Vec::new();
    sequence.extend_from_slice(SAVE_CURSOR);
    for idx in 0..height {
        let row = start_row.saturating_add(idx as u16);
        sequence.extend_from_slice(format!("\x1b[{row};1H").as_bytes());
        sequence.extend_from_slice(b"\x1b[2K");
    }
    sequence.extend_from_slice(RESTORE_CURSOR);
    stdout.write_all(&sequence)
}

/// Wipe the whole alternate screen, used after a resize so stale cells from
/// the old geometry cannot linger outside the new scene.
pub(super) fn clear_screen(stdout: &mut dyn Write) -> io::Result<()> {
    stdout.write_all(b"\x1b[2J")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_scene_positions_each_line() {
        let scene = Scene {
            start_row: 8,
            lines: vec!["one".to_string(), "two".to_string()],
        };
        let mut buf = Vec::new();
        write_scene(&mut buf, &scene).unwrap();
        let output = String::from_utf8_lossy(&buf);
        assert!(output.starts_with("\u{1b}[s\u{1b}7"));
        assert!(output.contains("\u{1b}[8;1H\u{1b}[2Kone"));
        assert!(output.contains("\u{1b}[9;1H\u{1b}[2Ktwo"));
        assert!(output.ends_with("\u{1b}[u\u{1b}8"));
    }

    #[test]
    fn write_scene_skips_empty_scenes() {
        let scene = Scene {
            start_row: 1,
            lines: vec![],
        };
        let mut buf = Vec::new();
        write_scene(&mut buf, &scene).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_rows_blanks_the_span() {
        let mut buf = Vec::new();
        clear_rows(&mut buf, 5, 3).unwrap();
        let output = String::from_utf8_lossy(&buf);
        assert!(output.contains("\u{1b}[5;1H\u{1b}[2K"));
        assert!(output.contains("\u{1b}[7;1H\u{1b}[2K"));
        assert!(!output.contains("\u{1b}[8;1H"));

        buf.clear();
        clear_rows(&mut buf, 5, 0).unwrap();
        assert!(buf.is_empty());
    }
}
