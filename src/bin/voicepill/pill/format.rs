use voicepill::CallStatus;

use crate::pill::animation::{get_connect_spinner, mic_glyph};
use crate::pill::frame::PillFrame;
use crate::pill::layout::pill_layout;
use crate::pill::text::center_display;
use crate::theme::{Theme, ThemeColors};

/// Cancels bold and faint without touching colors.
const STYLE_OFF: &str = "\x1b[22m";

const HINT_TEXT: &str = "enter/space/click toggles · q quits";

/// One fully formatted repaint: ANSI lines to draw starting at `start_row`,
/// each beginning at column 1.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Scene {
    pub start_row: u16,
    pub lines: Vec<String>,
}

/// Render the pill for one frame. The layout comes from [`pill_layout`] so
/// the drawn box always matches the click target.
pub(crate) fn format_scene(frame: &PillFrame, theme: Theme, rows: u16, cols: u16) -> Scene {
    let colors = theme.colors();
    let layout = pill_layout(rows, cols);
    let cols_w = cols.max(1) as usize;

    if layout.degenerate {
        let (fill, ink) = fill_and_ink(frame, &colors);
        let label = format!("{fill}{ink}{}{}", frame.label, colors.reset);
        return Scene {
            start_row: layout.scene_start,
            lines: vec![center_display(&label, cols_w)],
        };
    }

    let inner = layout.rect.width.saturating_sub(2) as usize;
    let left_pad = " ".repeat(layout.rect.x.saturating_sub(1) as usize);
    let b = colors.borders;

    let box_top = format!(
        "{left_pad}{}{}{}{}{}",
        colors.border,
        b.top_left,
        b.horizontal.to_string().repeat(inner),
        b.top_right,
        colors.reset,
    );
    let box_bottom = format!(
        "{left_pad}{}{}{}{}{}",
        colors.border,
        b.bottom_left,
        b.horizontal.to_string().repeat(inner),
        b.bottom_right,
        colors.reset,
    );
    let label_row = boxed_row(&left_pad, &label_content(frame, &colors, inner), &colors);
    let hint = center_display(
        &format!("{}{HINT_TEXT}{}", colors.dim, colors.reset),
        cols_w,
    );

    let lines = if layout.compact {
        vec![box_top, label_row, box_bottom, String::new(), hint]
    } else {
        let (fill, _) = fill_and_ink(frame, &colors);
        let pad_row = boxed_row(
            &left_pad,
            &format!("{fill}{}{}", " ".repeat(inner), colors.reset),
            &colors,
        );
        let ring = wave_row(frame.wave, &colors, layout.rect.width, cols_w);
        vec![
            ring.clone(),
            box_top,
            pad_row.clone(),
            label_row,
            pad_row,
            box_bottom,
            ring,
            String::new(),
            hint,
        ]
    };

    Scene {
        start_row: layout.scene_start,
        lines,
    }
}

/// Wrap row content in the vertical borders.
fn boxed_row(left_pad: &str, content: &str, colors: &ThemeColors) -> String {
    let v = colors.borders.vertical;
    format!(
        "{left_pad}{}{v}{}{content}{}{v}{}",
        colors.border, colors.reset, colors.border, colors.reset,
    )
}

/// The label row interior: spinner while connecting, styled label text, mic
/// dots while any side of the call is live. Centered and fill-padded to the
/// box interior.
fn label_content(frame: &PillFrame, colors: &ThemeColors, inner: usize) -> String {
    let (fill, ink) = fill_and_ink(frame, colors);

    let style = if frame.just_connected {
        colors.bold
    } else if frame.fade > 0.5 {
        colors.faint
    } else {
        ""
    };
    let label = if style.is_empty() {
        frame.label.clone()
    } else {
        format!("{style}{}{STYLE_OFF}", frame.label)
    };

    let mut composite = String::new();
    if frame.status == CallStatus::Connecting {
        composite.push_str(get_connect_spinner());
        composite.push(' ');
    }
    composite.push_str(&label);
    if frame.status.shows_mic() {
        composite.push_str("  ");
        // Warm glow only while the assistant speaks; the steady dots stay in
        // the label ink.
        if frame.status == CallStatus::Speaking {
            composite.push_str(colors.mic);
            composite.push_str(&mic_dots(frame));
            composite.push_str(ink);
        } else {
            composite.push_str(&mic_dots(frame));
        }
    }

    format!(
        "{fill}{ink}{}{}",
        center_display(&composite, inner),
        colors.reset
    )
}

fn mic_dots(frame: &PillFrame) -> String {
    if frame.status == CallStatus::Speaking {
        let glyphs: Vec<String> = frame
            .mic_amps
            .iter()
            .map(|&amp| mic_glyph(amp).to_string())
            .collect();
        glyphs.join(" ")
    } else {
        "• • •".to_string()
    }
}

/// The expanding connect ring: a dotted run that starts at half the box
/// width and grows past it as the wave progresses. Empty when no wave is
/// running.
fn wave_row(wave: Option<f32>, colors: &ThemeColors, box_width: u16, cols_w: usize) -> String {
    let Some(progress) = wave else {
        return String::new();
    };
    let span = (box_width as f32 * (0.5 + 0.7 * progress.clamp(0.0, 1.0))) as usize;
    let span = span.min(cols_w);
    let dots = "· ".repeat(span / 2 + 1);
    let run = dots.trim_end();
    center_display(&format!("{}{run}{}", colors.wave, colors.reset), cols_w)
}

fn fill_and_ink(frame: &PillFrame, colors: &ThemeColors) -> (&'static str, &'static str) {
    if frame.hovered && frame.status == CallStatus::Idle {
        (colors.hover_fill, colors.hover_ink)
    } else if frame.hovered && frame.status.is_connected() {
        (colors.danger_fill, colors.danger_ink)
    } else {
        (colors.base_fill, colors.base_ink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(status: CallStatus, label: &str) -> PillFrame {
        PillFrame {
            status,
            label: label.to_string(),
            hovered: false,
            just_connected: false,
            wave: None,
            mic_amps: [1.0; 3],
            fade: 0.0,
        }
    }

    fn is_braille(c: char) -> bool {
        ('\u{2800}'..='\u{28ff}').contains(&c)
    }

    #[test]
    fn full_scene_has_rings_box_and_hint() {
        let scene = format_scene(&frame(CallStatus::Idle, "TALK"), Theme::Pill, 24, 80);
        assert_eq!(scene.lines.len(), 9);
        assert_eq!(scene.start_row, 8);
        assert!(scene.lines[1].contains('╭'));
        assert!(scene.lines[3].contains("TALK"));
        assert!(scene.lines[5].contains('╰'));
        assert!(scene.lines[8].contains(HINT_TEXT));
        // No wave running, so the ring rows are blank.
        assert!(scene.lines[0].is_empty());
        assert!(scene.lines[6].is_empty());
    }

    #[test]
    fn compact_scene_drops_rings_and_padding() {
        let scene = format_scene(&frame(CallStatus::Idle, "TALK"), Theme::Pill, 10, 80);
        assert_eq!(scene.lines.len(), 5);
        assert!(scene.lines[0].contains('╭'));
        assert!(scene.lines[1].contains("TALK"));
        assert!(scene.lines[4].contains(HINT_TEXT));
    }

    #[test]
    fn degenerate_scene_is_a_bare_label() {
        let scene = format_scene(&frame(CallStatus::Idle, "TALK"), Theme::Pill, 24, 20);
        assert_eq!(scene.lines.len(), 1);
        assert!(scene.lines[0].contains("TALK"));
        assert!(!scene.lines[0].contains('╭'));
    }

    #[test]
    fn hover_idle_inverts_the_fill() {
        let mut f = frame(CallStatus::Idle, "GIVE IT A TRY");
        f.hovered = true;
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("\x1b[48;2;255;255;255m"));
        assert!(scene.lines[3].contains("\x1b[38;2;26;26;26m"));
    }

    #[test]
    fn hover_on_live_call_turns_danger() {
        let mut f = frame(CallStatus::Listening, "DISCONNECT");
        f.hovered = true;
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("\x1b[48;2;255;59;48m"));
    }

    #[test]
    fn hover_while_connecting_keeps_base_fill() {
        let mut f = frame(CallStatus::Connecting, "CONNECTING...");
        f.hovered = true;
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("\x1b[48;2;26;26;26m"));
        assert!(!scene.lines[3].contains("\x1b[48;2;255;59;48m"));
    }

    #[test]
    fn connecting_shows_spinner_and_steady_mic_dots() {
        let scene = format_scene(&frame(CallStatus::Connecting, "CONN"), Theme::Pill, 24, 80);
        assert!(scene.lines[3].chars().any(is_braille));
        assert!(scene.lines[3].contains("• • •"));
        // Steady dots keep the label ink, no amber.
        assert!(!scene.lines[3].contains("\x1b[38;2;255;149;0m"));
    }

    #[test]
    fn speaking_weights_mic_dots_by_amplitude() {
        let mut f = frame(CallStatus::Speaking, "SPEAKING...");
        f.mic_amps = [1.0, 1.3, 1.7];
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("· • ●"));
        assert!(scene.lines[3].contains("\x1b[38;2;255;149;0m"));
        assert!(!scene.lines[3].chars().any(is_braille));
    }

    #[test]
    fn idle_has_no_mic_dots() {
        let scene = format_scene(&frame(CallStatus::Idle, "TALK"), Theme::Pill, 24, 80);
        assert!(!scene.lines[3].contains('•'));
    }

    #[test]
    fn wave_draws_rings_that_grow() {
        let mut f = frame(CallStatus::Connecting, "C");
        f.wave = Some(0.0);
        let tight = format_scene(&f, Theme::Pill, 24, 80);
        f.wave = Some(1.0);
        let wide = format_scene(&f, Theme::Pill, 24, 80);
        let dots = |line: &str| line.matches('·').count();
        assert!(dots(&tight.lines[0]) > 0);
        assert!(dots(&wide.lines[0]) > dots(&tight.lines[0]));
        assert_eq!(tight.lines[0], tight.lines[6]);
    }

    #[test]
    fn just_connected_bolds_the_label() {
        let mut f = frame(CallStatus::Listening, "LISTENING...");
        f.just_connected = true;
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("\x1b[1m"));
    }

    #[test]
    fn early_fade_renders_faint() {
        let mut f = frame(CallStatus::Listening, "LISTENING...");
        f.fade = 0.9;
        let scene = format_scene(&f, Theme::Pill, 24, 80);
        assert!(scene.lines[3].contains("\x1b[2m"));

        f.fade = 0.3;
        let late = format_scene(&f, Theme::Pill, 24, 80);
        assert!(!late.lines[3].contains("\x1b[2m"));
    }

    #[test]
    fn none_theme_emits_no_escapes() {
        let mut f = frame(CallStatus::Speaking, "SPEAKING...");
        f.hovered = true;
        f.just_connected = true;
        f.fade = 0.9;
        f.wave = Some(0.5);
        let scene = format_scene(&f, Theme::None, 24, 80);
        for line in &scene.lines {
            assert!(!line.contains('\x1b'), "escape in {line:?}");
        }
    }

    #[test]
    fn every_line_fits_the_terminal() {
        use crate::pill::text::display_width;
        let mut f = frame(CallStatus::Speaking, "SPEAKING...");
        f.wave = Some(0.8);
        for &(rows, cols) in &[(24u16, 80u16), (10, 30), (5, 25), (24, 20)] {
            let scene = format_scene(&f, Theme::Pill, rows, cols);
            for line in &scene.lines {
                assert!(
                    display_width(line) <= cols as usize,
                    "line overflows {cols} cols: {line:?}"
                );
            }
        }
    }
}
