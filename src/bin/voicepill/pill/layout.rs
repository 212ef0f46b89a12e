/// Full pill box width including borders.
pub(crate) const PILL_WIDTH: u16 = 38;

/// Full pill box height including borders.
pub(crate) const PILL_HEIGHT: u16 = 5;

/// Below this many columns the box degenerates to a bare label strip.
pub(crate) const PILL_MIN_COLS: u16 = 24;

/// Below this many rows the box drops its padding rows and connect rings.
pub(crate) const PILL_MIN_ROWS: u16 = 12;

/// Screen rectangle of the pill box, 1-based like terminal cell reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PillRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PillRect {
    /// Whether a 1-based cell coordinate falls inside the box, borders
    /// included.
    pub(crate) fn contains(&self, px: u16, py: u16) -> bool {
        px >= self.x
            && px < self.x.saturating_add(self.width)
            && py >= self.y
            && py < self.y.saturating_add(self.height)
    }
}

/// Where and how the pill renders for a given terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PillLayout {
    /// The clickable box itself.
    pub rect: PillRect,
    /// First terminal row the whole scene (rings, box, hint) occupies.
    pub scene_start: u16,
    /// Three-row box without padding rows or connect rings.
    pub compact: bool,
    /// Single-row label strip for terminals too narrow for a box.
    pub degenerate: bool,
}

/// Compute the pill placement for a terminal of `rows` x `cols`, centering
/// the scene both ways. Hit-testing and rendering both go through this so a
/// click always lands where the box was drawn.
pub(crate) fn pill_layout(rows: u16, cols: u16) -> PillLayout {
    let rows = rows.max(1);
    let cols = cols.max(1);

    if cols < PILL_MIN_COLS {
        let y = (rows / 2).max(1);
        return PillLayout {
            rect: PillRect {
                x: 1,
                y,
                width: cols,
                height: 1,
            },
            scene_start: y,
            compact: false,
            degenerate: true,
        };
    }

    let width = PILL_WIDTH.min(cols.saturating_sub(2));
    let x = (cols - width) / 2 + 1;

    if rows < PILL_MIN_ROWS {
        // Box top, label, box bottom, blank, hint.
        let scene_height = 5;
        let scene_start = center_start(rows, scene_height);
        PillLayout {
            rect: PillRect {
                x,
                y: scene_start,
                width,
                height: 3,
            },
            scene_start,
            compact: true,
            degenerate: false,
        }
    } else {
        // Ring, box (5 rows), ring, blank, hint.
        let scene_height = PILL_HEIGHT + 4;
        let scene_start = center_start(rows, scene_height);
        PillLayout {
            rect: PillRect {
                x,
                y: scene_start + 1,
                width,
                height: PILL_HEIGHT,
            },
            scene_start,
            compact: false,
            degenerate: false,
        }
    }
}

fn center_start(total: u16, span: u16) -> u16 {
    if total <= span {
        1
    } else {
        (total - span) / 2 + 1
    }
}
