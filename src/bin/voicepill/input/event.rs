#[derive(Debug, PartialEq, Eq)]
pub(crate) enum InputEvent {
    /// Enter, Space, or a click inside the pill.
    PrimaryAction,
    Exit,
    /// Left mouse button pressed at (x, y) (1-based, like terminal reports)
    MousePress {
        x: u16,
        y: u16,
    },
    /// Left mouse button released at (x, y)
    MouseRelease {
        x: u16,
        y: u16,
    },
    /// Pointer moved to (x, y); drives hover tracking
    MouseMove {
        x: u16,
        y: u16,
    },
}
