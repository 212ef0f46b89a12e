//! Pill rendering: layout math shared with hit-testing, frame payloads from
//! the event loop, and the ANSI scene formatter the writer draws from.

mod animation;
mod format;
mod frame;
mod layout;
mod text;

pub(crate) use animation::fade_progress;
pub(crate) use format::{format_scene, Scene};
pub(crate) use frame::PillFrame;
pub(crate) use layout::pill_layout;
