//! Keyboard and mouse input for the pill: a stdin reader thread feeds an
//! incremental parser that understands the handful of keys we care about
//! plus SGR mouse reports for hover and click.

mod event;
mod mouse;
mod parser;
mod spawn;

pub(crate) use event::InputEvent;
pub(crate) use spawn::spawn_input_thread;
