use std::io::Read;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use voicepill::log_debug;

use crate::input::event::InputEvent;
use crate::input::parser::InputParser;

const STDIN_READ_BUF: usize = 1024;

/// Read raw bytes from stdin on a dedicated thread and forward decoded
/// events to the event loop. The thread exits when stdin closes or the
/// receiver goes away.
pub(crate) fn spawn_input_thread(sender: Sender<InputEvent>) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stdin = std::io::stdin().lock();
        let mut parser = InputParser::new();
        let mut buffer = [0u8; STDIN_READ_BUF];
        let mut events = Vec::new();
        loop {
            let read = match stdin.read(&mut buffer) {
                Ok(0) => {
                    log_debug("Input thread: stdin closed");
                    return;
                }
                Ok(read) => read,
                Err(err) => {
                    log_debug(&format!("Input thread: read error: {err}"));
                    return;
                }
            };
            events.clear();
            parser.consume_bytes(&buffer[..read], &mut events);
            parser.flush_pending(&mut events);
            for event in events.drain(..) {
                if sender.send(event).is_err() {
                    return;
                }
            }
        }
    })
}
