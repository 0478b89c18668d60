use crate::protocol::{Event, Message, WireFrame, decode, encode_event};
use crate::worker::ports::PackingEngine;
use tracing::{trace, warn};

/// Worker-side end of the boundary: unwraps incoming frames for the engine
/// and wraps its results back up as `move` events.
pub struct WorkerHost<E> {
    engine: E,
}

impl<E: PackingEngine> WorkerHost<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn handle_frame(&mut self, frame: &WireFrame) -> Option<WireFrame> {
        let command = match decode(frame.as_str()) {
            Ok(Some(Message::Command(command))) => command,
            Ok(Some(Message::Event(event))) => {
                warn!(kind = event.kind(), "worker ignoring event frame");
                return None;
            }
            Ok(None) => return None,
            Err(err) => {
                warn!(%err, "worker dropping undecodable frame");
                return None;
            }
        };

        trace!(kind = command.kind(), "worker applying command");
        let updates = self.engine.apply(command)?;

        match encode_event(&Event::Move(updates)) {
            Ok(reply) => Some(reply),
            Err(err) => {
                warn!(%err, "worker failed to encode move result");
                None
            }
        }
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }
}
