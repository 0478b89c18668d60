use crate::protocol::WireFrame;
use crate::worker::errors::WorkerError;
use crate::worker::host::WorkerHost;
use crate::worker::ports::{PackingEngine, WorkerTransport};
use std::collections::VecDeque;

/// Runs the engine on the caller's thread. Each post is handled immediately
/// and its reply waits in a FIFO outbox until the controller drains it, so
/// results still arrive after the call that caused them.
pub struct InlineTransport<E> {
    host: Option<WorkerHost<E>>,
    outbox: VecDeque<WireFrame>,
}

impl<E: PackingEngine> InlineTransport<E> {
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            host: Some(WorkerHost::new(engine)),
            outbox: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> Option<&E> {
        self.host.as_ref().map(WorkerHost::engine)
    }

    #[must_use]
    pub fn pending_results(&self) -> usize {
        self.outbox.len()
    }
}

impl<E: PackingEngine> WorkerTransport for InlineTransport<E> {
    fn post(&mut self, frame: WireFrame) -> Result<(), WorkerError> {
        let host = self.host.as_mut().ok_or(WorkerError::Terminated)?;

        if let Some(reply) = host.handle_frame(&frame) {
            self.outbox.push_back(reply);
        }

        Ok(())
    }

    fn try_recv(&mut self) -> Result<Option<WireFrame>, WorkerError> {
        Ok(self.outbox.pop_front())
    }

    fn terminate(&mut self) {
        self.host = None;
        self.outbox.clear();
    }
}
