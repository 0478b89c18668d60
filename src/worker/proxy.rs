use crate::protocol::{Command, Message, decode, encode_command};
use crate::worker::errors::WorkerError;
use crate::worker::ports::WorkerTransport;
use tracing::{trace, warn};

/// Owns the one background computation for a controller's lifetime.
///
/// Commands go out encoded, results come back decoded; the proxy does not
/// validate or interpret either. Once terminated it refuses to send and
/// delivers nothing more.
pub struct WorkerProxy<T: WorkerTransport> {
    transport: T,
    terminated: bool,
}

impl<T: WorkerTransport> WorkerProxy<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            terminated: false,
        }
    }

    pub fn send(&mut self, command: &Command) -> Result<(), WorkerError> {
        if self.terminated {
            return Err(WorkerError::Terminated);
        }

        let frame = encode_command(command)?;
        trace!(kind = command.kind(), "posting command to worker");
        self.transport.post(frame)
    }

    /// Every result that has arrived so far, oldest first. Empty frames are
    /// skipped; undecodable ones are logged and skipped.
    pub fn drain(&mut self) -> Result<Vec<Message>, WorkerError> {
        let mut messages = Vec::new();
        if self.terminated {
            return Ok(messages);
        }

        while let Some(frame) = self.transport.try_recv()? {
            match decode(frame.as_str()) {
                Ok(Some(message)) => {
                    trace!(kind = message.kind(), "received worker result");
                    messages.push(message);
                }
                Ok(None) => {}
                Err(err) => warn!(%err, "dropping undecodable worker frame"),
            }
        }

        Ok(messages)
    }

    pub fn terminate(&mut self) {
        if !self.terminated {
            self.transport.terminate();
            self.terminated = true;
        }
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

impl<T: WorkerTransport> Drop for WorkerProxy<T> {
    fn drop(&mut self) {
        self.terminate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{Event, WireFrame};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct LoopbackTransport {
        posted: Vec<WireFrame>,
        incoming: VecDeque<WireFrame>,
        terminations: usize,
    }

    impl WorkerTransport for LoopbackTransport {
        fn post(&mut self, frame: WireFrame) -> Result<(), WorkerError> {
            self.posted.push(frame);
            Ok(())
        }

        fn try_recv(&mut self) -> Result<Option<WireFrame>, WorkerError> {
            Ok(self.incoming.pop_front())
        }

        fn terminate(&mut self) {
            self.terminations += 1;
        }
    }

    #[test]
    fn test_send_posts_encoded_command() {
        let mut proxy = WorkerProxy::new(LoopbackTransport::default());

        proxy.send(&Command::CenteringPasses(3)).unwrap();

        assert_eq!(
            proxy.transport().posted,
            vec![WireFrame::from(r#"{"type":"centeringpasses","message":3}"#)]
        );
    }

    #[test]
    fn test_drain_decodes_in_order_and_skips_empty_and_garbage() {
        let mut proxy = WorkerProxy::new(LoopbackTransport::default());
        let incoming = &mut proxy.transport_mut().incoming;
        incoming.push_back(WireFrame::from(r#"{"type":"movestart"}"#));
        incoming.push_back(WireFrame::empty());
        incoming.push_back(WireFrame::from("%%%"));
        incoming.push_back(WireFrame::from(r#"{"type":"moveend"}"#));

        let messages = proxy.drain().unwrap();

        assert_eq!(
            messages,
            vec![
                Message::Event(Event::MoveStart),
                Message::Event(Event::MoveEnd)
            ]
        );
    }

    #[test]
    fn test_terminated_proxy_refuses_sends_and_delivers_nothing() {
        let mut proxy = WorkerProxy::new(LoopbackTransport::default());
        proxy
            .transport_mut()
            .incoming
            .push_back(WireFrame::from(r#"{"type":"moveend"}"#));

        proxy.terminate();
        proxy.terminate();

        assert!(proxy.is_terminated());
        assert_eq!(proxy.transport().terminations, 1);
        assert!(matches!(
            proxy.send(&Command::Update),
            Err(WorkerError::Terminated)
        ));
        assert!(proxy.drain().unwrap().is_empty());
        assert!(proxy.transport().posted.is_empty());
    }
}
