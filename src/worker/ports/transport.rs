use crate::protocol::WireFrame;
use crate::worker::errors::WorkerError;

/// A FIFO, fire-and-forget channel to one background computation.
///
/// Implementations move encoded frames only; they never look inside them.
pub trait WorkerTransport {
    fn post(&mut self, frame: WireFrame) -> Result<(), WorkerError>;

    /// Next pending result, if one has arrived. Never blocks.
    fn try_recv(&mut self) -> Result<Option<WireFrame>, WorkerError>;

    /// Stops the computation. Idempotent.
    fn terminate(&mut self);
}
