use crate::protocol::WireFrame;
use crate::worker::errors::WorkerError;
use crate::worker::host::WorkerHost;
use crate::worker::ports::{PackingEngine, WorkerTransport};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, warn};

pub const WORKER_THREAD_NAME: &str = "circle-packer-worker";

/// Runs the engine on a dedicated thread. Frames travel over two FIFO
/// channels, so nothing is shared with the controller but the wire text.
pub struct ThreadedTransport {
    outbound: Option<Sender<WireFrame>>,
    inbound: Receiver<WireFrame>,
    shutdown: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ThreadedTransport {
    pub fn spawn<E: PackingEngine>(engine: E) -> Result<Self, WorkerError> {
        let (outbound, commands) = mpsc::channel::<WireFrame>();
        let (results, inbound) = mpsc::channel::<WireFrame>();
        let shutdown = Arc::new(AtomicBool::new(false));

        let worker_shutdown = Arc::clone(&shutdown);
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || {
                Self::worker_loop(WorkerHost::new(engine), &commands, &results, &worker_shutdown);
            })
            .map_err(WorkerError::Spawn)?;

        debug!("packing worker thread started");

        Ok(Self {
            outbound: Some(outbound),
            inbound,
            shutdown,
            worker: Some(worker),
        })
    }

    /// Blocks until a result arrives or `timeout` elapses.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<WireFrame>, WorkerError> {
        if self.outbound.is_none() {
            return Ok(None);
        }

        match self.inbound.recv_timeout(timeout) {
            Ok(frame) => Ok(Some(frame)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    fn worker_loop<E: PackingEngine>(
        mut host: WorkerHost<E>,
        commands: &Receiver<WireFrame>,
        results: &Sender<WireFrame>,
        shutdown: &AtomicBool,
    ) {
        while let Ok(frame) = commands.recv() {
            if shutdown.load(Ordering::Acquire) {
                break;
            }

            let Some(reply) = host.handle_frame(&frame) else {
                continue;
            };

            if results.send(reply).is_err() {
                break;
            }
        }

        debug!("packing worker thread stopped");
    }
}

impl WorkerTransport for ThreadedTransport {
    fn post(&mut self, frame: WireFrame) -> Result<(), WorkerError> {
        let sender = self.outbound.as_ref().ok_or(WorkerError::Terminated)?;

        sender.send(frame).map_err(|_| WorkerError::Disconnected)
    }

    fn try_recv(&mut self) -> Result<Option<WireFrame>, WorkerError> {
        if self.outbound.is_none() {
            return Ok(None);
        }

        match self.inbound.try_recv() {
            Ok(frame) => Ok(Some(frame)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(WorkerError::Disconnected),
        }
    }

    fn terminate(&mut self) {
        self.shutdown.store(true, Ordering::Release);
        self.outbound.take();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("packing worker thread panicked");
            }
        }
    }
}

impl Drop for ThreadedTransport {
    fn drop(&mut self) {
        self.terminate();
    }
}
