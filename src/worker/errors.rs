use crate::protocol::CodecError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("packing worker has been terminated")]
    Terminated,

    #[error("packing worker channel disconnected")]
    Disconnected,

    #[error("failed to spawn packing worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error(transparent)]
    Codec(#[from] CodecError),
}
